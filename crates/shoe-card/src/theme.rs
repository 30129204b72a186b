//! Palette, font weights, and the fixed-size spacing primitive.
//!
//! The stylesheet refers to these through CSS custom properties so
//! every visual rule pulls from one palette.

/// Named colors.
pub mod colors {
    pub const PRIMARY: &str = "hsl(340deg 65% 47%)";
    pub const SECONDARY: &str = "hsl(240deg 60% 63%)";
    pub const WHITE: &str = "hsl(0deg 0% 100%)";
    pub const GRAY_500: &str = "hsl(210deg 8% 50%)";
    pub const GRAY_700: &str = "hsl(210deg 10% 40%)";
    pub const GRAY_900: &str = "hsl(210deg 12% 13%)";
}

/// Font weights.
pub mod weights {
    pub const NORMAL: u32 = 500;
    pub const MEDIUM: u32 = 600;
    pub const BOLD: u32 = 800;
}

/// CSS custom-property block exposing the palette to stylesheets.
pub fn css_variables() -> String {
    format!(
        ":root {{
    --color-primary: {primary};
    --color-secondary: {secondary};
    --color-white: {white};
    --color-gray-500: {gray500};
    --color-gray-700: {gray700};
    --color-gray-900: {gray900};
    --weight-normal: {normal};
    --weight-medium: {medium};
    --weight-bold: {bold};
}}",
        primary = colors::PRIMARY,
        secondary = colors::SECONDARY,
        white = colors::WHITE,
        gray500 = colors::GRAY_500,
        gray700 = colors::GRAY_700,
        gray900 = colors::GRAY_900,
        normal = weights::NORMAL,
        medium = weights::MEDIUM,
        bold = weights::BOLD,
    )
}

/// Fixed-size spacer element.
///
/// Purely layout; min sizes keep it from collapsing inside flex rows.
pub fn spacer(size_px: u32) -> String {
    format!(
        r#"<div class="spacer" style="min-width: {size}px; min-height: {size}px;"></div>"#,
        size = size_px
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_variables_carry_palette() {
        let vars = css_variables();
        assert!(vars.contains("--color-primary: hsl(340deg 65% 47%)"));
        assert!(vars.contains("--weight-bold: 800"));
    }

    #[test]
    fn test_spacer_is_fixed_size() {
        let html = spacer(12);
        assert!(html.contains("min-width: 12px"));
        assert!(html.contains("min-height: 12px"));
    }
}
