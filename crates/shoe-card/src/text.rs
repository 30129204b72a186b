//! Small text utilities used by the renderer.

/// Count-aware label, e.g. "1 Color" / "3 Colors".
///
/// Naive `s` pluralization; the card only ever pluralizes "Color".
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Escape text for interpolation into HTML.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
