//! Preview page assembly: shell, inlined styles, card grid.

use chrono::{DateTime, Utc};

use shoe_card::prelude::*;
use shoe_card::theme;

/// Render the full preview listing page.
pub fn render_listing_page(shoes: &[ShoeSummary], now: DateTime<Utc>) -> String {
    let cards: String = shoes
        .iter()
        .map(|shoe| render_shoe_card(shoe, now))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Shoe Card Preview</title>
<style>{vars}
{page_styles}
{card_styles}</style>
</head>
<body>
    <header class="preview-header">
        <h1>Shoe Card Preview</h1>
        <p class="preview-clock">Evaluated at {now}</p>
    </header>
    <main class="card-grid">
{cards}
    </main>
</body>
</html>"#,
        vars = theme::css_variables(),
        page_styles = PAGE_STYLES,
        card_styles = CARD_STYLES,
        now = now.to_rfc3339(),
        cards = cards,
    )
}

/// Styles for the preview chrome around the cards.
const PAGE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; }
.preview-header { padding: 1rem 2rem; border-bottom: 1px solid var(--color-gray-500); }
.preview-clock { color: var(--color-gray-700); font-size: 0.8rem; }
.card-grid { display: flex; flex-wrap: wrap; gap: 32px; padding: 2rem; }
"#;
