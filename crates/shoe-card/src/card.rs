//! Shoe card renderer.
//!
//! Assembles the card as a static HTML fragment: no state, no event
//! handlers, the whole card is one link to the shoe's detail page. The
//! only branching is the variant-keyed tag and price styling.

use chrono::{DateTime, Utc};

use crate::shoe::ShoeSummary;
use crate::text::{html_escape, pluralize};
use crate::theme::spacer;
use crate::variant::CardVariant;

/// Render one shoe card.
///
/// The evaluation time drives the new-release check; rendering the same
/// record at the same instant always produces the same fragment.
pub fn render_shoe_card(shoe: &ShoeSummary, now: DateTime<Utc>) -> String {
    let variant = CardVariant::classify(shoe.sale_price.as_ref(), shoe.released_at, now);

    let tag = match (variant.tag_class(), variant.tag_text()) {
        (Some(class), Some(text)) => {
            format!(r#"<span class="{}"><span>{}</span></span>"#, class, text)
        }
        _ => String::new(),
    };

    let sale_price = match (variant, &shoe.sale_price) {
        (CardVariant::OnSale, Some(sale)) => {
            format!(r#"<span class="card-sale-price">{}</span>"#, sale.display())
        }
        _ => String::new(),
    };

    format!(
        r#"<a href="{href}" class="card-link">
    <article class="shoe-card" data-variant="{variant}">
        <div class="card-image-wrap">
            {tag}
            <img class="card-image" alt="" src="{image}">
        </div>
        {spacer}
        <div class="card-row">
            <h3 class="card-name">{name}</h3>
            <span class="{price_class}">{price}</span>
        </div>
        <div class="card-row">
            <p class="card-colors">{colors}</p>
            {sale_price}
        </div>
    </article>
</a>"#,
        href = shoe.detail_path(),
        variant = variant.as_str(),
        tag = tag,
        image = html_escape(&shoe.image_url),
        spacer = spacer(12),
        name = html_escape(&shoe.name),
        price_class = variant.price_class(),
        price = shoe.price.display(),
        colors = pluralize("Color", shoe.num_of_colors),
        sale_price = sale_price,
    )
}

/// Static styles for the card.
///
/// Everything here is fixed; the variant only selects which of these
/// classes end up on the fragment.
pub const CARD_STYLES: &str = r#"
.card-link { text-decoration: none; color: inherit; }

.shoe-card { display: flex; flex-direction: column; flex: 1 1 280px; max-width: 320px; }
.card-image-wrap { position: relative; }
.card-image { width: 100%; }
.card-row { font-size: 1rem; display: flex; flex: 1; }

.card-name { font-weight: var(--weight-medium); color: var(--color-gray-900); flex: 1; margin: 0; }

.card-tag {
    position: absolute;
    top: 12px;
    right: -4px;
    border-radius: 2px;
    padding: 10px;
    color: var(--color-white);
    font-weight: var(--weight-bold);
}
.card-tag--sale { background-color: var(--color-primary); }
.card-tag--new { background-color: var(--color-secondary); }

.card-price { align-self: flex-end; }
.card-price--struck { text-decoration: line-through; color: var(--color-gray-500); }

.card-colors { color: var(--color-gray-700); flex: 1; margin: 0; }
.card-sale-price { font-weight: var(--weight-medium); color: var(--color-primary); }
"#;
