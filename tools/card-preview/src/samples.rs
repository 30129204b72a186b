//! Built-in sample records covering all three card variants.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};

use shoe_card::prelude::*;

/// Sample shoes relative to an evaluation time.
///
/// Release dates are offsets from `now` so the set always exercises
/// on-sale, new-release, sale-beats-new, and default regardless of when
/// the preview is generated.
pub fn sample_shoes(now: DateTime<Utc>) -> Result<Vec<ShoeSummary>> {
    Ok(vec![
        ShoeSummary {
            slug: Slug::new("velvet-idol")?,
            name: "Velvet Idol".to_string(),
            image_url: "https://picsum.photos/seed/velvet-idol/340/280".to_string(),
            price: Money::new(14900, Currency::USD),
            sale_price: Some(Money::new(9999, Currency::USD)),
            released_at: now - Duration::days(730),
            num_of_colors: 4,
        },
        ShoeSummary {
            slug: Slug::new("air-ramen-low")?,
            name: "Air Ramen Low".to_string(),
            image_url: "https://picsum.photos/seed/air-ramen-low/340/280".to_string(),
            price: Money::new(18500, Currency::USD),
            sale_price: None,
            released_at: now - Duration::days(5),
            num_of_colors: 1,
        },
        ShoeSummary {
            slug: Slug::new("court-monarch")?,
            name: "Court Monarch".to_string(),
            image_url: "https://picsum.photos/seed/court-monarch/340/280".to_string(),
            price: Money::new(10900, Currency::USD),
            sale_price: Some(Money::new(5000, Currency::USD)),
            released_at: now - Duration::days(5),
            num_of_colors: 2,
        },
        ShoeSummary {
            slug: Slug::new("terra-loop")?,
            name: "Terra Loop".to_string(),
            image_url: "https://picsum.photos/seed/terra-loop/340/280".to_string(),
            price: Money::new(12000, Currency::USD),
            sale_price: None,
            released_at: now - Duration::days(730),
            num_of_colors: 3,
        },
    ])
}
