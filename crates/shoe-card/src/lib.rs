//! Shoe card for product listing pages.
//!
//! One presentational unit: given a caller-owned [`ShoeSummary`], the
//! card classifies it into one of three display variants and renders a
//! static HTML fragment — image, name, price, color count, and an
//! optional promotional tag.
//!
//! - **[`variant`]**: the three-way classification (on-sale beats
//!   new-release beats default).
//! - **[`card`]**: the renderer and its stylesheet constant.
//! - **[`money`]**, **[`release`]**, **[`text`]**, **[`theme`]**: the
//!   price-formatting, recency, pluralization, and styling
//!   collaborators the card delegates to.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::Utc;
//! use shoe_card::prelude::*;
//!
//! let shoe = ShoeSummary {
//!     slug: Slug::new("air-ramen-low")?,
//!     name: "Air Ramen Low".to_string(),
//!     image_url: "/assets/air-ramen-low.jpg".to_string(),
//!     price: Money::new(14900, Currency::USD),
//!     sale_price: Some(Money::new(9999, Currency::USD)),
//!     released_at: Utc::now(),
//!     num_of_colors: 3,
//! };
//!
//! let html = render_shoe_card(&shoe, Utc::now());
//! assert!(html.contains("Sale"));
//! ```

pub mod card;
pub mod error;
pub mod money;
pub mod release;
pub mod shoe;
pub mod text;
pub mod theme;
pub mod variant;

pub use card::{render_shoe_card, CARD_STYLES};
pub use error::CardError;
pub use money::{Currency, Money};
pub use shoe::{ShoeSummary, Slug};
pub use variant::CardVariant;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{render_shoe_card, CARD_STYLES};
    pub use crate::error::CardError;
    pub use crate::money::{Currency, Money};
    pub use crate::release::{is_new_release, NEW_RELEASE_WINDOW_DAYS};
    pub use crate::shoe::{ShoeSummary, Slug};
    pub use crate::text::pluralize;
    pub use crate::variant::CardVariant;
}
