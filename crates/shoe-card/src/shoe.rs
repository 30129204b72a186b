//! The shoe display record handed to the card renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CardError;
use crate::money::Money;

/// A URL-friendly slug identifying a shoe.
///
/// Opaque to the card; its only use is building the detail-page path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Slug(String);

impl Slug {
    /// Create a slug, validating it is non-empty and URL-path safe.
    pub fn new(slug: impl Into<String>) -> Result<Self, CardError> {
        let slug = slug.into();
        if slug.is_empty() {
            return Err(CardError::EmptySlug);
        }
        if let Some(c) = slug
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_' | '.'))
        {
            return Err(CardError::InvalidSlugChar(slug, c));
        }
        Ok(Self(slug))
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Everything the card needs to render one shoe.
///
/// Owned by the caller (a listing page iterating over a catalog); the
/// renderer borrows it for a single pass and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoeSummary {
    /// URL-friendly key; the card links to `/shoe/{slug}`.
    pub slug: Slug,
    /// Display name.
    pub name: String,
    /// Primary image URL.
    pub image_url: String,
    /// Regular price.
    pub price: Money,
    /// Promotional price. Presence alone marks the shoe as on sale;
    /// the card does not check it against `price`.
    #[serde(default)]
    pub sale_price: Option<Money>,
    /// When the shoe was released.
    pub released_at: DateTime<Utc>,
    /// Number of color variants available.
    pub num_of_colors: u32,
}

impl ShoeSummary {
    /// Path of the shoe's detail page.
    pub fn detail_path(&self) -> String {
        format!("/shoe/{}", self.slug)
    }
}
