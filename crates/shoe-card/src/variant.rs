//! The three-way display classification of a card.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::release::is_new_release;

/// Display variant of a shoe card.
///
/// Exactly one applies per render; there is never a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CardVariant {
    /// Shoe has an active sale price.
    OnSale,
    /// Shoe was released within the recency window.
    NewRelease,
    /// Neither applies; the card shows no tag.
    #[default]
    Default,
}

impl CardVariant {
    /// Classify a shoe from its sale price and release date.
    ///
    /// Strict priority, first match wins. A shoe can be both on sale
    /// and recently released; on-sale triumphs. That precedence is a
    /// merchandising policy, not a derived fact, so keep it explicit
    /// here if requirements change.
    pub fn classify(
        sale_price: Option<&Money>,
        released_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        if sale_price.is_some() {
            CardVariant::OnSale
        } else if is_new_release(released_at, now) {
            CardVariant::NewRelease
        } else {
            CardVariant::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::OnSale => "on-sale",
            CardVariant::NewRelease => "new-release",
            CardVariant::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "on-sale" => Some(CardVariant::OnSale),
            "new-release" => Some(CardVariant::NewRelease),
            "default" => Some(CardVariant::Default),
            _ => None,
        }
    }

    /// Text of the promotional tag, if this variant shows one.
    pub fn tag_text(&self) -> Option<&'static str> {
        match self {
            CardVariant::OnSale => Some("Sale"),
            CardVariant::NewRelease => Some("Just Released!"),
            CardVariant::Default => None,
        }
    }

    /// CSS class of the promotional tag, if this variant shows one.
    pub fn tag_class(&self) -> Option<&'static str> {
        match self {
            CardVariant::OnSale => Some("card-tag card-tag--sale"),
            CardVariant::NewRelease => Some("card-tag card-tag--new"),
            CardVariant::Default => None,
        }
    }

    /// CSS class of the regular-price element.
    ///
    /// On sale, the regular price is struck through and muted; the sale
    /// price is rendered on its own line by the card.
    pub fn price_class(&self) -> &'static str {
        match self {
            CardVariant::OnSale => "card-price card-price--struck",
            CardVariant::NewRelease | CardVariant::Default => "card-price",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sale_price_classifies_on_sale() {
        let sale = Money::new(9999, Currency::USD);
        let two_years_ago = now() - Duration::days(730);
        assert_eq!(
            CardVariant::classify(Some(&sale), two_years_ago, now()),
            CardVariant::OnSale
        );
    }

    #[test]
    fn test_recent_release_classifies_new() {
        let five_days_ago = now() - Duration::days(5);
        assert_eq!(
            CardVariant::classify(None, five_days_ago, now()),
            CardVariant::NewRelease
        );
    }

    #[test]
    fn test_old_release_classifies_default() {
        let two_years_ago = now() - Duration::days(730);
        assert_eq!(
            CardVariant::classify(None, two_years_ago, now()),
            CardVariant::Default
        );
    }

    #[test]
    fn test_sale_triumphs_over_new_release() {
        let sale = Money::new(5000, Currency::USD);
        let five_days_ago = now() - Duration::days(5);
        assert_eq!(
            CardVariant::classify(Some(&sale), five_days_ago, now()),
            CardVariant::OnSale
        );
    }

    #[test]
    fn test_tag_text() {
        assert_eq!(CardVariant::OnSale.tag_text(), Some("Sale"));
        assert_eq!(CardVariant::NewRelease.tag_text(), Some("Just Released!"));
        assert_eq!(CardVariant::Default.tag_text(), None);
    }

    #[test]
    fn test_tag_shown_iff_not_default() {
        for v in [
            CardVariant::OnSale,
            CardVariant::NewRelease,
            CardVariant::Default,
        ] {
            assert_eq!(v.tag_class().is_some(), v != CardVariant::Default);
            assert_eq!(v.tag_text().is_some(), v != CardVariant::Default);
        }
    }

    #[test]
    fn test_only_sale_strikes_price() {
        assert_eq!(
            CardVariant::OnSale.price_class(),
            "card-price card-price--struck"
        );
        assert_eq!(CardVariant::NewRelease.price_class(), "card-price");
        assert_eq!(CardVariant::Default.price_class(), "card-price");
    }

    #[test]
    fn test_variant_round_trip() {
        for v in [
            CardVariant::OnSale,
            CardVariant::NewRelease,
            CardVariant::Default,
        ] {
            assert_eq!(CardVariant::from_str(v.as_str()), Some(v));
        }
        assert_eq!(CardVariant::from_str("mystery"), None);
    }
}
