//! Recency window for the "Just Released!" tag.

use chrono::{DateTime, Duration, Utc};

/// Length of the trailing window during which a shoe counts as a new release.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// Check whether a release date falls inside the recency window.
///
/// The caller supplies the evaluation time so that identical inputs
/// always classify identically. The check is a plain "after
/// (now - window)" comparison, so a future-dated release also counts
/// as new.
pub fn is_new_release(released_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    released_at > now - Duration::days(NEW_RELEASE_WINDOW_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_recent_release_is_new() {
        assert!(is_new_release(at(2026, 8, 25), at(2026, 8, 30)));
    }

    #[test]
    fn test_old_release_is_not_new() {
        assert!(!is_new_release(at(2024, 8, 30), at(2026, 8, 30)));
    }

    #[test]
    fn test_window_boundary() {
        let now = at(2026, 8, 30);
        // Exactly 30 days ago sits on the boundary and is excluded.
        assert!(!is_new_release(now - Duration::days(30), now));
        assert!(is_new_release(now - Duration::days(29), now));
    }

    #[test]
    fn test_future_release_counts_as_new() {
        assert!(is_new_release(at(2026, 9, 15), at(2026, 8, 30)));
    }
}
