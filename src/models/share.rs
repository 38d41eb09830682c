//! Share link model
//!
//! Share links are simulated: they carry a plausible URL but resolve to
//! nothing. Expiry is fixed at creation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ids::ShareLinkId;

/// How long a share link stays valid
pub const SHARE_LINK_TTL_DAYS: i64 = 7;

/// A time-limited reference token for a data snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLink {
    /// Unique identifier
    pub id: ShareLinkId,

    /// Shareable URL (simulated, not resolvable)
    pub url: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Expiry, exactly seven days after creation
    pub expires_at: DateTime<Utc>,

    /// Number of recorded accesses (always zero; sharing is simulated)
    pub access_count: u32,
}

impl ShareLink {
    /// Create a new link with a random token under `url_base`
    pub fn new(url_base: &str) -> Self {
        let created_at = Utc::now();
        let token = Uuid::new_v4().simple().to_string();
        Self {
            id: ShareLinkId::new(),
            url: format!("{}/{}", url_base.trim_end_matches('/'), &token[..12]),
            created_at,
            expires_at: created_at + Duration::days(SHARE_LINK_TTL_DAYS),
            access_count: 0,
        }
    }

    /// Whether the link has expired as of `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_is_exactly_seven_days() {
        let link = ShareLink::new("https://expenses.app/shared");
        assert_eq!(link.expires_at - link.created_at, Duration::days(7));
    }

    #[test]
    fn test_url_shape() {
        let link = ShareLink::new("https://expenses.app/shared/");
        assert!(link.url.starts_with("https://expenses.app/shared/"));
        let token = link.url.rsplit('/').next().unwrap();
        assert_eq!(token.len(), 12);
    }

    #[test]
    fn test_is_expired() {
        let link = ShareLink::new("https://expenses.app/shared");
        assert!(!link.is_expired(link.created_at));
        assert!(!link.is_expired(link.expires_at - Duration::seconds(1)));
        assert!(link.is_expired(link.expires_at));
    }

    #[test]
    fn test_access_count_starts_at_zero() {
        let link = ShareLink::new("https://expenses.app/shared");
        assert_eq!(link.access_count, 0);
    }
}
