//! Share link service
//!
//! Creates and revokes simulated share links. Links carry a fixed 7-day
//! expiry set at creation; nothing ever resolves them.

use tracing::info;

use crate::error::ExpenseResult;
use crate::models::{ShareLink, ShareLinkId};
use crate::storage::Storage;

/// Base URL embedded in generated share links
pub const SHARE_URL_BASE: &str = "https://expenses.app/shared";

/// Service for share link management
pub struct ShareService<'a> {
    storage: &'a Storage,
}

impl<'a> ShareService<'a> {
    /// Create a new share service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a share link and persist it
    pub fn create(&self) -> ExpenseResult<ShareLink> {
        let link = ShareLink::new(SHARE_URL_BASE);
        info!(id = %link.id, "created share link");

        self.storage.shares.append(link.clone())?;
        self.storage.shares.save()?;
        Ok(link)
    }

    /// Revoke a share link
    ///
    /// Unconditional removal: revoking an id that no longer exists is a
    /// no-op, not an error.
    pub fn revoke(&self, id: ShareLinkId) -> ExpenseResult<()> {
        if self.storage.shares.remove(id)? {
            info!(id = %id, "revoked share link");
        }
        self.storage.shares.save()?;
        Ok(())
    }

    /// List share links, newest first
    pub fn list(&self) -> ExpenseResult<Vec<ShareLink>> {
        self.storage.shares.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use chrono::Duration;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_sets_seven_day_expiry() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ShareService::new(&storage);

        let link = service.create().unwrap();
        assert_eq!(link.expires_at - link.created_at, Duration::days(7));
        assert!(link.url.starts_with(SHARE_URL_BASE));
    }

    #[test]
    fn test_revoke_is_unconditional() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ShareService::new(&storage);

        let link = service.create().unwrap();
        service.revoke(link.id).unwrap();
        assert!(service.list().unwrap().is_empty());

        // Revoking again is a no-op
        service.revoke(link.id).unwrap();
    }

    #[test]
    fn test_list_newest_first_and_capped() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ShareService::new(&storage);

        let mut last = None;
        for _ in 0..12 {
            last = Some(service.create().unwrap());
        }

        let links = service.list().unwrap();
        assert_eq!(links.len(), 10);
        assert_eq!(links[0].id, last.unwrap().id);
    }
}
