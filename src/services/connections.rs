//! Cloud service connection toggles
//!
//! A fixed catalog of destinations the user can "connect". Connections
//! are simulated: toggling flips a persisted flag and nothing else.

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::Storage;

/// A cloud destination in the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudServiceInfo {
    pub id: &'static str,
    pub name: &'static str,
    /// Connection state before the user ever toggles the service
    pub connected_by_default: bool,
}

/// The catalog of known services
pub static CLOUD_SERVICES: [CloudServiceInfo; 6] = [
    CloudServiceInfo { id: "google-sheets", name: "Google Sheets", connected_by_default: false },
    CloudServiceInfo { id: "dropbox", name: "Dropbox", connected_by_default: false },
    CloudServiceInfo { id: "onedrive", name: "OneDrive", connected_by_default: false },
    CloudServiceInfo { id: "notion", name: "Notion", connected_by_default: false },
    CloudServiceInfo { id: "email", name: "Email", connected_by_default: true },
    CloudServiceInfo { id: "slack", name: "Slack", connected_by_default: false },
];

/// A catalog entry merged with the user's persisted toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub id: &'static str,
    pub name: &'static str,
    pub connected: bool,
}

/// Service for connection toggles
pub struct ConnectionService<'a> {
    storage: &'a Storage,
}

impl<'a> ConnectionService<'a> {
    /// Create a new connection service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List every catalog service with its effective connection state
    pub fn list(&self) -> ExpenseResult<Vec<ServiceStatus>> {
        CLOUD_SERVICES
            .iter()
            .map(|svc| {
                Ok(ServiceStatus {
                    id: svc.id,
                    name: svc.name,
                    connected: self
                        .storage
                        .connections
                        .get(svc.id)?
                        .unwrap_or(svc.connected_by_default),
                })
            })
            .collect()
    }

    /// Effective connection state for one service
    pub fn is_connected(&self, service_id: &str) -> ExpenseResult<bool> {
        let svc = catalog_entry(service_id)
            .ok_or_else(|| ExpenseError::service_not_found(service_id))?;

        Ok(self
            .storage
            .connections
            .get(svc.id)?
            .unwrap_or(svc.connected_by_default))
    }

    /// Toggle a service's connection state and persist it
    pub fn set_connected(&self, service_id: &str, connected: bool) -> ExpenseResult<()> {
        if catalog_entry(service_id).is_none() {
            return Err(ExpenseError::service_not_found(service_id));
        }

        self.storage.connections.set(service_id, connected)?;
        self.storage.connections.save()?;
        Ok(())
    }
}

/// Look up a service in the fixed catalog
pub fn catalog_entry(service_id: &str) -> Option<&'static CloudServiceInfo> {
    CLOUD_SERVICES.iter().find(|svc| svc.id == service_id)
}
