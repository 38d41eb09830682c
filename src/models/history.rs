//! Export history entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::HistoryEntryId;
use super::money::Money;

/// Outcome of an export run
///
/// `Failed` is recorded when serialization or the artifact write fails;
/// every other run completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
    #[default]
    Completed,
    Failed,
}

impl fmt::Display for ExportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// One line of the export history log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportHistoryEntry {
    /// Unique identifier
    pub id: HistoryEntryId,

    /// When the export ran
    pub timestamp: DateTime<Utc>,

    /// Destination identifier ("download", "email", or a cloud service id)
    pub destination: String,

    /// Name of the template that drove the export
    pub template_name: String,

    /// Number of records in the exported set
    pub record_count: usize,

    /// Sum of amounts in the exported set
    pub total_amount: Money,

    /// Outcome of the run
    pub status: ExportStatus,
}

impl ExportHistoryEntry {
    /// Create a new entry stamped with the current time
    pub fn new(
        destination: impl Into<String>,
        template_name: impl Into<String>,
        record_count: usize,
        total_amount: Money,
        status: ExportStatus,
    ) -> Self {
        Self {
            id: HistoryEntryId::new(),
            timestamp: Utc::now(),
            destination: destination.into(),
            template_name: template_name.into(),
            record_count,
            total_amount,
            status,
        }
    }
}
