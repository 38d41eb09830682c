//! Scheduled export configuration model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a scheduled export runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleFrequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl ScheduleFrequency {
    /// Parse a frequency from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for ScheduleFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
        }
    }
}

/// Configuration for the (simulated) recurring export
///
/// At most one schedule exists at a time; absence means nothing is
/// scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Whether the schedule is active
    pub enabled: bool,

    /// Run cadence
    pub frequency: ScheduleFrequency,

    /// Destination identifier
    pub destination: String,

    /// Template id to export with
    pub template: String,

    /// Next date the schedule would fire, if enabled
    pub next_run: Option<NaiveDate>,
}
