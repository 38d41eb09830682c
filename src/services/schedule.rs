//! Schedule service
//!
//! Manages the single (simulated) recurring-export configuration and the
//! next-run date derived from its frequency.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::ExpenseResult;
use crate::models::{ScheduleConfig, ScheduleFrequency};
use crate::storage::Storage;

/// Service for schedule management
pub struct ScheduleService<'a> {
    storage: &'a Storage,
}

impl<'a> ScheduleService<'a> {
    /// Create a new schedule service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get the current schedule, if any
    pub fn get(&self) -> ExpenseResult<Option<ScheduleConfig>> {
        self.storage.schedule.get()
    }

    /// Replace the schedule, stamping `next_run` from `today`
    pub fn set(&self, mut config: ScheduleConfig, today: NaiveDate) -> ExpenseResult<ScheduleConfig> {
        config.next_run = config
            .enabled
            .then(|| compute_next_run(config.frequency, today));

        self.storage.schedule.set(config.clone())?;
        self.storage.schedule.save()?;
        Ok(config)
    }

    /// Remove the schedule entirely
    pub fn clear(&self) -> ExpenseResult<()> {
        self.storage.schedule.clear()?;
        self.storage.schedule.save()?;
        Ok(())
    }
}

/// Compute when a schedule next fires
///
/// Daily: tomorrow. Weekly: the upcoming Sunday (a full week out when
/// `today` is Sunday). Monthly: the first of next month.
pub fn compute_next_run(frequency: ScheduleFrequency, today: NaiveDate) -> NaiveDate {
    match frequency {
        ScheduleFrequency::Daily => today + Duration::days(1),
        ScheduleFrequency::Weekly => {
            let days_ahead = 7 - today.weekday().num_days_from_sunday() as i64;
            today + Duration::days(days_ahead)
        }
        ScheduleFrequency::Monthly => {
            let (year, month) = if today.month() == 12 {
                (today.year() + 1, 1)
            } else {
                (today.year(), today.month() + 1)
            };
            NaiveDate::from_ymd_opt(year, month, 1).unwrap()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_next_run_daily() {
        assert_eq!(
            compute_next_run(ScheduleFrequency::Daily, date("2024-03-15")),
            date("2024-03-16")
        );
        // Month rollover
        assert_eq!(
            compute_next_run(ScheduleFrequency::Daily, date("2024-01-31")),
            date("2024-02-01")
        );
    }

    #[test]
    fn test_next_run_weekly_lands_on_sunday() {
        // 2024-03-15 is a Friday; upcoming Sunday is the 17th
        assert_eq!(
            compute_next_run(ScheduleFrequency::Weekly, date("2024-03-15")),
            date("2024-03-17")
        );
        // On a Sunday the next run is a full week out
        assert_eq!(
            compute_next_run(ScheduleFrequency::Weekly, date("2024-03-17")),
            date("2024-03-24")
        );
    }

    #[test]
    fn test_next_run_monthly_first_of_next_month() {
        assert_eq!(
            compute_next_run(ScheduleFrequency::Monthly, date("2024-03-15")),
            date("2024-04-01")
        );
        // Year rollover
        assert_eq!(
            compute_next_run(ScheduleFrequency::Monthly, date("2024-12-31")),
            date("2025-01-01")
        );
    }

    #[test]
    fn test_set_stamps_next_run_when_enabled() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ScheduleService::new(&storage);

        let config = ScheduleConfig {
            enabled: true,
            frequency: ScheduleFrequency::Monthly,
            destination: "email".to_string(),
            template: "monthly-summary".to_string(),
            next_run: None,
        };
        let saved = service.set(config, date("2024-03-15")).unwrap();
        assert_eq!(saved.next_run, Some(date("2024-04-01")));
        assert_eq!(service.get().unwrap(), Some(saved));
    }

    #[test]
    fn test_set_disabled_has_no_next_run() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ScheduleService::new(&storage);

        let config = ScheduleConfig {
            enabled: false,
            frequency: ScheduleFrequency::Daily,
            destination: "email".to_string(),
            template: "tax-report".to_string(),
            next_run: Some(date("2024-01-01")),
        };
        let saved = service.set(config, date("2024-03-15")).unwrap();
        assert_eq!(saved.next_run, None);
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ScheduleService::new(&storage);

        let config = ScheduleConfig {
            enabled: true,
            frequency: ScheduleFrequency::Weekly,
            destination: "email".to_string(),
            template: "tax-report".to_string(),
            next_run: None,
        };
        service.set(config, date("2024-03-15")).unwrap();
        service.clear().unwrap();
        assert!(service.get().unwrap().is_none());
    }
}
