//! Export execution
//!
//! Applies a template (or ad-hoc options) to the expense list, runs the
//! serializer, performs the destination side effect, and records the run
//! in export history. Cloud destinations are simulated: only download and
//! email produce an artifact file, and the processing delay exists purely
//! for user-facing feedback.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, ExportHistoryEntry, ExportStatus, Money};
use crate::services::filter::narrow;
use crate::storage::Storage;

use super::document;
use super::template::{Column, ExportFormat, ExportTemplate};
use super::{csv, json};

/// Simulated processing time for a template export
pub const TEMPLATE_EXPORT_DELAY: Duration = Duration::from_millis(1200);

/// Simulated processing time for an ad-hoc export
pub const ADHOC_EXPORT_DELAY: Duration = Duration::from_millis(600);

/// Columns used when no template dictates a set
const DEFAULT_COLUMNS: [Column; 4] = [
    Column::Date,
    Column::Category,
    Column::Description,
    Column::Amount,
];

/// Where an export goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Local save-as
    Download,
    /// Simulated email send; still produces the artifact locally
    Email,
    /// A cloud service id; simulated, no artifact
    Service(String),
}

impl Destination {
    /// Parse a destination identifier
    pub fn parse(s: &str) -> Self {
        match s {
            "download" => Self::Download,
            "email" => Self::Email,
            other => Self::Service(other.to_string()),
        }
    }

    /// Whether this destination materializes an artifact file
    fn writes_artifact(&self) -> bool {
        matches!(self, Self::Download | Self::Email)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Download => write!(f, "download"),
            Self::Email => write!(f, "email"),
            Self::Service(id) => write!(f, "{}", id),
        }
    }
}

/// Ad-hoc export criteria from the interactive export dialog
///
/// An empty category list means every category.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub categories: Vec<Category>,
}

/// Result of an ad-hoc export
#[derive(Debug, Clone)]
pub struct AdHocExport {
    /// Path of the written artifact
    pub path: PathBuf,
    /// Number of records exported
    pub record_count: usize,
    /// Sum of exported amounts
    pub total_amount: Money,
}

/// Service that runs exports and records their history
pub struct ExportService<'a> {
    storage: &'a Storage,
    template_delay: Duration,
    adhoc_delay: Duration,
}

impl<'a> ExportService<'a> {
    /// Create a new export service with the default simulated delays
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            template_delay: TEMPLATE_EXPORT_DELAY,
            adhoc_delay: ADHOC_EXPORT_DELAY,
        }
    }

    /// Override the simulated delays (tests pass `Duration::ZERO`)
    pub fn with_delays(mut self, template_delay: Duration, adhoc_delay: Duration) -> Self {
        self.template_delay = template_delay;
        self.adhoc_delay = adhoc_delay;
        self
    }

    /// Run a template export to a destination
    ///
    /// Applies the template, serializes, performs the destination side
    /// effect, then appends a history entry. A serialization or write
    /// failure records a `Failed` entry before the error propagates;
    /// otherwise the entry is `Completed`.
    pub fn execute_export(
        &self,
        expenses: &[Expense],
        template: &ExportTemplate,
        destination: &Destination,
        today: NaiveDate,
    ) -> ExpenseResult<ExportHistoryEntry> {
        let filtered = template.apply(expenses, today);
        let total: Money = filtered.iter().map(|e| e.amount).sum();

        info!(
            template = %template.id,
            destination = %destination,
            count = filtered.len(),
            "executing export"
        );

        // Simulated processing latency, for UX feedback only
        thread::sleep(self.template_delay);

        let result = if destination.writes_artifact() {
            let filename = format!(
                "{}-{}.{}",
                template.id,
                today.format("%Y-%m-%d"),
                template.format.extension()
            );
            self.write_artifact(
                &filtered,
                template.format,
                &template.columns,
                &template.name,
                &filename,
                today,
            )
        } else {
            // Simulated send: nothing leaves the machine
            Ok(())
        };

        match result {
            Ok(()) => {
                let entry = ExportHistoryEntry::new(
                    destination.to_string(),
                    template.name.clone(),
                    filtered.len(),
                    total,
                    ExportStatus::Completed,
                );
                self.record(entry.clone())?;
                Ok(entry)
            }
            Err(e) => {
                let entry = ExportHistoryEntry::new(
                    destination.to_string(),
                    template.name.clone(),
                    filtered.len(),
                    total,
                    ExportStatus::Failed,
                );
                // Best effort; the original failure is the one to surface
                let _ = self.record(entry);
                Err(e)
            }
        }
    }

    /// Run an ad-hoc export straight to a local artifact
    ///
    /// Date bounds and category subset come from the interactive dialog;
    /// the output is always sorted ascending by date. Unlike template
    /// exports, ad-hoc runs are not recorded in history.
    pub fn export_filtered(
        &self,
        expenses: &[Expense],
        options: &ExportOptions,
        today: NaiveDate,
    ) -> ExpenseResult<AdHocExport> {
        let categories = if options.categories.is_empty() {
            None
        } else {
            Some(options.categories.as_slice())
        };

        let mut filtered = narrow(expenses, None, categories, options.date_from, options.date_to);
        filtered.sort_by(|a, b| a.date.cmp(&b.date));
        let total: Money = filtered.iter().map(|e| e.amount).sum();

        thread::sleep(self.adhoc_delay);

        let filename = format!(
            "expenses-{}.{}",
            today.format("%Y-%m-%d"),
            options.format.extension()
        );
        self.write_artifact(
            &filtered,
            options.format,
            &DEFAULT_COLUMNS,
            "Expense Report",
            &filename,
            today,
        )?;

        Ok(AdHocExport {
            path: self.storage.paths().exports_dir().join(filename),
            record_count: filtered.len(),
            total_amount: total,
        })
    }

    /// Serialize into a file under the exports directory
    fn write_artifact(
        &self,
        expenses: &[Expense],
        format: ExportFormat,
        columns: &[Column],
        title: &str,
        filename: &str,
        today: NaiveDate,
    ) -> ExpenseResult<()> {
        let path = self.storage.paths().exports_dir().join(filename);
        let file = File::create(&path)
            .map_err(|e| ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
        let mut writer = BufWriter::new(file);

        match format {
            ExportFormat::Csv => csv::write_expenses(&mut writer, expenses, columns)?,
            ExportFormat::Json => json::write_expenses(&mut writer, expenses)?,
            ExportFormat::Document => {
                let html = document::render(expenses, title, columns, today);
                writer
                    .write_all(html.as_bytes())
                    .map_err(|e| ExpenseError::Export(e.to_string()))?;
            }
        }

        writer
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        info!(path = %path.display(), "wrote export artifact");
        Ok(())
    }

    /// Append a history entry and persist the log
    fn record(&self, entry: ExportHistoryEntry) -> ExpenseResult<()> {
        self.storage.history.append(entry)?;
        self.storage.history.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::export::template::find_template;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn service(storage: &Storage) -> ExportService<'_> {
        ExportService::new(storage).with_delays(Duration::ZERO, Duration::ZERO)
    }

    fn expense(cents: i64, category: Category, date: &str) -> Expense {
        Expense::new(Money::from_cents(cents), category, "test", date.parse().unwrap())
    }

    fn today() -> NaiveDate {
        "2024-03-15".parse().unwrap()
    }

    #[test]
    fn test_execute_export_writes_artifact_and_history() {
        let (temp_dir, storage) = create_test_storage();
        let export = service(&storage);

        let expenses = vec![
            expense(1250, Category::Food, "2024-03-10"),
            expense(4000, Category::Bills, "2024-03-12"),
        ];
        let template = find_template("monthly-summary").unwrap();

        let entry = export
            .execute_export(&expenses, &template, &Destination::Download, today())
            .unwrap();

        assert_eq!(entry.status, ExportStatus::Completed);
        assert_eq!(entry.record_count, 2);
        assert_eq!(entry.total_amount.cents(), 5250);
        assert_eq!(entry.destination, "download");
        assert_eq!(entry.template_name, "Monthly Summary");

        let artifact = temp_dir
            .path()
            .join("exports")
            .join("monthly-summary-2024-03-15.csv");
        assert!(artifact.exists());

        let history = storage.history.get_all().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, entry.id);
    }

    #[test]
    fn test_cloud_destination_records_history_without_artifact() {
        let (temp_dir, storage) = create_test_storage();
        let export = service(&storage);

        let expenses = vec![expense(1000, Category::Food, "2024-03-10")];
        let template = find_template("monthly-summary").unwrap();

        let entry = export
            .execute_export(
                &expenses,
                &template,
                &Destination::Service("dropbox".to_string()),
                today(),
            )
            .unwrap();

        assert_eq!(entry.status, ExportStatus::Completed);
        assert_eq!(entry.destination, "dropbox");

        let exports: Vec<_> = std::fs::read_dir(temp_dir.path().join("exports"))
            .unwrap()
            .collect();
        assert!(exports.is_empty());
        assert_eq!(storage.history.count().unwrap(), 1);
    }

    #[test]
    fn test_failed_write_records_failed_entry() {
        let (temp_dir, storage) = create_test_storage();
        let export = service(&storage);

        // Replace the exports directory with a plain file so creating the
        // artifact inside it fails
        let exports_dir = temp_dir.path().join("exports");
        std::fs::remove_dir_all(&exports_dir).unwrap();
        std::fs::write(&exports_dir, "not a directory").unwrap();

        let expenses = vec![expense(1000, Category::Food, "2024-03-10")];
        let template = find_template("monthly-summary").unwrap();

        let err = export
            .execute_export(&expenses, &template, &Destination::Download, today())
            .unwrap_err();
        assert!(matches!(err, ExpenseError::Export(_)));

        let history = storage.history.get_all().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, ExportStatus::Failed);
    }

    #[test]
    fn test_export_filtered_applies_options() {
        let (temp_dir, storage) = create_test_storage();
        let export = service(&storage);

        let expenses = vec![
            expense(1000, Category::Food, "2024-03-10"),
            expense(2000, Category::Bills, "2024-03-11"),
            expense(4000, Category::Food, "2024-01-01"),
        ];
        let options = ExportOptions {
            format: ExportFormat::Csv,
            date_from: Some("2024-03-01".parse().unwrap()),
            date_to: None,
            categories: vec![Category::Food],
        };

        let result = export.export_filtered(&expenses, &options, today()).unwrap();
        assert_eq!(result.record_count, 1);
        assert_eq!(result.total_amount.cents(), 1000);
        assert_eq!(
            result.path,
            temp_dir.path().join("exports").join("expenses-2024-03-15.csv")
        );
        assert!(result.path.exists());

        // Ad-hoc exports do not touch history
        assert_eq!(storage.history.count().unwrap(), 0);
    }

    #[test]
    fn test_document_artifact_is_html() {
        let (temp_dir, storage) = create_test_storage();
        let export = service(&storage);

        let expenses = vec![expense(1000, Category::Food, "2024-03-10")];
        let template = find_template("tax-report").unwrap();

        export
            .execute_export(&expenses, &template, &Destination::Download, today())
            .unwrap();

        let artifact = temp_dir
            .path()
            .join("exports")
            .join("tax-report-2024-03-15.html");
        let html = std::fs::read_to_string(artifact).unwrap();
        assert!(html.contains("<h1>Tax Report</h1>"));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn test_destination_parse() {
        assert_eq!(Destination::parse("download"), Destination::Download);
        assert_eq!(Destination::parse("email"), Destination::Email);
        assert_eq!(
            Destination::parse("notion"),
            Destination::Service("notion".to_string())
        );
    }
}
