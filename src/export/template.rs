//! Export templates
//!
//! A template is a canned filter + format preset for one-click export:
//! a category subset, a date-range policy resolved against "today", an
//! output format, and an ordered column set.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Category, Expense};
use crate::services::filter::narrow;

/// Date-range policy for a template, resolved at export time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// No bounds
    All,
    /// First of the current month through today
    ThisMonth,
    /// The whole previous calendar month
    LastMonth,
    /// January 1st through today
    ThisYear,
    /// The trailing 90 days through today
    Last90Days,
}

impl DateRange {
    /// Resolve the policy to inclusive bounds, given today's date
    ///
    /// Returns `None` for [`DateRange::All`]. Deterministic: the same
    /// `today` always yields the same bounds.
    pub fn resolve(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::All => None,
            Self::ThisMonth => {
                let from = first_of_month(today.year(), today.month());
                Some((from, today))
            }
            Self::LastMonth => {
                // Day before the first of the current month is the last
                // day of the previous month, leap years included
                let this_month_start = first_of_month(today.year(), today.month());
                let to = this_month_start - Duration::days(1);
                let from = first_of_month(to.year(), to.month());
                Some((from, to))
            }
            Self::ThisYear => {
                let from = first_of_month(today.year(), 1);
                Some((from, today))
            }
            Self::Last90Days => Some((today - Duration::days(90), today)),
        }
    }

    /// Parse the kebab-case policy name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "this-month" => Some(Self::ThisMonth),
            "last-month" => Some(Self::LastMonth),
            "this-year" => Some(Self::ThisYear),
            "last-90-days" => Some(Self::Last90Days),
            _ => None,
        }
    }
}

/// First day of the given month (always a valid date for months 1-12)
fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// Output format of an export artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Delimited text with a header row
    #[default]
    Csv,
    /// Pretty-printed array of records
    Json,
    /// Self-contained printable HTML document
    Document,
}

impl ExportFormat {
    /// File extension for artifacts of this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Document => "html",
        }
    }
}

/// Category narrowing declared by a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    /// Every category
    All,
    /// A fixed subset
    Only(Vec<Category>),
}

/// A column of the exported table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    Category,
    Description,
    Amount,
}

impl Column {
    /// Header label for this column
    pub fn header(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Category => "Category",
            Self::Description => "Description",
            Self::Amount => "Amount",
        }
    }
}

/// A named, predefined export preset
#[derive(Debug, Clone)]
pub struct ExportTemplate {
    /// Stable identifier, used in artifact filenames
    pub id: String,
    /// Display name, recorded in export history
    pub name: String,
    /// One-line description
    pub description: String,
    /// Categories to include
    pub categories: CategorySelection,
    /// Date-range policy
    pub date_range: DateRange,
    /// Output format
    pub format: ExportFormat,
    /// Ordered column set
    pub columns: Vec<Column>,
}

impl ExportTemplate {
    /// Apply the template's filter to the expense list
    ///
    /// Date-range filter (inclusive both ends), then category subset,
    /// then ascending-date sort. Unlike the interactive filter engine
    /// there is no text-search stage and the sort is always ascending by
    /// date, regardless of any user preference.
    pub fn apply(&self, expenses: &[Expense], today: NaiveDate) -> Vec<Expense> {
        let bounds = self.date_range.resolve(today);
        let categories = match &self.categories {
            CategorySelection::All => None,
            CategorySelection::Only(subset) => Some(subset.as_slice()),
        };

        let mut result = narrow(
            expenses,
            None,
            categories,
            bounds.map(|(from, _)| from),
            bounds.map(|(_, to)| to),
        );
        result.sort_by(|a, b| a.date.cmp(&b.date));
        result
    }
}

/// The built-in template catalog
pub fn built_in_templates() -> Vec<ExportTemplate> {
    vec![
        ExportTemplate {
            id: "tax-report".to_string(),
            name: "Tax Report".to_string(),
            description: "All deductible expenses formatted for tax filing".to_string(),
            categories: CategorySelection::All,
            date_range: DateRange::ThisYear,
            format: ExportFormat::Document,
            columns: vec![Column::Date, Column::Category, Column::Description, Column::Amount],
        },
        ExportTemplate {
            id: "monthly-summary".to_string(),
            name: "Monthly Summary".to_string(),
            description: "Current month breakdown by category with totals".to_string(),
            categories: CategorySelection::All,
            date_range: DateRange::ThisMonth,
            format: ExportFormat::Csv,
            columns: vec![Column::Date, Column::Category, Column::Description, Column::Amount],
        },
        ExportTemplate {
            id: "category-analysis".to_string(),
            name: "Category Analysis".to_string(),
            description: "Deep dive into spending patterns per category".to_string(),
            categories: CategorySelection::All,
            date_range: DateRange::Last90Days,
            format: ExportFormat::Json,
            columns: vec![Column::Date, Column::Category, Column::Description, Column::Amount],
        },
        ExportTemplate {
            id: "bills-only".to_string(),
            name: "Bills & Utilities".to_string(),
            description: "Recurring bills and utility payments only".to_string(),
            categories: CategorySelection::Only(vec![Category::Bills]),
            date_range: DateRange::ThisYear,
            format: ExportFormat::Csv,
            columns: vec![Column::Date, Column::Description, Column::Amount],
        },
    ]
}

/// Look up a built-in template by id
pub fn find_template(id: &str) -> Option<ExportTemplate> {
    built_in_templates().into_iter().find(|t| t.id == id)
}
