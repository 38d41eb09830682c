//! Export pipeline
//!
//! Template presets, format serializers, and the executing service:
//! - CSV: delimited text with quote-when-needed escaping
//! - JSON: machine-readable array with numeric amounts
//! - Document: self-contained printable HTML report

pub mod csv;
pub mod document;
pub mod hub;
pub mod json;
pub mod template;

pub use csv::write_expenses as write_expenses_csv;
pub use document::render as render_document;
pub use hub::{
    AdHocExport, Destination, ExportOptions, ExportService, ADHOC_EXPORT_DELAY,
    TEMPLATE_EXPORT_DELAY,
};
pub use json::write_expenses as write_expenses_json;
pub use template::{
    built_in_templates, find_template, CategorySelection, Column, DateRange, ExportFormat,
    ExportTemplate,
};
