//! Aggregation engine
//!
//! Pure projections from the expense list to presentation-ready series.

pub mod spending;

pub use spending::{
    category_totals, daily_totals, monthly_totals, CategoryTotal, DailyTotal, MonthlyTotal,
    SpendingSummary,
};
