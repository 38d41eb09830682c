//! Spending aggregation
//!
//! Pure functions that turn the flat expense list into category totals
//! and time-bucketed series for the dashboard and charts. All sums
//! accumulate in integer cents; nothing here touches floating point.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Category, Expense, Money};

/// Spending total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    pub count: usize,
}

/// Spending total for one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Money,
}

/// Spending total for one month ("YYYY-MM")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: String,
    pub total: Money,
}

/// Group expenses by category, sorted descending by total
///
/// Categories without expenses are omitted. Ties keep the order in which
/// the categories were first encountered (the sort is stable).
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => {
                entry.total += expense.amount;
                entry.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: expense.category,
                total: expense.amount,
                count: 1,
            }),
        }
    }

    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Daily spending over the trailing window ending at `today`
///
/// Returns exactly `window_days + 1` entries in chronological order, one
/// per calendar day whether or not anything was spent that day. Expenses
/// dated outside the window do not contribute.
pub fn daily_totals(expenses: &[Expense], window_days: u32, today: NaiveDate) -> Vec<DailyTotal> {
    let start = today - Duration::days(window_days as i64);

    let mut by_day: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for expense in expenses {
        if expense.date >= start && expense.date <= today {
            *by_day.entry(expense.date).or_insert_with(Money::zero) += expense.amount;
        }
    }

    let mut result = Vec::with_capacity(window_days as usize + 1);
    let mut cursor = start;
    while cursor <= today {
        result.push(DailyTotal {
            date: cursor,
            total: by_day.get(&cursor).copied().unwrap_or_default(),
        });
        cursor += Duration::days(1);
    }
    result
}

/// Monthly spending totals, ascending by month
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        let month = expense.date.format("%Y-%m").to_string();
        *by_month.entry(month).or_insert_with(Money::zero) += expense.amount;
    }

    by_month
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

/// Dashboard roll-up: all-time, current-month, and today figures
#[derive(Debug, Clone)]
pub struct SpendingSummary {
    /// All-time spending
    pub total: Money,
    /// All-time record count
    pub count: usize,
    /// Spending since the first of the current month
    pub month_total: Money,
    /// Record count since the first of the current month
    pub month_count: usize,
    /// Spending dated exactly `today`
    pub today_total: Money,
    /// The highest-spending category, if any records exist
    pub top_category: Option<CategoryTotal>,
}

impl SpendingSummary {
    /// Generate the summary for the dashboard cards
    pub fn generate(expenses: &[Expense], today: NaiveDate) -> Self {
        let month_start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap();

        let mut total = Money::zero();
        let mut month_total = Money::zero();
        let mut month_count = 0;
        let mut today_total = Money::zero();

        for expense in expenses {
            total += expense.amount;
            if expense.date >= month_start {
                month_total += expense.amount;
                month_count += 1;
            }
            if expense.date == today {
                today_total += expense.amount;
            }
        }

        Self {
            total,
            count: expenses.len(),
            month_total,
            month_count,
            today_total,
            top_category: category_totals(expenses).into_iter().next(),
        }
    }
}
