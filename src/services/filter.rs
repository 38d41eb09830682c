//! Filter/sort engine for the expense list
//!
//! A pure projection from the full record list to a narrowed, ordered
//! view. The narrowing stages are shared with template-based export
//! (which skips the text stage and always sorts ascending by date), so
//! the two filtering paths cannot drift apart.

use chrono::NaiveDate;

use crate::models::{Category, Expense};

/// Category narrowing for the interactive list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Keep every category
    #[default]
    All,
    /// Keep a single category
    Only(Category),
}

/// Field the list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Category,
}

/// Direction of the ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    /// Newest/largest first; the list view's default
    #[default]
    Desc,
}

/// Criteria for filtering and sorting the expense list
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against description or
    /// category name; empty matches everything
    pub search: String,
    /// Category narrowing
    pub category: CategoryFilter,
    /// Inclusive lower date bound
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub date_to: Option<NaiveDate>,
    /// Sort field
    pub sort_by: SortKey,
    /// Sort direction
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    /// Create criteria that keep everything, sorted by date descending
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Narrow to a single category
    pub fn category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    /// Set the inclusive date range
    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Set the sort field and direction
    pub fn sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_by = key;
        self.sort_order = order;
        self
    }
}

/// Apply the narrowing stages shared by the list view and export
/// templates: text search (skipped when `None`), category membership
/// (skipped when `None`), then the inclusive date bounds. Never reorders.
pub(crate) fn narrow(
    expenses: &[Expense],
    search: Option<&str>,
    categories: Option<&[Category]>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| match search {
            Some(q) if !q.trim().is_empty() => {
                let q = q.trim().to_lowercase();
                e.description.to_lowercase().contains(&q)
                    || e.category.name().to_lowercase().contains(&q)
            }
            _ => true,
        })
        .filter(|e| match categories {
            Some(allowed) => allowed.contains(&e.category),
            None => true,
        })
        .filter(|e| date_from.map_or(true, |from| e.date >= from))
        .filter(|e| date_to.map_or(true, |to| e.date <= to))
        .cloned()
        .collect()
}

/// Filter and sort the expense list
///
/// Stages apply in fixed order: search, category, date-from, date-to,
/// sort. The sort is stable and descending order reverses the comparator
/// result, so records with equal keys keep their input order in both
/// directions. Pure: identical inputs always produce the identical
/// sequence.
pub fn filter_expenses(expenses: &[Expense], criteria: &FilterCriteria) -> Vec<Expense> {
    let single;
    let categories: Option<&[Category]> = match criteria.category {
        CategoryFilter::All => None,
        CategoryFilter::Only(cat) => {
            single = [cat];
            Some(&single)
        }
    };

    let mut result = narrow(
        expenses,
        Some(&criteria.search),
        categories,
        criteria.date_from,
        criteria.date_to,
    );

    result.sort_by(|a, b| {
        let ord = match criteria.sort_by {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.cmp(&b.amount),
            SortKey::Category => a.category.name().cmp(b.category.name()),
        };
        match criteria.sort_order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn expense(cents: i64, category: Category, description: &str, date: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            description,
            date.parse().unwrap(),
        )
    }

    fn sample_set() -> Vec<Expense> {
        vec![
            expense(1250, Category::Food, "Lunch at cafe", "2024-01-05"),
            expense(4000, Category::Bills, "Internet", "2024-01-06"),
            expense(900, Category::Transport, "Bus pass", "2024-01-10"),
            expense(2200, Category::Food, "Groceries", "2024-01-12"),
        ]
    }

    #[test]
    fn test_no_criteria_preserves_count() {
        let expenses = sample_set();
        let result = filter_expenses(&expenses, &FilterCriteria::new());
        assert_eq!(result.len(), expenses.len());
        // Default view: date descending
        assert_eq!(result[0].description, "Groceries");
        assert_eq!(result[3].description, "Lunch at cafe");
    }

    #[test]
    fn test_search_matches_description_case_insensitive() {
        let expenses = sample_set();
        let criteria = FilterCriteria::new().search("LUNCH");
        let result = filter_expenses(&expenses, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "Lunch at cafe");
    }

    #[test]
    fn test_search_matches_category_name() {
        let expenses = sample_set();
        let criteria = FilterCriteria::new().search("transp");
        let result = filter_expenses(&expenses, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "Bus pass");
    }

    #[test]
    fn test_category_filter() {
        let expenses = sample_set();
        let criteria = FilterCriteria::new().category(Category::Food);
        let result = filter_expenses(&expenses, &criteria);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.category == Category::Food));
    }

    #[test]
    fn test_date_bounds_inclusive() {
        let expenses = sample_set();
        let criteria = FilterCriteria::new().date_range(
            "2024-01-06".parse().unwrap(),
            "2024-01-10".parse().unwrap(),
        );
        let result = filter_expenses(&expenses, &criteria);
        let descriptions: Vec<_> = result.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Bus pass", "Internet"]);
    }

    #[test]
    fn test_amount_sort_is_numeric() {
        let expenses = sample_set();
        let criteria = FilterCriteria::new().sort(SortKey::Amount, SortOrder::Asc);
        let result = filter_expenses(&expenses, &criteria);
        let cents: Vec<_> = result.iter().map(|e| e.amount.cents()).collect();
        assert_eq!(cents, vec![900, 1250, 2200, 4000]);
    }

    #[test]
    fn test_category_sort_is_lexicographic() {
        let expenses = sample_set();
        let criteria = FilterCriteria::new().sort(SortKey::Category, SortOrder::Asc);
        let result = filter_expenses(&expenses, &criteria);
        let names: Vec<_> = result.iter().map(|e| e.category.name()).collect();
        assert_eq!(names, vec!["Bills", "Food", "Food", "Transport"]);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let expenses = vec![
            expense(100, Category::Food, "first", "2024-01-05"),
            expense(200, Category::Food, "second", "2024-01-05"),
            expense(300, Category::Food, "third", "2024-01-06"),
        ];

        let asc = filter_expenses(&expenses, &FilterCriteria::new().sort(SortKey::Date, SortOrder::Asc));
        assert_eq!(asc[0].description, "first");
        assert_eq!(asc[1].description, "second");

        let desc = filter_expenses(&expenses, &FilterCriteria::new().sort(SortKey::Date, SortOrder::Desc));
        assert_eq!(desc[0].description, "third");
        // Tied records stay in input order even when descending
        assert_eq!(desc[1].description, "first");
        assert_eq!(desc[2].description, "second");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let expenses = sample_set();
        let criteria = FilterCriteria::new()
            .search("e")
            .sort(SortKey::Amount, SortOrder::Desc);

        let once = filter_expenses(&expenses, &criteria);
        let twice = filter_expenses(&once, &criteria);
        let once_ids: Vec<_> = once.iter().map(|e| e.id).collect();
        let twice_ids: Vec<_> = twice.iter().map(|e| e.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn test_empty_input() {
        let result = filter_expenses(&[], &FilterCriteria::new().search("anything"));
        assert!(result.is_empty());
    }
}
