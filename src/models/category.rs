//! Expense category model
//!
//! Categories are a fixed, closed set. They serialize as their display
//! names ("Food", "Bills", ...) because that is the persisted wire form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tagging an expense's type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Health,
    Other,
}

impl Category {
    /// All categories, in presentation order
    pub const ALL: [Category; 7] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Shopping,
        Self::Bills,
        Self::Health,
        Self::Other,
    ];

    /// The category's display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }

    /// Parse a category from its name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" => Some(Self::Transport),
            "entertainment" => Some(Self::Entertainment),
            "shopping" => Some(Self::Shopping),
            "bills" => Some(Self::Bills),
            "health" => Some(Self::Health),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Food
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_name() {
        for cat in Category::ALL {
            assert_eq!(format!("{}", cat), cat.name());
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.name()), Some(cat));
        }
        assert_eq!(Category::parse("FOOD"), Some(Category::Food));
        assert_eq!(Category::parse("  bills "), Some(Category::Bills));
        assert_eq!(Category::parse("groceries"), None);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Bills).unwrap();
        assert_eq!(json, "\"Bills\"");

        let parsed: Category = serde_json::from_str("\"Transport\"").unwrap();
        assert_eq!(parsed, Category::Transport);
    }

    #[test]
    fn test_all_is_exhaustive() {
        assert_eq!(Category::ALL.len(), 7);
    }
}
