// Completion-state filtering for the todo list

use crate::models::TodoItem;
use serde::{Deserialize, Serialize};

/// View predicate selecting which todo items are displayed.
///
/// A filter is a pure view over the list: applying one never mutates or
/// reorders the underlying items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Show every item.
    #[default]
    All,
    /// Show items not yet completed.
    Active,
    /// Show completed items only.
    Completed,
}

impl FilterMode {
    /// All modes in display order.
    pub const MODES: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    /// True if the item passes this filter.
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !item.completed,
            FilterMode::Completed => item.completed,
        }
    }

    /// Label for the filter row of the page.
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    /// The next mode in display order, wrapping around.
    pub fn cycle(self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::Active,
            FilterMode::Active => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }
}

impl std::str::FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" => Ok(FilterMode::Completed),
            other => Err(format!(
                "unknown filter: {} (expected all, active, or completed)",
                other
            )),
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::All => write!(f, "all"),
            FilterMode::Active => write!(f, "active"),
            FilterMode::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_per_mode() {
        let mut item = TodoItem::new("A");
        assert!(FilterMode::All.matches(&item));
        assert!(FilterMode::Active.matches(&item));
        assert!(!FilterMode::Completed.matches(&item));

        item.completed = true;
        assert!(FilterMode::All.matches(&item));
        assert!(!FilterMode::Active.matches(&item));
        assert!(FilterMode::Completed.matches(&item));
    }

    #[test]
    fn test_cycle_wraps_around() {
        assert_eq!(FilterMode::All.cycle(), FilterMode::Active);
        assert_eq!(FilterMode::Active.cycle(), FilterMode::Completed);
        assert_eq!(FilterMode::Completed.cycle(), FilterMode::All);
    }

    #[test]
    fn test_from_str_accepts_lowercase_names() {
        assert_eq!("all".parse::<FilterMode>().unwrap(), FilterMode::All);
        assert_eq!("Active".parse::<FilterMode>().unwrap(), FilterMode::Active);
        assert_eq!(
            " completed ".parse::<FilterMode>().unwrap(),
            FilterMode::Completed
        );
        assert!("done".parse::<FilterMode>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in FilterMode::MODES {
            assert_eq!(mode.to_string().parse::<FilterMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_serialization_uses_lowercase() {
        let json = serde_json::to_string(&FilterMode::Active).unwrap();
        assert_eq!(json, "\"active\"");

        let mode: FilterMode = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(mode, FilterMode::Completed);
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(FilterMode::default(), FilterMode::All);
    }
}
