//! Priority module - urgency marker for board items

use std::fmt;

/// Priority of a board item
///
/// Only meaningful while an item is active; completed items are rendered
/// without a priority marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    /// Needs attention first
    High,

    /// The default for new items
    #[default]
    Medium,

    /// Can wait
    Low,
}

impl Priority {
    /// Every priority, highest first
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Get the priority name as it is displayed and persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Parse a priority, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Names of all priorities, for error messages and schemas
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Priority::as_str).collect()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Invalid priority: '{}'. Valid priorities: {}",
                s,
                Self::names().join(", ")
            )
        })
    }
}
