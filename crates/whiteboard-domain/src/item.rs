//! Item module - the unit of the board

use crate::Priority;
use std::fmt;

/// Identity of an item
///
/// Assigned from the board's `next_id` counter, strictly increasing and
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    /// Create an id from its raw value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single board item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique identity
    pub id: ItemId,

    /// Free text
    pub content: String,

    /// Completion flag; active items count against section capacity
    pub completed: bool,

    /// Urgency marker
    pub priority: Priority,
}

impl Item {
    /// Create a new, active item
    pub fn new(id: ItemId, content: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            content: content.into(),
            completed: false,
            priority,
        }
    }

    /// Whether the item still counts against capacity
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_active() {
        let item = Item::new(ItemId::new(7), "Water plants", Priority::Low);
        assert!(item.is_active());
        assert_eq!(item.id.value(), 7);
        assert_eq!(item.priority, Priority::Low);
    }
}
