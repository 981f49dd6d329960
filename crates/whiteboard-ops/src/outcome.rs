//! Operation results
//!
//! Denials and misses are ordinary values, not errors. `Display` renders the
//! text handed back to tool callers; `Serialize` backs the CLI's JSON output.

use serde::{Serialize, Serializer};
use std::fmt;
use whiteboard_domain::{ItemId, Priority, Section};
use whiteboard_janitor::JanitorMetrics;

pub(crate) fn display_str<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

pub(crate) fn item_id<S: Serializer>(id: &ItemId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(id.value())
}

/// Result of `add_item`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AddOutcome {
    /// Item appended and persisted
    Added {
        /// Assigned id
        #[serde(serialize_with = "item_id")]
        id: ItemId,
        /// Target section
        #[serde(serialize_with = "display_str")]
        section: Section,
        /// Stored (trimmed) content
        content: String,
        /// Stored priority
        #[serde(serialize_with = "display_str")]
        priority: Priority,
    },

    /// Section full; nothing changed
    Denied {
        /// Full section
        #[serde(serialize_with = "display_str")]
        section: Section,
        /// Active items in it
        active: usize,
        /// Its capacity
        limit: usize,
    },
}

impl AddOutcome {
    /// Whether the item was stored
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added { .. })
    }

    /// Assigned id, if the item was stored
    pub fn id(&self) -> Option<ItemId> {
        match self {
            AddOutcome::Added { id, .. } => Some(*id),
            AddOutcome::Denied { .. } => None,
        }
    }
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOutcome::Added {
                id,
                section,
                content,
                priority,
            } => write!(
                f,
                "Added '{}' to {} with {} priority (ID: {}).",
                content, section, priority, id
            ),
            AddOutcome::Denied {
                section,
                active,
                limit,
            } => {
                write!(
                    f,
                    "Denied: '{}' is at capacity ({}/{} active items). ",
                    section, active, limit
                )?;
                if *section == Section::BrainDump {
                    write!(f, "Complete an item with toggle_status, then run clean_board.")
                } else {
                    write!(
                        f,
                        "Complete an item with toggle_status, then run clean_board, or add it to another section such as '{}'.",
                        Section::BrainDump
                    )
                }
            }
        }
    }
}

/// Result of `toggle_status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// Flag set and persisted
    Updated {
        /// Item id
        #[serde(serialize_with = "item_id")]
        id: ItemId,
        /// Section holding the item
        #[serde(serialize_with = "display_str")]
        section: Section,
        /// New flag value
        completed: bool,
    },

    /// Reactivating would overfill the section; nothing written
    Denied {
        /// Item id, still completed
        #[serde(serialize_with = "item_id")]
        id: ItemId,
        /// Full section
        #[serde(serialize_with = "display_str")]
        section: Section,
        /// Active items in it
        active: usize,
        /// Its capacity
        limit: usize,
    },

    /// No item carries this id; nothing written
    NotFound {
        /// Requested id
        id: u64,
    },
}

impl ToggleOutcome {
    /// Whether the flag was set
    pub fn is_updated(&self) -> bool {
        matches!(self, ToggleOutcome::Updated { .. })
    }
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleOutcome::Updated {
                id,
                section,
                completed,
            } => {
                let state = if *completed { "completed" } else { "active" };
                write!(f, "Item {} in {} marked as {}.", id, section, state)
            }
            ToggleOutcome::Denied {
                id,
                section,
                active,
                limit,
            } => write!(
                f,
                "Denied: '{}' is at capacity ({}/{} active items), so item {} stays completed. \
                 Complete another item in it with toggle_status, then run clean_board.",
                section, active, limit, id
            ),
            ToggleOutcome::NotFound { id } => write!(f, "Item {} not found.", id),
        }
    }
}

/// Items moved by one section during a clean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionMoves {
    /// Source section
    #[serde(serialize_with = "display_str")]
    pub section: Section,
    /// Items relocated to Archive
    pub moved: usize,
}

/// Result of `clean_board`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Total items relocated
    pub moved: usize,
    /// Non-zero per-section counts, in display order
    pub per_section: Vec<SectionMoves>,
    /// False for a dry run
    pub applied: bool,
}

impl CleanReport {
    pub(crate) fn from_metrics(metrics: &JanitorMetrics, applied: bool) -> Self {
        Self {
            moved: metrics.total_moved(),
            per_section: metrics
                .per_section()
                .into_iter()
                .map(|(section, moved)| SectionMoves { section, moved })
                .collect(),
            applied,
        }
    }
}

impl fmt::Display for CleanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.moved == 0 {
            return f.write_str("Board is already clean. No completed items to archive.");
        }
        if self.applied {
            write!(f, "Board cleaned. Moved {} completed items to Archive", self.moved)?;
        } else {
            write!(f, "Dry run. Would move {} completed items to Archive", self.moved)?;
        }
        let parts: Vec<String> = self
            .per_section
            .iter()
            .map(|m| format!("{}: {}", m.section, m.moved))
            .collect();
        write!(f, " ({}).", parts.join(", "))
    }
}
