//! Board view selection and markdown rendering

use crate::outcome::{display_str, item_id};
use serde::Serialize;
use std::fmt::{self, Write as _};
use whiteboard_domain::{Board, Item, ItemId, Priority, Section};
use whiteboard_gatekeeper::{Bouncer, Capacity};

const TITLE: &str = "# 📋 Whiteboard";
const EMPTY_MARKER: &str = "_(Empty)_";

/// What the default view shows of one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    /// Item id
    #[serde(serialize_with = "item_id")]
    pub id: ItemId,
    /// Content
    pub content: String,
    /// Completion flag
    pub completed: bool,
    /// Priority
    #[serde(serialize_with = "display_str")]
    pub priority: Priority,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            content: item.content.clone(),
            completed: item.completed,
            priority: item.priority,
        }
    }
}

/// What the default view shows of one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    /// Section
    #[serde(serialize_with = "display_str")]
    pub section: Section,
    /// Active (non-completed) items
    pub active: usize,
    /// Configured capacity, `"∞"` when unbounded
    #[serde(serialize_with = "display_str")]
    pub capacity: Capacity,
    /// Set when a lowered capacity left more active items than allowed
    pub over_capacity: bool,
    /// Items, oldest first
    pub items: Vec<ItemView>,
}

/// The default board view: every section except the archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Sections in display order
    pub sections: Vec<SectionView>,
}

impl BoardView {
    /// Select what the view shows from a board
    pub fn build(board: &Board, bouncer: &Bouncer) -> Self {
        let sections = board
            .sections()
            .filter(|(section, _)| !section.is_archive())
            .map(|(section, items)| {
                let active = board.active_count(section);
                let capacity = bouncer.capacity(section);
                SectionView {
                    section,
                    active,
                    capacity,
                    over_capacity: capacity.is_exceeded(active),
                    items: items.iter().map(ItemView::from).collect(),
                }
            })
            .collect();
        Self { sections }
    }

    /// Look up one section of the view
    pub fn section(&self, section: Section) -> Option<&SectionView> {
        self.sections.iter().find(|view| view.section == section)
    }

    /// Render as markdown
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.write_markdown(&mut out);
        out
    }

    fn write_markdown(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "{}", TITLE)?;
        for view in &self.sections {
            writeln!(out)?;
            write!(out, "### {} ({}/{})", view.section, view.active, view.capacity)?;
            if view.over_capacity {
                write!(out, " ⚠️ over capacity")?;
            }
            writeln!(out)?;

            if view.items.is_empty() {
                writeln!(out, "{}", EMPTY_MARKER)?;
                continue;
            }
            for item in &view.items {
                if item.completed {
                    writeln!(out, "- ✅ ~~{}~~ `[ID: {}]`", item.content, item.id)?;
                } else {
                    writeln!(
                        out,
                        "- {} **{}** `[ID: {}]`",
                        priority_icon(item.priority),
                        item.content,
                        item.id
                    )?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markdown())
    }
}

/// Marker shown before an active item
pub fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔥",
        Priority::Medium => "🔹",
        Priority::Low => "💤",
    }
}
