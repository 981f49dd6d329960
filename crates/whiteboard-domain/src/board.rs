//! Board module - the aggregate holding every section and the id counter

use crate::{Item, ItemId, Priority, Section};
use std::collections::HashSet;
use std::fmt;

/// Invariant violations detected when assembling a board from parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The same section was supplied twice
    DuplicateSection(Section),

    /// Two items share an id
    DuplicateId(ItemId),

    /// An item id is not below `next_id`
    IdNotBelowCounter {
        /// Offending id
        id: ItemId,
        /// Counter value found alongside it
        next_id: u64,
    },

    /// `next_id` must be at least 1
    ZeroCounter,

    /// Every id up to `u64::MAX` has been handed out
    IdsExhausted,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::DuplicateSection(section) => {
                write!(f, "section '{}' appears more than once", section)
            }
            BoardError::DuplicateId(id) => write!(f, "item id {} appears more than once", id),
            BoardError::IdNotBelowCounter { id, next_id } => write!(
                f,
                "item id {} is not below next_id {}",
                id, next_id
            ),
            BoardError::ZeroCounter => f.write_str("next_id must be at least 1"),
            BoardError::IdsExhausted => f.write_str("no item ids left to allocate"),
        }
    }
}

impl std::error::Error for BoardError {}

/// The whole board
///
/// Invariants:
/// - every section in [`Section::ALL`] has exactly one item list
/// - every item id is unique and strictly below `next_id`
/// - ids are allocated only through [`Board::add`], so they are never reused
///
/// Capacity is a policy applied by the gatekeeper, not a property of the
/// board itself, so a board loaded under a tighter configuration stays valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    sections: [Vec<Item>; Section::COUNT],
    next_id: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with `next_id = 1`
    pub fn new() -> Self {
        Self {
            sections: Default::default(),
            next_id: 1,
        }
    }

    /// Assemble a board from persisted parts, checking invariants
    ///
    /// Sections not supplied are empty.
    ///
    /// # Errors
    /// Returns the first invariant violation found.
    pub fn from_parts<I>(sections: I, next_id: u64) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Section, Vec<Item>)>,
    {
        if next_id == 0 {
            return Err(BoardError::ZeroCounter);
        }

        let mut board = Self {
            sections: Default::default(),
            next_id,
        };
        let mut seen_sections = HashSet::new();
        let mut seen_ids = HashSet::new();

        for (section, items) in sections {
            if !seen_sections.insert(section) {
                return Err(BoardError::DuplicateSection(section));
            }
            for item in &items {
                if item.id.value() >= next_id {
                    return Err(BoardError::IdNotBelowCounter { id: item.id, next_id });
                }
                if !seen_ids.insert(item.id) {
                    return Err(BoardError::DuplicateId(item.id));
                }
            }
            board.sections[section.index()] = items;
        }

        Ok(board)
    }

    /// The id the next added item will receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Items of a section, oldest first
    pub fn items(&self, section: Section) -> &[Item] {
        &self.sections[section.index()]
    }

    /// Every section with its items, in display order
    pub fn sections(&self) -> impl Iterator<Item = (Section, &[Item])> + '_ {
        Section::ALL
            .iter()
            .map(move |section| (*section, self.items(*section)))
    }

    /// Number of active (non-completed) items in a section
    pub fn active_count(&self, section: Section) -> usize {
        self.items(section).iter().filter(|item| item.is_active()).count()
    }

    /// Total number of items across all sections
    pub fn len(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    /// Whether the board holds no items at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a new active item, allocating the next id
    ///
    /// No capacity check happens here.
    ///
    /// # Errors
    /// [`BoardError::IdsExhausted`] once `next_id` has reached `u64::MAX`; the
    /// board is left unchanged.
    pub fn add(
        &mut self,
        section: Section,
        content: impl Into<String>,
        priority: Priority,
    ) -> Result<ItemId, BoardError> {
        let following = self.next_id.checked_add(1).ok_or(BoardError::IdsExhausted)?;
        let id = ItemId::new(self.next_id);
        self.sections[section.index()].push(Item::new(id, content, priority));
        self.next_id = following;
        Ok(id)
    }

    /// Find an item anywhere on the board, including the archive
    pub fn find(&self, id: ItemId) -> Option<(Section, &Item)> {
        self.sections().find_map(|(section, items)| {
            items.iter().find(|item| item.id == id).map(|item| (section, item))
        })
    }

    /// Set the completion flag of an item
    ///
    /// Returns the section holding the item, or `None` if no item has that id.
    /// Section membership never changes.
    pub fn set_completed(&mut self, id: ItemId, completed: bool) -> Option<Section> {
        for section in Section::ALL {
            if let Some(item) = self.sections[section.index()]
                .iter_mut()
                .find(|item| item.id == id)
            {
                item.completed = completed;
                return Some(section);
            }
        }
        None
    }

    /// Move every completed item of `from` to the end of `to`
    ///
    /// Relative order is preserved on both sides. Returns the number moved.
    pub fn relocate_completed(&mut self, from: Section, to: Section) -> usize {
        if from == to {
            return 0;
        }

        let (completed, active): (Vec<Item>, Vec<Item>) =
            std::mem::take(&mut self.sections[from.index()])
                .into_iter()
                .partition(|item| item.completed);

        let moved = completed.len();
        self.sections[from.index()] = active;
        self.sections[to.index()].extend(completed);
        moved
    }
}
