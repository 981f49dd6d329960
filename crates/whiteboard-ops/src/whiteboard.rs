//! The board operations facade

use crate::outcome::{AddOutcome, CleanReport, ToggleOutcome};
use crate::render::BoardView;
use crate::{OpsError, WhiteboardConfig};
use tracing::{debug, info, warn};
use whiteboard_domain::{Board, BoardStore, ItemId, Priority, Section};
use whiteboard_gatekeeper::{Admission, Bouncer, CapacityConfig};
use whiteboard_janitor::Janitor;
use whiteboard_store::{JsonFileStore, StoreError};

/// Board operations over an injectable store
///
/// Every call is a full read-modify-write cycle. Mutations hold the store's
/// exclusive lock from load through save, so concurrent callers never lose
/// updates and the capacity check sees the state it mutates.
///
/// # Examples
///
/// ```
/// use whiteboard_gatekeeper::CapacityConfig;
/// use whiteboard_ops::{AddOutcome, Whiteboard};
/// use whiteboard_store::MemoryStore;
///
/// let board = Whiteboard::new(MemoryStore::new(), CapacityConfig::default());
/// let outcome = board.add_item("Today's Tasks", "Write report", None).unwrap();
/// assert!(matches!(outcome, AddOutcome::Added { .. }));
/// assert!(board.render_view().unwrap().contains("Write report"));
/// ```
#[derive(Debug)]
pub struct Whiteboard<S> {
    store: S,
    bouncer: Bouncer,
    janitor: Janitor,
}

impl Whiteboard<JsonFileStore> {
    /// Open the file-backed board described by a config
    pub fn open(config: &WhiteboardConfig) -> Self {
        let store = JsonFileStore::new(&config.data_file).with_lock_options(config.lock_options());
        Self::new(store, config.capacities.clone())
    }
}

impl<S> Whiteboard<S>
where
    S: BoardStore<Error = StoreError>,
{
    /// Create a facade over a store with the given capacities
    pub fn new(store: S, capacities: CapacityConfig) -> Self {
        Self {
            store,
            bouncer: Bouncer::new(capacities),
            janitor: Janitor::new(),
        }
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store, e.g. to reopen it under different capacities
    pub fn into_store(self) -> S {
        self.store
    }

    /// Capacity policy in force
    pub fn bouncer(&self) -> &Bouncer {
        &self.bouncer
    }

    /// Add an item from caller-supplied strings
    ///
    /// `priority` defaults to Medium when absent; otherwise it must name one
    /// of High, Medium or Low (case-insensitive).
    ///
    /// # Errors
    /// Validation errors are raised before the store is touched.
    pub fn add_item(
        &self,
        section: &str,
        content: &str,
        priority: Option<&str>,
    ) -> Result<AddOutcome, OpsError> {
        let section = Section::parse(section).ok_or_else(|| OpsError::unknown_section(section))?;
        let priority = match priority {
            None => Priority::default(),
            Some(value) => Priority::parse(value).ok_or_else(|| OpsError::InvalidPriority {
                value: value.to_string(),
            })?,
        };
        self.add(section, content, priority)
    }

    /// Add an item to a known section
    pub fn add(&self, section: Section, content: &str, priority: Priority) -> Result<AddOutcome, OpsError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(OpsError::EmptyContent);
        }

        self.mutate(|board| match self.bouncer.admit(board, section) {
            Admission::Denied {
                section,
                active,
                limit,
            } => {
                warn!("Denied add to '{}': {}/{} active items", section, active, limit);
                Ok((
                    false,
                    AddOutcome::Denied {
                        section,
                        active,
                        limit,
                    },
                ))
            }
            Admission::Admitted { .. } => {
                let id = board.add(section, content, priority)?;
                info!("Added item {} to '{}'", id, section);
                Ok((
                    true,
                    AddOutcome::Added {
                        id,
                        section,
                        content: content.to_string(),
                        priority,
                    },
                ))
            }
        })
    }

    /// Set the completion flag of an item anywhere on the board
    ///
    /// Archived items only change their flag; they stay archived. Reactivating
    /// a completed item counts against its section's capacity like an add, so
    /// it is denied while the section is full.
    pub fn toggle_status(&self, id: u64, completed: bool) -> Result<ToggleOutcome, OpsError> {
        let item_id = ItemId::new(id);
        self.mutate(|board| {
            let (section, was_completed) = match board.find(item_id) {
                Some((section, item)) => (section, item.completed),
                None => {
                    debug!("Toggle of unknown item {}", id);
                    return Ok((false, ToggleOutcome::NotFound { id }));
                }
            };

            if was_completed && !completed && !section.is_archive() {
                if let Admission::Denied { section, active, limit } = self.bouncer.admit(board, section) {
                    warn!(
                        "Denied reactivating item {} in '{}': {}/{} active items",
                        id, section, active, limit
                    );
                    return Ok((
                        false,
                        ToggleOutcome::Denied {
                            id: item_id,
                            section,
                            active,
                            limit,
                        },
                    ));
                }
            }

            board.set_completed(item_id, completed);
            info!("Marked item {} in '{}' completed={}", id, section, completed);
            Ok((
                true,
                ToggleOutcome::Updated {
                    id: item_id,
                    section,
                    completed,
                },
            ))
        })
    }

    /// Move every completed item outside the archive into it
    ///
    /// Saves once, even when nothing moved.
    pub fn clean_board(&self) -> Result<CleanReport, OpsError> {
        self.mutate(|board| {
            let metrics = self.janitor.sweep(board);
            Ok((true, CleanReport::from_metrics(&metrics, true)))
        })
    }

    /// What `clean_board` would move, without writing
    pub fn preview_clean(&self) -> Result<CleanReport, OpsError> {
        let board = self.load()?;
        let metrics = self.janitor.preview(&board);
        Ok(CleanReport::from_metrics(&metrics, false))
    }

    /// Structured default view
    pub fn view(&self) -> Result<BoardView, OpsError> {
        let board = self.load()?;
        Ok(BoardView::build(&board, &self.bouncer))
    }

    /// Markdown default view
    pub fn render_view(&self) -> Result<String, OpsError> {
        Ok(self.view()?.to_markdown())
    }

    /// Current board, read without the lock
    pub fn load(&self) -> Result<Board, OpsError> {
        Ok(self.store.load()?)
    }

    /// Lock, load, apply `f`, and save when it reports a change
    ///
    /// Nothing is saved when `f` fails.
    fn mutate<T, F>(&self, f: F) -> Result<T, OpsError>
    where
        F: FnOnce(&mut Board) -> Result<(bool, T), OpsError>,
    {
        let _guard = self.store.lock()?;
        let mut board = self.store.load()?;

        for breach in self.bouncer.breaches(&board) {
            warn!("Capacity breach: {}", breach);
        }

        let (changed, result) = f(&mut board)?;
        if changed {
            self.store.save(&board)?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whiteboard_store::MemoryStore;

    fn whiteboard() -> Whiteboard<MemoryStore> {
        Whiteboard::new(MemoryStore::new(), CapacityConfig::default())
    }

    #[test]
    fn test_validation_happens_before_store_access() {
        let corrupt = Whiteboard::new(MemoryStore::with_text("{broken"), CapacityConfig::default());

        assert!(matches!(
            corrupt.add_item("Inbox", "x", None),
            Err(OpsError::UnknownSection { .. })
        ));
        assert!(matches!(
            corrupt.add_item("Brain Dump", "x", Some("urgent")),
            Err(OpsError::InvalidPriority { .. })
        ));
        assert!(matches!(
            corrupt.add_item("Brain Dump", "   ", None),
            Err(OpsError::EmptyContent)
        ));
        assert!(matches!(
            corrupt.add_item("Brain Dump", "x", None),
            Err(OpsError::Store(StoreError::CorruptState { .. }))
        ));
    }

    #[test]
    fn test_priority_parsing_is_case_insensitive() {
        let wb = whiteboard();
        let outcome = wb.add_item("brain dump", "  Call mum  ", Some("high")).unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Added {
                id: ItemId::new(1),
                section: Section::BrainDump,
                content: "Call mum".to_string(),
                priority: Priority::High,
            }
        );
    }

    #[test]
    fn test_denial_does_not_write() {
        let wb = Whiteboard::new(
            MemoryStore::new(),
            CapacityConfig::default()
                .with(Section::LongTermGoals, whiteboard_gatekeeper::Capacity::Limited(1))
                .unwrap(),
        );
        wb.add(Section::LongTermGoals, "Learn Rust", Priority::High).unwrap();
        let saves = wb.store().save_count();

        let outcome = wb.add(Section::LongTermGoals, "Run a marathon", Priority::Medium).unwrap();
        assert!(!outcome.is_added());
        assert_eq!(wb.store().save_count(), saves);
    }

    #[test]
    fn test_not_found_does_not_write() {
        let wb = whiteboard();
        assert_eq!(wb.toggle_status(42, true).unwrap(), ToggleOutcome::NotFound { id: 42 });
        assert_eq!(wb.store().save_count(), 0);
    }

    #[test]
    fn test_reactivation_respects_capacity() {
        let wb = whiteboard();
        for n in 0..5 {
            wb.add(Section::TodaysTasks, &format!("task {}", n), Priority::Medium).unwrap();
        }
        wb.toggle_status(1, true).unwrap();
        assert!(wb.add(Section::TodaysTasks, "task 5", Priority::Medium).unwrap().is_added());
        let saves = wb.store().save_count();

        let outcome = wb.toggle_status(1, false).unwrap();
        assert_eq!(
            outcome,
            ToggleOutcome::Denied {
                id: ItemId::new(1),
                section: Section::TodaysTasks,
                active: 5,
                limit: 5,
            }
        );
        assert_eq!(wb.store().save_count(), saves);

        let board = wb.load().unwrap();
        assert_eq!(board.active_count(Section::TodaysTasks), 5);
        assert!(board.find(ItemId::new(1)).unwrap().1.completed);

        // Freeing a slot lets the item back in
        wb.toggle_status(2, true).unwrap();
        assert!(wb.toggle_status(1, false).unwrap().is_updated());
        assert_eq!(wb.load().unwrap().active_count(Section::TodaysTasks), 5);
    }

    #[test]
    fn test_reactivation_exemptions() {
        let wb = Whiteboard::new(
            MemoryStore::new(),
            CapacityConfig::default()
                .with(Section::LongTermGoals, whiteboard_gatekeeper::Capacity::Limited(1))
                .unwrap(),
        );
        wb.add(Section::LongTermGoals, "a", Priority::Medium).unwrap();
        wb.toggle_status(1, true).unwrap();
        wb.clean_board().unwrap();
        wb.add(Section::LongTermGoals, "b", Priority::Medium).unwrap();

        // Archived items are never counted against a section
        assert!(wb.toggle_status(1, false).unwrap().is_updated());
        // Setting an active item active again is not a reactivation
        assert!(wb.toggle_status(2, false).unwrap().is_updated());
    }

    #[test]
    fn test_exhausted_ids_fail_without_writing() {
        let text = format!("{{\"sections\": {{}}, \"next_id\": {}}}", u64::MAX);
        let wb = Whiteboard::new(MemoryStore::with_text(text.clone()), CapacityConfig::default());

        let err = wb.add(Section::BrainDump, "one more", Priority::Low).unwrap_err();
        assert!(matches!(err, OpsError::Board(whiteboard_domain::BoardError::IdsExhausted)));
        assert!(!err.is_validation());
        assert_eq!(wb.store().save_count(), 0);
        assert_eq!(wb.store().text(), Some(text));
    }

    #[test]
    fn test_preview_does_not_write() {
        let wb = whiteboard();
        let id = wb.add(Section::TodaysTasks, "a", Priority::Medium).unwrap().id().unwrap();
        wb.toggle_status(id.value(), true).unwrap();
        let saves = wb.store().save_count();

        let preview = wb.preview_clean().unwrap();
        assert_eq!(preview.moved, 1);
        assert!(!preview.applied);
        assert_eq!(wb.store().save_count(), saves);
        assert_eq!(wb.load().unwrap().items(Section::TodaysTasks).len(), 1);
    }
}
