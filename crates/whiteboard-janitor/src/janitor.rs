//! Core Janitor implementation: relocate completed items to the archive

use crate::JanitorMetrics;
use whiteboard_domain::{Board, Section};

/// Moves completed items off the visible board
///
/// For every section except the archive, completed items are appended to the
/// end of the archive in their original order and the section keeps only its
/// active items, also in order. Nothing is completed, uncompleted or deleted,
/// and the archive is never shrunk.
///
/// # Examples
///
/// ```
/// use whiteboard_domain::{Board, Priority, Section};
/// use whiteboard_janitor::Janitor;
///
/// let mut board = Board::new();
/// let id = board.add(Section::TodaysTasks, "Write report", Priority::Medium).unwrap();
/// board.set_completed(id, true);
///
/// let metrics = Janitor::new().sweep(&mut board);
/// assert_eq!(metrics.total_moved(), 1);
/// assert_eq!(board.items(Section::Archive)[0].id, id);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Janitor;

impl Janitor {
    /// Create a new Janitor
    pub fn new() -> Self {
        Self
    }

    /// Relocate every completed item to the archive
    pub fn sweep(&self, board: &mut Board) -> JanitorMetrics {
        let mut metrics = JanitorMetrics::new();

        for section in Self::swept_sections() {
            let moved = board.relocate_completed(section, Section::Archive);
            metrics.record_move(section, moved);
        }

        if metrics.total_moved() > 0 {
            tracing::info!("Janitor archived {} completed items", metrics.total_moved());
        } else {
            tracing::debug!("Janitor found nothing to archive");
        }
        metrics
    }

    /// Count what [`Janitor::sweep`] would move, without touching the board
    pub fn preview(&self, board: &Board) -> JanitorMetrics {
        let mut metrics = JanitorMetrics::new();
        for section in Self::swept_sections() {
            let completed = board.items(section).iter().filter(|item| item.completed).count();
            metrics.record_move(section, completed);
        }
        metrics
    }

    fn swept_sections() -> impl Iterator<Item = Section> {
        Section::ALL.into_iter().filter(|section| !section.is_archive())
    }
}
