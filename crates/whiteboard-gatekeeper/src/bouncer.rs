//! Capacity admission ("the Bouncer")

use crate::{Capacity, CapacityConfig};
use std::fmt;
use whiteboard_domain::{Board, Section};

/// Outcome of a capacity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// There is room for one more active item
    Admitted {
        /// Active items before the add
        active: usize,
        /// Section capacity
        capacity: Capacity,
    },

    /// The section is full
    Denied {
        /// Full section
        section: Section,
        /// Active items currently in it
        active: usize,
        /// Configured limit
        limit: usize,
    },
}

impl Admission {
    /// Whether the add may proceed
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }
}

/// A section holding more active items than its current capacity
///
/// Happens when capacities are lowered after items were added. Existing items
/// are grandfathered; only new adds are refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityBreach {
    /// Over-full section
    pub section: Section,
    /// Active items in it
    pub active: usize,
    /// Configured limit
    pub limit: usize,
}

impl fmt::Display for CapacityBreach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' holds {} active items but its capacity is {}",
            self.section, self.active, self.limit
        )
    }
}

/// Enforces per-section active-item capacity
///
/// # Examples
///
/// ```
/// use whiteboard_domain::{Board, Priority, Section};
/// use whiteboard_gatekeeper::{Bouncer, CapacityConfig};
///
/// let bouncer = Bouncer::new(CapacityConfig::default());
/// let mut board = Board::new();
/// for i in 0..5 {
///     assert!(bouncer.admit(&board, Section::TodaysTasks).is_admitted());
///     board.add(Section::TodaysTasks, format!("task {i}"), Priority::Medium).unwrap();
/// }
/// assert!(!bouncer.admit(&board, Section::TodaysTasks).is_admitted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bouncer {
    config: CapacityConfig,
}

impl Bouncer {
    /// Create a bouncer with the given capacities
    pub fn new(config: CapacityConfig) -> Self {
        Self { config }
    }

    /// Capacities in force
    pub fn config(&self) -> &CapacityConfig {
        &self.config
    }

    /// Capacity of one section
    pub fn capacity(&self, section: Section) -> Capacity {
        self.config.capacity(section)
    }

    /// Decide whether one more active item fits in `section`
    ///
    /// Denied when `active >= limit`; completed items never count.
    pub fn admit(&self, board: &Board, section: Section) -> Admission {
        let active = board.active_count(section);
        let capacity = self.capacity(section);

        match capacity.limit() {
            Some(limit) if active >= limit => Admission::Denied {
                section,
                active,
                limit,
            },
            _ => Admission::Admitted { active, capacity },
        }
    }

    /// Sections whose active count exceeds the configured limit
    pub fn breaches(&self, board: &Board) -> Vec<CapacityBreach> {
        Section::ALL
            .iter()
            .filter_map(|section| {
                let active = board.active_count(*section);
                let limit = self.capacity(*section).limit()?;
                (active > limit).then_some(CapacityBreach {
                    section: *section,
                    active,
                    limit,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whiteboard_domain::Priority;

    fn fill(board: &mut Board, section: Section, n: usize) {
        for i in 0..n {
            board.add(section, format!("item {i}"), Priority::Medium).unwrap();
        }
    }

    #[test]
    fn test_denies_at_limit() {
        let bouncer = Bouncer::default();
        let mut board = Board::new();
        fill(&mut board, Section::LongTermGoals, 3);

        assert_eq!(
            bouncer.admit(&board, Section::LongTermGoals),
            Admission::Denied {
                section: Section::LongTermGoals,
                active: 3,
                limit: 3
            }
        );
    }

    #[test]
    fn test_completed_items_free_slots() {
        let bouncer = Bouncer::default();
        let mut board = Board::new();
        fill(&mut board, Section::LongTermGoals, 3);
        let first = board.items(Section::LongTermGoals)[0].id;
        board.set_completed(first, true);

        assert_eq!(
            bouncer.admit(&board, Section::LongTermGoals),
            Admission::Admitted {
                active: 2,
                capacity: Capacity::Limited(3)
            }
        );
    }

    #[test]
    fn test_unbounded_sections_always_admit() {
        let bouncer = Bouncer::default();
        let mut board = Board::new();
        fill(&mut board, Section::HealthyHabits, 200);
        fill(&mut board, Section::Archive, 200);

        assert!(bouncer.admit(&board, Section::HealthyHabits).is_admitted());
        assert!(bouncer.admit(&board, Section::Archive).is_admitted());
    }

    #[test]
    fn test_breaches_after_capacity_lowered() {
        let mut board = Board::new();
        fill(&mut board, Section::TodaysTasks, 5);

        let tighter = CapacityConfig::default()
            .with(Section::TodaysTasks, Capacity::Limited(2))
            .unwrap();
        let bouncer = Bouncer::new(tighter);

        let breaches = bouncer.breaches(&board);
        assert_eq!(
            breaches,
            vec![CapacityBreach {
                section: Section::TodaysTasks,
                active: 5,
                limit: 2
            }]
        );
        assert!(!bouncer.admit(&board, Section::TodaysTasks).is_admitted());
        assert!(Bouncer::default().breaches(&board).is_empty());
    }
}
