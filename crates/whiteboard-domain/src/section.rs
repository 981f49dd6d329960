//! Section module - the fixed set of board buckets

use std::fmt;

/// A named section of the board
///
/// The set is closed: sections are never created or removed at runtime.
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// Short list of things to do today
    TodaysTasks,

    /// A few big things
    LongTermGoals,

    /// Idea storage
    ProjectIdeas,

    /// Recurring habits
    HealthyHabits,

    /// The inbox
    BrainDump,

    /// Completed items moved off the board by the janitor
    Archive,
}

impl Section {
    /// Number of sections
    pub const COUNT: usize = 6;

    /// Every section in display order
    pub const ALL: [Section; Section::COUNT] = [
        Section::TodaysTasks,
        Section::LongTermGoals,
        Section::ProjectIdeas,
        Section::HealthyHabits,
        Section::BrainDump,
        Section::Archive,
    ];

    /// Display name, also used as the persisted key
    pub fn name(&self) -> &'static str {
        match self {
            Section::TodaysTasks => "Today's Tasks",
            Section::LongTermGoals => "Long-Term Goals",
            Section::ProjectIdeas => "Project Ideas",
            Section::HealthyHabits => "Healthy Habits",
            Section::BrainDump => "Brain Dump",
            Section::Archive => "Archive",
        }
    }

    /// Position in [`Section::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether this is the archive section
    pub fn is_archive(&self) -> bool {
        matches!(self, Section::Archive)
    }

    /// Parse a section from its display name
    ///
    /// Exact names match first, then a case-insensitive comparison.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .find(|section| section.name() == s)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .find(|section| section.name().eq_ignore_ascii_case(s))
            })
            .copied()
    }

    /// Parse an exact persisted key (no case folding)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().find(|section| section.name() == key).copied()
    }

    /// Display names of all sections
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Section::name).collect()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Section '{}' not found. Available: {}",
                s,
                Self::names().join(", ")
            )
        })
    }
}
