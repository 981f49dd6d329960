//! Capacity configuration
//!
//! Capacities are deployment configuration, never persisted with the board.
//! In TOML they are keyed by section display name:
//!
//! ```toml
//! [capacities]
//! "Today's Tasks" = 5
//! "Healthy Habits" = "unbounded"
//! ```

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use whiteboard_domain::Section;

const UNBOUNDED: &str = "unbounded";

/// Active-item limit of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CapacityRepr", into = "CapacityRepr")]
pub enum Capacity {
    /// At most this many active items
    Limited(usize),
    /// No limit
    Unbounded,
}

impl Capacity {
    /// The limit, if any
    pub fn limit(&self) -> Option<usize> {
        match self {
            Capacity::Limited(limit) => Some(*limit),
            Capacity::Unbounded => None,
        }
    }

    /// Whether `active` items already fill this capacity
    pub fn is_full(&self, active: usize) -> bool {
        self.limit().is_some_and(|limit| active >= limit)
    }

    /// Whether `active` items exceed this capacity
    pub fn is_exceeded(&self, active: usize) -> bool {
        self.limit().is_some_and(|limit| active > limit)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Limited(limit) => write!(f, "{}", limit),
            Capacity::Unbounded => f.write_str("∞"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum CapacityRepr {
    Limit(u64),
    Keyword(String),
}

impl TryFrom<CapacityRepr> for Capacity {
    type Error = GatekeeperError;

    fn try_from(repr: CapacityRepr) -> Result<Self, Self::Error> {
        match repr {
            CapacityRepr::Limit(0) => Err(GatekeeperError::InvalidCapacity("0".to_string())),
            CapacityRepr::Limit(limit) => usize::try_from(limit)
                .map(Capacity::Limited)
                .map_err(|_| GatekeeperError::InvalidCapacity(limit.to_string())),
            CapacityRepr::Keyword(word) if word.eq_ignore_ascii_case(UNBOUNDED) => {
                Ok(Capacity::Unbounded)
            }
            CapacityRepr::Keyword(word) => Err(GatekeeperError::InvalidCapacity(word)),
        }
    }
}

impl From<Capacity> for CapacityRepr {
    fn from(capacity: Capacity) -> Self {
        match capacity {
            Capacity::Limited(limit) => CapacityRepr::Limit(limit as u64),
            Capacity::Unbounded => CapacityRepr::Keyword(UNBOUNDED.to_string()),
        }
    }
}

/// Per-section active-item limits
///
/// Defaults follow the "3-5 rule" for today and keep storage sections roomy:
///
/// | Section | Capacity |
/// |---------|----------|
/// | Today's Tasks | 5 |
/// | Long-Term Goals | 3 |
/// | Project Ideas | 20 |
/// | Healthy Habits | unbounded |
/// | Brain Dump | 50 |
/// | Archive | unbounded (fixed) |
///
/// # Examples
///
/// ```
/// use whiteboard_domain::Section;
/// use whiteboard_gatekeeper::{Capacity, CapacityConfig};
///
/// let mut config = CapacityConfig::default();
/// assert_eq!(config.capacity(Section::TodaysTasks), Capacity::Limited(5));
///
/// config.set(Section::TodaysTasks, Capacity::Limited(3)).unwrap();
/// assert!(config.set(Section::Archive, Capacity::Limited(10)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Capacity>",
    into = "BTreeMap<String, Capacity>"
)]
pub struct CapacityConfig {
    capacities: [Capacity; Section::COUNT],
}

impl Default for CapacityConfig {
    fn default() -> Self {
        let mut capacities = [Capacity::Unbounded; Section::COUNT];
        capacities[Section::TodaysTasks.index()] = Capacity::Limited(5);
        capacities[Section::LongTermGoals.index()] = Capacity::Limited(3);
        capacities[Section::ProjectIdeas.index()] = Capacity::Limited(20);
        capacities[Section::BrainDump.index()] = Capacity::Limited(50);
        Self { capacities }
    }
}

impl CapacityConfig {
    /// Capacity of a section
    pub fn capacity(&self, section: Section) -> Capacity {
        self.capacities[section.index()]
    }

    /// Change the capacity of a section
    ///
    /// # Errors
    /// The archive cannot be limited, and limits must be positive.
    pub fn set(&mut self, section: Section, capacity: Capacity) -> Result<(), GatekeeperError> {
        if section.is_archive() {
            return match capacity {
                Capacity::Unbounded => Ok(()),
                Capacity::Limited(_) => Err(GatekeeperError::ArchiveCapacity),
            };
        }
        if capacity == Capacity::Limited(0) {
            return Err(GatekeeperError::ZeroCapacity(section));
        }
        self.capacities[section.index()] = capacity;
        Ok(())
    }

    /// Builder form of [`CapacityConfig::set`]
    pub fn with(mut self, section: Section, capacity: Capacity) -> Result<Self, GatekeeperError> {
        self.set(section, capacity)?;
        Ok(self)
    }
}

impl TryFrom<BTreeMap<String, Capacity>> for CapacityConfig {
    type Error = GatekeeperError;

    /// Unlisted sections keep their defaults.
    fn try_from(overrides: BTreeMap<String, Capacity>) -> Result<Self, Self::Error> {
        let mut config = Self::default();
        for (name, capacity) in overrides {
            let section = Section::from_key(&name)
                .ok_or(GatekeeperError::UnknownSection { name })?;
            config.set(section, capacity)?;
        }
        Ok(config)
    }
}

impl From<CapacityConfig> for BTreeMap<String, Capacity> {
    fn from(config: CapacityConfig) -> Self {
        Section::ALL
            .iter()
            .filter(|section| !section.is_archive())
            .map(|section| (section.name().to_string(), config.capacity(*section)))
            .collect()
    }
}
