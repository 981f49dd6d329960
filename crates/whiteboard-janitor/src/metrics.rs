//! Metrics collected during a Janitor sweep

use std::collections::HashMap;
use whiteboard_domain::Section;

/// Items moved to the archive, per source section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JanitorMetrics {
    /// Items moved out of each section
    pub moved: HashMap<Section, usize>,
}

impl JanitorMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record items moved out of a section
    pub fn record_move(&mut self, section: Section, count: usize) {
        if count > 0 {
            *self.moved.entry(section).or_insert(0) += count;
        }
    }

    /// Items moved out of one section
    pub fn moved_from(&self, section: Section) -> usize {
        self.moved.get(&section).copied().unwrap_or(0)
    }

    /// Total items moved across all sections
    pub fn total_moved(&self) -> usize {
        self.moved.values().sum()
    }

    /// Per-section counts in display order, skipping sections with no moves
    pub fn per_section(&self) -> Vec<(Section, usize)> {
        Section::ALL
            .iter()
            .map(|section| (*section, self.moved_from(*section)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Moved {} completed items to the Archive", self.total_moved())];
        for (section, count) in self.per_section() {
            lines.push(format!("  {}: {}", section, count));
        }
        lines.join("\n")
    }
}
