//! Sections command implementation.

use crate::error::Result;
use crate::output::{Formatter, SectionSummary};
use whiteboard_domain::{BoardStore, Section};
use whiteboard_ops::Whiteboard;
use whiteboard_store::StoreError;

/// Execute the sections command.
pub fn execute_sections<S>(board: &Whiteboard<S>, formatter: &Formatter) -> Result<String>
where
    S: BoardStore<Error = StoreError>,
{
    let state = board.load()?;
    let rows: Vec<SectionSummary> = Section::ALL
        .iter()
        .map(|section| SectionSummary {
            section: section.name().to_string(),
            active: state.active_count(*section),
            capacity: board.bouncer().capacity(*section).to_string(),
            total: state.items(*section).len(),
        })
        .collect();
    formatter.sections(&rows)
}
