//! Add command implementation.

use crate::cli::AddArgs;
use crate::error::Result;
use crate::output::Formatter;
use whiteboard_domain::{BoardStore, Priority};
use whiteboard_ops::Whiteboard;
use whiteboard_store::StoreError;

/// Execute the add command.
pub fn execute_add<S>(args: AddArgs, board: &Whiteboard<S>, formatter: &Formatter) -> Result<String>
where
    S: BoardStore<Error = StoreError>,
{
    let priority = Priority::from(args.priority);
    let outcome = board.add_item(&args.section, &args.content, Some(priority.as_str()))?;
    formatter.add_outcome(&outcome)
}
