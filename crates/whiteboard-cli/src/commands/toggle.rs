//! Toggle command implementation.

use crate::cli::ToggleArgs;
use crate::error::Result;
use crate::output::Formatter;
use whiteboard_domain::BoardStore;
use whiteboard_ops::Whiteboard;
use whiteboard_store::StoreError;

/// Execute the toggle command.
pub fn execute_toggle<S>(args: ToggleArgs, board: &Whiteboard<S>, formatter: &Formatter) -> Result<String>
where
    S: BoardStore<Error = StoreError>,
{
    let outcome = board.toggle_status(args.id, !args.undo)?;
    formatter.toggle_outcome(&outcome)
}
