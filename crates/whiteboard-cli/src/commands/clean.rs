//! Clean command implementation.

use crate::cli::CleanArgs;
use crate::error::Result;
use crate::output::Formatter;
use whiteboard_domain::BoardStore;
use whiteboard_ops::Whiteboard;
use whiteboard_store::StoreError;

/// Execute the clean command.
pub fn execute_clean<S>(args: CleanArgs, board: &Whiteboard<S>, formatter: &Formatter) -> Result<String>
where
    S: BoardStore<Error = StoreError>,
{
    let report = if args.dry_run {
        board.preview_clean()?
    } else {
        board.clean_board()?
    };
    formatter.clean_report(&report)
}
