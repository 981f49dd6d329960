//! View command implementation.

use crate::error::Result;
use crate::output::Formatter;
use whiteboard_domain::BoardStore;
use whiteboard_ops::Whiteboard;
use whiteboard_store::StoreError;

/// Execute the view command.
pub fn execute_view<S>(board: &Whiteboard<S>, formatter: &Formatter) -> Result<String>
where
    S: BoardStore<Error = StoreError>,
{
    let view = board.view()?;
    formatter.board_view(&view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::board;
    use crate::output::OutputFormat;

    #[test]
    fn test_view_empty_board() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = execute_view(&board(), &formatter).unwrap();
        assert_eq!(output.matches("(empty)").count(), 5);
    }
}
