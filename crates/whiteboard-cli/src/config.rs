//! Configuration resolution for the CLI.

use crate::cli::Cli;
use crate::error::Result;
use whiteboard_ops::WhiteboardConfig;

/// Resolve the board configuration from flags, environment and files
///
/// `--data` wins over every other source of the data file path.
pub fn resolve(cli: &Cli) -> Result<WhiteboardConfig> {
    let mut config = WhiteboardConfig::resolve(cli.config.as_deref())?;
    if let Some(data) = &cli.data {
        config.data_file = data.clone();
    }
    Ok(config)
}
