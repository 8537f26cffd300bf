//! Command to show the resolved data directory path.

use clap::Args;

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};

/// Show the resolved data directory path.
#[derive(Args)]
pub struct ShowDataDirCommand {}

impl ShowDataDirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Resolve data directory using same logic as other commands
        println!("{}", resolve_data_dir(global).display());
        Ok(())
    }
}
