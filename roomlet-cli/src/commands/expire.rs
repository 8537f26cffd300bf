//! Expire command implementation.
//!
//! This module implements the `expire` command, which flips pending
//! reservations past their deadline to expired.

use chrono::Utc;
use clap::Args;
use roomlet::operations::expire_reservations;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Expire pending reservations past their deadline.
#[derive(Args)]
pub struct ExpireCommand {}

impl ExpireCommand {
    /// Execute the expire command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let result = expire_reservations(&mut db, Utc::now()).map_err(CliError::from)?;

        if global.quiet {
            if result.expired_count > 0 {
                println!("{}", result.expired_count);
            }
        } else {
            println!("Expired {} pending reservation(s)", result.expired_count);
        }

        Ok(())
    }
}
