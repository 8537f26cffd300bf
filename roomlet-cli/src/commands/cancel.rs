//! Cancel command implementation.
//!
//! This module implements the `cancel` command, which deletes a
//! reservation on behalf of the student who filed it.

use clap::Args;
use roomlet::operations::{delete_reservation, DeleteReservationOptions};
use roomlet::{ReservationId, StudentId};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation to cancel
    #[arg(long, value_name = "RESERVATION_ID")]
    pub reservation: i64,

    /// Student making the request (must own the reservation)
    #[arg(long, value_name = "ID")]
    pub student: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let requester = StudentId::new(self.student)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let options =
            DeleteReservationOptions::new(ReservationId::new(self.reservation), requester);

        let removed = delete_reservation(&mut db, options).map_err(CliError::from)?;

        if !global.quiet {
            println!(
                "Cancelled reservation {} on house {} (was {})",
                removed.id, removed.house_id, removed.status
            );
        }

        Ok(())
    }
}
