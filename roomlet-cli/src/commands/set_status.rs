//! Set-status command implementation.
//!
//! This module implements the `set-status` command, which walks a
//! reservation through its approval lifecycle.

use clap::{Args, ValueEnum};
use roomlet::operations::{update_reservation_status, UpdateStatusOptions};
use roomlet::{ReservationId, ReservationStatus};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Status argument for the set-status command.
///
/// Pending and expired are not listed: reservations start pending and
/// only the expiry sweep moves them to expired.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StatusArg {
    /// Approve the reservation (takes an occupancy slot)
    Approved,
    /// Reject the reservation
    Rejected,
    /// Move the reservation to the waitlist
    Waitlist,
}

impl From<StatusArg> for ReservationStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Approved => ReservationStatus::Approved,
            StatusArg::Rejected => ReservationStatus::Rejected,
            StatusArg::Waitlist => ReservationStatus::Waitlist,
        }
    }
}

/// Approve, reject, or waitlist a reservation.
#[derive(Args)]
pub struct SetStatusCommand {
    /// Reservation to update
    #[arg(long, value_name = "RESERVATION_ID")]
    pub reservation: i64,

    /// New status
    #[arg(long, value_enum, value_name = "STATUS")]
    pub status: StatusArg,
}

impl SetStatusCommand {
    /// Execute the set-status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options =
            UpdateStatusOptions::new(ReservationId::new(self.reservation), self.status.into());
        let update = update_reservation_status(&mut db, options).map_err(CliError::from)?;

        if !global.quiet {
            println!(
                "Reservation {} is now {}",
                update.reservation.id, update.reservation.status
            );
            if update.waitlisted > 0 {
                println!(
                    "House {} is full; moved {} pending reservation(s) to the waitlist",
                    update.reservation.house_id, update.waitlisted
                );
            }
        }

        Ok(())
    }
}
