//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which files a pending
//! reservation for a student on a house listing.

use clap::Args;
use roomlet::operations::{create_reservation, CreateReservationOptions};
use roomlet::{HouseId, StudentId};

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, GlobalOptions};

/// Reserve a room in a house.
#[derive(Args)]
pub struct ReserveCommand {
    /// Student identifier
    #[arg(long, value_name = "ID")]
    pub student: String,

    /// House to reserve
    #[arg(long, value_name = "HOUSE_ID")]
    pub house: i64,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let student = StudentId::new(self.student)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let options = CreateReservationOptions::new(student, HouseId::new(self.house));

        let reservation = create_reservation(&mut db, &config, options).map_err(CliError::from)?;

        if global.quiet {
            println!("{}", reservation.id);
        } else {
            println!(
                "Reserved house {} for {} (reservation {}, expires {})",
                reservation.house_id,
                reservation.student_id,
                reservation.id,
                format_timestamp(reservation.expires_at),
            );
        }

        Ok(())
    }
}
