//! List command implementation.
//!
//! This module implements the `list` command, which displays
//! reservations for a student or a house in table or JSON format.

use std::io::Write;

use chrono::Utc;
use clap::Args;
use roomlet::operations::{list_reservations_for_house, list_reservations_for_student};
use roomlet::{HouseId, Reservation, StudentId};

use crate::commands::houses::OutputFormat;
use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, GlobalOptions};

/// List reservations for a student or house.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "ROOMLET_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// List reservations filed by this student
    #[arg(long, value_name = "ID", conflicts_with = "house")]
    pub student: Option<String>,

    /// List reservations on this house
    #[arg(long, value_name = "HOUSE_ID")]
    pub house: Option<i64>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let reservations = match (self.student, self.house) {
            (Some(student), None) => {
                let student = StudentId::new(student)
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
                list_reservations_for_student(&mut db, &student, Utc::now())
                    .map_err(CliError::from)?
            }
            (None, Some(house)) => {
                list_reservations_for_house(&mut db, HouseId::new(house), Utc::now())
                    .map_err(CliError::from)?
            }
            _ => {
                return Err(CliError::InvalidArguments(
                    "specify exactly one of --student or --house".into(),
                ))
            }
        };

        match self.format {
            OutputFormat::Table => format_as_table(&reservations)?,
            OutputFormat::Json => format_as_json(&reservations)?,
        }

        Ok(())
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(
        handle,
        "ID\tSTUDENT\tHOUSE\tSTATUS\tCREATED_AT\tEXPIRES_AT"
    )?;

    for res in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}",
            res.id,
            res.student_id,
            res.house_id,
            res.status,
            format_timestamp(res.created_at),
            format_timestamp(res.expires_at),
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = reservations
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id.value(),
                "student_id": r.student_id.as_str(),
                "house_id": r.house_id.value(),
                "status": r.status.as_str(),
                "created_at": format_timestamp(r.created_at),
                "expires_at": format_timestamp(r.expires_at),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    writeln!(handle)?;

    Ok(())
}
