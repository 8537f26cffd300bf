//! Approved command implementation.
//!
//! This module implements the `approved` command, which shows the houses
//! where a student currently holds an approved reservation.

use std::io::Write;

use chrono::Utc;
use clap::Args;
use roomlet::operations::approved_houses_for_student;
use roomlet::StudentId;

use crate::commands::houses::OutputFormat;
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// List houses where a student holds an approved reservation.
#[derive(Args)]
pub struct ApprovedCommand {
    /// Student identifier
    #[arg(long, value_name = "ID")]
    pub student: String,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "ROOMLET_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

impl ApprovedCommand {
    /// Execute the approved command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let student = StudentId::new(self.student)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let houses =
            approved_houses_for_student(&mut db, &student, Utc::now()).map_err(CliError::from)?;

        match self.format {
            OutputFormat::Table => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "ID\tTITLE\tADDRESS\tTYPE")?;
                for house in &houses {
                    writeln!(
                        handle,
                        "{}\t{}\t{}\t{}",
                        house.id, house.title, house.address, house.room_type
                    )?;
                }
            }
            OutputFormat::Json => {
                let json_data: Vec<serde_json::Value> = houses
                    .iter()
                    .map(|h| {
                        serde_json::json!({
                            "id": h.id.value(),
                            "title": h.title,
                            "address": h.address,
                            "room_type": h.room_type.as_str(),
                        })
                    })
                    .collect();
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                serde_json::to_writer_pretty(&mut handle, &json_data)
                    .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}
