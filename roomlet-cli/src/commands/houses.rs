//! Houses command implementation.
//!
//! This module implements the `houses` command, which displays house
//! listings in table or JSON format.

use std::io::Write;

use clap::{Args, ValueEnum};
use roomlet::{Database, House};

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, GlobalOptions};

/// Output format for listing commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}

/// List house listings.
#[derive(Args)]
pub struct HousesCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "ROOMLET_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Show only listings for this landlord
    #[arg(long, value_name = "ID")]
    pub landlord: Option<String>,

    /// Show all listings, not just available ones
    #[arg(long)]
    pub all: bool,
}

impl HousesCommand {
    /// Execute the houses command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let mut houses = match (&self.landlord, self.all) {
            (Some(landlord), _) => {
                Database::list_houses_by_landlord(db.connection(), landlord)
                    .map_err(CliError::from)?
            }
            (None, true) => Database::list_all_houses(db.connection()).map_err(CliError::from)?,
            (None, false) => {
                Database::list_available_houses(db.connection()).map_err(CliError::from)?
            }
        };

        // Landlord listings hide filled houses unless --all is given
        if self.landlord.is_some() && !self.all {
            houses.retain(|h| h.is_available);
        }

        match self.format {
            OutputFormat::Table => format_as_table(&houses)?,
            OutputFormat::Json => format_as_json(&houses)?,
        }

        Ok(())
    }
}

/// Format houses as a human-readable table.
fn format_as_table(houses: &[House]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(
        handle,
        "ID\tTITLE\tADDRESS\tTYPE\tOCCUPANCY\tAVAILABLE\tCREATED_AT"
    )?;

    for house in houses {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}/{}\t{}\t{}",
            house.id,
            house.title,
            house.address,
            house.room_type,
            house.current_occupants,
            house.effective_max_occupants(),
            if house.is_available { "yes" } else { "no" },
            format_timestamp(house.created_at),
        )?;
    }

    Ok(())
}

/// Format houses as JSON.
fn format_as_json(houses: &[House]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = houses
        .iter()
        .map(|h| {
            serde_json::json!({
                "id": h.id.value(),
                "landlord_id": h.landlord_id,
                "title": h.title,
                "address": h.address,
                "room_type": h.room_type.as_str(),
                "max_occupants": h.effective_max_occupants(),
                "current_occupants": h.current_occupants,
                "is_available": h.is_available,
                "created_at": format_timestamp(h.created_at),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    writeln!(handle)?;

    Ok(())
}
