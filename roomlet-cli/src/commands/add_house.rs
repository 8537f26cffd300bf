//! Add-house command implementation.
//!
//! This module implements the `add-house` command for creating a house
//! listing with a room type and optional stated capacity.

use clap::{Args, ValueEnum};
use roomlet::{HouseBuilder, RoomType};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Room type argument for the add-house command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RoomTypeArg {
    /// Single room (one occupant)
    Single,
    /// Double room (two occupants)
    Double,
    /// Dorm room (four occupants)
    Dorm,
}

impl From<RoomTypeArg> for RoomType {
    fn from(arg: RoomTypeArg) -> Self {
        match arg {
            RoomTypeArg::Single => RoomType::Single,
            RoomTypeArg::Double => RoomType::Double,
            RoomTypeArg::Dorm => RoomType::Dorm,
        }
    }
}

/// Add a house listing.
#[derive(Args)]
pub struct AddHouseCommand {
    /// Landlord identifier
    #[arg(long, value_name = "ID")]
    pub landlord: String,

    /// Listing title
    #[arg(long, value_name = "TITLE")]
    pub title: String,

    /// Street address
    #[arg(long, value_name = "ADDRESS")]
    pub address: String,

    /// Room type (determines default capacity)
    #[arg(long, value_enum, value_name = "TYPE")]
    pub room_type: RoomTypeArg,

    /// Stated capacity (overrides the room type default)
    #[arg(long, value_name = "N")]
    pub max_occupants: Option<u32>,
}

impl AddHouseCommand {
    /// Execute the add-house command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let mut builder =
            HouseBuilder::new(self.landlord, self.title, self.address, self.room_type.into());
        if let Some(max) = self.max_occupants {
            builder = builder.max_occupants(max);
        }
        let house = builder
            .build()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let house_id = db.create_house(&house).map_err(CliError::from)?;

        if global.quiet {
            println!("{house_id}");
        } else {
            println!(
                "Added house {} ({}, capacity {})",
                house_id,
                house.room_type,
                house.effective_max_occupants()
            );
        }

        Ok(())
    }
}
