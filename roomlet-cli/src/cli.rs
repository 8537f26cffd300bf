//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    AddHouseCommand, ApprovedCommand, CancelCommand, ExpireCommand, HousesCommand, InitCommand,
    ListCommand, ReserveCommand, SetStatusCommand, ShowDataDirCommand,
};

/// Command-line tool for managing student-housing room reservations.
#[derive(Parser)]
#[command(name = "roomlet")]
#[command(version, about = "Manage student-housing room reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "ROOMLET_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "ROOMLET_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "ROOMLET_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize roomlet data directory and database
    Init(InitCommand),

    /// Add a house listing
    AddHouse(AddHouseCommand),

    /// List house listings
    Houses(HousesCommand),

    /// Reserve a room in a house
    Reserve(ReserveCommand),

    /// Approve, reject, or waitlist a reservation
    SetStatus(SetStatusCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// List reservations for a student or house
    List(ListCommand),

    /// List houses where a student holds an approved reservation
    Approved(ApprovedCommand),

    /// Expire pending reservations past their deadline
    Expire(ExpireCommand),

    /// Show resolved data directory path
    ShowDataDir(ShowDataDirCommand),
}
