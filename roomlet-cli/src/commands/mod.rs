//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and database
//! - `add_house`: Add a house listing
//! - `houses`: List house listings
//! - `reserve`: Reserve a room in a house
//! - `set_status`: Approve, reject, or waitlist a reservation
//! - `cancel`: Cancel a reservation
//! - `list`: List reservations for a student or house
//! - `approved`: List houses where a student holds an approved reservation
//! - `expire`: Expire pending reservations past their deadline
//! - `show_data_dir`: Show resolved data directory path

pub mod add_house;
pub mod approved;
pub mod cancel;
pub mod expire;
pub mod houses;
pub mod init;
pub mod list;
pub mod reserve;
pub mod set_status;
pub mod show_data_dir;

pub use add_house::AddHouseCommand;
pub use approved::ApprovedCommand;
pub use cancel::CancelCommand;
pub use expire::ExpireCommand;
pub use houses::HousesCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use reserve::ReserveCommand;
pub use set_status::SetStatusCommand;
pub use show_data_dir::ShowDataDirCommand;
