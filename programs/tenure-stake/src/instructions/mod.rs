pub mod initialise_config;
pub use initialise_config::*;

pub mod update_config;
pub use update_config::*;

pub mod stake;
pub use stake::*;

pub mod unstake;
pub use unstake::*;

pub mod close_entry;
pub use close_entry::*;

pub mod emergency_withdraw;
pub use emergency_withdraw::*;

pub mod transfer_admin;
pub use transfer_admin::*;
