pub mod events;
pub use events::*;

pub mod global_config;
pub use global_config::*;

pub mod stake_pool;
pub use stake_pool::*;

pub mod staker_entry;
pub use staker_entry::*;
