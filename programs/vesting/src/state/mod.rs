pub mod vesting_config;
pub mod vesting_schedule;

pub use vesting_config::*;
pub use vesting_schedule::*;
