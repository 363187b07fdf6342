pub mod initialize;
pub mod deposit_tokens;
pub mod create_vesting_schedule;
pub mod claim;
pub mod revoke_vesting_schedule;
pub mod emergency_withdraw;
pub mod emit_vesting_quote;

pub use initialize::*;
pub use deposit_tokens::*;
pub use create_vesting_schedule::*;
pub use claim::*;
pub use revoke_vesting_schedule::*;
pub use emergency_withdraw::*;
pub use emit_vesting_quote::*;
