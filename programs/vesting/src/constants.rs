//! Program-wide constants.

/// Seed for the singleton vesting config PDA (vault authority).
pub const VESTING_CONFIG_SEED: &[u8] = b"vesting_config";

/// Seed prefix for the custody vault token account PDA.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed prefix for per-beneficiary vesting schedule PDAs.
pub const VESTING_SCHEDULE_SEED: &[u8] = b"vesting_schedule";
