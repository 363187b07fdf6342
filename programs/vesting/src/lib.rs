use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("61EiVstLkAb3mPdR8qTn5JcY2wHu7xKfGeS9DnM4ZNWp");

#[program]
pub mod token_vesting {
    use super::*;

    /// Create the singleton config and the custody vault for a mint.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    /// Admin funds the vault. Commitments are only accepted against value the
    /// vault already holds.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    /// Admin commits `total_amount` to a beneficiary under a linear schedule
    /// with a cliff. One schedule per beneficiary, forever.
    pub fn create_vesting_schedule(
        ctx: Context<CreateVestingSchedule>,
        beneficiary: Pubkey,
        total_amount: u64,
        start_ts: i64,
        duration: i64,
        cliff: i64,
    ) -> Result<()> {
        instructions::create_vesting_schedule::create_vesting_schedule(
            ctx,
            beneficiary,
            total_amount,
            start_ts,
            duration,
            cliff,
        )
    }

    /// Beneficiary withdraws everything vested so far on their own schedule.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    /// Admin stops further accrual for a beneficiary and reclaims the
    /// unvested remainder. The already-vested residue stays claimable.
    pub fn revoke_vesting_schedule(
        ctx: Context<RevokeVestingSchedule>,
        beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::revoke_vesting_schedule::revoke_vesting_schedule(ctx, beneficiary)
    }

    /// Admin withdraws vault surplus beyond the outstanding commitment.
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
        instructions::emergency_withdraw::emergency_withdraw(ctx, amount)
    }

    /// Read query: emit a schedule snapshot with vested/claimable amounts.
    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, beneficiary: Pubkey) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx, beneficiary)
    }
}
