use anchor_lang::prelude::*;

use crate::constants::VESTING_SCHEDULE_SEED;
use crate::state::VestingSchedule;

/// Read-only query: emits the schedule snapshot and the claimable amount at
/// the current time. Mutates nothing.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, beneficiary: Pubkey) -> Result<()> {
    let schedule = &ctx.accounts.vesting_schedule;
    let now = Clock::get()?.unix_timestamp;

    let vested = schedule.vested_amount(now)?;
    let claimable = schedule.claimable_amount(now)?;

    emit!(VestingQuote {
        beneficiary,
        total_amount: schedule.total_amount,
        claimed_amount: schedule.claimed_amount,
        vested,
        claimable,
        revoked: schedule.revoked,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct EmitVestingQuote<'info> {
    #[account(
        seeds = [VESTING_SCHEDULE_SEED, beneficiary.as_ref()],
        bump = vesting_schedule.bump
    )]
    pub vesting_schedule: Account<'info, VestingSchedule>,
}

#[event]
pub struct VestingQuote {
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub claimed_amount: u64,
    pub vested: u64,
    pub claimable: u64,
    pub revoked: bool,
}
