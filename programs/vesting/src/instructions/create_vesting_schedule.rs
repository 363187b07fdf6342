use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{VAULT_SEED, VESTING_CONFIG_SEED, VESTING_SCHEDULE_SEED};
use crate::error::VestingError;
use crate::state::{VestingConfig, VestingSchedule};

pub fn create_vesting_schedule(
    ctx: Context<CreateVestingSchedule>,
    beneficiary: Pubkey,
    total_amount: u64,
    start_ts: i64,
    duration: i64,
    cliff: i64,
) -> Result<()> {
    require!(beneficiary != Pubkey::default(), VestingError::InvalidBeneficiary);
    require!(total_amount > 0, VestingError::InvalidAmount);
    require!(start_ts > 0, VestingError::InvalidTimestamp);
    require!(duration > 0, VestingError::InvalidDuration);
    require!(cliff >= 0, VestingError::InvalidCliff);
    require!(cliff <= duration, VestingError::InvalidCliff);

    let cfg = &mut ctx.accounts.vesting_config;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        cfg.admin,
        VestingError::UnauthorizedAdmin
    );

    // Commitment precondition: the vault must already cover every committed
    // total including this one. No transfer happens here.
    cfg.record_commitment(total_amount, ctx.accounts.vault.amount)?;

    let schedule = &mut ctx.accounts.vesting_schedule;
    schedule.beneficiary = beneficiary;
    schedule.total_amount = total_amount;
    schedule.claimed_amount = 0;
    schedule.start_ts = start_ts;
    schedule.duration = duration;
    schedule.cliff = cliff;
    schedule.revoked = false;
    schedule.bump = ctx.bumps.vesting_schedule;

    emit!(ScheduleCreated {
        beneficiary,
        total_amount,
        start_ts,
        duration,
        cliff,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct CreateVestingSchedule<'info> {
    #[account(mut, seeds = [VESTING_CONFIG_SEED], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    // `init` aborts when the PDA already exists: one schedule per beneficiary,
    // forever, even after it is fully claimed or revoked.
    #[account(
        init,
        payer = admin,
        space = 8 + VestingSchedule::SIZE,
        seeds = [VESTING_SCHEDULE_SEED, beneficiary.as_ref()],
        bump
    )]
    pub vesting_schedule: Account<'info, VestingSchedule>,

    #[account(
        seeds = [VAULT_SEED, vesting_config.key().as_ref()],
        bump,
        constraint = vault.mint == vesting_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ScheduleCreated {
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub start_ts: i64,
    pub duration: i64,
    pub cliff: i64,
}
