use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{VAULT_SEED, VESTING_CONFIG_SEED, VESTING_SCHEDULE_SEED};
use crate::error::VestingError;
use crate::state::{VestingConfig, VestingSchedule};

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    // Capture before taking mutable borrows.
    let config_ai = ctx.accounts.vesting_config.to_account_info();
    let config_bump = ctx.accounts.vesting_config.bump;

    let now = Clock::get()?.unix_timestamp;

    let schedule = &mut ctx.accounts.vesting_schedule;
    let vested = schedule.vested_amount(now)?;
    let claimable = vested
        .checked_sub(schedule.claimed_amount)
        .ok_or(VestingError::MathOverflow)?;
    require!(claimable > 0, VestingError::NothingToClaim);

    // Settle internal state before the transfer so a re-entrant claim sees
    // zero claimable.
    schedule.claimed_amount = vested;
    ctx.accounts.vesting_config.record_claim(claimable)?;

    require!(
        ctx.accounts.vault.amount >= claimable,
        VestingError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[VESTING_CONFIG_SEED, &[config_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: config_ai,
            },
            signer_seeds,
        ),
        claimable,
    )?;

    emit!(TokensClaimed {
        beneficiary: ctx.accounts.beneficiary.key(),
        amount: claimable,
        claimed_total: ctx.accounts.vesting_schedule.claimed_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [VESTING_CONFIG_SEED], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    // Derived from the caller's own key: a signer can only ever claim
    // against their own schedule.
    #[account(
        mut,
        seeds = [VESTING_SCHEDULE_SEED, beneficiary.key().as_ref()],
        bump = vesting_schedule.bump
    )]
    pub vesting_schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vesting_config.key().as_ref()],
        bump,
        constraint = vault.mint == vesting_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == vesting_config.mint
            @ VestingError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == beneficiary.key()
            @ VestingError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
}
