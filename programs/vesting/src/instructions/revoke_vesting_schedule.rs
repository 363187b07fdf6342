use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{VAULT_SEED, VESTING_CONFIG_SEED, VESTING_SCHEDULE_SEED};
use crate::error::VestingError;
use crate::state::{VestingConfig, VestingSchedule};

pub fn revoke_vesting_schedule(
    ctx: Context<RevokeVestingSchedule>,
    beneficiary: Pubkey,
) -> Result<()> {
    // Capture before taking mutable borrows.
    let config_ai = ctx.accounts.vesting_config.to_account_info();
    let config_bump = ctx.accounts.vesting_config.bump;

    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.vesting_config.admin,
        VestingError::UnauthorizedAdmin
    );

    let schedule = &mut ctx.accounts.vesting_schedule;
    require!(!schedule.revoked, VestingError::AlreadyRevoked);

    let now = Clock::get()?.unix_timestamp;
    // Pre-revocation accrual: `revoked` is still false here.
    let vested = schedule.vested_amount(now)?;
    let unvested = schedule
        .total_amount
        .checked_sub(vested)
        .ok_or(VestingError::MathOverflow)?;

    // Freeze the schedule: clamp the total to the vested amount so
    // `claimed_amount <= total_amount` keeps holding and accrual stops.
    schedule.revoked = true;
    schedule.total_amount = vested;
    ctx.accounts
        .vesting_config
        .record_revocation_reduction(unvested)?;

    if unvested > 0 {
        require!(
            ctx.accounts.vault.amount >= unvested,
            VestingError::InsufficientVaultBalance
        );
        let signer_seeds: &[&[&[u8]]] = &[&[VESTING_CONFIG_SEED, &[config_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.admin_destination.to_account_info(),
                    authority: config_ai,
                },
                signer_seeds,
            ),
            unvested,
        )?;
    }

    emit!(VestingRevoked {
        beneficiary,
        unvested,
        vested,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct RevokeVestingSchedule<'info> {
    #[account(mut, seeds = [VESTING_CONFIG_SEED], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    #[account(
        mut,
        seeds = [VESTING_SCHEDULE_SEED, beneficiary.as_ref()],
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
        constraint = admin_destination.mint == vesting_config.mint
            @ VestingError::InvalidTokenMint,
        constraint = admin_destination.owner == admin.key()
            @ VestingError::InvalidTokenAccount,
    )]
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingRevoked {
    pub beneficiary: Pubkey,
    pub unvested: u64,
    pub vested: u64,
}
