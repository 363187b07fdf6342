use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{VAULT_SEED, VESTING_CONFIG_SEED};
use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let cfg = &ctx.accounts.vesting_config;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        cfg.admin,
        VestingError::UnauthorizedAdmin
    );

    // Only the surplus beyond the outstanding commitment may leave; no
    // schedule and no aggregate is touched.
    let available = cfg.available_for_emergency_withdraw(ctx.accounts.vault.amount)?;
    require!(amount <= available, VestingError::ExceedsAvailable);

    let signer_seeds: &[&[&[u8]]] = &[&[VESTING_CONFIG_SEED, &[cfg.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.admin_destination.to_account_info(),
                authority: ctx.accounts.vesting_config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(EmergencyWithdrawn {
        admin: ctx.accounts.vesting_config.admin,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    #[account(seeds = [VESTING_CONFIG_SEED], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

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
pub struct EmergencyWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
}
