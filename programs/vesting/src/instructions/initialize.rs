use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{VAULT_SEED, VESTING_CONFIG_SEED};
use crate::state::VestingConfig;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let cfg = &mut ctx.accounts.vesting_config;
    cfg.admin = ctx.accounts.admin.key();
    cfg.mint = ctx.accounts.mint.key();
    cfg.total_vested_amount = 0;
    cfg.total_claimed_amount = 0;
    cfg.bump = ctx.bumps.vesting_config;

    emit!(ConfigInitialized {
        admin: cfg.admin,
        mint: cfg.mint,
        vault: ctx.accounts.vault.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingConfig::SIZE,
        seeds = [VESTING_CONFIG_SEED],
        bump
    )]
    pub vesting_config: Account<'info, VestingConfig>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = vesting_config,
        seeds = [VAULT_SEED, vesting_config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
}
