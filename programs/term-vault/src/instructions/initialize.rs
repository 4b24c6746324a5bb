use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::*, state::*};

/// Initialize a new term vault for a given asset token
///
/// This is the construction entry point: one call creates the vault
/// state, the custody authority PDA, and the custody token account,
/// parameterized with the full term schedule and admission config.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Vault admin - can update parameters and manage injector grants
    /// Security: Must be signer, stored in state
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Vault state PDA
    /// Security: Initialized with proper space and padding for upgrades
    #[account(
        init,
        payer = admin,
        space = VAULT_STATE_SIZE,
        seeds = [VAULT_SEED, asset_mint.key().as_ref()],
        bump
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Asset token mint (the underlying token users lock)
    pub asset_mint: Account<'info, Mint>,

    /// Vault custody authority PDA - signs outbound transfers
    /// CHECK: PDA used as token authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, asset_mint.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Vault's custody token account for principal and injected yield
    #[account(
        init,
        payer = admin,
        associated_token::mint = asset_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    term_durations: Vec<i64>,
    term_rates_bps: Vec<u16>,
    deposit_cap: u64,
    min_deposit: u64,
) -> Result<()> {
    // CHECKS: Validate the term schedule
    require!(!term_durations.is_empty(), VaultError::EmptyTermSchedule);
    require!(
        term_durations.len() == term_rates_bps.len(),
        VaultError::TermScheduleLengthMismatch
    );
    require!(term_durations.len() <= MAX_TERMS, VaultError::TooManyTerms);
    require!(
        term_durations.iter().all(|d| *d > 0),
        VaultError::ZeroTermDuration
    );

    let vault_state = &mut ctx.accounts.vault_state;

    // EFFECTS: Initialize vault state
    vault_state.admin = ctx.accounts.admin.key();
    vault_state.asset_mint = ctx.accounts.asset_mint.key();
    vault_state.term_durations = term_durations;
    vault_state.term_rates_bps = term_rates_bps;
    vault_state.deposit_cap = deposit_cap;
    vault_state.min_deposit = min_deposit;
    vault_state.total_principal = 0;
    vault_state.total_accrued_yield = 0;
    vault_state.total_withdrawn = 0;
    vault_state.next_position_id = 0;
    vault_state.paused = false;
    vault_state.bump = ctx.bumps.vault_state;
    vault_state.authority_bump = ctx.bumps.vault_authority;
    vault_state._reserved = [0; 128];

    emit!(VaultInitialized {
        vault: vault_state.key(),
        admin: vault_state.admin,
        asset_mint: vault_state.asset_mint,
        term_count: vault_state.term_durations.len() as u8,
        deposit_cap,
        min_deposit,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
