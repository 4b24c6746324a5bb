use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Admin parameter updates: per-term APY, deposit cap, minimum deposit,
/// and the pause flag. Rate edits never touch already-created
/// positions, which locked their APY at deposit time. Cap and minimum
/// are checked at admission time only.
#[derive(Accounts)]
pub struct UpdateParams<'info> {
    /// Vault admin
    /// Security: Must be signer and match vault_state.admin
    pub admin: Signer<'info>,

    /// Vault state PDA
    /// Security: has_one constraint validates admin from state
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
        has_one = admin @ VaultError::Unauthorized,
    )]
    pub vault_state: Account<'info, VaultState>,
}

pub fn update_term_apy(ctx: Context<UpdateParams>, term_index: u8, new_apy_bps: u16) -> Result<()> {
    let vault_state = &mut ctx.accounts.vault_state;

    // Validates the index and reports the max valid one on failure
    let (_, old_apy_bps) = vault_state.term(term_index)?;
    vault_state.term_rates_bps[term_index as usize] = new_apy_bps;

    emit!(TermApyUpdated {
        vault: vault_state.key(),
        term_index,
        old_apy_bps,
        new_apy_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn update_deposit_cap(ctx: Context<UpdateParams>, new_cap: u64) -> Result<()> {
    let vault_state = &mut ctx.accounts.vault_state;

    let old_cap = vault_state.deposit_cap;
    vault_state.deposit_cap = new_cap;

    emit!(DepositCapUpdated {
        vault: vault_state.key(),
        old_cap,
        new_cap,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn update_min_deposit(ctx: Context<UpdateParams>, new_min: u64) -> Result<()> {
    let vault_state = &mut ctx.accounts.vault_state;

    let old_min = vault_state.min_deposit;
    vault_state.min_deposit = new_min;

    emit!(MinDepositUpdated {
        vault: vault_state.key(),
        old_min,
        new_min,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn set_paused(ctx: Context<UpdateParams>, paused: bool) -> Result<()> {
    let vault_state = &mut ctx.accounts.vault_state;

    vault_state.paused = paused;

    emit!(VaultPauseSet {
        vault: vault_state.key(),
        paused,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
