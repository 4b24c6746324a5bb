use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Redeem a matured position for principal plus accrued yield
///
/// Gate order is load-bearing for callers diagnosing failures:
/// existence (account load), then ownership, then maturity, then
/// redeemed. Withdrawal stays available while the vault is paused;
/// fund recovery is never blockable by an admin pause.
///
/// Security checklist:
/// 1. SIGNER VALIDATION: Owner must be signer
/// 2. ACCOUNT OWNERSHIP: Position PDA tied to this vault by seeds
/// 6. MATH SAFETY: Checked settlement, custody balance asserted
/// 8. BUSINESS LOGIC: Checks-effects-interactions pattern
/// 10. EVENTS: Emits Withdrawn event
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Current position owner, receives the payout and the rent of the
    /// retired position account
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Vault state PDA
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Position being redeemed; retired (marked and closed) on success
    /// Security: Seeds bind the record to this vault and its id, so a
    /// retire call from any other vault cannot resolve it
    #[account(
        mut,
        seeds = [
            POSITION_SEED,
            vault_state.key().as_ref(),
            &position.position_id.to_le_bytes(),
        ],
        bump = position.bump,
        constraint = position.vault == vault_state.key() @ VaultError::PositionNotFound,
        close = owner,
    )]
    pub position: Account<'info, Position>,

    /// Vault custody authority PDA
    /// CHECK: PDA used as authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Owner's asset token account (payout destination)
    #[account(
        mut,
        constraint = owner_asset_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = owner_asset_account.owner == owner.key() @ VaultError::InvalidOwner,
    )]
    pub owner_asset_account: Account<'info, TokenAccount>,

    /// Vault's custody token account (payout source)
    #[account(
        mut,
        constraint = vault_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = vault_token_account.owner == vault_authority.key() @ VaultError::InvalidOwner,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let position = &mut ctx.accounts.position;

    // CHECKS: ownership, maturity (inclusive), redeemed - in that order
    position.verify_redeemable(&ctx.accounts.owner.key(), now)?;

    let yield_amount = compute_yield(position.principal, position.apy_bps, position.term_seconds)?;

    // EFFECTS: Settle aggregates and retire the position BEFORE the
    // payout transfer
    let vault_state = &mut ctx.accounts.vault_state;
    let payout = vault_state.settle_redemption(position.principal, yield_amount)?;

    // Custody falling short of a settled payout means a prior aggregate
    // invariant was violated; surface it as an integrity fault, not a
    // routine rejection
    if ctx.accounts.vault_token_account.amount < payout {
        msg!(
            "custody balance {} below payout {}",
            ctx.accounts.vault_token_account.amount,
            payout
        );
        return Err(error!(VaultError::InsufficientCustodyBalance));
    }

    // One-way flag; the account itself is closed when the instruction
    // completes, removing the record from active enumeration
    position.redeemed = true;

    // INTERACTIONS: Release the payout to the owner
    let asset_mint_key = vault_state.asset_mint;
    let authority_bump = vault_state.authority_bump;
    let authority_seeds: &[&[u8]] = &[
        VAULT_AUTHORITY_SEED,
        asset_mint_key.as_ref(),
        &[authority_bump],
    ];
    let signer_seeds = &[&authority_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault_token_account.to_account_info(),
            to: ctx.accounts.owner_asset_account.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, payout)?;

    emit!(Withdrawn {
        vault: vault_state.key(),
        position_id: position.position_id,
        recipient: ctx.accounts.owner.key(),
        principal: position.principal,
        yield_amount,
        total_payout: payout,
        total_principal: vault_state.total_principal,
        timestamp: now,
    });

    Ok(())
}
