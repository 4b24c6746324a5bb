use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Lock assets for a fixed term and create a position receipt
///
/// Security checklist:
/// 1. SIGNER VALIDATION: Depositor must be signer
/// 2. ACCOUNT OWNERSHIP: Vault state and position PDAs validated with seeds
/// 6. MATH SAFETY: Checked aggregate updates, checked maturity arithmetic
/// 7. TOKEN ACCOUNT VALIDATION: Validates mint and owner
/// 8. BUSINESS LOGIC: Checks-effects-interactions pattern
/// 10. EVENTS: Emits Deposited event
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// User funding the position
    /// Security: Must be signer, pays for the position account
    #[account(mut)]
    pub depositor: Signer<'info>,

    /// Vault state PDA
    /// Security: Validated by seeds, carries schedule, config, and totals
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Asset mint
    /// Security: Must match vault_state.asset_mint
    #[account(
        address = vault_state.asset_mint,
    )]
    pub asset_mint: Account<'info, Mint>,

    /// Position record, keyed by the vault's next position id
    /// Security: Id comes from the monotonic counter, never reused
    #[account(
        init,
        payer = depositor,
        space = Position::SPACE,
        seeds = [
            POSITION_SEED,
            vault_state.key().as_ref(),
            &vault_state.next_position_id.to_le_bytes(),
        ],
        bump
    )]
    pub position: Account<'info, Position>,

    /// Vault custody authority PDA
    /// CHECK: PDA used as authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Depositor's asset token account (source)
    /// Security: Must be owned by depositor and correct mint
    #[account(
        mut,
        constraint = depositor_asset_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = depositor_asset_account.owner == depositor.key() @ VaultError::InvalidOwner,
    )]
    pub depositor_asset_account: Account<'info, TokenAccount>,

    /// Vault's custody token account (destination)
    /// Security: Must be correct mint and owned by vault_authority
    #[account(
        mut,
        constraint = vault_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = vault_token_account.owner == vault_authority.key() @ VaultError::InvalidOwner,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64, term_index: u8, receiver: Pubkey) -> Result<()> {
    let vault_state = &mut ctx.accounts.vault_state;

    // CHECKS: Pause, zero, minimum, cap, and term index
    vault_state.check_deposit(amount)?;
    let (term_seconds, apy_bps) = vault_state.term(term_index)?;

    let now = Clock::get()?.unix_timestamp;
    let maturity_ts = now
        .checked_add(term_seconds)
        .ok_or(VaultError::MathOverflow)?;

    // EFFECTS: Update aggregates and write the position BEFORE the
    // asset transfer
    let position_id = vault_state.allocate_position_id()?;
    vault_state.record_deposit(amount)?;

    let position = &mut ctx.accounts.position;
    position.vault = vault_state.key();
    position.owner = receiver;
    position.position_id = position_id;
    position.principal = amount;
    position.deposit_ts = now;
    position.maturity_ts = maturity_ts;
    position.term_seconds = term_seconds;
    position.apy_bps = apy_bps;
    position.redeemed = false;
    position.bump = ctx.bumps.position;

    // INTERACTIONS: Pull assets from depositor into custody; a failed
    // transfer aborts the whole transaction, no partial admission
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.depositor_asset_account.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.depositor.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    emit!(Deposited {
        vault: vault_state.key(),
        position_id,
        depositor: ctx.accounts.depositor.key(),
        receiver,
        amount,
        term_seconds,
        maturity_ts,
        apy_bps,
        total_principal: vault_state.total_principal,
        timestamp: now,
    });

    Ok(())
}
