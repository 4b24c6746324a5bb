use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

/// Breakdown of what a position would pay if redeemed
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct RedemptionPreview {
    pub principal: u64,
    pub yield_amount: u64,
    pub total: u64,
}

/// Preview a position's redemption value without mutating state
///
/// Uses the identical yield formula as withdraw. Only existence is
/// required; maturity and ownership are not checked, since this is a
/// read-only view.
#[derive(Accounts)]
pub struct PreviewRedeem<'info> {
    /// Vault state PDA
    #[account(
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Position being previewed
    #[account(
        seeds = [
            POSITION_SEED,
            vault_state.key().as_ref(),
            &position.position_id.to_le_bytes(),
        ],
        bump = position.bump,
        constraint = position.vault == vault_state.key() @ VaultError::PositionNotFound,
    )]
    pub position: Account<'info, Position>,
}

pub fn handler(ctx: Context<PreviewRedeem>) -> Result<RedemptionPreview> {
    let position = &ctx.accounts.position;

    let yield_amount = compute_yield(position.principal, position.apy_bps, position.term_seconds)?;
    let total = position
        .principal
        .checked_add(yield_amount)
        .ok_or(VaultError::MathOverflow)?;

    Ok(RedemptionPreview {
        principal: position.principal,
        yield_amount,
        total,
    })
}
