use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Transfer ownership of a position receipt to a new address
///
/// Registry-side operation, orthogonal to the vault engine: the
/// economic terms of the position are untouched, and the engine always
/// reads current ownership from the record at withdraw time.
#[derive(Accounts)]
pub struct TransferPosition<'info> {
    /// Current position owner
    pub current_owner: Signer<'info>,

    /// Vault state PDA
    #[account(
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Position changing hands
    #[account(
        mut,
        seeds = [
            POSITION_SEED,
            vault_state.key().as_ref(),
            &position.position_id.to_le_bytes(),
        ],
        bump = position.bump,
        constraint = position.vault == vault_state.key() @ VaultError::PositionNotFound,
        constraint = position.owner == current_owner.key() @ VaultError::NotPositionOwner,
    )]
    pub position: Account<'info, Position>,
}

pub fn handler(ctx: Context<TransferPosition>, new_owner: Pubkey) -> Result<()> {
    let position = &mut ctx.accounts.position;

    let previous_owner = position.owner;
    position.owner = new_owner;

    emit!(PositionTransferred {
        vault: position.vault,
        position_id: position.position_id,
        previous_owner,
        new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
