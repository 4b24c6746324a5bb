use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Enable or disable an existing injector grant
///
/// Revocation is a toggle rather than a removal so the grant's audit
/// counters survive.
#[derive(Accounts)]
pub struct ToggleInjector<'info> {
    /// Vault admin - only they can manage grants
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Vault state PDA
    #[account(
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
        has_one = admin @ VaultError::Unauthorized,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Injector capability registry
    #[account(
        mut,
        seeds = [INJECTOR_REGISTRY_SEED, vault_state.key().as_ref()],
        bump = injector_registry.bump,
    )]
    pub injector_registry: Account<'info, InjectorRegistry>,
}

pub fn handler(ctx: Context<ToggleInjector>, injector: Pubkey, enabled: bool) -> Result<()> {
    let registry = &mut ctx.accounts.injector_registry;

    let grant = registry
        .get_grant_mut(&injector)
        .ok_or(VaultError::InjectorNotFound)?;

    grant.enabled = enabled;

    emit!(InjectorToggled {
        vault: registry.vault,
        injector,
        enabled,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
