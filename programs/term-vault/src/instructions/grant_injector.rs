use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Grant the yield-injector capability to an address
#[derive(Accounts)]
pub struct GrantInjector<'info> {
    /// Vault admin - only they can manage grants
    /// Security: Must be signer and match vault_state.admin
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Vault state PDA
    /// Security: has_one constraint validates admin from state
    #[account(
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
        has_one = admin @ VaultError::Unauthorized,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Injector capability registry
    /// Security: Initialized on first grant
    #[account(
        init_if_needed,
        payer = admin,
        space = InjectorRegistry::SPACE,
        seeds = [INJECTOR_REGISTRY_SEED, vault_state.key().as_ref()],
        bump
    )]
    pub injector_registry: Account<'info, InjectorRegistry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<GrantInjector>, injector: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.injector_registry;

    // Initialize registry if first time
    if registry.vault == Pubkey::default() {
        registry.vault = ctx.accounts.vault_state.key();
        registry.bump = ctx.bumps.injector_registry;
        registry.grants = Vec::new();
    }

    require!(
        !registry.grants.iter().any(|g| g.address == injector),
        VaultError::InjectorAlreadyGranted
    );

    require!(
        registry.grants.len() < MAX_INJECTORS,
        VaultError::InjectorRegistryFull
    );

    registry.grants.push(InjectorGrant {
        address: injector,
        enabled: true,
        total_injected: 0,
        last_injection_ts: 0,
    });

    emit!(InjectorGranted {
        vault: registry.vault,
        injector,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
