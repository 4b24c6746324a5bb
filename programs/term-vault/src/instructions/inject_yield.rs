use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Inject yield funds into the vault's shared accrual pool
///
/// The only way total_accrued_yield increases. No position is touched;
/// injected funds back future redemptions first come, first served.
/// The attestation reference ties the injection to its off-system
/// funding source for auditors; it is carried in the event and not
/// interpreted here.
#[derive(Accounts)]
pub struct InjectYield<'info> {
    /// Caller holding the injector capability
    /// Security: Must be signer and hold an enabled grant
    #[account(mut)]
    pub injector: Signer<'info>,

    /// Vault state PDA
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Injector capability registry
    /// Security: Validates the caller against the grant list
    #[account(
        mut,
        seeds = [INJECTOR_REGISTRY_SEED, vault_state.key().as_ref()],
        bump = injector_registry.bump,
    )]
    pub injector_registry: Account<'info, InjectorRegistry>,

    /// Vault custody authority PDA
    /// CHECK: PDA used as authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Injector's asset token account (source)
    #[account(
        mut,
        constraint = injector_asset_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = injector_asset_account.owner == injector.key() @ VaultError::InvalidOwner,
    )]
    pub injector_asset_account: Account<'info, TokenAccount>,

    /// Vault's custody token account (destination)
    #[account(
        mut,
        constraint = vault_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = vault_token_account.owner == vault_authority.key() @ VaultError::InvalidOwner,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(
    ctx: Context<InjectYield>,
    amount: u64,
    attestation_reference: [u8; 32],
) -> Result<()> {
    // CHECKS: Amount and capability
    require!(amount > 0, VaultError::ZeroInjectionAmount);

    let registry = &mut ctx.accounts.injector_registry;
    require!(
        registry.is_authorized(&ctx.accounts.injector.key()),
        VaultError::InjectorNotAuthorized
    );

    let now = Clock::get()?.unix_timestamp;

    // EFFECTS: Credit the pool and the injector's audit counters BEFORE
    // the transfer
    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.record_injection(amount)?;
    registry.record_injection(&ctx.accounts.injector.key(), amount, now)?;

    // INTERACTIONS: Pull the injected funds into custody
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.injector_asset_account.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.injector.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    emit!(YieldInjected {
        vault: vault_state.key(),
        injector: ctx.accounts.injector.key(),
        amount,
        attestation_reference,
        total_accrued_yield: vault_state.total_accrued_yield,
        timestamp: now,
    });

    Ok(())
}
