// Term Vault - fixed-term yield vault with transferable position receipts
// Depositors lock a fungible asset for a chosen term, receive a position
// record encoding the locked economic terms, and redeem principal plus
// accrued yield at or after maturity. Authorized injectors fund the
// shared yield pool that backs redemptions.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("TermVau1t1111111111111111111111111111111111");

#[program]
pub mod term_vault {
    use super::*;

    /// Initialize a new vault for a given asset token
    ///
    /// Security considerations:
    /// - Validates admin is signer
    /// - Validates the term schedule (non-empty, parallel lengths,
    ///   bounded count, positive durations)
    /// - Creates vault state and custody accounts with proper PDAs
    pub fn initialize(
        ctx: Context<Initialize>,
        term_durations: Vec<i64>,
        term_rates_bps: Vec<u16>,
        deposit_cap: u64,
        min_deposit: u64,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, term_durations, term_rates_bps, deposit_cap, min_deposit)
    }

    /// Lock assets for a fixed term and create a position for receiver
    ///
    /// Security considerations:
    /// - Validates amount against minimum and cap headroom
    /// - Locks duration and APY from the schedule at deposit time
    /// - Uses checked math for aggregate updates
    /// - Follows checks-effects-interactions pattern
    /// - Emits event for tracking
    pub fn deposit(
        ctx: Context<Deposit>,
        amount: u64,
        term_index: u8,
        receiver: Pubkey,
    ) -> Result<()> {
        instructions::deposit::handler(ctx, amount, term_index, receiver)
    }

    /// Redeem a matured position for principal plus yield
    ///
    /// Security considerations:
    /// - Owner-only, maturity-gated (inclusive boundary)
    /// - Error precedence: existence, ownership, maturity, redeemed
    /// - Aggregates settle before the payout transfer
    /// - Custody shortfall surfaces as a distinct integrity fault
    /// - Available while paused; pause never blocks fund recovery
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }

    /// Preview a position's (principal, yield, total) without mutating
    ///
    /// Uses the identical yield formula and existence check as withdraw
    pub fn preview_redeem(ctx: Context<PreviewRedeem>) -> Result<RedemptionPreview> {
        instructions::preview_redeem::handler(ctx)
    }

    /// Transfer a position receipt to a new owner
    ///
    /// Registry-side operation; the new owner redeems, the old one
    /// cannot
    pub fn transfer_position(ctx: Context<TransferPosition>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_position::handler(ctx, new_owner)
    }

    /// Inject yield funds into the shared accrual pool
    ///
    /// Security considerations:
    /// - Injector-capability gated via the grant registry
    /// - The only operation that increases total_accrued_yield
    /// - Emits event carrying the attestation reference
    pub fn inject_yield(
        ctx: Context<InjectYield>,
        amount: u64,
        attestation_reference: [u8; 32],
    ) -> Result<()> {
        instructions::inject_yield::handler(ctx, amount, attestation_reference)
    }

    /// Grant the yield-injector capability to an address
    ///
    /// Security considerations:
    /// - Admin-only function
    /// - Validates the grant doesn't already exist
    /// - Enforces registry size limits
    pub fn grant_injector(ctx: Context<GrantInjector>, injector: Pubkey) -> Result<()> {
        instructions::grant_injector::handler(ctx, injector)
    }

    /// Enable or disable an existing injector grant
    ///
    /// Security considerations:
    /// - Admin-only function
    /// - Revocation keeps audit counters intact
    pub fn toggle_injector(
        ctx: Context<ToggleInjector>,
        injector: Pubkey,
        enabled: bool,
    ) -> Result<()> {
        instructions::toggle_injector::handler(ctx, injector, enabled)
    }

    /// Update a single term's APY
    ///
    /// Does not affect already-created positions, which locked their
    /// rate at deposit time
    pub fn update_term_apy(
        ctx: Context<UpdateParams>,
        term_index: u8,
        new_apy_bps: u16,
    ) -> Result<()> {
        instructions::admin::update_term_apy(ctx, term_index, new_apy_bps)
    }

    /// Update the deposit cap; checked at admission time only
    pub fn update_deposit_cap(ctx: Context<UpdateParams>, new_cap: u64) -> Result<()> {
        instructions::admin::update_deposit_cap(ctx, new_cap)
    }

    /// Update the minimum deposit; checked at admission time only
    pub fn update_min_deposit(ctx: Context<UpdateParams>, new_min: u64) -> Result<()> {
        instructions::admin::update_min_deposit(ctx, new_min)
    }

    /// Pause or unpause deposit admission
    ///
    /// Withdrawal remains available while paused
    pub fn set_paused(ctx: Context<UpdateParams>, paused: bool) -> Result<()> {
        instructions::admin::set_paused(ctx, paused)
    }
}
