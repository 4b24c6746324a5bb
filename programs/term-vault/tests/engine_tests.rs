//! Engine logic tests for the Term Vault program
//!
//! These tests exercise the program's state types directly: admission
//! checks, aggregate-counter discipline, the yield formula, injector
//! capability gating, and PDA derivation.
//!
//! Note: Full integration tests with mollusk-svm would require aligning
//! Solana SDK versions between Anchor 0.32.1 and mollusk-svm 0.7.2,
//! which have version conflicts. The tests here validate the business
//! logic the handlers drive; signer, PDA, and token-account validation
//! are enforced by Anchor's constraint system.

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use term_vault::{
    constants::*,
    errors::VaultError,
    state::{compute_yield, InjectorGrant, InjectorRegistry, VaultState},
};

fn mock_vault(deposit_cap: u64, min_deposit: u64) -> VaultState {
    VaultState {
        admin: Pubkey::new_unique(),
        asset_mint: Pubkey::new_unique(),
        term_durations: vec![90 * SECONDS_PER_DAY, 180 * SECONDS_PER_DAY, 365 * SECONDS_PER_DAY],
        term_rates_bps: vec![600, 800, 1000],
        deposit_cap,
        min_deposit,
        total_principal: 0,
        total_accrued_yield: 0,
        total_withdrawn: 0,
        next_position_id: 0,
        paused: false,
        bump: 0,
        authority_bump: 0,
        _reserved: [0; 128],
    }
}

fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(_) => u32::MAX,
    }
}

fn assert_vault_err<T: std::fmt::Debug>(result: Result<T>, expected: VaultError) {
    assert_eq!(
        error_code(result.unwrap_err()),
        error_code(Error::from(expected))
    );
}

// =============================================================================
// PDA DERIVATION
// =============================================================================

#[test]
fn test_pda_uniqueness_across_seeds() {
    let program_id = term_vault::id();
    let asset_mint = Pubkey::new_unique();

    let (vault_state, _) =
        Pubkey::find_program_address(&[VAULT_SEED, asset_mint.as_ref()], &program_id);

    let (vault_authority, _) =
        Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED, asset_mint.as_ref()], &program_id);

    let (injector_registry, _) =
        Pubkey::find_program_address(&[INJECTOR_REGISTRY_SEED, vault_state.as_ref()], &program_id);

    assert_ne!(vault_state, vault_authority);
    assert_ne!(vault_state, injector_registry);
    assert_ne!(vault_authority, injector_registry);
}

#[test]
fn test_position_pdas_unique_per_vault_and_id() {
    let program_id = term_vault::id();
    let vault_1 = Pubkey::new_unique();
    let vault_2 = Pubkey::new_unique();

    let derive = |vault: &Pubkey, id: u64| {
        Pubkey::find_program_address(
            &[POSITION_SEED, vault.as_ref(), &id.to_le_bytes()],
            &program_id,
        )
        .0
    };

    // Distinct ids within a vault, distinct vaults for the same id
    assert_ne!(derive(&vault_1, 0), derive(&vault_1, 1));
    assert_ne!(derive(&vault_1, 0), derive(&vault_2, 0));

    // Same (vault, id) re-derives the same address
    assert_eq!(derive(&vault_1, 7), derive(&vault_1, 7));
}

// =============================================================================
// DEPOSIT ADMISSION
// =============================================================================

#[test]
fn test_admission_error_kinds_are_distinct() {
    let mut vault = mock_vault(1_000_000, 100);
    vault.total_principal = 400_000;

    assert_vault_err(vault.check_deposit(0), VaultError::ZeroDepositAmount);
    assert_vault_err(vault.check_deposit(99), VaultError::DepositBelowMinimum);
    assert_vault_err(vault.check_deposit(600_001), VaultError::DepositCapExceeded);
    assert!(vault.check_deposit(600_000).is_ok());

    assert_vault_err(vault.term(3), VaultError::InvalidTermIndex);
}

#[test]
fn test_cap_headroom_scenario() {
    // 50,000 already locked against a 1,000,000 cap leaves 950,000 of
    // headroom; a 1,000,000 deposit must be rejected
    let mut vault = mock_vault(1_000_000, 1);
    vault.record_deposit(50_000).unwrap();

    assert_eq!(vault.remaining_capacity(), 950_000);
    assert_vault_err(vault.check_deposit(1_000_000), VaultError::DepositCapExceeded);
    assert!(vault.check_deposit(950_000).is_ok());
}

#[test]
fn test_deposit_admission_updates_totals() {
    let mut vault = mock_vault(10_000_000, 1);

    let before = vault.total_principal;
    vault.check_deposit(250_000).unwrap();
    vault.record_deposit(250_000).unwrap();

    assert_eq!(vault.total_principal, before + 250_000);
    // Yield pool and withdrawn counter are untouched by admission
    assert_eq!(vault.total_accrued_yield, 0);
    assert_eq!(vault.total_withdrawn, 0);
}

#[test]
fn test_pause_blocks_deposit_only() {
    let mut vault = mock_vault(1_000_000, 1);
    vault.record_deposit(10_000).unwrap();
    vault.paused = true;

    assert_vault_err(vault.check_deposit(500), VaultError::VaultPaused);

    // Settlement path has no pause dependence: fund recovery stays open
    let payout = vault.settle_redemption(10_000, 0).unwrap();
    assert_eq!(payout, 10_000);
    assert_eq!(vault.total_principal, 0);
}

#[test]
fn test_record_deposit_overflow() {
    let mut vault = mock_vault(u64::MAX, 1);
    vault.total_principal = u64::MAX - 100;

    assert_vault_err(vault.record_deposit(200), VaultError::MathOverflow);
}

// =============================================================================
// YIELD FORMULA
// =============================================================================

#[test]
fn test_yield_example_10k_at_6_percent_90_days() {
    // 10,000 units of a 6-decimal asset: 10_000_000000 * 600 * 90 /
    // (10_000 * 365) = 147_945_205, i.e. ~147.95 units
    let y = compute_yield(10_000_000000, 600, 90 * SECONDS_PER_DAY).unwrap();
    assert_eq!(y, 147_945_205);
}

#[test]
fn test_yield_is_deterministic() {
    let a = compute_yield(123_456_789, 750, 120 * SECONDS_PER_DAY).unwrap();
    let b = compute_yield(123_456_789, 750, 120 * SECONDS_PER_DAY).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_yield_multiplies_before_dividing() {
    // Small principal over a short term still accrues; dividing early
    // would truncate this to zero
    let y = compute_yield(10_000, 600, 30 * SECONDS_PER_DAY).unwrap();
    // 10_000 * 600 * 30 / 3_650_000 = 49
    assert_eq!(y, 49);
}

#[test]
fn test_yield_ignores_time_past_maturity() {
    // Yield is a pure function of the locked term parameters; the same
    // position pays the same regardless of when it is redeemed
    let at_maturity = compute_yield(1_000_000_000, 600, 90 * SECONDS_PER_DAY).unwrap();
    let much_later = compute_yield(1_000_000_000, 600, 90 * SECONDS_PER_DAY).unwrap();
    assert_eq!(at_maturity, much_later);
}

// =============================================================================
// AGGREGATE SETTLEMENT
// =============================================================================

#[test]
fn test_settlement_roundtrip_returns_principal_to_zero() {
    let mut vault = mock_vault(100_000_000_000, 1);

    let principal = 10_000_000000u64;
    vault.check_deposit(principal).unwrap();
    vault.record_deposit(principal).unwrap();

    let y = compute_yield(principal, 600, 90 * SECONDS_PER_DAY).unwrap();
    let payout = vault.settle_redemption(principal, y).unwrap();

    assert_eq!(payout, principal + 147_945_205);
    assert_eq!(vault.total_principal, 0);
    assert_eq!(vault.total_withdrawn, payout);
}

#[test]
fn test_shared_pool_pays_down_floor_at_zero() {
    // Two positions compete for one injected pool; the second payout
    // exceeds what the pool still tracks and floors it at zero rather
    // than failing the withdrawal
    let mut vault = mock_vault(u64::MAX, 1);
    vault.record_deposit(1_000_000).unwrap();
    vault.record_deposit(1_000_000).unwrap();
    vault.record_injection(100).unwrap();

    let first = vault.settle_redemption(1_000_000, 80).unwrap();
    assert_eq!(first, 1_000_080);
    assert_eq!(vault.total_accrued_yield, 20);

    let second = vault.settle_redemption(1_000_000, 80).unwrap();
    assert_eq!(second, 1_000_080);
    assert_eq!(vault.total_accrued_yield, 0);

    assert_eq!(vault.total_principal, 0);
    assert_eq!(vault.total_withdrawn, first + second);
}

#[test]
fn test_obligation_tracks_principal_plus_pool() {
    let mut vault = mock_vault(u64::MAX, 1);
    vault.record_deposit(5_000).unwrap();
    vault.record_injection(300).unwrap();

    assert_eq!(vault.total_obligation().unwrap(), 5_300);

    vault.settle_redemption(5_000, 300).unwrap();
    assert_eq!(vault.total_obligation().unwrap(), 0);
}

#[test]
fn test_withdrawn_counter_is_monotonic() {
    let mut vault = mock_vault(u64::MAX, 1);
    vault.record_deposit(1_000).unwrap();
    vault.record_deposit(2_000).unwrap();

    vault.settle_redemption(1_000, 0).unwrap();
    let after_first = vault.total_withdrawn;
    vault.settle_redemption(2_000, 0).unwrap();

    assert!(vault.total_withdrawn > after_first);
    assert_eq!(vault.total_withdrawn, 3_000);
}

// =============================================================================
// INJECTOR CAPABILITY REGISTRY
// =============================================================================

fn mock_registry(grants: Vec<InjectorGrant>) -> InjectorRegistry {
    InjectorRegistry {
        vault: Pubkey::new_unique(),
        grants,
        bump: 0,
    }
}

#[test]
fn test_injector_authorization_requires_enabled_grant() {
    let enabled = Pubkey::new_unique();
    let disabled = Pubkey::new_unique();
    let unknown = Pubkey::new_unique();

    let registry = mock_registry(vec![
        InjectorGrant {
            address: enabled,
            enabled: true,
            total_injected: 0,
            last_injection_ts: 0,
        },
        InjectorGrant {
            address: disabled,
            enabled: false,
            total_injected: 0,
            last_injection_ts: 0,
        },
    ]);

    assert!(registry.is_authorized(&enabled));
    assert!(!registry.is_authorized(&disabled));
    assert!(!registry.is_authorized(&unknown));
}

#[test]
fn test_injection_updates_pool_and_audit_counters() {
    let injector = Pubkey::new_unique();
    let mut registry = mock_registry(vec![InjectorGrant {
        address: injector,
        enabled: true,
        total_injected: 500,
        last_injection_ts: 0,
    }]);
    let mut vault = mock_vault(u64::MAX, 1);

    vault.record_injection(1_000).unwrap();
    registry.record_injection(&injector, 1_000, 1_700_000_000).unwrap();

    assert_eq!(vault.total_accrued_yield, 1_000);
    assert_eq!(registry.grants[0].total_injected, 1_500);
    assert_eq!(registry.grants[0].last_injection_ts, 1_700_000_000);
}

#[test]
fn test_injection_audit_counter_overflow() {
    let injector = Pubkey::new_unique();
    let mut registry = mock_registry(vec![InjectorGrant {
        address: injector,
        enabled: true,
        total_injected: u64::MAX - 10,
        last_injection_ts: 0,
    }]);

    assert_vault_err(
        registry.record_injection(&injector, 20, 0),
        VaultError::MathOverflow,
    );
}

#[test]
fn test_injection_by_unknown_address_is_rejected() {
    let mut registry = mock_registry(vec![]);
    assert_vault_err(
        registry.record_injection(&Pubkey::new_unique(), 100, 0),
        VaultError::InjectorNotAuthorized,
    );
}
