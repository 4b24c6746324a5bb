// Constants for the Term Vault program

/// Seed for vault state PDA
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for vault custody authority PDA
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

/// Seed for position PDAs, combined with vault key and position id
pub const POSITION_SEED: &[u8] = b"position";

/// Seed for the yield injector registry PDA
pub const INJECTOR_REGISTRY_SEED: &[u8] = b"injector_registry";

/// Maximum number of terms a vault schedule can carry
pub const MAX_TERMS: usize = 16;

/// Maximum number of injector grants per vault
pub const MAX_INJECTORS: usize = 8;

/// Basis point denominator: 10_000 bps = 100%
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Seconds in a day, used to truncate term durations to whole days
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Fixed year length for yield accrual; no leap-year adjustment
pub const DAYS_PER_YEAR: u64 = 365;

/// Space for VaultState account (8 discriminator + 32 admin +
/// 32 asset_mint + 4 + MAX_TERMS * 8 durations + 4 + MAX_TERMS * 2 rates +
/// 8 deposit_cap + 8 min_deposit + 8 total_principal +
/// 8 total_accrued_yield + 8 total_withdrawn + 8 next_position_id +
/// 1 paused + 1 bump + 1 authority_bump + 128 padding)
pub const VAULT_STATE_SIZE: usize =
    8 + 32 + 32 + (4 + MAX_TERMS * 8) + (4 + MAX_TERMS * 2) + 8 + 8 + 8 + 8 + 8 + 8 + 1 + 1 + 1 + 128;
