use anchor_lang::prelude::*;

/// Event emitted when a new vault is initialized
#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub admin: Pubkey,
    pub asset_mint: Pubkey,
    pub term_count: u8,
    pub deposit_cap: u64,
    pub min_deposit: u64,
    pub timestamp: i64,
}

/// Event emitted when a deposit creates a new position
#[event]
pub struct Deposited {
    pub vault: Pubkey,
    pub position_id: u64,
    pub depositor: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
    pub term_seconds: i64,
    pub maturity_ts: i64,
    pub apy_bps: u16,
    pub total_principal: u64,
    pub timestamp: i64,
}

/// Event emitted when a matured position is redeemed
#[event]
pub struct Withdrawn {
    pub vault: Pubkey,
    pub position_id: u64,
    pub recipient: Pubkey,
    pub principal: u64,
    pub yield_amount: u64,
    pub total_payout: u64,
    pub total_principal: u64,
    pub timestamp: i64,
}

/// Event emitted when yield funds are injected into the shared pool
#[event]
pub struct YieldInjected {
    pub vault: Pubkey,
    pub injector: Pubkey,
    pub amount: u64,
    pub attestation_reference: [u8; 32],
    pub total_accrued_yield: u64,
    pub timestamp: i64,
}

/// Event emitted when a position changes owner
#[event]
pub struct PositionTransferred {
    pub vault: Pubkey,
    pub position_id: u64,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a term's APY is updated
#[event]
pub struct TermApyUpdated {
    pub vault: Pubkey,
    pub term_index: u8,
    pub old_apy_bps: u16,
    pub new_apy_bps: u16,
    pub timestamp: i64,
}

/// Event emitted when the deposit cap is updated
#[event]
pub struct DepositCapUpdated {
    pub vault: Pubkey,
    pub old_cap: u64,
    pub new_cap: u64,
    pub timestamp: i64,
}

/// Event emitted when the minimum deposit is updated
#[event]
pub struct MinDepositUpdated {
    pub vault: Pubkey,
    pub old_min: u64,
    pub new_min: u64,
    pub timestamp: i64,
}

/// Event emitted when an injector grant is created
#[event]
pub struct InjectorGranted {
    pub vault: Pubkey,
    pub injector: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when an injector grant is enabled or disabled
#[event]
pub struct InjectorToggled {
    pub vault: Pubkey,
    pub injector: Pubkey,
    pub enabled: bool,
    pub timestamp: i64,
}

/// Event emitted when the vault pause flag changes
#[event]
pub struct VaultPauseSet {
    pub vault: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}
