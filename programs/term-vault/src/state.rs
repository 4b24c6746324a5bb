use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::VaultError;

/// Global vault state: term schedule, admission config, and the
/// aggregate counters that tie principal, injected yield, and payouts
/// together.
///
/// Aggregate invariants:
/// - total_principal equals the sum of principal over all live
///   (non-redeemed) positions
/// - total_accrued_yield only increases via yield injection and is
///   floored at zero when paid down
/// - total_withdrawn is monotonic, for audit
#[account]
pub struct VaultState {
    /// Admin that can update parameters and manage injector grants
    pub admin: Pubkey,

    /// Mint of the underlying asset token
    pub asset_mint: Pubkey,

    /// Term durations in seconds, fixed at construction
    pub term_durations: Vec<i64>,

    /// Annual yield rate per term in basis points, admin-mutable
    pub term_rates_bps: Vec<u16>,

    /// Maximum aggregate principal the vault will admit
    pub deposit_cap: u64,

    /// Minimum size of a single deposit
    pub min_deposit: u64,

    /// Principal currently locked across all live positions
    pub total_principal: u64,

    /// Injected yield available to back payouts (shared pool)
    pub total_accrued_yield: u64,

    /// Total amount ever paid out, monotonic
    pub total_withdrawn: u64,

    /// Next position id, strictly increasing, never reused
    pub next_position_id: u64,

    /// Pause flag; blocks deposits only, withdrawals stay open
    pub paused: bool,

    /// Bump seed for vault state PDA
    pub bump: u8,

    /// Bump seed for vault custody authority PDA
    pub authority_bump: u8,

    // Padding for future upgrades
    pub _reserved: [u8; 128],
}

impl VaultState {
    /// Look up a term's (duration, rate) by schedule index
    pub fn term(&self, index: u8) -> Result<(i64, u16)> {
        let idx = index as usize;
        if idx >= self.term_durations.len() {
            msg!(
                "term index {} out of range, max valid index is {}",
                index,
                self.term_durations.len() - 1
            );
            return Err(error!(VaultError::InvalidTermIndex));
        }
        Ok((self.term_durations[idx], self.term_rates_bps[idx]))
    }

    /// Principal headroom left under the deposit cap
    pub fn remaining_capacity(&self) -> u64 {
        self.deposit_cap.saturating_sub(self.total_principal)
    }

    /// Outstanding obligation: locked principal plus undistributed yield
    pub fn total_obligation(&self) -> Result<u64> {
        self.total_principal
            .checked_add(self.total_accrued_yield)
            .ok_or(error!(VaultError::MathOverflow))
    }

    /// Validate a deposit against pause state, minimum, and cap.
    /// Checked at admission time only; config changes are not enforced
    /// retroactively against existing positions.
    pub fn check_deposit(&self, amount: u64) -> Result<()> {
        require!(!self.paused, VaultError::VaultPaused);
        require!(amount > 0, VaultError::ZeroDepositAmount);

        if amount < self.min_deposit {
            msg!("deposit {} below minimum {}", amount, self.min_deposit);
            return Err(error!(VaultError::DepositBelowMinimum));
        }

        let headroom = self.remaining_capacity();
        if amount > headroom {
            msg!("deposit {} exceeds remaining capacity {}", amount, headroom);
            return Err(error!(VaultError::DepositCapExceeded));
        }

        Ok(())
    }

    /// Admit a validated deposit into the aggregates
    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_principal = self
            .total_principal
            .checked_add(amount)
            .ok_or(error!(VaultError::MathOverflow))?;
        Ok(())
    }

    /// Allocate the next position id
    pub fn allocate_position_id(&mut self) -> Result<u64> {
        let id = self.next_position_id;
        self.next_position_id = id
            .checked_add(1)
            .ok_or(error!(VaultError::MathOverflow))?;
        Ok(id)
    }

    /// Credit an injection to the shared yield pool
    pub fn record_injection(&mut self, amount: u64) -> Result<()> {
        self.total_accrued_yield = self
            .total_accrued_yield
            .checked_add(amount)
            .ok_or(error!(VaultError::MathOverflow))?;
        Ok(())
    }

    /// Settle a redemption against the aggregates and return the payout.
    ///
    /// The yield pool is a shared aggregate, not a per-position escrow:
    /// the subtraction floors at zero, so a payout can exceed what the
    /// pool tracks and lean on raw custody balance instead. First come,
    /// first served against the injected pool.
    pub fn settle_redemption(&mut self, principal: u64, yield_amount: u64) -> Result<u64> {
        let payout = principal
            .checked_add(yield_amount)
            .ok_or(error!(VaultError::MathOverflow))?;

        // Bounded by total_principal as long as the live-position
        // invariant holds; checked_sub turns a violation into an error
        // instead of wrapping.
        self.total_principal = self
            .total_principal
            .checked_sub(principal)
            .ok_or(error!(VaultError::MathOverflow))?;

        self.total_accrued_yield = self.total_accrued_yield.saturating_sub(yield_amount);

        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(payout)
            .ok_or(error!(VaultError::MathOverflow))?;

        Ok(payout)
    }
}

/// One locked deposit. Created atomically with a successful deposit,
/// retired exactly once on withdrawal. The economic terms are locked at
/// creation and survive later schedule edits.
#[account]
pub struct Position {
    /// Vault that created this position; retire calls from any other
    /// vault are rejected
    pub vault: Pubkey,

    /// Current owner, updated by transfer
    pub owner: Pubkey,

    /// Strictly increasing id within the vault
    pub position_id: u64,

    /// Locked principal in the asset's smallest unit
    pub principal: u64,

    /// Deposit timestamp
    pub deposit_ts: i64,

    /// Maturity timestamp = deposit_ts + term duration
    pub maturity_ts: i64,

    /// Term duration in seconds
    pub term_seconds: i64,

    /// APY locked in at deposit time, in basis points
    pub apy_bps: u16,

    /// One-way redemption flag
    pub redeemed: bool,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Position {
    /// 8 (discriminator) + 32 (vault) + 32 (owner) + 8 (position_id) +
    /// 8 (principal) + 8 (deposit_ts) + 8 (maturity_ts) +
    /// 8 (term_seconds) + 2 (apy_bps) + 1 (redeemed) + 1 (bump)
    pub const SPACE: usize = 8 + 32 + 32 + 8 + 8 + 8 + 8 + 8 + 2 + 1 + 1;

    /// Maturity boundary is inclusive: the maturity timestamp itself is
    /// withdrawable.
    pub fn is_matured(&self, now: i64) -> bool {
        now >= self.maturity_ts
    }

    /// Redemption gate checks, in the order callers rely on for
    /// diagnosing failures: ownership, then maturity, then redeemed.
    /// (Existence precedes all of these at account load.)
    pub fn verify_redeemable(&self, claimant: &Pubkey, now: i64) -> Result<()> {
        if self.owner != *claimant {
            msg!("caller {} is not position owner {}", claimant, self.owner);
            return Err(error!(VaultError::NotPositionOwner));
        }

        if !self.is_matured(now) {
            msg!(
                "current time {} is before maturity {}",
                now,
                self.maturity_ts
            );
            return Err(error!(VaultError::PositionNotMatured));
        }

        require!(!self.redeemed, VaultError::PositionAlreadyRedeemed);

        Ok(())
    }
}

/// Registry of addresses holding the yield-injector capability
///
/// Grants are admin-managed and individually toggleable. Per-grant
/// running totals and timestamps double as the injection audit record,
/// alongside the YieldInjected events.
#[account]
pub struct InjectorRegistry {
    /// Vault this registry belongs to
    pub vault: Pubkey,

    /// Granted injector addresses
    pub grants: Vec<InjectorGrant>,

    /// Bump seed for PDA
    pub bump: u8,
}

/// Individual injector grant entry
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct InjectorGrant {
    /// Address holding the capability
    pub address: Pubkey,

    /// Whether the grant is currently enabled
    pub enabled: bool,

    /// Total amount ever injected by this address
    pub total_injected: u64,

    /// Timestamp of the most recent injection
    pub last_injection_ts: i64,
}

impl InjectorRegistry {
    /// 8 (discriminator) + 32 (vault) + 4 (vec len) +
    /// MAX_INJECTORS * 49 (entry) + 1 (bump) + 64 (padding)
    pub const SPACE: usize = 8 + 32 + 4 + (MAX_INJECTORS * 49) + 1 + 64;

    /// Check whether an address holds an enabled injector grant
    pub fn is_authorized(&self, address: &Pubkey) -> bool {
        self.grants
            .iter()
            .any(|g| g.address == *address && g.enabled)
    }

    /// Get mutable grant by address
    pub fn get_grant_mut(&mut self, address: &Pubkey) -> Option<&mut InjectorGrant> {
        self.grants.iter_mut().find(|g| g.address == *address)
    }

    /// Record an injection against a grant's audit counters
    pub fn record_injection(&mut self, address: &Pubkey, amount: u64, now: i64) -> Result<()> {
        let grant = self
            .get_grant_mut(address)
            .ok_or(error!(VaultError::InjectorNotAuthorized))?;
        grant.total_injected = grant
            .total_injected
            .checked_add(amount)
            .ok_or(error!(VaultError::MathOverflow))?;
        grant.last_injection_ts = now;
        Ok(())
    }
}

/// Yield owed to a position at redemption, computed purely from the
/// locked term parameters. No additional yield accrues past maturity.
///
/// yield = principal * apy_bps * term_days / (10_000 * 365)
///
/// Whole days only (seconds truncate), and every multiplication happens
/// before the single final division; dividing early loses precision for
/// small principal or short terms. Truncates toward zero. 365-day fixed
/// divisor, no leap-year adjustment.
pub fn compute_yield(principal: u64, apy_bps: u16, term_seconds: i64) -> Result<u64> {
    let term_days = term_seconds.max(0) / SECONDS_PER_DAY;

    let numerator = (principal as u128)
        .checked_mul(apy_bps as u128)
        .ok_or(error!(VaultError::MathOverflow))?
        .checked_mul(term_days as u128)
        .ok_or(error!(VaultError::MathOverflow))?;

    let denominator = (BPS_DENOMINATOR as u128) * (DAYS_PER_YEAR as u128);
    let yield_amount = numerator / denominator;

    u64::try_from(yield_amount).map_err(|_| error!(VaultError::MathOverflow))
}
