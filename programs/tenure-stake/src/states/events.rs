use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to track protocol state changes
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted once when the global configuration is initialized.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ConfigInitialized {
    /// Protocol admin pubkey (may later be transferred).
    pub admin: Pubkey,
    /// Whether deposits are enabled at genesis.
    pub stake_enabled: bool,
    /// Minimum amount accepted per stake.
    pub min_stake_amount: u64,
}

/// Emitted whenever configuration parameters are modified via `update_config`.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ConfigUpdated {
    /// Current admin.
    pub admin: Pubkey,
    /// Whether deposits are enabled after the update.
    pub stake_enabled: bool,
    /// Minimum amount accepted per stake after the update.
    pub min_stake_amount: u64,
}

/// Emitted when a user deposits into their stake record.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Staked {
    /// The staker.
    pub owner: Pubkey,
    /// Mint of the staked token.
    pub token_mint: Pubkey,
    /// Amount deposited (base units).
    pub amount: u64,
    /// The staker's balance after the deposit.
    pub total_balance: u64,
}

/// Emitted when a user withdraws from their stake record.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Unstaked {
    /// The staker.
    pub owner: Pubkey,
    /// Mint of the unstaked token.
    pub token_mint: Pubkey,
    /// Amount withdrawn (base units).
    pub amount: u64,
    /// The staker's balance after the withdrawal.
    pub total_balance: u64,
}

/// Emitted when a fully-unstaked record is closed and its rent reclaimed.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct StakeEntryClosed {
    /// The record's owner.
    pub owner: Pubkey,
    /// Mint the record tracked.
    pub token_mint: Pubkey,
    /// Token-days accumulated over the record's lifetime, discarded with it.
    pub accrued_token_days: u128,
}

/// Emitted when the admin recovers treasury surplus.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct EmergencyWithdrawn {
    /// The admin who performed the withdrawal.
    pub admin: Pubkey,
    /// Mint withdrawn.
    pub token_mint: Pubkey,
    /// Amount removed from the treasury vault (base units).
    pub amount: u64,
    /// Aggregate staked total at the time (untouched by the withdrawal).
    pub total_staked: u64,
}

/// Emitted when admin authority is handed to a new address.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct AdminTransferred {
    /// The outgoing admin.
    pub old_admin: Pubkey,
    /// The incoming admin.
    pub new_admin: Pubkey,
}
