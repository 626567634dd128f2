use anchor_lang::prelude::*;

use crate::error::ErrorCode;

//
// ──────────────────────────────────────────────────────────────────────────────
// StakePool Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive the per-mint pool account.
pub const STAKE_POOL_SEED: &str = "stake_pool";

/// Per-mint staking aggregate, derived from `STAKE_POOL_SEED + token_mint`.
///
/// Tracks the sum of all `StakerEntry.balance` for one mint. The total exists
/// for exactly one purpose: bounding how much an admin may pull out of the
/// treasury vault without touching user-owned stake. It is created lazily on
/// the first stake of a mint and never closed.
#[account]
#[derive(Default, Debug)]
pub struct StakePool {
    /// PDA bump for this account.
    pub bump: u8,

    /// Mint this pool aggregates.
    pub token_mint: Pubkey,

    /// Program-owned token vault holding all stake for this mint.
    pub treasury_vault: Pubkey,

    /// Sum of all staker balances for this mint.
    pub total_staked: u64,
}

impl StakePool {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 2: mint and vault pubkeys
    /// - 8: total_staked
    pub const LEN: usize = 8 + 1 + 32 * 2 + 8;

    /// Add a deposit to the aggregate.
    pub fn record_increase(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Remove a withdrawal from the aggregate.
    ///
    /// The aggregate can only underflow if per-entry accounting is broken, so
    /// a shortfall here is an invariant violation, not a user error.
    pub fn record_decrease(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(ErrorCode::InvariantViolation)?;
        Ok(())
    }

    /// Treasury balance in excess of aggregate stake: the only amount an
    /// admin may remove. A vault balance below `total_staked` means user
    /// funds are already missing and is reported as an invariant violation
    /// rather than silently underflowing.
    pub fn withdrawable_headroom(&self, external_balance: u64) -> Result<u64> {
        external_balance
            .checked_sub(self.total_staked)
            .ok_or(ErrorCode::InvariantViolation.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_tracks_increases_and_decreases() {
        let mut pool = StakePool::default();
        pool.record_increase(700).unwrap();
        pool.record_increase(300).unwrap();
        assert_eq!(pool.total_staked, 1_000);
        pool.record_decrease(250).unwrap();
        assert_eq!(pool.total_staked, 750);
    }

    #[test]
    fn aggregate_underflow_is_an_invariant_violation() {
        let mut pool = StakePool::default();
        pool.record_increase(100).unwrap();
        assert_eq!(
            pool.record_decrease(101),
            Err(ErrorCode::InvariantViolation.into())
        );
        assert_eq!(pool.total_staked, 100);
    }

    #[test]
    fn aggregate_overflow_is_reported() {
        let mut pool = StakePool::default();
        pool.record_increase(u64::MAX).unwrap();
        assert_eq!(
            pool.record_increase(1),
            Err(ErrorCode::MathOverflow.into())
        );
    }

    #[test]
    fn headroom_is_the_surplus_over_total_staked() {
        let mut pool = StakePool::default();
        pool.record_increase(900).unwrap();

        // Donations or dust above the staked total are withdrawable.
        assert_eq!(pool.withdrawable_headroom(1_000).unwrap(), 100);
        // Nothing beyond stake: nothing to withdraw.
        assert_eq!(pool.withdrawable_headroom(900).unwrap(), 0);
        // Vault short of the staked total: accounting is broken.
        assert_eq!(
            pool.withdrawable_headroom(899),
            Err(ErrorCode::InvariantViolation.into())
        );
    }

    #[test]
    fn fresh_pool_treats_absent_stake_as_zero() {
        let pool = StakePool::default();
        assert_eq!(pool.withdrawable_headroom(0).unwrap(), 0);
        assert_eq!(pool.withdrawable_headroom(42).unwrap(), 42);
    }
}
