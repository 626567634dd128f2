use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Global Configuration Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive the global configuration account.
pub const GLOBAL_CONFIG_SEED: &str = "global_config";

/// Stores protocol-wide configuration: the admin authority and tunable
/// staking parameters.
///
/// This account is created once at deployment (`InitialiseConfig`) and is
/// referenced by every instruction. The admin recorded here is the single
/// authority for privileged operations (`update_config`, `transfer_admin`,
/// `emergency_withdraw`); it never gates user stake records.
#[account]
#[derive(Default, Debug)]
pub struct GlobalConfig {
    /// PDA bump for this account (for seed derivation).
    pub bump: u8,

    /// Current admin of the protocol.
    pub admin: Pubkey,

    /// Global switch: if `false`, new deposits are rejected.
    /// Unstaking is never gated by this flag.
    pub stake_enabled: bool,

    /// Minimum amount accepted per stake (dust floor). Zero disables the floor.
    pub min_stake_amount: u64,
}

impl GlobalConfig {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32: admin pubkey
    /// - 1: stake_enabled flag
    /// - 8: min_stake_amount
    pub const LEN: usize = 8 + 1 + 32 + 1 + 8;

    /// Whether `key` is the current admin authority.
    pub fn is_admin(&self, key: &Pubkey) -> bool {
        *key == self.admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_check_follows_stored_authority() {
        let old_admin = Pubkey::new_unique();
        let new_admin = Pubkey::new_unique();
        let mut config = GlobalConfig {
            admin: old_admin,
            ..Default::default()
        };

        assert!(config.is_admin(&old_admin));
        assert!(!config.is_admin(&new_admin));

        // Plain replacement: the old authority loses privileges the instant
        // the new one is stored.
        config.admin = new_admin;
        assert!(!config.is_admin(&old_admin));
        assert!(config.is_admin(&new_admin));
    }
}
