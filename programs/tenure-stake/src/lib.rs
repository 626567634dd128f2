use anchor_lang::prelude::*;

declare_id!("8nhSdLukFHeqibY4bS2TRtgkqsiu9cSvnYv3RMnL6K6V");

pub mod deployer {
    use anchor_lang::prelude::declare_id;
    declare_id!("24mBgeVRwG5b451uPNH5si6GccS2scBFm4TW7EDvd8rp");
}

pub const AUTH_SEED: &str = "treasury_auth";
pub const TREASURY_VAULT_SEED: &str = "treasury_vault";

pub mod error;
pub mod instructions;
pub mod states;
pub mod utils;

use instructions::*;

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Tenure Stake",
    project_url: "https://github.com/tenure-labs/tenure-stake",
    contacts: "email:security@tenurelabs.xyz",
    policy: "https://github.com/tenure-labs/tenure-stake/blob/master/SECURITY.md",
    preferred_languages: "en"
}

#[program]
pub mod tenure_stake {

    use super::*;

    pub fn initialise_config(
        ctx: Context<InitialiseConfig>,
        admin: Pubkey,
        stake_enabled: bool,
        min_stake_amount: u64,
    ) -> Result<()> {
        instructions::initialise_config(ctx, admin, stake_enabled, min_stake_amount)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, param: u8, value: u64) -> Result<()> {
        instructions::update_config(ctx, param, value)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake(ctx, amount)
    }

    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake(ctx, amount)
    }

    pub fn close_entry(ctx: Context<CloseEntry>) -> Result<()> {
        instructions::close_entry(ctx)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
        instructions::emergency_withdraw(ctx, amount)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::transfer_admin(ctx, new_admin)
    }
}
