use anchor_lang::prelude::*;
use std::ops::DerefMut;

use crate::error::ErrorCode;
use crate::states::{ConfigInitialized, GlobalConfig, GLOBAL_CONFIG_SEED};

/// Accounts context for `initialise_config`.
///
/// Creates the global configuration singleton and records the initial admin
/// authority. Only the designated deployer key may run this, exactly once;
/// a second invocation fails with `AlreadyInitialized`.
#[derive(Accounts)]
pub struct InitialiseConfig<'info> {
    /// Deployment signer (must match the program-level deployer id).
    #[account(
        mut,
        address = crate::deployer::id() @ ErrorCode::NotAuthorized
    )]
    pub owner: Signer<'info>,

    /// Global configuration account holding protocol parameters.
    ///
    /// `init_if_needed` so the duplicate-creation case reaches the handler
    /// guard and surfaces as `AlreadyInitialized` instead of a raw
    /// account-in-use failure.
    #[account(
        init_if_needed,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump,
        payer = owner,
        space = GlobalConfig::LEN
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Solana System Program.
    pub system_program: Program<'info, System>,
}

/// Write the initial global configuration.
///
/// # Parameters
/// - `admin`: initial admin authority (must not be the default pubkey).
/// - `stake_enabled`: whether deposits are accepted from genesis.
/// - `min_stake_amount`: dust floor for deposits; zero disables it.
///
/// # Errors
/// - `NotAuthorized` if the signer is not the deployer.
/// - `AlreadyInitialized` if the configuration already exists.
/// - `ZeroAddress` if `admin` is the default pubkey.
pub fn initialise_config(
    ctx: Context<InitialiseConfig>,
    admin: Pubkey,
    stake_enabled: bool,
    min_stake_amount: u64,
) -> Result<()> {
    let global_config = ctx.accounts.global_config.deref_mut();
    require_keys_eq!(
        global_config.admin,
        Pubkey::default(),
        ErrorCode::AlreadyInitialized
    );
    require_keys_neq!(admin, Pubkey::default(), ErrorCode::ZeroAddress);

    global_config.bump = ctx.bumps.global_config;
    global_config.admin = admin;
    global_config.stake_enabled = stake_enabled;
    global_config.min_stake_amount = min_stake_amount;
    msg!("Global config initialized, admin: {}", admin);

    emit!(ConfigInitialized {
        admin,
        stake_enabled,
        min_stake_amount,
    });
    Ok(())
}
