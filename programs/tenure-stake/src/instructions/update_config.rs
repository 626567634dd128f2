use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::states::{ConfigUpdated, GlobalConfig, GLOBAL_CONFIG_SEED};

/// Accounts context for the `update_config` instruction.
///
/// Only the current admin may tune staking parameters. Nothing here can
/// touch user records or the pool aggregates.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Authorized signer: must be the stored admin.
    #[account(
        constraint = global_config.is_admin(&owner.key()) @ ErrorCode::NotAuthorized
    )]
    pub owner: Signer<'info>,

    /// Global configuration account to be updated.
    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,
}

/// Updates selected fields of the global configuration.
///
/// # Param Mapping
/// - `0`: **stake_enabled** → toggles deposits (bool, from nonzero value).
///   Unstaking is never affected.
/// - `1`: **min_stake_amount** → sets the deposit dust floor (u64).
///
/// Any other `param` value returns `ErrorCode::InvalidParam`.
pub fn update_config(ctx: Context<UpdateConfig>, param: u8, value: u64) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;
    match param {
        // Toggle stake_enabled flag
        0 => {
            global_config.stake_enabled = value != 0;
        }
        // Update minimum stake amount
        1 => {
            global_config.min_stake_amount = value;
        }
        // Invalid parameter selector
        _ => return Err(error!(ErrorCode::InvalidParam)),
    }

    emit!(ConfigUpdated {
        admin: global_config.admin,
        stake_enabled: global_config.stake_enabled,
        min_stake_amount: global_config.min_stake_amount,
    });
    Ok(())
}
