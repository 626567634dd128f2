use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::states::{AdminTransferred, GlobalConfig, GLOBAL_CONFIG_SEED};

/// Accounts context for handing admin authority to a new address.
#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    /// Current admin.
    #[account(
        constraint = global_config.is_admin(&owner.key()) @ ErrorCode::NotAuthorized
    )]
    pub owner: Signer<'info>,

    /// Global configuration holding the authority being replaced.
    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,
}

/// Replace the admin authority.
///
/// A plain replacement, not a two-phase handoff: the outgoing authority
/// loses every privilege the instant this commits.
///
/// # Errors
/// - `NotAuthorized` if the caller is not the current admin.
/// - `ZeroAddress` if `new_admin` is the default pubkey.
pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    require_keys_neq!(new_admin, Pubkey::default(), ErrorCode::ZeroAddress);

    let global_config = &mut ctx.accounts.global_config;
    let old_admin = global_config.admin;
    global_config.admin = new_admin;
    msg!("Admin transferred from {} to {}", old_admin, new_admin);

    emit!(AdminTransferred {
        old_admin,
        new_admin,
    });

    Ok(())
}
