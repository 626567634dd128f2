use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_pool_vault_to_user;

/// Emergency recovery of treasury surplus by the admin.
///
/// The withdrawable amount is bounded by headroom: the treasury vault's live
/// token balance minus the pool's aggregate staked total. Everything at or
/// below the aggregate is user-owned stake and can never be touched by this
/// instruction; neither the aggregate nor any individual record is modified.
#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    /// Admin (must match `global_config.admin`).
    #[account(
        mut,
        constraint = global_config.is_admin(&owner.key()) @ ErrorCode::NotAuthorized
    )]
    pub owner: Signer<'info>,

    /// Global protocol configuration.
    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Mint whose treasury surplus is being recovered.
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Program authority PDA (signs the vault payout).
    ///
    /// CHECK: PDA derivation enforced by seeds; only used as a signer.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// Per-mint aggregate bounding the withdrawal.
    #[account(
        seeds = [STAKE_POOL_SEED.as_bytes(), token_mint.key().as_ref()],
        bump,
    )]
    pub stake_pool: Box<Account<'info, StakePool>>,

    /// Treasury vault holding stake plus any surplus.
    #[account(
        mut,
        address = stake_pool.treasury_vault @ ErrorCode::InvalidVault
    )]
    pub treasury_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Admin's token account receiving the surplus; created on demand.
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = token_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// SPL token program interface.
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated Token Program (for ATA creation).
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System Program (rent for ATA creation).
    pub system_program: Program<'info, System>,
}

/// Withdraw `amount` of treasury surplus to the admin's token account.
///
/// # Errors
/// - `NotAuthorized` if the caller is not the configured admin.
/// - `ZeroAmount` for a zero withdrawal.
/// - `InsufficientHeadroom` if `amount` exceeds vault balance minus the
///   staked total.
/// - `InvariantViolation` if the vault holds less than the staked total.
pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
    require_gt!(amount, 0, ErrorCode::ZeroAmount);

    let stake_pool = &ctx.accounts.stake_pool;
    let headroom = stake_pool.withdrawable_headroom(ctx.accounts.treasury_vault.amount)?;
    require_gte!(headroom, amount, ErrorCode::InsufficientHeadroom);

    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.treasury_vault.to_account_info(),
        ctx.accounts.owner_token.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;
    msg!(
        "Emergency withdrawal of {} (mint {}), headroom was {}",
        amount,
        ctx.accounts.token_mint.key(),
        headroom
    );

    emit!(EmergencyWithdrawn {
        admin: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        amount,
        total_staked: stake_pool.total_staked,
    });

    Ok(())
}
