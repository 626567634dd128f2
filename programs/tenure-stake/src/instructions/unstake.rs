use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{transfer_from_pool_vault_to_user, unix_now};

/// Accounts required to withdraw tokens from the caller's stake record.
///
/// The entry PDA is derived from the caller's key, so a caller can only ever
/// unstake their own balance. Unstaking is never gated by configuration
/// switches or admin state: user funds stay withdrawable unconditionally.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// User withdrawing tokens (payer for ATA creation if needed).
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Mint being unstaked.
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Program authority PDA (signs the vault payout).
    ///
    /// CHECK: PDA derivation enforced by seeds; only used as a signer.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// Per-mint aggregate; must already exist for this mint.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED.as_bytes(), token_mint.key().as_ref()],
        bump,
    )]
    pub stake_pool: Box<Account<'info, StakePool>>,

    /// Treasury vault the payout is drawn from.
    #[account(
        mut,
        address = stake_pool.treasury_vault @ ErrorCode::InvalidVault
    )]
    pub treasury_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The caller's stake record for this mint.
    #[account(
        mut,
        seeds = [
            STAKER_ENTRY_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref()
        ],
        bump,
        constraint = staker_entry.owner == owner.key() @ ErrorCode::StakerNotFound,
    )]
    pub staker_entry: Box<Account<'info, StakerEntry>>,

    /// The caller's token account receiving the payout; created on demand.
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

/// Withdraw `amount` from the caller's stake record back to their wallet.
///
/// Accrual runs before the balance change, so the interval that just ended
/// is weighted by the pre-withdrawal balance. The record survives at zero
/// balance, keeping its token-days history until the owner closes it.
///
/// # Errors
/// - `ZeroAmount` for a zero withdrawal.
/// - `InsufficientBalance` if `amount` exceeds the staked balance.
/// - `StakerNotFound` if the record does not belong to the caller.
/// - `InvariantViolation` if the pool aggregate would underflow.
pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    require_gt!(amount, 0, ErrorCode::ZeroAmount);

    let now = unix_now()?;

    let staker_entry = &mut ctx.accounts.staker_entry;
    staker_entry.try_decrease(amount, now)?;

    let stake_pool = &mut ctx.accounts.stake_pool;
    stake_pool.record_decrease(amount)?;

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

    emit!(Unstaked {
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        amount,
        total_balance: staker_entry.balance,
    });

    Ok(())
}
