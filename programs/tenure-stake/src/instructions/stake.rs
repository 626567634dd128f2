use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{transfer_from_user_to_pool_vault, unix_now};
use crate::TREASURY_VAULT_SEED;

/// Accounts required to deposit tokens into the caller's stake record.
///
/// Flow summary:
/// 1) Lazily create the per-mint pool, its treasury vault, and the caller's
///    entry on first use.
/// 2) Fold the elapsed interval into the entry's token-days accumulator,
///    then raise the balance.
/// 3) Move the deposit from the caller's token account into the treasury
///    vault and add it to the pool aggregate.
/// 4) Emit `Staked`.
///
/// Only the caller's own entry can ever be named here: the entry PDA is
/// derived from the caller's key and the caller must sign.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// User depositing tokens.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Global configuration; staking must be enabled.
    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump,
        constraint = global_config.stake_enabled @ ErrorCode::StakingDisabled,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Mint being staked. Any SPL mint may open its own pool.
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Program authority PDA owning every treasury vault.
    ///
    /// CHECK: PDA derivation enforced by seeds; only used as token authority.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// Per-mint aggregate (created lazily on the first stake of this mint).
    #[account(
        init_if_needed,
        seeds = [STAKE_POOL_SEED.as_bytes(), token_mint.key().as_ref()],
        bump,
        payer = owner,
        space = StakePool::LEN
    )]
    pub stake_pool: Box<Account<'info, StakePool>>,

    /// Program-owned vault custodying all stake for this mint.
    #[account(
        init_if_needed,
        seeds = [TREASURY_VAULT_SEED.as_bytes(), token_mint.key().as_ref()],
        bump,
        payer = owner,
        token::mint = token_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub treasury_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The caller's stake record for this mint (created lazily).
    #[account(
        init_if_needed,
        seeds = [
            STAKER_ENTRY_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref()
        ],
        bump,
        payer = owner,
        space = StakerEntry::LEN
    )]
    pub staker_entry: Box<Account<'info, StakerEntry>>,

    /// The caller's token account funding the deposit.
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// SPL token program interface.
    pub token_program: Interface<'info, TokenInterface>,

    /// System Program (rent for lazily created accounts).
    pub system_program: Program<'info, System>,
}

/// Deposit `amount` into the caller's stake record for `token_mint`.
///
/// Accrual runs before the balance change, so token-days for the elapsed
/// interval are weighted by the balance that was actually in effect.
///
/// # Errors
/// - `StakingDisabled` if deposits are globally disabled.
/// - `ZeroAmount` / `AmountTooSmall` for rejected amounts.
/// - `MathOverflow` on any checked-arithmetic failure.
pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    require_gt!(amount, 0, ErrorCode::ZeroAmount);
    require_gte!(
        amount,
        ctx.accounts.global_config.min_stake_amount,
        ErrorCode::AmountTooSmall
    );

    let now = unix_now()?;

    // Fresh pool: bind it to the mint and its vault.
    let stake_pool = &mut ctx.accounts.stake_pool;
    if stake_pool.token_mint == Pubkey::default() {
        stake_pool.bump = ctx.bumps.stake_pool;
        stake_pool.token_mint = ctx.accounts.token_mint.key();
        stake_pool.treasury_vault = ctx.accounts.treasury_vault.key();
        msg!("Stake pool created for mint {}", stake_pool.token_mint);
    }

    // Fresh entry: starts at zero balance with the checkpoint at now.
    let staker_entry = &mut ctx.accounts.staker_entry;
    if staker_entry.owner == Pubkey::default() {
        staker_entry.bump = ctx.bumps.staker_entry;
        staker_entry.owner = ctx.accounts.owner.key();
        staker_entry.token_mint = ctx.accounts.token_mint.key();
        staker_entry.last_update = now;
    }

    staker_entry.try_increase(amount, now)?;
    stake_pool.record_increase(amount)?;

    transfer_from_user_to_pool_vault(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token.to_account_info(),
        ctx.accounts.treasury_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
    )?;

    emit!(Staked {
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        amount,
        total_balance: staker_entry.balance,
    });

    Ok(())
}
