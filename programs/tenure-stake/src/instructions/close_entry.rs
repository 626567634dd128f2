use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::error::ErrorCode;
use crate::states::{StakeEntryClosed, StakerEntry, STAKER_ENTRY_SEED};

/// Accounts context for closing a fully-unstaked record.
///
/// Closing is opt-in: a record with zero balance keeps its token-days
/// history around until the owner explicitly reclaims the rent here. The
/// zero-balance guard is the correctness-critical part; the removal itself
/// is Anchor's `close`.
#[derive(Accounts)]
pub struct CloseEntry<'info> {
    /// Owner of the record; receives the reclaimed rent.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Mint the record tracks (seed input only).
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// The record to close. Must belong to the caller and hold no stake.
    #[account(
        mut,
        seeds = [
            STAKER_ENTRY_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref()
        ],
        bump,
        close = owner,
        constraint = staker_entry.owner == owner.key() @ ErrorCode::StakerNotFound,
        constraint = staker_entry.is_closable() @ ErrorCode::NonZeroBalance,
    )]
    pub staker_entry: Account<'info, StakerEntry>,
}

/// Destroy the caller's zero-balance stake record and refund its rent.
///
/// # Errors
/// - `StakerNotFound` if the record does not belong to the caller.
/// - `NonZeroBalance` if any stake remains.
pub fn close_entry(ctx: Context<CloseEntry>) -> Result<()> {
    let staker_entry = &ctx.accounts.staker_entry;

    emit!(StakeEntryClosed {
        owner: staker_entry.owner,
        token_mint: staker_entry.token_mint,
        accrued_token_days: staker_entry.accrued_token_days,
    });
    msg!(
        "Stake record closed for {} (mint {})",
        staker_entry.owner,
        staker_entry.token_mint
    );

    Ok(())
}
