use anchor_lang::prelude::*;
use anchor_spl::token_2022;

/// Move tokens from a user-owned account into a program vault.
///
/// The user signs the enclosing transaction, so a plain CPI context suffices.
#[allow(clippy::too_many_arguments)]
pub fn transfer_from_user_to_pool_vault<'info>(
    signer: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to_vault: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    token_2022::transfer_checked(
        CpiContext::new(
            token_program,
            token_2022::TransferChecked {
                from,
                mint,
                to: to_vault,
                authority: signer,
            },
        ),
        amount,
        mint_decimals,
    )
}

/// Move tokens out of a program vault, signed by the program authority PDA.
#[allow(clippy::too_many_arguments)]
pub fn transfer_from_pool_vault_to_user<'info>(
    authority: AccountInfo<'info>,
    from_vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    token_2022::transfer_checked(
        CpiContext::new_with_signer(
            token_program,
            token_2022::TransferChecked {
                from: from_vault,
                mint,
                to,
                authority,
            },
            signer_seeds,
        ),
        amount,
        mint_decimals,
    )
}
