use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, Transfer};

use crate::constants::AGREEMENT_SEED;
use crate::state::VestingAgreement;

/// SPL transfer authorized by the agreement PDA: as vault authority when
/// paying out, or as approved delegate when pulling from a funding source.
/// Zero amounts skip the CPI.
pub fn transfer_signed_by_agreement<'info>(
    token_program: &Program<'info, Token>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    agreement: &Account<'info, VestingAgreement>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let id = agreement.agreement_id.to_le_bytes();
    let bump = [agreement.bump];
    let seeds: &[&[u8]] = &[AGREEMENT_SEED, agreement.parent.as_ref(), &id, &bump];
    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from,
                to,
                authority: agreement.to_account_info(),
            },
            &[seeds],
        ),
        amount,
    )
}
