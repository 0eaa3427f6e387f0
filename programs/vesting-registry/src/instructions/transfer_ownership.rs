use anchor_lang::prelude::*;

use crate::state::VestingAgreement;

pub fn handle_transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let agreement_key = ctx.accounts.agreement.key();
    let agreement = &mut ctx.accounts.agreement;
    let previous_owner = agreement.transfer_ownership(&ctx.accounts.owner.key(), new_owner)?;

    emit!(OwnershipTransferred {
        agreement: agreement_key,
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut)]
    pub agreement: Box<Account<'info, VestingAgreement>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub agreement: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
