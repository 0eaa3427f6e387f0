use anchor_lang::prelude::*;

use crate::state::VestingAgreement;

pub fn handle_set_timelock(ctx: Context<SetTimelock>, new_timelock: Pubkey) -> Result<()> {
    let agreement_key = ctx.accounts.agreement.key();
    let agreement = &mut ctx.accounts.agreement;
    let old_timelock = agreement.set_timelock(&ctx.accounts.timelock.key(), new_timelock)?;

    emit!(TimelockRotated {
        target: agreement_key,
        old_timelock,
        new_timelock,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetTimelock<'info> {
    #[account(mut)]
    pub agreement: Box<Account<'info, VestingAgreement>>,

    pub timelock: Signer<'info>,
}

/// Emitted for both agreement and factory rotations; `target` is the rotated account.
#[event]
pub struct TimelockRotated {
    pub target: Pubkey,
    pub old_timelock: Pubkey,
    pub new_timelock: Pubkey,
}
