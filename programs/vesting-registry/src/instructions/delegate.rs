use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::VAULT_SEED;
use crate::state::VestingAgreement;

/// Re-points the escrow's voting weight. Owner only, reverse vesting only.
pub fn handle_delegate(ctx: Context<Delegate>, new_delegate: Pubkey) -> Result<()> {
    let agreement_key = ctx.accounts.agreement.key();
    let amount = ctx.accounts.vault.amount;

    let agreement = &mut ctx.accounts.agreement;
    agreement.delegate(&ctx.accounts.owner.key(), new_delegate)?;

    emit!(VotingPowerDelegated {
        agreement: agreement_key,
        delegate: new_delegate,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Delegate<'info> {
    #[account(mut)]
    pub agreement: Box<Account<'info, VestingAgreement>>,

    #[account(
        seeds = [VAULT_SEED, agreement.key().as_ref()],
        bump = agreement.vault_bump,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct VotingPowerDelegated {
    pub agreement: Pubkey,
    pub delegate: Pubkey,
    /// Escrowed weight at delegation time.
    pub amount: u64,
}
