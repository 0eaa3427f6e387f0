use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::VAULT_SEED;
use crate::instructions::delegate::VotingPowerDelegated;
use crate::state::VestingAgreement;

pub fn handle_activate(ctx: Context<Activate>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let agreement_key = ctx.accounts.agreement.key();
    let escrow_balance = ctx.accounts.vault.amount;

    let agreement = &mut ctx.accounts.agreement;
    agreement.activate(&ctx.accounts.owner.key(), now, escrow_balance)?;

    msg!(
        "Agreement {} active from {} to {}",
        agreement_key,
        agreement.vesting_begin,
        agreement.vesting_end
    );
    emit!(AgreementActivated {
        agreement: agreement_key,
        owner: agreement.owner,
        vesting_begin: agreement.vesting_begin,
        vesting_end: agreement.vesting_end,
    });
    emit!(VotingPowerDelegated {
        agreement: agreement_key,
        delegate: agreement.voting_delegate,
        amount: escrow_balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Activate<'info> {
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
pub struct AgreementActivated {
    pub agreement: Pubkey,
    pub owner: Pubkey,
    pub vesting_begin: i64,
    pub vesting_end: i64,
}
