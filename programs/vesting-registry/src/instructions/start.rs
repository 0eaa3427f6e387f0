use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::VAULT_SEED;
use crate::error::VestingError;
use crate::instructions::activate::AgreementActivated;
use crate::instructions::delegate::VotingPowerDelegated;
use crate::state::VestingAgreement;
use crate::utils::escrow;

/// Pull-on-start activation: books the schedule and the new owner, then pulls
/// the vesting amount from a funding source that approved the agreement PDA.
pub fn handle_start(ctx: Context<Start>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let agreement_key = ctx.accounts.agreement.key();
    let beneficiary = ctx.accounts.beneficiary.key();
    let caller = ctx.accounts.owner.key();

    let agreement = &mut ctx.accounts.agreement;
    let amount = agreement.start(&caller, beneficiary, now)?;

    let source = &ctx.accounts.funding_source;
    require_keys_eq!(source.mint, agreement.mint, VestingError::InvalidTokenMint);
    require!(
        source.delegate == COption::Some(agreement_key) && source.delegated_amount >= amount,
        VestingError::InsufficientAllowance
    );
    require!(source.amount >= amount, VestingError::InsufficientEscrow);

    let vesting_begin = agreement.vesting_begin;
    let vesting_end = agreement.vesting_end;
    let voting_delegate = agreement.voting_delegate;

    escrow::transfer_signed_by_agreement(
        &ctx.accounts.token_program,
        ctx.accounts.funding_source.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        &ctx.accounts.agreement,
        amount,
    )?;

    msg!("Agreement {} started for {}", agreement_key, beneficiary);
    emit!(AgreementActivated {
        agreement: agreement_key,
        owner: beneficiary,
        vesting_begin,
        vesting_end,
    });
    emit!(VotingPowerDelegated {
        agreement: agreement_key,
        delegate: voting_delegate,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Start<'info> {
    #[account(mut)]
    pub agreement: Box<Account<'info, VestingAgreement>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, agreement.key().as_ref()],
        bump = agreement.vault_bump,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub funding_source: Box<Account<'info, TokenAccount>>,

    /// CHECK: only the address is recorded, as the new owner.
    pub beneficiary: UncheckedAccount<'info>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
