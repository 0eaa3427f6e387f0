use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{AGREEMENT_SEED, VAULT_SEED};
use crate::state::{AgreementParams, FundingMode, VestingAgreement};

/// Direct creation of a pull-on-start agreement. The creator owns it until
/// `start` hands it to the beneficiary.
pub fn handle_initialize_agreement(
    ctx: Context<InitializeAgreement>,
    agreement_id: u64,
    timelock: Pubkey,
    params: AgreementParams,
) -> Result<()> {
    let agreement_key = ctx.accounts.agreement.key();
    let creator = ctx.accounts.creator.key();
    let mint = ctx.accounts.mint.key();
    let config = params.to_config(FundingMode::PullOnStart)?;

    ctx.accounts.agreement.set_inner(VestingAgreement::new(
        mint,
        creator,
        agreement_id,
        creator,
        timelock,
        config,
        ctx.bumps.agreement,
        ctx.bumps.vault,
    )?);

    emit!(AgreementInitialized {
        agreement: agreement_key,
        creator,
        timelock,
        mint,
        total_amount: config.total_amount,
        duration_seconds: config.duration_seconds,
        reverse_vesting: config.reverse_vesting,
        interruptible: config.interruptible,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(agreement_id: u64)]
pub struct InitializeAgreement<'info> {
    #[account(
        init,
        payer = creator,
        space = 8 + VestingAgreement::SIZE,
        seeds = [AGREEMENT_SEED, creator.key().as_ref(), &agreement_id.to_le_bytes()],
        bump
    )]
    pub agreement: Box<Account<'info, VestingAgreement>>,

    #[account(
        init,
        payer = creator,
        token::mint = mint,
        token::authority = agreement,
        seeds = [VAULT_SEED, agreement.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct AgreementInitialized {
    pub agreement: Pubkey,
    pub creator: Pubkey,
    pub timelock: Pubkey,
    pub mint: Pubkey,
    pub total_amount: u64,
    pub duration_seconds: i64,
    pub reverse_vesting: bool,
    pub interruptible: bool,
}
