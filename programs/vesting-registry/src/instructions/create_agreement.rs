use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{
    AGREEMENT_SEED, FACTORY_SEED, RECIPIENTS_SEED, RECIPIENT_AGREEMENTS_SEED, VAULT_SEED,
};
use crate::error::VestingError;
use crate::state::{
    index_agreement, AgreementParams, Factory, FundingMode, RecipientAgreements,
    RecipientRegistry, VestingAgreement,
};

/// Creates a pre-funded agreement owned by the beneficiary, with the factory
/// timelock as its authority, and indexes it under the beneficiary.
pub fn handle_create_agreement(
    ctx: Context<CreateAgreement>,
    params: AgreementParams,
) -> Result<()> {
    let factory_key = ctx.accounts.factory.key();
    let agreement_key = ctx.accounts.agreement.key();
    let beneficiary = ctx.accounts.beneficiary.key();
    require!(beneficiary != Pubkey::default(), VestingError::InvalidPubkey);

    let factory = &mut ctx.accounts.factory;
    factory.require_timelock(&ctx.accounts.timelock.key())?;
    let config = params.to_config(FundingMode::Funded)?;
    let agreement_id = factory.next_agreement_id()?;
    let timelock = factory.timelock;
    let mint = factory.mint;

    ctx.accounts.agreement.set_inner(VestingAgreement::new(
        mint,
        factory_key,
        agreement_id,
        beneficiary,
        timelock,
        config,
        ctx.bumps.agreement,
        ctx.bumps.vault,
    )?);

    index_agreement(
        &mut ctx.accounts.recipient_registry,
        &mut ctx.accounts.recipient_agreements,
        factory_key,
        beneficiary,
        agreement_key,
        ctx.bumps.recipient_agreements,
    )?;

    require!(
        ctx.accounts.funding_source.amount >= config.total_amount,
        VestingError::InsufficientEscrow
    );
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funding_source.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.timelock.to_account_info(),
            },
        ),
        config.total_amount,
    )?;

    msg!(
        "Agreement {} created for {} ({} of {})",
        agreement_key,
        beneficiary,
        agreement_id,
        ctx.accounts.factory.agreement_count
    );
    emit!(AgreementCreated {
        factory: factory_key,
        agreement: agreement_key,
        agreement_id,
        beneficiary,
        timelock,
        total_amount: params.total_amount,
        duration_days: params.duration_days,
        start_delay_days: params.start_delay_days,
        reverse_vesting: params.reverse_vesting,
        interruptible: params.interruptible,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateAgreement<'info> {
    #[account(
        mut,
        seeds = [FACTORY_SEED, factory.mint.as_ref(), factory.creator.as_ref()],
        bump = factory.bump
    )]
    pub factory: Account<'info, Factory>,

    #[account(
        mut,
        seeds = [RECIPIENTS_SEED, factory.key().as_ref()],
        bump
    )]
    pub recipient_registry: Box<Account<'info, RecipientRegistry>>,

    #[account(
        init_if_needed,
        payer = timelock,
        space = RecipientAgreements::space(),
        seeds = [RECIPIENT_AGREEMENTS_SEED, factory.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub recipient_agreements: Box<Account<'info, RecipientAgreements>>,

    #[account(
        init,
        payer = timelock,
        space = 8 + VestingAgreement::SIZE,
        seeds = [AGREEMENT_SEED, factory.key().as_ref(), &factory.agreement_count.to_le_bytes()],
        bump
    )]
    pub agreement: Box<Account<'info, VestingAgreement>>,

    #[account(
        init,
        payer = timelock,
        token::mint = mint,
        token::authority = agreement,
        seeds = [VAULT_SEED, agreement.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(address = factory.mint @ VestingError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,

    /// CHECK: only the address is recorded, as the agreement owner.
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = funding_source.mint == factory.mint @ VestingError::InvalidTokenMint,
        constraint = funding_source.owner == timelock.key() @ VestingError::InvalidTokenAccount,
    )]
    pub funding_source: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub timelock: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct AgreementCreated {
    pub factory: Pubkey,
    pub agreement: Pubkey,
    pub agreement_id: u64,
    pub beneficiary: Pubkey,
    pub timelock: Pubkey,
    pub total_amount: u64,
    pub duration_days: u32,
    pub start_delay_days: u32,
    pub reverse_vesting: bool,
    pub interruptible: bool,
}
