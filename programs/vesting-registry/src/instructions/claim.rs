use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::VAULT_SEED;
use crate::error::VestingError;
use crate::state::VestingAgreement;
use crate::utils::escrow;

/// Pays everything released since the last claim to the owner. Open to any
/// signer; the checkpoint is booked before the transfer.
pub fn handle_claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let agreement_key = ctx.accounts.agreement.key();

    let agreement = &mut ctx.accounts.agreement;
    let amount = agreement.record_claim(now)?;
    let last_claim_ts = agreement.last_claim_ts;
    let claimed_total = agreement.claimed;
    let owner = agreement.owner;

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientEscrow
    );
    escrow::transfer_signed_by_agreement(
        &ctx.accounts.token_program,
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        &ctx.accounts.agreement,
        amount,
    )?;

    emit!(TokensClaimed {
        agreement: agreement_key,
        owner,
        amount,
        last_claim_ts,
        claimed_total,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub agreement: Box<Account<'info, VestingAgreement>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, agreement.key().as_ref()],
        bump = agreement.vault_bump,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = owner_token_account.mint == agreement.mint @ VestingError::InvalidTokenMint,
        constraint = owner_token_account.owner == agreement.owner @ VestingError::InvalidTokenAccount,
    )]
    pub owner_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub agreement: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub last_claim_ts: i64,
    pub claimed_total: u64,
}
