use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::VAULT_SEED;
use crate::error::VestingError;
use crate::state::VestingAgreement;
use crate::utils::escrow;

/// Moves whatever the vault still holds once the agreement is terminal,
/// such as tokens sent to the vault out of band.
pub fn handle_sweep_dust(ctx: Context<SweepDust>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let agreement = &ctx.accounts.agreement;
    agreement.require_sweepable(&ctx.accounts.timelock.key(), now)?;

    let amount = ctx.accounts.vault.amount;
    escrow::transfer_signed_by_agreement(
        &ctx.accounts.token_program,
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.destination.to_account_info(),
        agreement,
        amount,
    )?;

    emit!(DustSwept {
        agreement: agreement.key(),
        destination: ctx.accounts.destination.key(),
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SweepDust<'info> {
    pub agreement: Box<Account<'info, VestingAgreement>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, agreement.key().as_ref()],
        bump = agreement.vault_bump,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = destination.mint == agreement.mint @ VestingError::InvalidTokenMint,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub timelock: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct DustSwept {
    pub agreement: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}
