use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::VAULT_SEED;
use crate::error::VestingError;
use crate::state::VestingAgreement;
use crate::utils::escrow;

/// Early termination by the timelock. Before activation the whole escrow is
/// returned; afterwards only the unvested remainder, and only when the
/// agreement is interruptible. A repeat call moves nothing.
pub fn handle_interrupt(ctx: Context<Interrupt>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let agreement_key = ctx.accounts.agreement.key();
    let destination = ctx.accounts.destination.key();
    let escrow_balance = ctx.accounts.vault.amount;

    let agreement = &mut ctx.accounts.agreement;
    let amount = agreement.record_interrupt(&ctx.accounts.timelock.key(), now, escrow_balance)?;
    let vesting_end = agreement.vesting_end;

    require!(escrow_balance >= amount, VestingError::InsufficientEscrow);
    escrow::transfer_signed_by_agreement(
        &ctx.accounts.token_program,
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.destination.to_account_info(),
        &ctx.accounts.agreement,
        amount,
    )?;

    msg!("Agreement {} interrupted, {} reclaimed", agreement_key, amount);
    emit!(VestingInterrupted {
        agreement: agreement_key,
        destination,
        amount,
        vesting_end,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Interrupt<'info> {
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
        constraint = destination.mint == agreement.mint @ VestingError::InvalidTokenMint,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub timelock: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingInterrupted {
    pub agreement: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub vesting_end: i64,
}
