use anchor_lang::prelude::*;

use crate::state::{Quote, VestingAgreement};

/// Read-only: emits and returns the agreement's accounting at the current time.
pub fn handle_vesting_quote(ctx: Context<GetVestingQuote>) -> Result<Quote> {
    let now = Clock::get()?.unix_timestamp;
    let agreement = &ctx.accounts.agreement;
    let quote = agreement.quote(now)?;

    emit!(VestingQuoted {
        agreement: agreement.key(),
        timestamp: now,
        vested_to_date: quote.vested_to_date,
        claimable: quote.claimable,
        unvested: quote.unvested,
        claimed: quote.claimed,
    });

    Ok(quote)
}

#[derive(Accounts)]
pub struct GetVestingQuote<'info> {
    pub agreement: Box<Account<'info, VestingAgreement>>,
}

#[event]
pub struct VestingQuoted {
    pub agreement: Pubkey,
    pub timestamp: i64,
    pub vested_to_date: u64,
    pub claimable: u64,
    pub unvested: u64,
    pub claimed: u64,
}
