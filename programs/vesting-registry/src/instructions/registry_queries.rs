use anchor_lang::prelude::*;

use crate::constants::{FACTORY_SEED, RECIPIENTS_SEED, RECIPIENT_AGREEMENTS_SEED};
use crate::state::{Factory, RecipientAgreements, RecipientRegistry};

/// Agreements of one recipient in creation order; empty for unknown recipients.
pub fn handle_get_agreements_for_recipient(
    ctx: Context<GetAgreementsForRecipient>,
) -> Result<Vec<Pubkey>> {
    let data = ctx.accounts.recipient_agreements.try_borrow_data()?;
    RecipientAgreements::agreements_from_data(&data[..])
}

/// One page of distinct recipients in first-insertion order.
pub fn handle_get_all_recipients(ctx: Context<GetAllRecipients>, page: u32) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.recipient_registry.page(page))
}

#[derive(Accounts)]
pub struct GetAgreementsForRecipient<'info> {
    #[account(
        seeds = [FACTORY_SEED, factory.mint.as_ref(), factory.creator.as_ref()],
        bump = factory.bump
    )]
    pub factory: Account<'info, Factory>,

    /// CHECK: only the address is used, as a seed.
    pub beneficiary: UncheckedAccount<'info>,

    /// CHECK: may not exist yet; deserialized in the handler when it does.
    #[account(
        seeds = [RECIPIENT_AGREEMENTS_SEED, factory.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub recipient_agreements: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct GetAllRecipients<'info> {
    #[account(
        seeds = [FACTORY_SEED, factory.mint.as_ref(), factory.creator.as_ref()],
        bump = factory.bump
    )]
    pub factory: Account<'info, Factory>,

    #[account(
        seeds = [RECIPIENTS_SEED, factory.key().as_ref()],
        bump
    )]
    pub recipient_registry: Box<Account<'info, RecipientRegistry>>,
}
