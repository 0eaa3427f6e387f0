use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::{FACTORY_SEED, RECIPIENTS_SEED};
use crate::error::VestingError;
use crate::state::{Factory, RecipientRegistry};

pub fn handle_initialize_factory(ctx: Context<InitializeFactory>, timelock: Pubkey) -> Result<()> {
    require!(timelock != Pubkey::default(), VestingError::InvalidPubkey);

    let factory_key = ctx.accounts.factory.key();
    let mint = ctx.accounts.mint.key();
    let creator = ctx.accounts.creator.key();

    ctx.accounts.factory.set_inner(Factory {
        mint,
        creator,
        timelock,
        agreement_count: 0,
        bump: ctx.bumps.factory,
    });
    ctx.accounts.recipient_registry.set_inner(RecipientRegistry {
        factory: factory_key,
        recipients: Vec::new(),
    });

    msg!("Factory {} initialized for mint {}", factory_key, mint);
    emit!(FactoryInitialized {
        factory: factory_key,
        mint,
        creator,
        timelock,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(
        init,
        payer = creator,
        space = 8 + Factory::SIZE,
        seeds = [FACTORY_SEED, mint.key().as_ref(), creator.key().as_ref()],
        bump
    )]
    pub factory: Account<'info, Factory>,

    #[account(
        init,
        payer = creator,
        space = RecipientRegistry::space(),
        seeds = [RECIPIENTS_SEED, factory.key().as_ref()],
        bump
    )]
    pub recipient_registry: Box<Account<'info, RecipientRegistry>>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct FactoryInitialized {
    pub factory: Pubkey,
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub timelock: Pubkey,
}
