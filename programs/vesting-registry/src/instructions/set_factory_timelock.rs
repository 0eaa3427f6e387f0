use anchor_lang::prelude::*;

use crate::constants::FACTORY_SEED;
use crate::instructions::set_timelock::TimelockRotated;
use crate::state::Factory;

/// Rotates the factory authority. Agreements already created keep their own timelock.
pub fn handle_set_factory_timelock(ctx: Context<SetFactoryTimelock>, new_timelock: Pubkey) -> Result<()> {
    let factory_key = ctx.accounts.factory.key();
    let factory = &mut ctx.accounts.factory;
    let old_timelock = factory.set_timelock(&ctx.accounts.timelock.key(), new_timelock)?;

    msg!("Factory {} timelock rotated", factory_key);
    emit!(TimelockRotated {
        target: factory_key,
        old_timelock,
        new_timelock,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetFactoryTimelock<'info> {
    #[account(
        mut,
        seeds = [FACTORY_SEED, factory.mint.as_ref(), factory.creator.as_ref()],
        bump = factory.bump
    )]
    pub factory: Account<'info, Factory>,

    pub timelock: Signer<'info>,
}
