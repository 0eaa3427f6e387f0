use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
use state::{AgreementParams, Quote};

declare_id!("Au3zAaJCbWHMrUUCycqBAHvaxHZaBGYSi7R3eRm56bKy");

#[program]
pub mod vesting_registry {
    use super::*;

    pub fn initialize_factory(ctx: Context<InitializeFactory>, timelock: Pubkey) -> Result<()> {
        instructions::initialize_factory::handle_initialize_factory(ctx, timelock)
    }

    pub fn create_agreement(
        ctx: Context<CreateAgreement>,
        total_amount: u64,
        duration_days: u32,
        start_delay_days: u32,
        reverse_vesting: bool,
        interruptible: bool,
    ) -> Result<()> {
        let params = AgreementParams {
            total_amount,
            duration_days,
            start_delay_days,
            reverse_vesting,
            interruptible,
        };
        instructions::create_agreement::handle_create_agreement(ctx, params)
    }

    pub fn create_interruptible_agreement(
        ctx: Context<CreateAgreement>,
        total_amount: u64,
        duration_days: u32,
        start_delay_days: u32,
        reverse_vesting: bool,
    ) -> Result<()> {
        let params = AgreementParams::interruptible(
            total_amount,
            duration_days,
            start_delay_days,
            reverse_vesting,
        );
        instructions::create_agreement::handle_create_agreement(ctx, params)
    }

    pub fn create_non_interruptible_agreement(
        ctx: Context<CreateAgreement>,
        total_amount: u64,
        duration_days: u32,
        start_delay_days: u32,
        reverse_vesting: bool,
    ) -> Result<()> {
        let params = AgreementParams::non_interruptible(
            total_amount,
            duration_days,
            start_delay_days,
            reverse_vesting,
        );
        instructions::create_agreement::handle_create_agreement(ctx, params)
    }

    pub fn create_salary_agreement(
        ctx: Context<CreateAgreement>,
        total_amount: u64,
        duration_days: u32,
        start_delay_days: u32,
    ) -> Result<()> {
        let params = AgreementParams::salary(total_amount, duration_days, start_delay_days);
        instructions::create_agreement::handle_create_agreement(ctx, params)
    }

    pub fn set_factory_timelock(ctx: Context<SetFactoryTimelock>, new_timelock: Pubkey) -> Result<()> {
        instructions::set_factory_timelock::handle_set_factory_timelock(ctx, new_timelock)
    }

    pub fn get_agreements_for_recipient(
        ctx: Context<GetAgreementsForRecipient>,
    ) -> Result<Vec<Pubkey>> {
        instructions::registry_queries::handle_get_agreements_for_recipient(ctx)
    }

    pub fn get_all_recipients(ctx: Context<GetAllRecipients>, page: u32) -> Result<Vec<Pubkey>> {
        instructions::registry_queries::handle_get_all_recipients(ctx, page)
    }

    pub fn initialize_agreement(
        ctx: Context<InitializeAgreement>,
        agreement_id: u64,
        timelock: Pubkey,
        params: AgreementParams,
    ) -> Result<()> {
        instructions::initialize_agreement::handle_initialize_agreement(ctx, agreement_id, timelock, params)
    }

    pub fn start(ctx: Context<Start>) -> Result<()> {
        instructions::start::handle_start(ctx)
    }

    pub fn activate(ctx: Context<Activate>) -> Result<()> {
        instructions::activate::handle_activate(ctx)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handle_claim(ctx)
    }

    pub fn interrupt(ctx: Context<Interrupt>) -> Result<()> {
        instructions::interrupt::handle_interrupt(ctx)
    }

    pub fn delegate(ctx: Context<Delegate>, new_delegate: Pubkey) -> Result<()> {
        instructions::delegate::handle_delegate(ctx, new_delegate)
    }

    pub fn set_timelock(ctx: Context<SetTimelock>, new_timelock: Pubkey) -> Result<()> {
        instructions::set_timelock::handle_set_timelock(ctx, new_timelock)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handle_transfer_ownership(ctx, new_owner)
    }

    pub fn vesting_quote(ctx: Context<GetVestingQuote>) -> Result<Quote> {
        instructions::vesting_quote::handle_vesting_quote(ctx)
    }

    pub fn sweep_dust(ctx: Context<SweepDust>) -> Result<()> {
        instructions::sweep_dust::handle_sweep_dust(ctx)
    }
}
