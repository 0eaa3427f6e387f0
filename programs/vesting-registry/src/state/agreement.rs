use anchor_lang::prelude::*;

use crate::error::{VestingError, VestingResult};
use crate::utils::time;

/// How the escrow gets its tokens.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FundingMode {
    /// Tokens are in the vault before `activate`.
    Funded,
    /// `start` pulls the tokens from an approved funding source.
    PullOnStart,
}

/// Immutable schedule parameters, validated once at construction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgreementConfig {
    pub total_amount: u64,
    pub duration_seconds: i64,
    pub start_delay_seconds: i64,
    /// Default voting weight goes to the beneficiary, who may re-delegate it.
    pub reverse_vesting: bool,
    /// Timelock may claw back the unvested remainder once active.
    pub interruptible: bool,
    pub funding: FundingMode,
}

impl AgreementConfig {
    pub const SIZE: usize =
        8 + // total_amount
        8 + // duration_seconds
        8 + // start_delay_seconds
        1 + // reverse_vesting
        1 + // interruptible
        1;  // funding

    pub fn validate(&self) -> VestingResult<()> {
        if self.total_amount == 0 || self.duration_seconds <= 0 || self.start_delay_seconds < 0 {
            return Err(VestingError::InvalidParameters);
        }
        if self.funding == FundingMode::PullOnStart && self.start_delay_seconds != 0 {
            return Err(VestingError::InvalidParameters);
        }
        Ok(())
    }
}

/// Instruction input, with durations in whole days.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgreementParams {
    pub total_amount: u64,
    pub duration_days: u32,
    pub start_delay_days: u32,
    pub reverse_vesting: bool,
    pub interruptible: bool,
}

impl AgreementParams {
    pub fn interruptible(
        total_amount: u64,
        duration_days: u32,
        start_delay_days: u32,
        reverse_vesting: bool,
    ) -> Self {
        Self {
            total_amount,
            duration_days,
            start_delay_days,
            reverse_vesting,
            interruptible: true,
        }
    }

    pub fn non_interruptible(
        total_amount: u64,
        duration_days: u32,
        start_delay_days: u32,
        reverse_vesting: bool,
    ) -> Self {
        Self {
            total_amount,
            duration_days,
            start_delay_days,
            reverse_vesting,
            interruptible: false,
        }
    }

    /// Direct vesting the organization can interrupt.
    pub fn salary(total_amount: u64, duration_days: u32, start_delay_days: u32) -> Self {
        Self {
            total_amount,
            duration_days,
            start_delay_days,
            reverse_vesting: false,
            interruptible: true,
        }
    }

    pub fn to_config(&self, funding: FundingMode) -> VestingResult<AgreementConfig> {
        let config = AgreementConfig {
            total_amount: self.total_amount,
            duration_seconds: time::days_to_seconds(self.duration_days)?,
            start_delay_seconds: time::days_to_seconds(self.start_delay_days)?,
            reverse_vesting: self.reverse_vesting,
            interruptible: self.interruptible,
            funding,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Read-only snapshot of an agreement's accounting at one instant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub vested_to_date: u64,
    pub claimable: u64,
    pub unvested: u64,
    pub claimed: u64,
}

/// One revocable linear vesting grant and its escrow bookkeeping.
/// Seeds: [AGREEMENT_SEED, parent, agreement_id.to_le_bytes()]
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct VestingAgreement {
    /// Token mint held in escrow.
    pub mint: Pubkey,
    /// Factory PDA, or the creator for directly initialized agreements.
    pub parent: Pubkey,
    pub agreement_id: u64,
    /// Beneficiary; receives every claim.
    pub owner: Pubkey,
    /// Authority allowed to interrupt and to rotate itself.
    pub timelock: Pubkey,
    pub config: AgreementConfig,
    pub vesting_begin: i64,
    pub vesting_end: i64,
    pub last_claim_ts: i64,
    pub activated: bool,
    pub interrupted: bool,
    /// Claimed to date.
    pub claimed: u64,
    /// Holder of the escrow's voting weight.
    pub voting_delegate: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
}

impl VestingAgreement {
    pub const SIZE: usize =
        32 + // mint
        32 + // parent
        8 +  // agreement_id
        32 + // owner
        32 + // timelock
        AgreementConfig::SIZE +
        8 +  // vesting_begin
        8 +  // vesting_end
        8 +  // last_claim_ts
        1 +  // activated
        1 +  // interrupted
        8 +  // claimed
        32 + // voting_delegate
        1 +  // bump
        1;   // vault_bump

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mint: Pubkey,
        parent: Pubkey,
        agreement_id: u64,
        owner: Pubkey,
        timelock: Pubkey,
        config: AgreementConfig,
        bump: u8,
        vault_bump: u8,
    ) -> VestingResult<Self> {
        config.validate()?;
        if owner == Pubkey::default() || timelock == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        Ok(Self {
            mint,
            parent,
            agreement_id,
            owner,
            timelock,
            config,
            vesting_begin: 0,
            vesting_end: 0,
            last_claim_ts: 0,
            activated: false,
            interrupted: false,
            claimed: 0,
            voting_delegate: Pubkey::default(),
            bump,
            vault_bump,
        })
    }

    pub fn require_owner(&self, caller: &Pubkey) -> VestingResult<()> {
        if *caller != self.owner {
            return Err(VestingError::OwnershipRequired);
        }
        Ok(())
    }

    pub fn require_timelock(&self, caller: &Pubkey) -> VestingResult<()> {
        if *caller != self.timelock {
            return Err(VestingError::AccessDenied);
        }
        Ok(())
    }

    /// Pull-on-start activation. Hands ownership to `beneficiary` and returns
    /// the amount the caller must pull into escrow.
    pub fn start(&mut self, caller: &Pubkey, beneficiary: Pubkey, now: i64) -> VestingResult<u64> {
        self.require_owner(caller)?;
        if self.activated {
            return Err(VestingError::AlreadyStarted);
        }
        if self.interrupted {
            return Err(VestingError::AgreementInterrupted);
        }
        if self.config.funding != FundingMode::PullOnStart {
            return Err(VestingError::FundingModeMismatch);
        }
        if beneficiary == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        self.owner = beneficiary;
        self.begin_schedule(now)?;
        Ok(self.config.total_amount)
    }

    /// Activation of a pre-funded agreement; vesting begins after the start delay.
    pub fn activate(&mut self, caller: &Pubkey, now: i64, escrow_balance: u64) -> VestingResult<()> {
        self.require_owner(caller)?;
        if self.activated {
            return Err(VestingError::AlreadyActive);
        }
        if self.interrupted {
            return Err(VestingError::AgreementInterrupted);
        }
        if self.config.funding != FundingMode::Funded {
            return Err(VestingError::FundingModeMismatch);
        }
        if escrow_balance < self.config.total_amount {
            return Err(VestingError::InsufficientEscrow);
        }
        let begin = now
            .checked_add(self.config.start_delay_seconds)
            .ok_or(VestingError::MathOverflow)?;
        self.begin_schedule(begin)
    }

    fn begin_schedule(&mut self, begin: i64) -> VestingResult<()> {
        let end = begin
            .checked_add(self.config.duration_seconds)
            .ok_or(VestingError::MathOverflow)?;
        self.vesting_begin = begin;
        self.vesting_end = end;
        self.last_claim_ts = begin;
        self.activated = true;
        self.voting_delegate = self.default_voting_delegate();
        Ok(())
    }

    pub fn default_voting_delegate(&self) -> Pubkey {
        if self.config.reverse_vesting {
            self.owner
        } else {
            self.timelock
        }
    }

    pub fn vested_to_date(&self, now: i64) -> VestingResult<u64> {
        if !self.activated {
            return Ok(0);
        }
        self.vested_at(now.min(self.vesting_end))
    }

    /// Vested at `now` minus vested at the last checkpoint. Each side is
    /// floored on its own, so rounding never accumulates across claims and
    /// the last claim at or after `vesting_end` pays out the full remainder.
    pub fn claimable(&self, now: i64) -> VestingResult<u64> {
        if !self.activated {
            return Ok(0);
        }
        let vested = self.vested_at(now.min(self.vesting_end))?;
        let checkpoint = self.vested_at(self.last_claim_ts)?;
        Ok(vested.saturating_sub(checkpoint))
    }

    fn vested_at(&self, ts: i64) -> VestingResult<u64> {
        let duration = self.config.duration_seconds;
        let span = time::clamped_span(self.vesting_begin, ts, duration);
        time::linear_share(self.config.total_amount, span, duration)
    }

    pub fn unvested(&self, now: i64) -> VestingResult<u64> {
        Ok(self
            .config
            .total_amount
            .saturating_sub(self.vested_to_date(now)?))
    }

    pub fn quote(&self, now: i64) -> VestingResult<Quote> {
        Ok(Quote {
            vested_to_date: self.vested_to_date(now)?,
            claimable: self.claimable(now)?,
            unvested: self.unvested(now)?,
            claimed: self.claimed,
        })
    }

    /// Books a claim and returns the amount to pay the owner. The checkpoint
    /// never moves backwards, so a claim during the start delay is a zero claim.
    pub fn record_claim(&mut self, now: i64) -> VestingResult<u64> {
        if !self.activated {
            return Err(VestingError::NotStarted);
        }
        let amount = self.claimable(now)?;
        let claimed = self
            .claimed
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if claimed > self.config.total_amount {
            return Err(VestingError::MathOverflow);
        }
        self.claimed = claimed;
        self.last_claim_ts = now.min(self.vesting_end).max(self.last_claim_ts);
        Ok(amount)
    }

    /// Books an interrupt and returns the amount to move to the destination.
    /// Repeat calls are a no-op returning 0.
    pub fn record_interrupt(
        &mut self,
        caller: &Pubkey,
        now: i64,
        escrow_balance: u64,
    ) -> VestingResult<u64> {
        self.require_timelock(caller)?;
        if self.interrupted {
            return Ok(0);
        }
        if !self.activated {
            self.interrupted = true;
            self.vesting_end = 0;
            return Ok(escrow_balance);
        }
        if !self.config.interruptible {
            return Err(VestingError::CannotInterrupt);
        }
        let amount = self.unvested(now)?;
        self.vesting_end = now.min(self.vesting_end);
        self.interrupted = true;
        Ok(amount)
    }

    pub fn delegate(&mut self, caller: &Pubkey, new_delegate: Pubkey) -> VestingResult<()> {
        self.require_owner(caller)?;
        if !self.config.reverse_vesting {
            return Err(VestingError::DelegationNotAllowed);
        }
        if new_delegate == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        self.voting_delegate = new_delegate;
        Ok(())
    }

    /// Returns the previous timelock.
    pub fn set_timelock(&mut self, caller: &Pubkey, new_timelock: Pubkey) -> VestingResult<Pubkey> {
        self.require_timelock(caller)?;
        if new_timelock == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        Ok(core::mem::replace(&mut self.timelock, new_timelock))
    }

    /// Returns the previous owner.
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> VestingResult<Pubkey> {
        self.require_owner(caller)?;
        if new_owner == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        Ok(core::mem::replace(&mut self.owner, new_owner))
    }

    /// No further claim or interrupt can move tokens: interrupted before
    /// activation, or ended (naturally or by interrupt) with nothing claimable.
    pub fn is_terminal(&self, now: i64) -> VestingResult<bool> {
        if !self.activated {
            return Ok(self.interrupted);
        }
        let ended = self.interrupted || now >= self.vesting_end;
        Ok(ended && self.claimable(now)? == 0)
    }

    pub fn require_sweepable(&self, caller: &Pubkey, now: i64) -> VestingResult<()> {
        self.require_timelock(caller)?;
        if !self.is_terminal(now)? {
            return Err(VestingError::SweepNotAllowed);
        }
        Ok(())
    }
}
