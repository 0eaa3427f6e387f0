//! Program-wide constants.

/// PDA seed for the per-mint factory.
pub const FACTORY_SEED: &[u8] = b"factory";

/// PDA seed for the factory's list of distinct recipients.
pub const RECIPIENTS_SEED: &[u8] = b"recipients";

/// PDA seed for a single recipient's agreement list.
pub const RECIPIENT_AGREEMENTS_SEED: &[u8] = b"recipient_agreements";

/// PDA seed for a vesting agreement: [AGREEMENT_SEED, parent, agreement_id].
pub const AGREEMENT_SEED: &[u8] = b"agreement";

/// PDA seed for an agreement's escrow token account.
pub const VAULT_SEED: &[u8] = b"vault";

/// Max pubkeys returned by one registry query (return data is capped at 1024 bytes).
pub const RETURN_PAGE_SIZE: usize = 30;

/// Max distinct recipients indexed by one factory. The registry account must
/// stay under the 10 KiB limit for accounts created through CPI.
pub const MAX_RECIPIENTS: usize = 300;

/// Max agreements indexed per recipient. The whole list is returned in one
/// query, so it is bounded by the return page.
pub const MAX_AGREEMENTS_PER_RECIPIENT: usize = RETURN_PAGE_SIZE;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;
