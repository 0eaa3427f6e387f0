use anchor_lang::prelude::*;

use crate::constants::{MAX_AGREEMENTS_PER_RECIPIENT, MAX_RECIPIENTS, RETURN_PAGE_SIZE};
use crate::error::{VestingError, VestingResult};

/// Per-mint factory holding the organization authority.
/// Seeds: [FACTORY_SEED, mint, creator]
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Factory {
    /// Token mint every agreement of this factory escrows.
    pub mint: Pubkey,
    /// Signer that initialized the factory (PDA seed only).
    pub creator: Pubkey,
    /// Sole authority: creates agreements, becomes their timelock, rotates itself.
    pub timelock: Pubkey,
    /// Agreements created so far; the next agreement id.
    pub agreement_count: u64,
    pub bump: u8,
}

impl Factory {
    pub const SIZE: usize =
        32 + // mint
        32 + // creator
        32 + // timelock
        8 +  // agreement_count
        1;   // bump

    pub fn require_timelock(&self, caller: &Pubkey) -> VestingResult<()> {
        if *caller != self.timelock {
            return Err(VestingError::AccessDenied);
        }
        Ok(())
    }

    /// Returns the id for the agreement being created and bumps the counter.
    pub fn next_agreement_id(&mut self) -> VestingResult<u64> {
        let id = self.agreement_count;
        self.agreement_count = id.checked_add(1).ok_or(VestingError::MathOverflow)?;
        Ok(id)
    }

    /// Returns the previous timelock.
    pub fn set_timelock(&mut self, caller: &Pubkey, new_timelock: Pubkey) -> VestingResult<Pubkey> {
        self.require_timelock(caller)?;
        if new_timelock == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        Ok(core::mem::replace(&mut self.timelock, new_timelock))
    }
}

/// Distinct recipients of a factory, in first-insertion order.
/// Seeds: [RECIPIENTS_SEED, factory]
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct RecipientRegistry {
    pub factory: Pubkey,
    pub recipients: Vec<Pubkey>,
}

impl RecipientRegistry {
    pub const fn space() -> usize {
        8 + 32 + 4 + 32 * MAX_RECIPIENTS
    }

    pub fn contains(&self, recipient: &Pubkey) -> bool {
        self.recipients.contains(recipient)
    }

    /// Appends `recipient` unless already present; returns whether it was added.
    pub fn register(&mut self, recipient: Pubkey) -> VestingResult<bool> {
        if self.contains(&recipient) {
            return Ok(false);
        }
        if self.recipients.len() >= MAX_RECIPIENTS {
            return Err(VestingError::RecipientListFull);
        }
        self.recipients.push(recipient);
        Ok(true)
    }

    pub fn page(&self, page: u32) -> Vec<Pubkey> {
        let start = (page as usize).saturating_mul(RETURN_PAGE_SIZE);
        self.recipients
            .iter()
            .skip(start)
            .take(RETURN_PAGE_SIZE)
            .copied()
            .collect()
    }
}

/// Agreements created for one recipient, in creation order.
/// Seeds: [RECIPIENT_AGREEMENTS_SEED, factory, beneficiary]
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct RecipientAgreements {
    pub factory: Pubkey,
    /// Pubkey::default() until the first agreement is indexed.
    pub beneficiary: Pubkey,
    pub agreements: Vec<Pubkey>,
    pub bump: u8,
}

impl RecipientAgreements {
    pub const fn space() -> usize {
        8 + 32 + 32 + 4 + 32 * MAX_AGREEMENTS_PER_RECIPIENT + 1
    }

    pub fn is_initialized(&self) -> bool {
        self.beneficiary != Pubkey::default()
    }

    /// Agreement list held in raw account data. A recipient without
    /// agreements has no account yet, so empty data reads as an empty list.
    pub fn agreements_from_data(data: &[u8]) -> Result<Vec<Pubkey>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        let list = Self::try_deserialize(&mut &data[..])?;
        Ok(list.agreements)
    }

    pub fn append(&mut self, agreement: Pubkey) -> VestingResult<()> {
        if self.agreements.len() >= MAX_AGREEMENTS_PER_RECIPIENT {
            return Err(VestingError::AgreementListFull);
        }
        self.agreements.push(agreement);
        Ok(())
    }
}

/// Records `agreement` under `beneficiary`. The first agreement of a
/// recipient initializes its list and appends it to the registry.
pub fn index_agreement(
    registry: &mut RecipientRegistry,
    list: &mut RecipientAgreements,
    factory: Pubkey,
    beneficiary: Pubkey,
    agreement: Pubkey,
    list_bump: u8,
) -> VestingResult<()> {
    if !list.is_initialized() {
        registry.register(beneficiary)?;
        list.factory = factory;
        list.beneficiary = beneficiary;
        list.bump = list_bump;
    } else if list.beneficiary != beneficiary || list.factory != factory {
        return Err(VestingError::InvalidParameters);
    }
    list.append(agreement)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn factory() -> Factory {
        Factory {
            mint: key(1),
            creator: key(2),
            timelock: key(3),
            agreement_count: 0,
            bump: 255,
        }
    }

    fn empty_registry() -> RecipientRegistry {
        RecipientRegistry {
            factory: key(10),
            recipients: Vec::new(),
        }
    }

    fn empty_list() -> RecipientAgreements {
        RecipientAgreements {
            factory: Pubkey::default(),
            beneficiary: Pubkey::default(),
            agreements: Vec::new(),
            bump: 0,
        }
    }

    #[test]
    fn agreements_are_indexed_per_recipient_in_order() {
        let mut registry = empty_registry();
        let mut first = empty_list();
        let mut second = empty_list();
        let (alice, bob) = (key(20), key(21));

        let mut f = factory();
        let mut created = Vec::new();
        for recipient in [alice, alice, bob, bob, bob] {
            let id = f.next_agreement_id().unwrap();
            let agreement = key(100 + id as u8);
            let list = if recipient == alice { &mut first } else { &mut second };
            index_agreement(&mut registry, list, key(10), recipient, agreement, 7).unwrap();
            created.push(agreement);
        }

        assert_eq!(f.agreement_count, 5);
        assert_eq!(registry.recipients, vec![alice, bob]);
        assert_eq!(first.agreements, created[..2].to_vec());
        assert_eq!(second.agreements, created[2..].to_vec());
        assert_eq!(first.beneficiary, alice);
        assert_eq!(second.bump, 7);
    }

    #[test]
    fn unknown_recipient_has_empty_list() {
        let registry = empty_registry();
        let list = empty_list();
        assert!(!registry.contains(&key(42)));
        assert!(!list.is_initialized());
        assert!(list.agreements.is_empty());
        assert!(registry.page(0).is_empty());
    }

    #[test]
    fn agreement_list_reads_from_account_data() {
        assert!(RecipientAgreements::agreements_from_data(&[]).unwrap().is_empty());

        let mut registry = empty_registry();
        let mut list = empty_list();
        index_agreement(&mut registry, &mut list, key(10), key(20), key(30), 1).unwrap();
        index_agreement(&mut registry, &mut list, key(10), key(20), key(31), 1).unwrap();
        let mut data = Vec::new();
        list.try_serialize(&mut data).unwrap();
        assert_eq!(
            RecipientAgreements::agreements_from_data(&data).unwrap(),
            vec![key(30), key(31)]
        );

        assert!(RecipientAgreements::agreements_from_data(&[7u8; 16]).is_err());
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = empty_registry();
        assert!(registry.register(key(5)).unwrap());
        assert!(!registry.register(key(5)).unwrap());
        assert_eq!(registry.recipients.len(), 1);
    }

    #[test]
    fn capacities_are_enforced() {
        let mut registry = empty_registry();
        for i in 0..MAX_RECIPIENTS {
            let mut bytes = [0u8; 32];
            bytes[..8].copy_from_slice(&(i as u64 + 1).to_le_bytes());
            registry.register(Pubkey::new_from_array(bytes)).unwrap();
        }
        assert!(matches!(
            registry.register(key(255)),
            Err(VestingError::RecipientListFull)
        ));

        let mut list = empty_list();
        for i in 0..MAX_AGREEMENTS_PER_RECIPIENT {
            list.append(key(i as u8)).unwrap();
        }
        assert!(matches!(
            list.append(key(200)),
            Err(VestingError::AgreementListFull)
        ));
    }

    #[test]
    fn mismatched_list_is_rejected() {
        let mut registry = empty_registry();
        let mut list = empty_list();
        index_agreement(&mut registry, &mut list, key(10), key(20), key(30), 1).unwrap();
        assert!(matches!(
            index_agreement(&mut registry, &mut list, key(10), key(21), key(31), 1),
            Err(VestingError::InvalidParameters)
        ));
        assert_eq!(list.agreements, vec![key(30)]);
    }

    #[test]
    fn recipients_are_paged() {
        let mut registry = empty_registry();
        for i in 0..(RETURN_PAGE_SIZE + 5) {
            registry.register(key(i as u8 + 1)).unwrap();
        }
        assert_eq!(registry.page(0).len(), RETURN_PAGE_SIZE);
        assert_eq!(registry.page(1), vec![
            key(RETURN_PAGE_SIZE as u8 + 1),
            key(RETURN_PAGE_SIZE as u8 + 2),
            key(RETURN_PAGE_SIZE as u8 + 3),
            key(RETURN_PAGE_SIZE as u8 + 4),
            key(RETURN_PAGE_SIZE as u8 + 5),
        ]);
        assert!(registry.page(2).is_empty());
    }

    #[test]
    fn factory_timelock_rotation() {
        let mut f = factory();
        assert!(matches!(
            f.set_timelock(&key(9), key(9)),
            Err(VestingError::AccessDenied)
        ));
        assert_eq!(f.set_timelock(&key(3), key(4)).unwrap(), key(3));
        assert!(matches!(
            f.require_timelock(&key(3)),
            Err(VestingError::AccessDenied)
        ));
        assert!(f.require_timelock(&key(4)).is_ok());
    }
}
