use std::collections::BTreeMap;

use crate::domain::{Account, AccountId, AccountRepository, CustomerId};

/// Keeps every account in memory for the lifetime of the session.
///
/// Ids are handed out sequentially, so iterating the map in key order
/// matches creation order.
#[derive(Default, Debug)]
pub struct InMemoryAccountRepository {
    accounts: BTreeMap<AccountId, Account>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn save_account(&mut self, account: Account) {
        self.accounts.insert(account.account_id(), account);
    }

    fn find_account_by_id(&self, account_id: AccountId) -> Option<&Account> {
        self.accounts.get(&account_id)
    }

    fn find_account_by_id_mut(&mut self, account_id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&account_id)
    }

    fn find_accounts_by_customer_id(&self, customer_id: CustomerId) -> Vec<&Account> {
        self.accounts
            .values()
            .filter(|account| account.customer_id() == customer_id)
            .collect()
    }

    fn find_account_by_account_number(&self, account_number: &str) -> Option<&Account> {
        self.accounts
            .values()
            .find(|account| account.account_number() == account_number)
    }

    fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::InMemoryAccountRepository;
    use crate::domain::{Account, AccountRepository};

    fn account(id: u32, customer: u32) -> Account {
        Account::new(id, customer, format!("ACC-{customer}-0-{}", 1000 + id), Decimal::from(100))
    }

    #[test]
    fn finds_by_id_and_number() {
        let mut repo = InMemoryAccountRepository::new();
        repo.save_account(account(1, 7));
        repo.save_account(account(2, 8));

        assert_eq!(repo.account_count(), 2);
        assert_eq!(repo.find_account_by_id(2).unwrap().customer_id(), 8);
        assert!(repo.find_account_by_id(99).is_none());
        assert_eq!(
            repo.find_account_by_account_number("ACC-7-0-1001")
                .unwrap()
                .account_id(),
            1
        );
        assert!(repo.find_account_by_account_number("ACC-7-0-9999").is_none());
    }

    #[test]
    fn filters_by_customer_in_creation_order() {
        let mut repo = InMemoryAccountRepository::new();
        repo.save_account(account(1, 7));
        repo.save_account(account(2, 8));
        repo.save_account(account(3, 7));

        let ids: Vec<u32> = repo
            .find_accounts_by_customer_id(7)
            .iter()
            .map(|a| a.account_id())
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(repo.find_accounts_by_customer_id(42).is_empty());
    }

    #[test]
    fn save_overwrites_same_id() {
        let mut repo = InMemoryAccountRepository::new();
        repo.save_account(account(1, 7));
        repo.save_account(account(1, 9));

        assert_eq!(repo.account_count(), 1);
        assert_eq!(repo.find_account_by_id(1).unwrap().customer_id(), 9);
    }

    #[test]
    fn mutations_through_lookup_are_kept() {
        let mut repo = InMemoryAccountRepository::new();
        repo.save_account(account(1, 7));

        let acc = repo.find_account_by_id_mut(1).unwrap();
        acc.deposit(Decimal::from(50), chrono::Local::now()).unwrap();

        assert_eq!(repo.find_account_by_id(1).unwrap().balance(), Decimal::from(50));
    }
}
