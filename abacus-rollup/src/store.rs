use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use abacus_core::AccountCode;

/// Balances for one fiscal-year selection, keyed by account code.
///
/// Leaf values are authoritative and externally supplied; non-leaf values
/// are derived and overwritten by every roll-up pass, so they must not be
/// treated as a source of truth before a pass has run.  A store lives as
/// long as the year selection it was seeded for and is replaced wholesale
/// when the selection changes.
#[derive(Clone, Debug, Default)]
pub struct BalanceStore<'a> {
    amounts: HashMap<AccountCode<'a>, Decimal>,
}

impl<'a> BalanceStore<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from persisted `(code, amount)` pairs.
    pub fn seed<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (AccountCode<'a>, Decimal)>,
    {
        BalanceStore {
            amounts: entries.into_iter().collect(),
        }
    }

    /// Assigns the balance for `code`, overwriting any previous value.
    ///
    /// Accepts any code: the engine writes derived parents through here,
    /// and bulk recomputation must stay possible.  Restricting end users
    /// to leaf edits is the worksheet's policy, not the store's.
    pub fn set(&mut self, code: AccountCode<'a>, amount: Decimal) {
        self.amounts.insert(code, amount);
    }

    /// The balance recorded for `code`.  An account with no recorded
    /// activity is financially zero, not an error.
    pub fn get(&self, code: &str) -> Decimal {
        self.amounts.get(code).copied().unwrap_or_default()
    }

    /// Full dump in code order, for persistence or export.
    pub fn snapshot(&self) -> BTreeMap<AccountCode<'a>, Decimal> {
        self.amounts
            .iter()
            .map(|(code, amount)| (code.clone(), *amount))
            .collect()
    }

    pub fn clear(&mut self) {
        self.amounts.clear();
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}
