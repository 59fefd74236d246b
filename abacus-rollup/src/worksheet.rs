use std::collections::BTreeMap;

use rust_decimal::Decimal;

use abacus_core::AccountCode;

use crate::directory::AccountDirectory;
use crate::engine::recompute_all;
use crate::error::EditError;
use crate::store::BalanceStore;

/// The single integration point for interactive opening-balance editing.
///
/// A worksheet owns the directory and store for one fiscal-year selection.
/// Every accepted leaf edit triggers a full roll-up, so derived rows are
/// always consistent when read back; a batch defers the roll-up to the
/// outermost `end_batch` when many leaves change at once, as during an
/// import.
#[derive(Debug)]
pub struct BalanceWorksheet<'a> {
    directory: AccountDirectory<'a>,
    store: BalanceStore<'a>,
    batch_depth: u32,
}

impl<'a> BalanceWorksheet<'a> {
    /// Couples a directory with a seeded store and runs one roll-up so the
    /// derived rows start out consistent with the seeded leaves.
    pub fn new(directory: AccountDirectory<'a>, store: BalanceStore<'a>) -> Self {
        let mut worksheet = BalanceWorksheet {
            directory,
            store,
            batch_depth: 0,
        };
        recompute_all(&worksheet.directory, &mut worksheet.store);
        worksheet
    }

    /// Records a leaf edit and rolls its ancestors up, unless a batch is
    /// open.
    ///
    /// Only leaves are editable through the worksheet; non-leaf balances
    /// are derived, and the store-level freedom to write any code is
    /// reserved for the engine.
    pub fn set_leaf_balance(&mut self, code: &str, amount: Decimal) -> Result<(), EditError> {
        let account = self
            .directory
            .get(code)
            .ok_or_else(|| EditError::UnknownAccount(code.to_string()))?;
        if !account.is_leaf {
            return Err(EditError::NotALeaf(code.to_string()));
        }
        let code = account.code.clone();
        self.store.set(code, amount);
        if self.batch_depth == 0 {
            recompute_all(&self.directory, &mut self.store);
        }
        Ok(())
    }

    /// Opens a batch; edits stop triggering roll-ups until the matching
    /// `end_batch`.  Batches nest.
    pub fn begin_batch(&mut self) {
        self.batch_depth += 1;
    }

    /// Closes a batch; the outermost close runs the deferred roll-up.
    pub fn end_batch(&mut self) {
        self.batch_depth = self.batch_depth.saturating_sub(1);
        if self.batch_depth == 0 {
            recompute_all(&self.directory, &mut self.store);
        }
    }

    /// Runs `f` with roll-ups deferred to a single pass at the end.
    pub fn batch<F, T>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        self.begin_batch();
        let result = f(self);
        self.end_batch();
        result
    }

    pub fn balance(&self, code: &str) -> Decimal {
        self.store.get(code)
    }

    /// Full dump in code order; see [`BalanceStore::snapshot`].
    pub fn snapshot(&self) -> BTreeMap<AccountCode<'a>, Decimal> {
        self.store.snapshot()
    }

    pub fn directory(&self) -> &AccountDirectory<'a> {
        &self.directory
    }

    pub fn store(&self) -> &BalanceStore<'a> {
        &self.store
    }

    pub fn into_parts(self) -> (AccountDirectory<'a>, BalanceStore<'a>) {
        (self.directory, self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::{Account, Direction};

    fn account(
        code: &'static str,
        parent: Option<&'static str>,
        level: u32,
        is_leaf: bool,
        direction: Direction,
    ) -> Account<'static> {
        Account::builder()
            .code(code.into())
            .name(code.into())
            .parent_code(parent.map(Into::into))
            .level(level)
            .is_leaf(is_leaf)
            .direction(direction)
            .build()
    }

    fn worksheet() -> BalanceWorksheet<'static> {
        let directory = AccountDirectory::load(vec![
            account("1000", None, 0, false, Direction::Debit),
            account("1001", Some("1000"), 1, true, Direction::Debit),
            account("1002", Some("1000"), 1, true, Direction::Credit),
        ])
        .unwrap();
        BalanceWorksheet::new(directory, BalanceStore::new())
    }

    fn money(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn new_worksheet_rolls_up_seeded_leaves() {
        let directory = AccountDirectory::load(vec![
            account("1000", None, 0, false, Direction::Debit),
            account("1001", Some("1000"), 1, true, Direction::Debit),
        ])
        .unwrap();
        let store = BalanceStore::seed(vec![("1001".into(), money(500))]);
        let worksheet = BalanceWorksheet::new(directory, store);
        assert_eq!(worksheet.balance("1000"), money(500));
    }

    #[test]
    fn leaf_edit_updates_ancestors() {
        let mut worksheet = worksheet();
        worksheet.set_leaf_balance("1001", money(10000)).unwrap();
        assert_eq!(worksheet.balance("1000"), money(10000));
        worksheet.set_leaf_balance("1002", money(4000)).unwrap();
        assert_eq!(worksheet.balance("1000"), money(6000));
    }

    #[test]
    fn rejects_unknown_and_non_leaf_codes() {
        let mut worksheet = worksheet();
        assert_eq!(
            worksheet.set_leaf_balance("9999", money(100)),
            Err(EditError::UnknownAccount("9999".into()))
        );
        assert_eq!(
            worksheet.set_leaf_balance("1000", money(100)),
            Err(EditError::NotALeaf("1000".into()))
        );
    }

    #[test]
    fn batch_defers_the_roll_up() {
        let mut worksheet = worksheet();
        worksheet.begin_batch();
        worksheet.set_leaf_balance("1001", money(10000)).unwrap();
        worksheet.set_leaf_balance("1002", money(4000)).unwrap();
        assert_eq!(worksheet.balance("1000"), Decimal::ZERO);
        worksheet.end_batch();
        assert_eq!(worksheet.balance("1000"), money(6000));
    }

    #[test]
    fn batches_nest() {
        let mut worksheet = worksheet();
        worksheet.begin_batch();
        worksheet.begin_batch();
        worksheet.set_leaf_balance("1001", money(100)).unwrap();
        worksheet.end_batch();
        assert_eq!(worksheet.balance("1000"), Decimal::ZERO);
        worksheet.end_batch();
        assert_eq!(worksheet.balance("1000"), money(100));
    }

    #[test]
    fn batch_closure_runs_one_pass() {
        let mut worksheet = worksheet();
        worksheet.batch(|ws| {
            ws.set_leaf_balance("1001", money(10000)).unwrap();
            ws.set_leaf_balance("1002", money(4000)).unwrap();
        });
        assert_eq!(worksheet.balance("1000"), money(6000));
    }
}
