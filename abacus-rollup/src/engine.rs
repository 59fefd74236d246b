use rust_decimal::Decimal;

use abacus_core::round_currency;

use crate::directory::AccountDirectory;
use crate::store::BalanceStore;

/// Recomputes every non-leaf balance as the signed sum of its children.
///
/// Parents are visited deepest level first, so by the time any parent is
/// reached each of its children is either a leaf, authoritative by
/// construction, or a parent finalized in an earlier iteration; one pass
/// suffices and no recursion is involved.  A child whose direction matches
/// its parent's adds its balance, an opposite-direction child subtracts.
/// Every write is rounded to currency scale, leaves are never written, and
/// the pass cannot fail part-way: the level consistency the order depends
/// on is rejected at directory load, not here.
pub fn recompute_all<'a>(directory: &AccountDirectory<'a>, store: &mut BalanceStore<'a>) {
    let mut parents = 0usize;
    for parent in directory.non_leaf_by_descending_level() {
        let mut total = Decimal::ZERO;
        for child in directory.children_of(&parent.code) {
            let child_balance = store.get(&child.code);
            if child.direction == parent.direction {
                total += child_balance;
            } else {
                total -= child_balance;
            }
        }
        store.set(parent.code.clone(), round_currency(total));
        parents += 1;
    }
    log::trace!("rolled up {} parent accounts", parents);
}
