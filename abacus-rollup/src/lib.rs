//! Opening-balance roll-up for a double-entry chart of accounts.
//!
//! The account source supplies a flat account list; [`AccountDirectory`]
//! validates and indexes it once per fiscal-year selection.  Persisted leaf
//! balances seed a [`BalanceStore`], and [`recompute_all`] derives every
//! non-leaf balance from its children in a single pass.  Interactive
//! callers go through a [`BalanceWorksheet`], which enforces the leaf-only
//! edit policy and re-runs the roll-up after every edit or batch of edits.
//!
//! ```
//! use abacus_core::{Account, Direction};
//! use abacus_rollup::{AccountDirectory, BalanceStore, BalanceWorksheet};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = AccountDirectory::load(vec![
//!     Account::builder()
//!         .code("1000".into())
//!         .name("Current assets".into())
//!         .level(0)
//!         .is_leaf(false)
//!         .direction(Direction::Debit)
//!         .build(),
//!     Account::builder()
//!         .code("1001".into())
//!         .name("Cash on hand".into())
//!         .parent_code(Some("1000".into()))
//!         .level(1)
//!         .is_leaf(true)
//!         .direction(Direction::Debit)
//!         .build(),
//! ])?;
//!
//! let mut worksheet = BalanceWorksheet::new(directory, BalanceStore::new());
//! worksheet.set_leaf_balance("1001", Decimal::new(10000, 2))?;
//! assert_eq!(worksheet.balance("1000"), Decimal::new(10000, 2));
//! # Ok(())
//! # }
//! ```

pub use directory::AccountDirectory;
pub use engine::recompute_all;
pub use error::{EditError, ValidationError, VoucherError};
pub use store::BalanceStore;
pub use vouchers::check_voucher;
pub use worksheet::BalanceWorksheet;

pub mod directory;
pub mod engine;
pub mod error;
pub mod store;
pub mod vouchers;
pub mod worksheet;
