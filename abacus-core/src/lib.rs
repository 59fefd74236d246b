use std::borrow::Cow;

pub use account::Account;
pub use amount::{round_currency, CURRENCY_SCALE};
pub use date::Date;
pub use direction::Direction;
pub use voucher::{next_number, Voucher, VoucherEntry};

pub mod account;
pub mod amount;
mod date;
pub mod direction;
pub mod voucher;

/// Identifies an account in the chart of accounts.
pub type AccountCode<'a> = Cow<'a, str>;

/// The period key under which opening balances are scoped and persisted.
pub type FiscalYear = u16;
