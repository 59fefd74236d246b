use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections raised while loading a chart of accounts.
///
/// Loading is all-or-nothing: any of these leaves the caller without a
/// directory rather than with a partially indexed one.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ValidationError {
    #[error("duplicate account code '{0}'")]
    DuplicateCode(String),

    #[error("account '{code}' references unknown parent '{parent}'")]
    UnknownParent { code: String, parent: String },

    #[error("account '{0}' participates in a parent cycle")]
    ParentCycle(String),

    #[error("account '{parent}' is marked leaf but has child '{code}'")]
    LeafWithChildren { parent: String, code: String },

    #[error(
        "account '{code}' (level {level}) does not sit strictly below \
         parent '{parent}' (level {parent_level})"
    )]
    LevelInversion {
        code: String,
        level: u32,
        parent: String,
        parent_level: u32,
    },
}

/// Rejections of a worksheet edit.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum EditError {
    #[error("unknown account '{0}'")]
    UnknownAccount(String),

    #[error("account '{0}' is not a leaf; its balance is derived")]
    NotALeaf(String),
}

/// Rejections of a voucher draft, mirroring the checks an entry form runs
/// before submitting.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum VoucherError {
    #[error("a voucher needs at least two entries, got {0}")]
    TooFewEntries(usize),

    #[error("entry for account '{0}' has a negative amount")]
    NegativeAmount(String),

    #[error("entry for account '{0}' sets both debit and credit")]
    BothSides(String),

    #[error("voucher does not balance: debit {debit} != credit {credit}")]
    Unbalanced { debit: Decimal, credit: Decimal },

    #[error("voucher total must not be zero")]
    ZeroTotal,

    #[error("entry references unknown account '{0}'")]
    UnknownAccount(String),

    #[error("entry posts to non-leaf account '{0}'")]
    NonLeafAccount(String),
}
