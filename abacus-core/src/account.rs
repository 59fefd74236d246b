use typed_builder::TypedBuilder;

use std::borrow::Cow;

use super::direction::Direction;

/// Represents one entry in the chart of accounts.
///
/// Accounts form a forest encoded through parent references: each account
/// names its parent's code, roots name none.  `level` is the depth in that
/// hierarchy, smallest at the roots, and every child sits at a strictly
/// greater level than its parent.  Only leaf accounts take postings; every
/// other account carries a balance derived from its children.
///
/// Some example accounts:
///
/// ```text
/// 1000  Current assets        debit   level 0
/// 1001  Cash on hand          debit   level 1  (parent 1000)
/// 1002  Bank deposits         debit   level 1  (parent 1000)
/// 2000  Current liabilities   credit  level 0
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash, TypedBuilder)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Account<'a> {
    /// Unique code identifying the account, stable across the system.
    #[cfg_attr(feature = "serde", serde(rename = "account_code", borrow))]
    pub code: Cow<'a, str>,

    /// Display name.
    #[cfg_attr(feature = "serde", serde(rename = "account_name", borrow))]
    pub name: Cow<'a, str>,

    /// Code of the parent account; `None` for top-level accounts.
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default, borrow))]
    pub parent_code: Option<Cow<'a, str>>,

    /// Depth in the hierarchy; root accounts carry the smallest value.
    pub level: u32,

    /// True iff no account references this one as its parent.
    pub is_leaf: bool,

    /// The account's normal balance side, fixed at creation.
    #[cfg_attr(feature = "serde", serde(rename = "balance_direction"))]
    pub direction: Direction,
}
