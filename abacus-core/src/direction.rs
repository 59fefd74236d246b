use std::fmt;

/// The normal balance side of an account.
///
/// Debit-direction accounts (assets, expenses) grow on the debit side,
/// credit-direction accounts (liabilities, equity, income) on the credit
/// side.  A child whose direction differs from its parent's contributes its
/// balance negatively when rolled up.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    Debit,
    Credit,
}

impl Direction {
    /// The spelling used by the wire format and by rendered tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Debit => "debit",
            Direction::Credit => "credit",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
