use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use std::borrow::Cow;

use super::date::Date;

/// A journal voucher: one dated, numbered bundle of debit/credit entries.
///
/// Vouchers are the source of all posted activity.  Each voucher belongs to
/// a book identified by its word (for example `GEN` for the general
/// journal) and carries a sequence number within that book; the pair is
/// displayed zero-padded, as in `GEN-0007`.
///
/// ```text
/// 2025-01-31 GEN-0007 "Opening balances"
///     1001 Cash on hand     5000.00     0.00
///     3001 Owner equity        0.00  5000.00
/// ```
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Voucher<'a> {
    #[cfg_attr(feature = "serde", serde(borrow))]
    pub date: Date<'a>,

    /// Voucher book prefix.
    #[cfg_attr(feature = "serde", serde(rename = "type", borrow))]
    pub word: Cow<'a, str>,

    /// Sequence number within the book.
    pub number: u32,

    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default, borrow))]
    pub summary: Cow<'a, str>,

    pub entries: Vec<VoucherEntry<'a>>,
}

/// A single debit or credit line of a voucher, posted to a leaf account.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoucherEntry<'a> {
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default, borrow))]
    pub summary: Cow<'a, str>,

    #[cfg_attr(feature = "serde", serde(borrow))]
    pub account_code: Cow<'a, str>,

    #[builder(default)]
    pub debit: Decimal,

    #[builder(default)]
    pub credit: Decimal,
}

impl<'a> Voucher<'a> {
    /// The display reference: word plus zero-padded number, `GEN-0007`.
    pub fn reference(&self) -> String {
        format!("{}-{:04}", self.word, self.number)
    }

    pub fn total_debit(&self) -> Decimal {
        self.entries.iter().map(|e| e.debit).sum()
    }

    pub fn total_credit(&self) -> Decimal {
        self.entries.iter().map(|e| e.credit).sum()
    }

    /// Whether the debit and credit columns agree.
    pub fn is_balanced(&self) -> bool {
        self.total_debit() == self.total_credit()
    }
}

/// Next free sequence number for a voucher word, given the vouchers already
/// in the book.  The caller scopes `existing` to the period it numbers
/// within.
pub fn next_number<'a, 'v: 'a, I>(word: &str, existing: I) -> u32
where
    I: IntoIterator<Item = &'a Voucher<'v>>,
{
    existing
        .into_iter()
        .filter(|v| v.word == word)
        .map(|v| v.number)
        .max()
        .map_or(1, |n| n + 1)
}
