use rust_decimal::Decimal;

use abacus_core::Voucher;

use crate::directory::AccountDirectory;
use crate::error::VoucherError;

/// Checks a voucher draft the way an entry form does before submitting:
/// shape first, then balance, then account references.
///
/// Posting itself, and whatever further rules the posting side enforces,
/// stays outside this crate; these are the checks that make a draft worth
/// sending at all.
pub fn check_voucher(
    directory: &AccountDirectory<'_>,
    voucher: &Voucher<'_>,
) -> Result<(), VoucherError> {
    if voucher.entries.len() < 2 {
        return Err(VoucherError::TooFewEntries(voucher.entries.len()));
    }

    for entry in &voucher.entries {
        if entry.debit < Decimal::ZERO || entry.credit < Decimal::ZERO {
            return Err(VoucherError::NegativeAmount(entry.account_code.to_string()));
        }
        if !entry.debit.is_zero() && !entry.credit.is_zero() {
            return Err(VoucherError::BothSides(entry.account_code.to_string()));
        }
    }

    let debit = voucher.total_debit();
    let credit = voucher.total_credit();
    if debit != credit {
        return Err(VoucherError::Unbalanced { debit, credit });
    }
    if debit.is_zero() {
        return Err(VoucherError::ZeroTotal);
    }

    for entry in &voucher.entries {
        match directory.get(&entry.account_code) {
            None => {
                return Err(VoucherError::UnknownAccount(entry.account_code.to_string()));
            }
            Some(account) if !account.is_leaf => {
                return Err(VoucherError::NonLeafAccount(entry.account_code.to_string()));
            }
            Some(_) => {}
        }
    }

    Ok(())
}
