use std::{io, io::Write};

use thiserror::Error;

use abacus_core::{round_currency, Account, Voucher, VoucherEntry};
use abacus_rollup::{AccountDirectory, BalanceWorksheet};

#[cfg(test)]
mod tests;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct BasicRenderer {}

impl BasicRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Renders the opening-balance worksheet as a plain-text table.
pub fn render<W: Write>(
    w: &mut W,
    worksheet: &BalanceWorksheet<'_>,
) -> Result<(), BasicRendererError> {
    BasicRenderer::default().render(worksheet, w)
}

#[derive(Error, Debug)]
pub enum BasicRendererError {
    #[error("an io error occurred")]
    Io(#[from] io::Error),
}

pub trait Renderer<T, W: Write> {
    type Error;
    fn render(&self, renderable: T, write: &mut W) -> Result<(), Self::Error>;
}

impl<'a, W: Write> Renderer<&'a Account<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, account: &'a Account<'_>, write: &mut W) -> Result<(), Self::Error> {
        writeln!(
            write,
            "{}\t{}\t{}\t{}",
            account.code,
            account.name,
            account.direction,
            account.level
        )?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a AccountDirectory<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, directory: &'a AccountDirectory<'_>, write: &mut W) -> Result<(), Self::Error> {
        for account in directory.accounts() {
            self.render(account, write)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a BalanceWorksheet<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, worksheet: &'a BalanceWorksheet<'_>, write: &mut W) -> Result<(), Self::Error> {
        for account in worksheet.directory().accounts() {
            writeln!(
                write,
                "{}\t{}\t{:.2}",
                account.code,
                account.name,
                round_currency(worksheet.balance(&account.code))
            )?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a VoucherEntry<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, entry: &'a VoucherEntry<'_>, write: &mut W) -> Result<(), Self::Error> {
        writeln!(
            write,
            "\t{}\t{}\t{:.2}\t{:.2}",
            entry.account_code,
            entry.summary,
            entry.debit,
            entry.credit
        )?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Voucher<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, voucher: &'a Voucher<'_>, write: &mut W) -> Result<(), Self::Error> {
        writeln!(
            write,
            "{} {} \"{}\"",
            voucher.date,
            voucher.reference(),
            voucher.summary
        )?;
        for entry in &voucher.entries {
            self.render(entry, write)?;
        }
        writeln!(
            write,
            "\ttotal\t\t{:.2}\t{:.2}",
            voucher.total_debit(),
            voucher.total_credit()
        )?;
        Ok(())
    }
}
