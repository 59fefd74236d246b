use crate::{render, BasicRenderer, Renderer};

use abacus_core::{Account, Date, Direction, Voucher, VoucherEntry};
use abacus_rollup::{AccountDirectory, BalanceStore, BalanceWorksheet};
use indoc::indoc;
use rust_decimal::Decimal;

fn account(
    code: &'static str,
    name: &'static str,
    parent: Option<&'static str>,
    level: u32,
    is_leaf: bool,
    direction: Direction,
) -> Account<'static> {
    Account::builder()
        .code(code.into())
        .name(name.into())
        .parent_code(parent.map(Into::into))
        .level(level)
        .is_leaf(is_leaf)
        .direction(direction)
        .build()
}

fn directory() -> AccountDirectory<'static> {
    AccountDirectory::load(vec![
        account("1000", "Current assets", None, 0, false, Direction::Debit),
        account("1001", "Cash on hand", Some("1000"), 1, true, Direction::Debit),
        account("2000", "Payables", None, 0, true, Direction::Credit),
    ])
    .unwrap()
}

fn rendered<T>(renderable: T) -> anyhow::Result<String>
where
    BasicRenderer: Renderer<T, Vec<u8>, Error = crate::BasicRendererError>,
{
    let mut out = Vec::new();
    BasicRenderer::new().render(renderable, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_chart_listing() -> anyhow::Result<()> {
    let directory = directory();
    assert_eq!(
        rendered(&directory)?,
        indoc! {"
            1000\tCurrent assets\tdebit\t0
            1001\tCash on hand\tdebit\t1
            2000\tPayables\tcredit\t0
        "}
    );
    Ok(())
}

#[test]
fn test_worksheet_table() -> anyhow::Result<()> {
    let store = BalanceStore::seed(vec![
        ("1001".into(), Decimal::new(10000, 2)),
        ("2000".into(), Decimal::new(2550, 2)),
    ]);
    let worksheet = BalanceWorksheet::new(directory(), store);

    let mut out = Vec::new();
    render(&mut out, &worksheet)?;
    assert_eq!(
        String::from_utf8(out)?,
        indoc! {"
            1000\tCurrent assets\t100.00
            1001\tCash on hand\t100.00
            2000\tPayables\t25.50
        "}
    );
    Ok(())
}

#[test]
fn test_unset_balances_render_as_zero() -> anyhow::Result<()> {
    let worksheet = BalanceWorksheet::new(directory(), BalanceStore::new());
    let out = rendered(&worksheet)?;
    assert!(out.contains("2000\tPayables\t0.00"));
    Ok(())
}

#[test]
fn test_voucher_with_totals() -> anyhow::Result<()> {
    let voucher = Voucher::builder()
        .date(Date::from_str_unchecked("2025-01-31"))
        .word("GEN".into())
        .number(7)
        .summary("Opening balances".into())
        .entries(vec![
            VoucherEntry::builder()
                .account_code("1001".into())
                .summary("cash".into())
                .debit(Decimal::new(500000, 2))
                .build(),
            VoucherEntry::builder()
                .account_code("3001".into())
                .summary("equity".into())
                .credit(Decimal::new(500000, 2))
                .build(),
        ])
        .build();

    let expected = concat!(
        "2025-01-31 GEN-0007 \"Opening balances\"\n",
        "\t1001\tcash\t5000.00\t0.00\n",
        "\t3001\tequity\t0.00\t5000.00\n",
        "\ttotal\t\t5000.00\t5000.00\n",
    );
    assert_eq!(rendered(&voucher)?, expected);
    Ok(())
}
