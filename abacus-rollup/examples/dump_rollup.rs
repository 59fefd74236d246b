use std::collections::HashMap;

use rust_decimal::Decimal;

use abacus_core::Account;
use abacus_rollup::{recompute_all, AccountDirectory, BalanceStore};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let chart_path = std::env::args().nth(1).ok_or("chart file argument")?;
    let balances_path = std::env::args().nth(2).ok_or("balances file argument")?;

    let chart = std::fs::read_to_string(chart_path)?;
    let accounts: Vec<Account> = serde_json::from_str(&chart)?;
    let directory = AccountDirectory::load(accounts)?;

    let balances = std::fs::read_to_string(balances_path)?;
    let leaf_balances: HashMap<String, Decimal> = serde_json::from_str(&balances)?;
    let mut store = BalanceStore::seed(
        leaf_balances
            .into_iter()
            .map(|(code, amount)| (code.into(), amount)),
    );

    recompute_all(&directory, &mut store);
    dbg!(store.snapshot());
    Ok(())
}

fn main() {
    match run() {
        Err(e) => println!("Error: {}", e),
        _ => {}
    }
}
