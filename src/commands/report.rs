// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::balance::{self, BalanceState};
use crate::ledger::Ledger;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let totals = balance::compute(ledger.entries());
    if maybe_print_json(json_flag, jsonl_flag, &totals)? {
        return Ok(());
    }
    let rows = vec![vec![
        fmt_money(&totals.income),
        fmt_money(&totals.expense),
        fmt_money(&totals.net),
    ]];
    println!("{}", pretty_table(&["Income", "Expense", "Net"], rows));
    match totals.state() {
        BalanceState::Surplus => println!("Surplus: you are in the black."),
        BalanceState::Deficit => println!("Deficit: you are in the red."),
    }
    Ok(())
}
