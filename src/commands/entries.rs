// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::ledger::Ledger;
use crate::models::{Entry, EntryKind};
use crate::store::LedgerStore;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, pretty_table};

pub fn handle(ledger: &mut Ledger, store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, store, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let kind = match sub.get_one::<String>("kind").unwrap().as_str() {
        "income" => EntryKind::Income,
        _ => EntryKind::Expense,
    };
    let description = sub.get_one::<String>("description").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;

    let entry = Entry::new(kind, description, amount).context("Entry rejected")?;
    let money = fmt_money(&entry.amount);
    let label = kind_label(entry.kind);
    ledger
        .append_and_save(entry, store)
        .context("Entry was not persisted; ledger unchanged")?;
    println!("Recorded {}: {} - {}", label, description.trim(), money);
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &ledger.entries())? {
        return Ok(());
    }
    if ledger.is_empty() {
        println!("No entries recorded.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = ledger
        .entries()
        .iter()
        .map(|e| {
            vec![
                kind_label(e.kind).to_string(),
                e.description.clone(),
                fmt_money(&e.amount),
                e.timestamp.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Kind", "Description", "Amount", "Recorded"], rows)
    );
    Ok(())
}

pub fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Income => "income",
        EntryKind::Expense => "expense",
    }
}
