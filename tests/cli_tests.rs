// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bilancio::ledger::Ledger;
use bilancio::models::EntryKind;
use bilancio::store::LedgerStore;
use bilancio::{cli, commands};
use tempfile::tempdir;

#[test]
fn entry_add_persists_to_the_store() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("transazioni.csv"));
    let mut ledger = Ledger::new();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "bilancio", "entry", "add", "expense", "Supermercato", "45.30",
    ]);
    if let Some(("entry", entry_m)) = matches.subcommand() {
        commands::entries::handle(&mut ledger, &store, entry_m).unwrap();
    } else {
        panic!("no entry subcommand");
    }

    assert_eq!(ledger.len(), 1);
    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].kind, EntryKind::Expense);
    assert_eq!(loaded[0].description, "Supermercato");
    assert_eq!(loaded[0].amount, "45.30".parse().unwrap());
}

#[test]
fn entry_add_rejects_a_non_positive_amount() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("transazioni.csv"));
    let mut ledger = Ledger::new();

    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["bilancio", "entry", "add", "expense", "Rent", "-5.00"]);
    if let Some(("entry", entry_m)) = matches.subcommand() {
        assert!(commands::entries::handle(&mut ledger, &store, entry_m).is_err());
    } else {
        panic!("no entry subcommand");
    }
    assert!(ledger.is_empty());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn reset_clears_both_memory_and_disk() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("transazioni.csv"));
    let mut ledger = Ledger::new();

    for args in [
        ["bilancio", "entry", "add", "income", "Stipendio", "1500.00"],
        ["bilancio", "entry", "add", "expense", "Affitto", "900.00"],
    ] {
        let matches = cli::build_cli().get_matches_from(args);
        if let Some(("entry", entry_m)) = matches.subcommand() {
            commands::entries::handle(&mut ledger, &store, entry_m).unwrap();
        } else {
            panic!("no entry subcommand");
        }
    }
    assert_eq!(ledger.len(), 2);

    commands::reset::handle(&mut ledger, &store).unwrap();
    assert!(ledger.is_empty());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn balance_command_runs_over_a_loaded_ledger() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("transazioni.csv"));
    let mut ledger = Ledger::new();

    let matches = cli::build_cli().get_matches_from([
        "bilancio", "entry", "add", "income", "Stipendio", "1500.00",
    ]);
    if let Some(("entry", entry_m)) = matches.subcommand() {
        commands::entries::handle(&mut ledger, &store, entry_m).unwrap();
    } else {
        panic!("no entry subcommand");
    }

    // a fresh session sees the persisted entries
    let reloaded = Ledger::load(&store).unwrap();
    assert_eq!(reloaded.len(), 1);

    let matches = cli::build_cli().get_matches_from(["bilancio", "balance", "--json"]);
    if let Some(("balance", balance_m)) = matches.subcommand() {
        commands::report::handle(&reloaded, balance_m).unwrap();
    } else {
        panic!("no balance subcommand");
    }
}
