// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bilancio::balance::{self, BalanceState};
use bilancio::models::{Entry, EntryKind};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn entry(kind: EntryKind, desc: &str, amount: &str) -> Entry {
    Entry::with_timestamp(kind, desc, dec(amount), "01/03/2024 09:00".to_string()).unwrap()
}

#[test]
fn empty_ledger_totals_are_zero() {
    let totals = balance::compute(&[]);
    assert_eq!(totals.income, Decimal::ZERO);
    assert_eq!(totals.expense, Decimal::ZERO);
    assert_eq!(totals.net, Decimal::ZERO);
    assert_eq!(totals.state(), BalanceState::Surplus);
}

#[test]
fn salary_groceries_rent_scenario() {
    let entries = vec![
        entry(EntryKind::Income, "Salary", "1500.00"),
        entry(EntryKind::Expense, "Groceries", "45.30"),
        entry(EntryKind::Expense, "Rent", "900.00"),
    ];
    let totals = balance::compute(&entries);
    assert_eq!(totals.income, dec("1500.00"));
    assert_eq!(totals.expense, dec("945.30"));
    assert_eq!(totals.net, dec("554.70"));
    assert_eq!(totals.state(), BalanceState::Surplus);
}

#[test]
fn net_below_zero_is_a_deficit() {
    let entries = vec![
        entry(EntryKind::Income, "Tips", "10.00"),
        entry(EntryKind::Expense, "Dinner", "25.00"),
    ];
    let totals = balance::compute(&entries);
    assert_eq!(totals.net, dec("-15.00"));
    assert_eq!(totals.state(), BalanceState::Deficit);
}

#[test]
fn totals_are_never_negative_for_valid_entries() {
    let entries = vec![
        entry(EntryKind::Expense, "A", "3.33"),
        entry(EntryKind::Expense, "B", "6.67"),
    ];
    let totals = balance::compute(&entries);
    assert!(totals.income >= Decimal::ZERO);
    assert!(totals.expense >= Decimal::ZERO);
}

#[test]
fn compute_is_additive_over_concatenation() {
    let a = vec![
        entry(EntryKind::Income, "Salary", "1200.00"),
        entry(EntryKind::Expense, "Rent", "800.00"),
    ];
    let b = vec![
        entry(EntryKind::Income, "Refund", "30.50"),
        entry(EntryKind::Expense, "Coffee", "2.40"),
    ];
    let mut ab = a.clone();
    ab.extend(b.clone());

    let ta = balance::compute(&a);
    let tb = balance::compute(&b);
    let tab = balance::compute(&ab);
    assert_eq!(tab.income, ta.income + tb.income);
    assert_eq!(tab.expense, ta.expense + tb.expense);
    assert_eq!(tab.net, ta.net + tb.net);
}

#[test]
fn result_does_not_depend_on_entry_order() {
    let mut entries = vec![
        entry(EntryKind::Income, "Salary", "1500.00"),
        entry(EntryKind::Expense, "Groceries", "45.30"),
        entry(EntryKind::Expense, "Rent", "900.00"),
    ];
    let forward = balance::compute(&entries);
    entries.reverse();
    let backward = balance::compute(&entries);
    assert_eq!(forward, backward);
}
