// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Entry, EntryKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceState {
    Surplus,
    Deficit,
}

/// Income/expense/net totals over a ledger. Income and expense are sums of
/// strictly positive amounts, so both are always >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

impl Totals {
    pub fn state(&self) -> BalanceState {
        if self.net >= Decimal::ZERO {
            BalanceState::Surplus
        } else {
            BalanceState::Deficit
        }
    }
}

/// Folds the ledger into totals. Pure and order-independent: the result is
/// the same for any permutation of `entries`.
pub fn compute(entries: &[Entry]) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for entry in entries {
        match entry.kind {
            EntryKind::Income => income += entry.amount,
            EntryKind::Expense => expense += entry.amount,
        }
    }
    Totals {
        income,
        expense,
        net: income - expense,
    }
}
