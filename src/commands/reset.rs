// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::ledger::Ledger;
use crate::store::LedgerStore;

pub fn handle(ledger: &mut Ledger, store: &LedgerStore) -> Result<()> {
    let removed = ledger.len();
    ledger
        .reset_and_save(store)
        .context("Reset was not persisted; ledger unchanged")?;
    println!("Removed {} entries; ledger is empty.", removed);
    Ok(())
}
