// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::StoreError;
use crate::models::Entry;
use crate::store::LedgerStore;

/// The ordered collection of all entries for the current session. Owned
/// explicitly by the caller and threaded through every operation; the only
/// mutations are durable append and full reset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Loads the persisted ledger at session start.
    pub fn load(store: &LedgerStore) -> Result<Self, StoreError> {
        Ok(Self::from_entries(store.load()?))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry and flushes the whole ledger to the store. An
    /// append only counts as durable once the save succeeds; on failure the
    /// entry is rolled back so memory and disk stay consistent.
    pub fn append_and_save(&mut self, entry: Entry, store: &LedgerStore) -> Result<(), StoreError> {
        self.entries.push(entry);
        if let Err(e) = store.save(&self.entries) {
            self.entries.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Clears every entry and persists the empty store.
    pub fn reset_and_save(&mut self, store: &LedgerStore) -> Result<(), StoreError> {
        store.save(&[])?;
        self.entries.clear();
        Ok(())
    }
}
