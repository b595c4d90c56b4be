// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::models::{Entry, EntryKind};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.bilancio", "Bilancio", "bilancio"));

/// Store filename kept from the original ledger for data compatibility.
const STORE_FILE: &str = "transazioni.csv";

pub const HEADER: [&str; 4] = ["kind", "description", "amount", "timestamp"];

/// On-disk kind tokens. These literals are the storage format and must be
/// preserved exactly; the mapping to [`EntryKind`] lives only here.
const TOKEN_INCOME: &str = "entrata";
const TOKEN_EXPENSE: &str = "uscita";

fn kind_token(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Income => TOKEN_INCOME,
        EntryKind::Expense => TOKEN_EXPENSE,
    }
}

fn kind_from_token(token: &str) -> Option<EntryKind> {
    match token {
        TOKEN_INCOME => Some(EntryKind::Income),
        TOKEN_EXPENSE => Some(EntryKind::Expense),
        _ => None,
    }
}

/// Durable CSV-backed storage for the full entry collection. The store is
/// the sole writer of its file; concurrent external modification is not
/// supported.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves the platform data dir and returns the default store path,
    /// creating the directory if needed.
    pub fn default_path() -> Result<PathBuf> {
        let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
            .context("Could not determine platform-specific data dir")?;
        let data_dir = proj.data_dir();
        fs::create_dir_all(data_dir).context("Failed to create data dir")?;
        Ok(data_dir.join(STORE_FILE))
    }

    /// Overwrites the store with the given entries, header first, in order.
    /// The write goes to a sibling `.tmp` file and is renamed over the
    /// target, so a failure never leaves a truncated store behind.
    pub fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let tmp = tmp_path(&self.path);
        if let Err(source) = write_all(&tmp, entries) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            });
        }
        fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            StoreError::WriteFailed {
                path: self.path.clone(),
                source: source.into(),
            }
        })
    }

    /// Reads the full entry collection back in stored order. A missing file
    /// is an empty ledger, not an error; a malformed header or row aborts
    /// the whole load.
    pub fn load(&self) -> Result<Vec<Entry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| StoreError::Corrupt {
                line: 0,
                reason: e.to_string(),
            })?;

        let header = rdr.headers().map_err(|e| StoreError::Corrupt {
            line: 1,
            reason: e.to_string(),
        })?;
        if header.iter().ne(HEADER) {
            return Err(StoreError::Corrupt {
                line: 1,
                reason: format!(
                    "unexpected header '{}'",
                    header.iter().collect::<Vec<_>>().join(",")
                ),
            });
        }

        let mut entries = Vec::new();
        for result in rdr.records() {
            let rec = result.map_err(|e| StoreError::Corrupt {
                line: e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(0),
                reason: e.to_string(),
            })?;
            let line = rec.position().map(|p| p.line()).unwrap_or(0);
            entries.push(parse_record(&rec, line)?);
        }
        Ok(entries)
    }
}

fn write_all(tmp: &Path, entries: &[Entry]) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new().from_path(tmp)?;
    wtr.write_record(HEADER)?;
    for entry in entries {
        let amount = serialize_amount(entry.amount);
        wtr.write_record([
            kind_token(entry.kind),
            entry.description.as_str(),
            amount.as_str(),
            entry.timestamp.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn parse_record(rec: &csv::StringRecord, line: u64) -> Result<Entry, StoreError> {
    let corrupt = |reason: String| StoreError::Corrupt { line, reason };

    let token = rec
        .get(0)
        .ok_or_else(|| corrupt("missing kind field".into()))?;
    let kind =
        kind_from_token(token).ok_or_else(|| corrupt(format!("unknown kind token '{}'", token)))?;
    let description = rec
        .get(1)
        .ok_or_else(|| corrupt("missing description field".into()))?;
    let amount_raw = rec
        .get(2)
        .ok_or_else(|| corrupt("missing amount field".into()))?;
    let timestamp = rec
        .get(3)
        .ok_or_else(|| corrupt("missing timestamp field".into()))?;

    let amount = amount_raw
        .parse::<Decimal>()
        .map_err(|_| corrupt(format!("amount '{}' is not a number", amount_raw)))?;

    Entry::with_timestamp(kind, description, amount, timestamp.to_string())
        .map_err(|e| corrupt(e.to_string()))
}

/// Amounts are stored with at least two decimal digits. Extra precision is
/// kept as-is so load(save(e)) == e.
fn serialize_amount(amount: Decimal) -> String {
    let mut amount = amount;
    if amount.scale() < 2 {
        amount.rescale(2);
    }
    amount.to_string()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
