// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Local;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Display format for entry timestamps, fixed for store compatibility.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

/// A single recorded financial movement. Immutable once constructed;
/// removal only happens through a full ledger reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub kind: EntryKind,
    pub description: String,
    pub amount: Decimal,
    pub timestamp: String,
}

impl Entry {
    /// Validates and builds an entry stamped with the current local time.
    pub fn new(
        kind: EntryKind,
        description: &str,
        amount: Decimal,
    ) -> Result<Self, ValidationError> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(kind, description, amount, timestamp)
    }

    /// Same validation as [`Entry::new`] with a caller-supplied timestamp.
    /// The store uses this on load so persisted timestamps round-trip
    /// verbatim.
    pub fn with_timestamp(
        kind: EntryKind,
        description: &str,
        amount: Decimal,
        timestamp: String,
    ) -> Result<Self, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount(amount));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(Self {
            kind,
            description: description.to_string(),
            amount,
            timestamp,
        })
    }
}
