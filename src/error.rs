// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected entry submission. Nothing is created or persisted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),
    #[error("description must not be empty")]
    EmptyDescription,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write ledger file {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// Malformed store content. Load aborts on the first bad row; nothing
    /// partial is returned.
    #[error("corrupt ledger row at line {line}: {reason}")]
    Corrupt { line: u64, reason: String },
}
