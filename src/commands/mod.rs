// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod entries;
pub mod report;
pub mod reset;
