// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use bilancio::{cli, commands, ledger::Ledger, store::LedgerStore};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = match matches.get_one::<String>("file") {
        Some(p) => PathBuf::from(p),
        None => LedgerStore::default_path()?,
    };
    let store = LedgerStore::new(path);
    let mut ledger = Ledger::load(&store)?;

    match matches.subcommand() {
        Some(("entry", sub)) => commands::entries::handle(&mut ledger, &store, sub)?,
        Some(("balance", sub)) => commands::report::handle(&ledger, sub)?,
        Some(("reset", _)) => commands::reset::handle(&mut ledger, &store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
