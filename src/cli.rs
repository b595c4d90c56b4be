// Copyright (c) 2025 Bilancio Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("bilancio")
        .version(crate_version!())
        .about("Personal income/expense ledger with a durable CSV store")
        .arg(
            Arg::new("file")
                .long("file")
                .value_name("PATH")
                .global(true)
                .help("Ledger file path (defaults to the platform data dir)"),
        )
        .subcommand(
            Command::new("entry")
                .about("Record and list ledger entries")
                .subcommand(
                    Command::new("add")
                        .about("Record a new income or expense entry")
                        .arg(
                            Arg::new("kind")
                                .required(true)
                                .value_parser(["income", "expense"])
                                .help("Entry kind"),
                        )
                        .arg(Arg::new("description").required(true).help("What the movement was"))
                        .arg(
                            Arg::new("amount")
                                .required(true)
                                .allow_negative_numbers(true)
                                .help("Positive amount, e.g. 45.30"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List all recorded entries in order"),
                )),
        )
        .subcommand(json_flags(
            Command::new("balance").about("Show income and expense totals and the net balance"),
        ))
        .subcommand(Command::new("reset").about("Delete every entry and persist an empty ledger"))
}
