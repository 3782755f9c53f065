// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, compares pairs of poker hands read one pair per line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::Parser;
use log::error;
use std::path::PathBuf;

pub mod runner;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Input file with ten cards per line, reads stdin if missing.
    input: Option<PathBuf>,
    /// Print each verdict as soon as its line is compared.
    #[clap(long, short)]
    stream: bool,
    /// Print the hands categories after each verdict.
    #[clap(long, short)]
    explain: bool,
    /// The output format.
    #[clap(long, short, value_enum, default_value_t = runner::Format::Text)]
    format: runner::Format,
    /// Logging verbosity, repeat for more details.
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let config = runner::Config {
        input: cli.input,
        stream: cli.stream,
        explain: cli.explain,
        format: cli.format,
    };

    if let Err(e) = runner::run(&config) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
