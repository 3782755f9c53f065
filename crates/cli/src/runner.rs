// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Reads showdown lines and writes their verdicts.
use anyhow::{Context, Result};
use log::{debug, info, trace};
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use showdown_eval::{Card, Showdown, Verdict};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// One verdict per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Runner config.
#[derive(Debug, Default)]
pub struct Config {
    /// The input file, stdin if `None`.
    pub input: Option<PathBuf>,
    /// Write each verdict as soon as its line is compared.
    pub stream: bool,
    /// Add the hands categories to text verdicts.
    pub explain: bool,
    /// The output format.
    pub format: Format,
}

/// A compared line.
#[derive(Debug, Serialize)]
struct Outcome {
    line: usize,
    black: String,
    white: String,
    black_rank: String,
    white_rank: String,
    verdict: Verdict,
}

impl Outcome {
    fn new(line: usize, showdown: &Showdown) -> Self {
        let (black, white) = showdown.values();
        let verdict = Verdict::from(black.cmp(&white));
        trace!("line {line}: {black} vs {white}");

        Self {
            line,
            black: hand_to_string(showdown.black()),
            white: hand_to_string(showdown.white()),
            black_rank: black.rank().to_string(),
            white_rank: white.rank().to_string(),
            verdict,
        }
    }

    fn render(&self, config: &Config) -> Result<String> {
        let text = match config.format {
            Format::Json => serde_json::to_string(self)?,
            Format::Text if config.explain => format!(
                "{} ({} vs {})",
                self.verdict, self.black_rank, self.white_rank
            ),
            Format::Text => self.verdict.to_string(),
        };

        Ok(text)
    }
}

fn hand_to_string(hand: &[Card]) -> String {
    hand.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs the comparison for the configured input writing verdicts to stdout.
pub fn run(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let out = stdout.lock();

    let count = match &config.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Cannot open input {}", path.display()))?;
            process(config, BufReader::new(file), out)?
        }
        None => process(config, io::stdin().lock(), out)?,
    };

    info!("Compared {count} showdowns");
    Ok(())
}

/// Compares the showdown on each input line until a blank line or the end of
/// the input, returns the number of compared lines.
///
/// Verdicts are written in input order, after all the lines have been read
/// or, when streaming, as soon as each line is compared. The first invalid
/// line stops processing.
pub fn process<R, W>(config: &Config, input: R, mut out: W) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut pending = Vec::new();
    let mut count = 0;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Read error at line {line_no}"))?;
        if line.trim().is_empty() {
            debug!("Blank line {line_no}, stop reading");
            break;
        }

        let showdown = line
            .parse::<Showdown>()
            .with_context(|| format!("line {line_no}"))?;

        let outcome = Outcome::new(line_no, &showdown);
        debug!(
            "line {line_no}: {} {} vs {} {}",
            outcome.verdict, outcome.black_rank, outcome.white_rank, showdown
        );

        let text = outcome.render(config)?;
        if config.stream {
            writeln!(out, "{text}")?;
        } else {
            pending.push(text);
        }

        count += 1;
    }

    for text in pending {
        writeln!(out, "{text}")?;
    }

    out.flush()?;
    Ok(count)
}
