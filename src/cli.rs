// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface parsing and argument validation.

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, Parser, ValueEnum};

use crate::error::{ParseError, ParseErrorKind};
use crate::stats::StatsField;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const LONG_ABOUT: &str = "\
IPPcode19 source analyzer.

Reads IPPcode19 source text from standard input, validates it instruction by
instruction, and writes an XML document describing the program to standard
output. The run aborts on the first error with a category-specific exit code.

With --stats=FILE, aggregated counters are written to FILE after a successful
parse, one line per counter flag, in command-line order. Counter flags are
only meaningful together with --stats.";

#[derive(Parser, Debug)]
#[command(
    name = "ipparse",
    version = VERSION,
    about = "IPPcode19 source analyzer producing an XML program document",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[arg(
        long = "stats",
        value_name = "FILE",
        long_help = "Write aggregated statistics to FILE. The file is truncated first; counter flags select its lines, in command-line order."
    )]
    pub stats: Option<PathBuf>,
    #[arg(
        long = "loc",
        action = ArgAction::SetTrue,
        long_help = "Report the number of instruction lines. Blank lines, comment-only lines and the header do not count."
    )]
    pub loc: bool,
    #[arg(
        long = "comments",
        action = ArgAction::SetTrue,
        long_help = "Report the number of lines carrying a comment."
    )]
    pub comments: bool,
    #[arg(
        long = "labels",
        action = ArgAction::SetTrue,
        long_help = "Report the number of label definitions."
    )]
    pub labels: bool,
    #[arg(
        long = "jumps",
        action = ArgAction::SetTrue,
        long_help = "Report the number of jump instructions (calls, unconditional and conditional jumps)."
    )]
    pub jumps: bool,
    #[arg(
        long = "format",
        value_enum,
        default_value_t = DiagnosticsFormat::Text,
        long_help = "Diagnostics format on stderr. text is default; json emits one machine-readable object per error."
    )]
    pub format: DiagnosticsFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticsFormat {
    Text,
    Json,
}

/// Statistics sink resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSinkConfig {
    pub path: PathBuf,
    /// Requested counters in command-line order.
    pub fields: Vec<StatsField>,
}

/// Validated CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub stats: Option<StatsSinkConfig>,
    pub format: DiagnosticsFormat,
}

/// Validate flag combinations and resolve the ordered statistics fields.
///
/// The field order comes from argument indices: clap's derive API does not
/// retain occurrence order, so the raw matches are consulted.
pub fn validate_cli(cli: &Cli, matches: &ArgMatches) -> Result<CliConfig, ParseError> {
    let mut requested: Vec<(usize, StatsField)> = Vec::new();
    for (id, field) in [
        ("loc", StatsField::Loc),
        ("comments", StatsField::Comments),
        ("labels", StatsField::Labels),
        ("jumps", StatsField::Jumps),
    ] {
        if matches.value_source(id) != Some(ValueSource::CommandLine) {
            continue;
        }
        if let Some(indices) = matches.indices_of(id) {
            for index in indices {
                requested.push((index, field));
            }
        }
    }
    requested.sort_by_key(|(index, _)| *index);

    if !requested.is_empty() && cli.stats.is_none() {
        return Err(ParseError::new(
            ParseErrorKind::Usage,
            "Counter flags require --stats",
            None,
        ));
    }

    let stats = cli.stats.as_ref().map(|path| StatsSinkConfig {
        path: path.clone(),
        fields: requested.into_iter().map(|(_, field)| field).collect(),
    });

    Ok(CliConfig {
        stats,
        format: cli.format,
    })
}

#[cfg(test)]
mod tests {
    use super::{validate_cli, Cli, DiagnosticsFormat};
    use crate::error::ParseErrorKind;
    use crate::stats::StatsField;
    use clap::{CommandFactory, FromArgMatches};

    fn parse(args: &[&str]) -> (Cli, clap::ArgMatches) {
        let matches = Cli::command()
            .try_get_matches_from(args.iter().copied())
            .expect("args should parse");
        let cli = Cli::from_arg_matches(&matches).expect("matches should bind");
        (cli, matches)
    }

    #[test]
    fn defaults_have_no_sink_and_text_diagnostics() {
        let (cli, matches) = parse(&["ipparse"]);
        let config = validate_cli(&cli, &matches).expect("valid");
        assert!(config.stats.is_none());
        assert_eq!(config.format, DiagnosticsFormat::Text);
    }

    #[test]
    fn counter_flags_without_stats_are_a_usage_error() {
        let (cli, matches) = parse(&["ipparse", "--loc"]);
        let err = validate_cli(&cli, &matches).expect_err("rejected");
        assert_eq!(err.kind(), ParseErrorKind::Usage);
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn field_order_follows_the_command_line() {
        let (cli, matches) = parse(&["ipparse", "--stats", "s.txt", "--comments", "--loc"]);
        let config = validate_cli(&cli, &matches).expect("valid");
        let sink = config.stats.expect("sink");
        assert_eq!(sink.fields, vec![StatsField::Comments, StatsField::Loc]);

        let (cli, matches) = parse(&[
            "ipparse", "--jumps", "--stats", "s.txt", "--labels", "--loc",
        ]);
        let config = validate_cli(&cli, &matches).expect("valid");
        let sink = config.stats.expect("sink");
        assert_eq!(
            sink.fields,
            vec![StatsField::Jumps, StatsField::Labels, StatsField::Loc]
        );
    }

    #[test]
    fn stats_without_counters_yields_an_empty_field_list() {
        let (cli, matches) = parse(&["ipparse", "--stats", "s.txt"]);
        let config = validate_cli(&cli, &matches).expect("valid");
        assert!(config.stats.expect("sink").fields.is_empty());
    }

    #[test]
    fn json_format_is_selectable() {
        let (cli, matches) = parse(&["ipparse", "--format", "json"]);
        let config = validate_cli(&cli, &matches).expect("valid");
        assert_eq!(config.format, DiagnosticsFormat::Json);
    }
}
