// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// CLI entrypoint for ipparse.

use std::io;

use clap::{CommandFactory, FromArgMatches};
use serde_json::json;

use ipparse::cli::{validate_cli, Cli, DiagnosticsFormat};
use ipparse::error::ParseError;
use ipparse::parser::ParseSession;
use ipparse::stats::write_stats;
use ipparse::xml::render_document;

fn format_diagnostic(err: &ParseError, format: DiagnosticsFormat) -> String {
    match format {
        DiagnosticsFormat::Text => {
            format!("ERROR [{}]: {}", err.kind().as_str(), err.message())
        }
        DiagnosticsFormat::Json => json!({
            "kind": err.kind().as_str(),
            "exit_code": err.exit_code(),
            "message": err.message(),
        })
        .to_string(),
    }
}

fn fail(err: &ParseError, format: DiagnosticsFormat) -> ! {
    eprintln!("{}", format_diagnostic(err, format));
    std::process::exit(err.exit_code());
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };
    let config = match validate_cli(&cli, &matches) {
        Ok(config) => config,
        Err(err) => fail(&err, cli.format),
    };

    let stdin = io::stdin();
    let outcome = match ParseSession::new().parse(stdin.lock()) {
        Ok(outcome) => outcome,
        Err(err) => fail(&err, config.format),
    };

    if let Some(sink) = &config.stats {
        if let Err(err) = write_stats(&sink.path, &sink.fields, &outcome.stats) {
            fail(&err, config.format);
        }
    }

    print!("{}", render_document(&outcome.document));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipparse::error::ParseErrorKind;

    #[test]
    fn text_diagnostic_names_the_category() {
        let err = ParseError::new(
            ParseErrorKind::UnknownOpcode,
            "Unknown operation code",
            Some("FOO"),
        );
        assert_eq!(
            format_diagnostic(&err, DiagnosticsFormat::Text),
            "ERROR [unknown-opcode]: Unknown operation code: FOO"
        );
    }

    #[test]
    fn json_diagnostic_has_expected_keys() {
        let err = ParseError::new(
            ParseErrorKind::HeaderMismatch,
            "Expected language header",
            None,
        );
        let line = format_diagnostic(&err, DiagnosticsFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).expect("valid json");
        assert_eq!(value["kind"], "header-mismatch");
        assert_eq!(value["exit_code"], 21);
        assert_eq!(value["message"], "Expected language header");
    }
}
