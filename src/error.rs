// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Error taxonomy and process exit codes for the analyzer.

use std::fmt;

/// Categories of analyzer errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Usage,
    InputUnavailable,
    HeaderMismatch,
    UnknownOpcode,
    OperandSyntax,
    OutputUnavailable,
}

impl ParseErrorKind {
    /// Process exit code reported for this error category.
    pub fn exit_code(self) -> i32 {
        match self {
            ParseErrorKind::Usage => 10,
            ParseErrorKind::InputUnavailable => 11,
            ParseErrorKind::OutputUnavailable => 12,
            ParseErrorKind::HeaderMismatch => 21,
            ParseErrorKind::UnknownOpcode => 22,
            ParseErrorKind::OperandSyntax => 23,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParseErrorKind::Usage => "usage",
            ParseErrorKind::InputUnavailable => "input-unavailable",
            ParseErrorKind::OutputUnavailable => "output-unavailable",
            ParseErrorKind::HeaderMismatch => "header-mismatch",
            ParseErrorKind::UnknownOpcode => "unknown-opcode",
            ParseErrorKind::OperandSyntax => "operand-syntax",
        }
    }
}

/// An analyzer error with a kind and message.
#[derive(Debug, Clone)]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, msg: &str, param: Option<&str>) -> Self {
        Self {
            kind,
            message: format_error(msg, param),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Format an error message with an optional parameter.
pub fn format_error(msg: &str, param: Option<&str>) -> String {
    match param {
        Some(p) => format!("{msg}: {p}"),
        None => msg.to_string(),
    }
}
