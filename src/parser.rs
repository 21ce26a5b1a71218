// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Parse session: header validation and the line-by-line instruction loop.

use std::io::BufRead;

use crate::error::{ParseError, ParseErrorKind};
use crate::instruction::{build_instruction, Instruction, ProgramDocument, Statistics};
use crate::preprocess::clean_line;
use crate::table::FlowClass;
use crate::tokenizer::tokenize_line;

pub const LANGUAGE: &str = "IPPcode19";
pub const HEADER: &str = ".IPPcode19";

/// Result of a fully successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub document: ProgramDocument,
    pub stats: Statistics,
}

/// One parse session over one source document. The session is consumed by
/// `parse`; counters and instructions never outlive a failed run.
#[derive(Debug, Default)]
pub struct ParseSession {
    stats: Statistics,
    instructions: Vec<Instruction>,
}

impl ParseSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the session over a line-oriented source. The first error aborts
    /// the whole run; nothing partial is ever returned.
    pub fn parse<R: BufRead>(mut self, reader: R) -> Result<ParseOutcome, ParseError> {
        let mut lines = reader.lines();

        let first = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => return Err(read_error(&err)),
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::HeaderMismatch,
                    "Missing language header",
                    Some(HEADER),
                ))
            }
        };
        self.check_header(&first)?;

        for line in lines {
            let line = line.map_err(|err| read_error(&err))?;
            self.process_line(&line)?;
        }

        Ok(ParseOutcome {
            document: ProgramDocument::new(LANGUAGE, self.instructions),
            stats: self.stats,
        })
    }

    /// The header must be literally the first cleaned line, as a single
    /// token. It is not an instruction and never counts as a code line.
    fn check_header(&mut self, raw: &str) -> Result<(), ParseError> {
        let cleaned = clean_line(raw);
        if cleaned.had_comment {
            self.stats.comment_lines += 1;
        }
        if !cleaned.text.eq_ignore_ascii_case(HEADER) {
            return Err(ParseError::new(
                ParseErrorKind::HeaderMismatch,
                "Expected language header",
                Some(HEADER),
            ));
        }
        Ok(())
    }

    fn process_line(&mut self, raw: &str) -> Result<(), ParseError> {
        let cleaned = clean_line(raw);
        if cleaned.had_comment {
            self.stats.comment_lines += 1;
        }
        let Some(tokens) = tokenize_line(cleaned.text) else {
            return Ok(());
        };

        self.stats.code_lines += 1;
        let (instruction, flow) = build_instruction(&tokens, self.stats.code_lines)?;
        match flow {
            FlowClass::LabelDef => self.stats.label_defs += 1,
            FlowClass::Jump => self.stats.jump_instrs += 1,
            FlowClass::None => {}
        }
        self.instructions.push(instruction);
        Ok(())
    }
}

fn read_error(err: &std::io::Error) -> ParseError {
    ParseError::new(
        ParseErrorKind::InputUnavailable,
        "Failed to read source input",
        Some(&err.to_string()),
    )
}
