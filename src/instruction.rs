// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Program data model: instructions, the accepted document, and counters.

use crate::error::{ParseError, ParseErrorKind};
use crate::operand::{classify_operand, Operand};
use crate::table::{lookup_opcode, FlowClass};
use crate::tokenizer::LineTokens;

/// One fully validated instruction. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    order: u32,
    opcode: String,
    operands: Vec<Operand>,
}

impl Instruction {
    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn opcode(&self) -> &str {
        &self.opcode
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }
}

/// The accepted program: language tag plus instructions in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramDocument {
    language: &'static str,
    instructions: Vec<Instruction>,
}

impl ProgramDocument {
    pub fn new(language: &'static str, instructions: Vec<Instruction>) -> Self {
        Self {
            language,
            instructions,
        }
    }

    pub fn language(&self) -> &str {
        self.language
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

/// Per-parse counters, monotonically incremented.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub code_lines: u32,
    pub comment_lines: u32,
    pub label_defs: u32,
    pub jump_instrs: u32,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Validate one tokenized line against the grammar table and build the
/// instruction, or fail with the first operand error. Nothing partial is
/// ever returned.
pub fn build_instruction(
    tokens: &LineTokens,
    order: u32,
) -> Result<(Instruction, FlowClass), ParseError> {
    let signature = lookup_opcode(&tokens.opcode).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::UnknownOpcode,
            "Unknown operation code",
            Some(&tokens.opcode),
        )
    })?;

    if tokens.operands.len() != signature.roles.len() {
        let msg = format!(
            "{} expects {} operand(s), found {}",
            signature.mnemonic,
            signature.roles.len(),
            tokens.operands.len()
        );
        return Err(ParseError::new(ParseErrorKind::OperandSyntax, &msg, None));
    }

    let mut operands = Vec::with_capacity(signature.roles.len());
    for (role, token) in signature.roles.iter().zip(&tokens.operands) {
        operands.push(classify_operand(*role, token)?);
    }

    let instruction = Instruction {
        order,
        opcode: signature.mnemonic.to_string(),
        operands,
    };
    Ok((instruction, signature.flow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::ConstType;
    use crate::tokenizer::tokenize_line;

    fn tokens(line: &str) -> LineTokens {
        tokenize_line(line).expect("tokens")
    }

    #[test]
    fn builds_instruction_with_typed_operands() {
        let (instruction, flow) = build_instruction(&tokens("MOVE GF@x int@5"), 1).expect("built");
        assert_eq!(instruction.order(), 1);
        assert_eq!(instruction.opcode(), "MOVE");
        assert_eq!(
            instruction.operands(),
            &[
                Operand::Variable("GF@x".to_string()),
                Operand::Constant(ConstType::Int, "5".to_string()),
            ]
        );
        assert_eq!(flow, FlowClass::None);
    }

    #[test]
    fn unknown_opcode_is_its_own_error() {
        let err = build_instruction(&tokens("FOO GF@x"), 1).expect_err("rejected");
        assert_eq!(err.kind(), ParseErrorKind::UnknownOpcode);
    }

    #[test]
    fn arity_mismatch_is_an_operand_error() {
        for line in ["ADD GF@x int@1", "ADD GF@x int@1 int@2 int@3", "BREAK now"] {
            let err = build_instruction(&tokens(line), 1).expect_err("rejected");
            assert_eq!(err.kind(), ParseErrorKind::OperandSyntax, "{line}");
        }
    }

    #[test]
    fn opcode_case_is_canonicalized() {
        let (instruction, _) = build_instruction(&tokens("defvar LF@y"), 3).expect("built");
        assert_eq!(instruction.opcode(), "DEFVAR");
        assert_eq!(instruction.order(), 3);
    }

    #[test]
    fn empty_token_from_double_space_fails_validation() {
        let err = build_instruction(&tokens("MOVE  GF@x"), 1).expect_err("rejected");
        assert_eq!(err.kind(), ParseErrorKind::OperandSyntax);
    }

    #[test]
    fn first_operand_failure_wins() {
        // Second operand is also bad; the reported token is the first.
        let err = build_instruction(&tokens("MOVE XX@x yy@z"), 1).expect_err("rejected");
        assert!(err.message().contains("XX@x"), "{}", err.message());
    }
}
