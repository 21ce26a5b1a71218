// Tokenizer splitting a cleaned line into an opcode and raw operand tokens.

/// Tokens of one instruction line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokens {
    /// Opcode canonicalized to uppercase for table lookup.
    pub opcode: String,
    /// Positional operand tokens, untouched. Consecutive spaces yield empty
    /// tokens that fail operand validation downstream.
    pub operands: Vec<String>,
}

/// Split a cleaned line on single-space boundaries.
///
/// Returns `None` for a blank or comment-only line.
pub fn tokenize_line(line: &str) -> Option<LineTokens> {
    let mut parts = line.split(' ');
    let first = parts.next().unwrap_or("");
    if first.is_empty() {
        return None;
    }
    Some(LineTokens {
        opcode: first.to_ascii_uppercase(),
        operands: parts.map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::tokenize_line;

    #[test]
    fn blank_line_yields_no_tokens() {
        assert_eq!(tokenize_line(""), None);
    }

    #[test]
    fn opcode_is_uppercased_operands_kept_raw() {
        let tokens = tokenize_line("move GF@x int@5").expect("tokens");
        assert_eq!(tokens.opcode, "MOVE");
        assert_eq!(tokens.operands, vec!["GF@x", "int@5"]);
    }

    #[test]
    fn zero_operand_line_has_empty_operand_list() {
        let tokens = tokenize_line("BREAK").expect("tokens");
        assert_eq!(tokens.opcode, "BREAK");
        assert!(tokens.operands.is_empty());
    }

    #[test]
    fn double_space_preserves_empty_token() {
        let tokens = tokenize_line("MOVE  GF@x").expect("tokens");
        assert_eq!(tokens.operands, vec!["", "GF@x"]);
    }
}
