// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Lexical operand classification and one-time literal escaping.

use crate::error::{ParseError, ParseErrorKind};
use crate::table::Role;

/// Variable frame prefixes, matched exactly.
pub const FRAMES: &[&str] = &["GF", "LF", "TF"];

/// Constant subtype of a `type@value` operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstType {
    Bool,
    Int,
    String,
    Nil,
}

impl ConstType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstType::Bool => "bool",
            ConstType::Int => "int",
            ConstType::String => "string",
            ConstType::Nil => "nil",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bool" => Some(ConstType::Bool),
            "int" => Some(ConstType::Int),
            "string" => Some(ConstType::String),
            "nil" => Some(ConstType::Nil),
            _ => None,
        }
    }
}

/// A classified, validated operand. Stored values are raw tokens except for
/// string constants, which carry their escaped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Variable(String),
    Constant(ConstType, String),
    Label(String),
    Type(String),
}

impl Operand {
    /// Type attribute written by the serializer.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Variable(_) => "var",
            Operand::Constant(const_type, _) => const_type.as_str(),
            Operand::Label(_) => "label",
            Operand::Type(_) => "type",
        }
    }

    /// Stored text written as the argument body.
    pub fn value(&self) -> &str {
        match self {
            Operand::Variable(text)
            | Operand::Constant(_, text)
            | Operand::Label(text)
            | Operand::Type(text) => text,
        }
    }
}

/// Classify a raw token against the role its position requires.
pub fn classify_operand(role: Role, token: &str) -> Result<Operand, ParseError> {
    match role {
        Role::Var => classify_var(token),
        Role::Symb => classify_symb(token),
        Role::Label => classify_label(token),
        Role::Type => classify_type(token),
    }
}

pub fn classify_var(token: &str) -> Result<Operand, ParseError> {
    let (frame, ident) = token
        .split_once('@')
        .ok_or_else(|| syntax_error("Variable is missing a frame prefix", token))?;
    if !FRAMES.contains(&frame) {
        return Err(syntax_error("Unknown variable frame", token));
    }
    let mut chars = ident.chars();
    let first_ok = chars.next().is_some_and(is_ident_start);
    if !first_ok || !chars.all(is_ident_char) {
        return Err(syntax_error("Malformed variable identifier", token));
    }
    Ok(Operand::Variable(token.to_string()))
}

pub fn classify_symb(token: &str) -> Result<Operand, ParseError> {
    let Some((tag, value)) = token.split_once('@') else {
        return Err(syntax_error("Symbol is neither a variable nor a constant", token));
    };
    if FRAMES.contains(&tag) {
        return classify_var(token);
    }
    let Some(const_type) = ConstType::from_tag(tag) else {
        return Err(syntax_error("Symbol is neither a variable nor a constant", token));
    };
    let stored = match const_type {
        ConstType::Bool => {
            if value != "true" && value != "false" {
                return Err(syntax_error("Boolean constant must be true or false", token));
            }
            value.to_string()
        }
        ConstType::Int => {
            let digits = value.strip_prefix('-').unwrap_or(value);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(syntax_error("Malformed integer constant", token));
            }
            value.to_string()
        }
        // Escaping happens here, exactly once; the serializer emits the
        // stored text verbatim.
        ConstType::String => escape_text(value),
        ConstType::Nil => {
            if value != "nil" {
                return Err(syntax_error("Nil constant must be nil@nil", token));
            }
            value.to_string()
        }
    };
    Ok(Operand::Constant(const_type, stored))
}

pub fn classify_label(token: &str) -> Result<Operand, ParseError> {
    if token.is_empty() || !token.chars().all(is_ident_char) {
        return Err(syntax_error("Malformed label name", token));
    }
    Ok(Operand::Label(token.to_string()))
}

pub fn classify_type(token: &str) -> Result<Operand, ParseError> {
    match token {
        "int" | "string" | "bool" => Ok(Operand::Type(token.to_string())),
        _ => Err(syntax_error("Unknown type name", token)),
    }
}

fn syntax_error(msg: &str, token: &str) -> ParseError {
    ParseError::new(ParseErrorKind::OperandSyntax, msg, Some(token))
}

fn is_ident_special(c: char) -> bool {
    matches!(c, '_' | '-' | '$' | '&' | '%' | '*' | '!' | '?')
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || is_ident_special(c)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_ident_special(c)
}

/// Entity names an ampersand may already introduce; such ampersands are
/// kept as-is instead of being escaped a second time.
const RECOGNIZED_ENTITIES: &[&str] = &["amp;", "lt;", "gt;", "apos;", "quot;"];

/// Replace markup-unsafe characters in literal text with entities.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut idx = 0;
    while let Some(c) = text[idx..].chars().next() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            '&' => {
                let tail = &text[idx + 1..];
                if RECOGNIZED_ENTITIES.iter().any(|entity| tail.starts_with(entity)) {
                    out.push('&');
                } else {
                    out.push_str("&amp;");
                }
            }
            _ => out.push(c),
        }
        idx += c.len_utf8();
    }
    out
}
