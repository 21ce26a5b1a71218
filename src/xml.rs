// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! XML rendering of an accepted program document.

use crate::instruction::ProgramDocument;

/// Render the document as indented XML with a declaration.
///
/// Argument bodies are emitted verbatim: string-literal text was escaped
/// once at classification and must not be escaped again here.
pub fn render_document(document: &ProgramDocument) -> String {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    output.push_str(&format!(
        "<program language=\"{}\">\n",
        escape_attribute(document.language())
    ));

    for instruction in document.instructions() {
        if instruction.operands().is_empty() {
            output.push_str(&format!(
                "  <instruction order=\"{}\" opcode=\"{}\"/>\n",
                instruction.order(),
                escape_attribute(instruction.opcode())
            ));
            continue;
        }
        output.push_str(&format!(
            "  <instruction order=\"{}\" opcode=\"{}\">\n",
            instruction.order(),
            escape_attribute(instruction.opcode())
        ));
        for (idx, operand) in instruction.operands().iter().enumerate() {
            let position = idx + 1;
            output.push_str(&format!(
                "    <arg{position} type=\"{}\">{}</arg{position}>\n",
                escape_attribute(operand.type_name()),
                operand.value()
            ));
        }
        output.push_str("  </instruction>\n");
    }

    output.push_str("</program>\n");
    output
}

/// Standard attribute escaping, applied to attribute values only.
fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
