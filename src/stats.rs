// Statistics sink: one counter per requested line, in request order.

use std::fs;
use std::path::Path;

use crate::error::{ParseError, ParseErrorKind};
use crate::instruction::Statistics;

/// A counter selectable for the statistics file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsField {
    Loc,
    Comments,
    Labels,
    Jumps,
}

impl StatsField {
    pub fn as_str(self) -> &'static str {
        match self {
            StatsField::Loc => "loc",
            StatsField::Comments => "comments",
            StatsField::Labels => "labels",
            StatsField::Jumps => "jumps",
        }
    }

    pub fn value(self, stats: &Statistics) -> u32 {
        match self {
            StatsField::Loc => stats.code_lines,
            StatsField::Comments => stats.comment_lines,
            StatsField::Labels => stats.label_defs,
            StatsField::Jumps => stats.jump_instrs,
        }
    }
}

/// Truncate the sink file and write one line per requested field, in
/// request order.
pub fn write_stats(
    path: &Path,
    fields: &[StatsField],
    stats: &Statistics,
) -> Result<(), ParseError> {
    let mut output = String::new();
    for field in fields {
        output.push_str(&format!("{}\n", field.value(stats)));
    }

    fs::write(path, output).map_err(|err| {
        ParseError::new(
            ParseErrorKind::OutputUnavailable,
            &format!("Error writing statistics file: {err}"),
            Some(path.to_string_lossy().as_ref()),
        )
    })
}
