use alloc::string::String;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    #[error("glyph code {0} is outside 0..=255")]
    CodeOutOfRange(u32),

    #[error("stroke {0} has no moves")]
    EmptyStroke(usize),

    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
}

/// Reason a line of a `.strokes` table was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("missing ':' after glyph code")]
    MissingColon,

    #[error("invalid glyph code `{0}`")]
    BadCode(String),

    #[error("invalid move `{0}`, expected `dx,dy` within -128..=127")]
    BadMove(String),

    #[error("empty stroke")]
    EmptyStroke,

    #[error("glyph {0:02x} is defined twice")]
    Duplicate(u8),
}
