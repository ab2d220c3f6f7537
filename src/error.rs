/*!
Errors produced while parsing text or accessing a document as the wrong kind.
*/

use thiserror::Error;

use crate::document::Kind;

/**
An error encountered while parsing JSON text.

Every error carries the byte offset into the input where it was detected.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {offset}")]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

/**
The reason a parse failed.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
    #[error("expected `{0}`")]
    ExpectedLiteral(&'static str),
    #[error("expected string key")]
    ExpectedKey,
    #[error("expected `:`")]
    ExpectedColon,
    #[error("expected `}}` or `,`")]
    ExpectedObjectSeparator,
    #[error("expected `]` or `,`")]
    ExpectedArraySeparator,
    #[error("duplicated key `{0}`")]
    DuplicatedKey(String),
    #[error("expected digit")]
    ExpectedDigit,
    #[error("expected 4 hexadecimal digits")]
    ExpectedHexDigits,
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),
    #[error("expected `\\uXXXX` escape sequence")]
    ExpectedLowSurrogate,
    #[error("invalid surrogate pair")]
    InvalidSurrogatePair,
    #[error("invalid unicode code point `{0:#06x}`")]
    InvalidCodePoint(u32),
    #[error("number out of range")]
    NumberOutOfRange,
    #[error("trailing characters")]
    TrailingCharacters,
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("nesting deeper than {0} levels")]
    DepthLimitExceeded(usize),
}

impl ParseError {
    #[cold]
    pub(crate) fn new(kind: ParseErrorKind, offset: usize) -> Self {
        ParseError { kind, offset }
    }

    /**
    The reason the parse failed.
    */
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /**
    The byte offset into the input where the error was detected.
    */
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/**
A typed accessor was called on a document of a different kind.

Asking for an integer from a double that's NaN or infinite is also a `TypeError`.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bad type access: expected {expected}, found {}{found}", non_finite_prefix(.non_finite))]
pub struct TypeError {
    expected: Kind,
    found: Kind,
    non_finite: bool,
}

impl TypeError {
    #[cold]
    pub(crate) fn new(expected: Kind, found: Kind) -> Self {
        TypeError {
            expected,
            found,
            non_finite: false,
        }
    }

    #[cold]
    pub(crate) fn non_finite() -> Self {
        TypeError {
            expected: Kind::Number,
            found: Kind::Number,
            non_finite: true,
        }
    }

    /**
    The kind the accessor needed.
    */
    pub fn expected(&self) -> Kind {
        self.expected
    }

    /**
    The kind the document actually holds.
    */
    pub fn found(&self) -> Kind {
        self.found
    }

    /**
    Whether the document held a number that was NaN or infinite.
    */
    pub fn is_non_finite(&self) -> bool {
        self.non_finite
    }
}

fn non_finite_prefix(non_finite: &bool) -> &'static str {
    if *non_finite {
        "non-finite "
    } else {
        ""
    }
}
