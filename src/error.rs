//! Error and diagnostic types.
//!
//! File-content problems never abort a parse: an owned line with a
//! malformed body is consumed and surfaced as a [`ParseWarning`] on the
//! parse result. Only an I/O failure while reading the input is an error.

use std::fmt;

use thiserror::Error;

/// Fatal errors. The parsing core itself is infallible for file content;
/// this only covers the reader boundary.
#[derive(Debug, Error)]
pub enum DbcError {
    #[error("failed to read DBC input: {0}")]
    Io(#[from] std::io::Error),
}

/// The DBC construct a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Version,
    BitTiming,
    Nodes,
    Message,
    Signal,
    Comment,
    ValueTable,
    ValueDescriptions,
    PropertyDefinition,
    PropertyDefault,
    PropertyAssignment,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Construct::Version => "VERSION",
            Construct::BitTiming => "BS_",
            Construct::Nodes => "BU_",
            Construct::Message => "BO_",
            Construct::Signal => "SG_",
            Construct::Comment => "CM_",
            Construct::ValueTable => "VAL_TABLE_",
            Construct::ValueDescriptions => "VAL_",
            Construct::PropertyDefinition => "BA_DEF_",
            Construct::PropertyDefault => "BA_DEF_DEF_",
            Construct::PropertyAssignment => "BA_",
        };
        f.write_str(keyword)
    }
}

/// A non-fatal diagnostic: an owned-but-malformed line body, or a
/// cross-reference that could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseWarning {
    /// 1-based line number where the construct started.
    pub line: usize,
    pub construct: Construct,
    pub detail: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.construct, self.detail)
    }
}
