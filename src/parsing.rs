//! Parsing pipeline
//!
//! The pipeline has four parts: a [`line_source::LineSource`] feeding
//! physical lines, the grammar rules in [`rules`] recognizing one DBC
//! construct each, the [`builder::DbcBuilder`] accumulating recognized
//! entities, and the orchestrator in [`parser`] driving lines through the
//! rule set in priority order until the source is exhausted.

pub mod builder;
pub mod line_source;
pub mod parser;
pub mod rules;

pub use line_source::{LineSource, TextLines};
pub use parser::{parse, parse_lines, parse_reader, Parsed};
