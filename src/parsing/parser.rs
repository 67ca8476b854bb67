//! Parse orchestrator
//!
//! Two states only: scanning (pull the next line, offer it to the rules
//! in priority order, first match wins) and done (source exhausted, ask
//! the builder to materialize the document). A line no rule owns is
//! dropped, never fatal; unknown constructs from newer tools must not
//! abort the parse.

use std::io::Read;

use tracing::trace;

use crate::error::{DbcError, ParseWarning};
use crate::model::Dbc;

use super::builder::DbcBuilder;
use super::line_source::{LineSource, TextLines};
use super::rules::RULE_SET;

/// The result of a parse: the document plus any non-fatal warnings.
#[derive(Debug)]
pub struct Parsed {
    pub document: Dbc,
    pub warnings: Vec<ParseWarning>,
}

/// Parse a complete DBC text held in memory.
pub fn parse(input: &str) -> Parsed {
    let mut source = TextLines::new(input);
    parse_lines(&mut source)
}

/// Parse from any reader. The whole input is read up front; all blocking
/// I/O stays at this boundary, outside the parsing core.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Parsed, DbcError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse(&text))
}

/// Drive a line source through the rule set until exhaustion.
pub fn parse_lines(source: &mut dyn LineSource) -> Parsed {
    let mut builder = DbcBuilder::new();

    while let Some(line) = source.next_line() {
        builder.mark_line(source.line_number());
        if line.trim().is_empty() {
            continue;
        }

        let matched = RULE_SET
            .iter()
            .any(|rule| rule.try_parse(&line, &mut builder, source));
        if !matched {
            trace!(line = source.line_number(), "no grammar rule matched; line dropped");
        }
    }

    let (document, warnings) = builder.build();
    Parsed { document, warnings }
}
