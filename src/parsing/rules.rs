//! Grammar rules
//!
//! One rule per DBC construct. Each rule trims the line, tests a cheap
//! literal-prefix gate, and only then runs its extraction regex
//! (lazy-compiled, named capture groups). A rule that owns a line whose
//! body fails extraction consumes the line and records a warning; it
//! never mutates the builder in that case. A rule that does not own the
//! line returns `false` without touching the builder or the line source.
//!
//! Dispatch order matters where starters collide: `VAL_TABLE_` is tried
//! before `VAL_`, and the property-default starter `BA_DEF_DEF_ ` is
//! tested ahead of the declaration starter `BA_DEF_ ` inside
//! [`properties::PropertiesDefinitionRule`].

pub mod comment;
pub mod header;
pub mod message;
pub mod nodes;
pub mod properties;
pub mod property_value;
pub mod signal;
pub mod value_table;

use super::builder::DbcBuilder;
use super::line_source::LineSource;

/// A grammar matcher for one DBC construct.
pub trait LineRule: Sync {
    /// Returns `true` when this rule owns the line (whether or not the
    /// body parsed). Continuation-bearing rules may pull further lines
    /// from `source`.
    fn try_parse(
        &self,
        line: &str,
        builder: &mut DbcBuilder,
        source: &mut dyn LineSource,
    ) -> bool;
}

/// The closed set of rules, in dispatch priority order.
pub static RULE_SET: &[&dyn LineRule] = &[
    &header::VersionRule,
    &header::SymbolsRule,
    &header::BitTimingRule,
    &nodes::NodesRule,
    &message::MessageRule,
    &signal::SignalRule,
    &comment::CommentRule,
    &value_table::ValueTableRule,
    &value_table::ValueDescriptionsRule,
    &properties::PropertiesDefinitionRule,
    &property_value::PropertyValueRule,
];

/// Accumulate a statement that may span physical lines, consuming from
/// the source until the terminating `;` appears or the source runs dry.
/// On exhaustion the text gathered so far is returned as-is, so the
/// caller finalizes whatever was already extracted.
pub(crate) fn read_statement(first_line: &str, source: &mut dyn LineSource) -> String {
    let mut text = first_line.trim().to_string();
    while !text.ends_with(';') {
        match source.next_line() {
            Some(next) => {
                text.push('\n');
                text.push_str(next.trim_end());
            }
            None => break,
        }
    }
    text
}
