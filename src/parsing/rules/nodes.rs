//! Node list rule (`BU_:`)
//!
//! All nodes are declared on one line, whitespace-separated:
//!
//! `BU_: GATEWAY SENSOR DBG`
//!
//! A `BU_:` with nothing after it is a valid empty declaration. Node
//! identity is the name, so a repeated name is kept once and flagged.

use crate::parsing::builder::DbcBuilder;
use crate::parsing::line_source::LineSource;
use crate::parsing::rules::LineRule;

const NODES_STARTER: &str = "BU_:";

pub struct NodesRule;

impl LineRule for NodesRule {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut DbcBuilder,
        _source: &mut dyn LineSource,
    ) -> bool {
        let line = line.trim();
        if !line.starts_with(NODES_STARTER) {
            return false;
        }

        for name in line[NODES_STARTER.len()..].split_whitespace() {
            builder.add_node(name);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::line_source::TextLines;

    fn parse_into(line: &str, builder: &mut DbcBuilder) -> bool {
        let mut source = TextLines::new("");
        NodesRule.try_parse(line, builder, &mut source)
    }

    #[test]
    fn test_nodes_are_declared_in_order() {
        let mut builder = DbcBuilder::new();
        assert!(parse_into("BU_: GATEWAY SENSOR DBG", &mut builder));

        let (dbc, warnings) = builder.build();
        assert!(warnings.is_empty());
        let names: Vec<_> = dbc.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["GATEWAY", "SENSOR", "DBG"]);
    }

    #[test]
    fn test_empty_declaration_adds_nothing() {
        let mut builder = DbcBuilder::new();
        assert!(parse_into("BU_:", &mut builder));

        let (dbc, warnings) = builder.build();
        assert!(dbc.nodes.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_duplicate_names_on_one_line_warn() {
        let mut builder = DbcBuilder::new();
        assert!(parse_into("BU_: GATEWAY SENSOR GATEWAY", &mut builder));

        let (dbc, warnings) = builder.build();
        assert_eq!(dbc.nodes.len(), 2);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].construct, crate::error::Construct::Nodes);
    }

    #[test]
    fn test_other_starters_are_not_owned() {
        let mut builder = DbcBuilder::new();
        assert!(!parse_into("BU_ GATEWAY", &mut builder));
        assert!(!parse_into("BS_:", &mut builder));
    }
}
