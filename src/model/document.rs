//! Document root
//!
//! A [`Dbc`] is the fully resolved result of a parse: every entity is
//! created in file order during parsing and never mutated afterwards.
//! Lookups use the format's natural keys (node name, message id, signal
//! name within a message, property name).

use serde::{Deserialize, Serialize};

use super::message::Message;
use super::node::Node;
use super::properties::{PropertyAssignment, PropertyDefinition};
use super::signal::Signal;
use super::value_table::ValueTable;

/// A parsed DBC document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dbc {
    /// The `VERSION` header string, if present.
    pub version: Option<String>,
    /// Baud rate from the `BS_:` bit-timing line, if one was given.
    pub baud_rate: Option<u32>,
    pub nodes: Vec<Node>,
    pub messages: Vec<Message>,
    /// Named free-standing value tables (`VAL_TABLE_`).
    pub value_tables: Vec<ValueTable>,
    pub property_definitions: Vec<PropertyDefinition>,
    pub property_assignments: Vec<PropertyAssignment>,
}

impl Dbc {
    pub fn message_by_id(&self, id: u32) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Look up a signal by message id and signal name.
    pub fn signal(&self, message_id: u32, name: &str) -> Option<&Signal> {
        self.message_by_id(message_id)?.signal(name)
    }

    pub fn property_definition(&self, name: &str) -> Option<&PropertyDefinition> {
        self.property_definitions.iter().find(|d| d.name == name)
    }

    pub fn value_table(&self, name: &str) -> Option<&ValueTable> {
        self.value_tables.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_on_empty_document() {
        let dbc = Dbc::default();
        assert!(dbc.message_by_id(1).is_none());
        assert!(dbc.node_by_name("ECU").is_none());
        assert!(dbc.signal(1, "Speed").is_none());
        assert!(dbc.property_definition("GenMsgCycleTime").is_none());
        assert!(dbc.value_table("OnOff").is_none());
    }
}
