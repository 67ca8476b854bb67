//! Message
//!
//! A message (frame) groups the signals transmitted together under one
//! CAN identifier. Signals declared on the lines immediately after the
//! `BO_` header belong to it, in declaration order.
//!
//! Syntax:
//!
//! `BO_ <id> <name>: <length> <transmitter>`

use serde::{Deserialize, Serialize};

use super::signal::Signal;

/// A CAN message and the signals it owns. Identity is the numeric id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub name: String,
    /// Payload length in bytes.
    pub length: u16,
    /// Name of the originating node.
    pub transmitter: String,
    pub signals: Vec<Signal>,
    pub comment: Option<String>,
}

impl Message {
    pub fn new(id: u32, name: impl Into<String>, length: u16, transmitter: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            length,
            transmitter: transmitter.into(),
            signals: Vec::new(),
            comment: None,
        }
    }

    /// Look up a signal by name within this message.
    pub fn signal(&self, name: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_lookup_by_name() {
        let mut message = Message::new(200, "SENSOR", 39, "SENSOR");
        message.signals.push(Signal {
            name: "SENSOR__rear".to_string(),
            start_bit: 256,
            length: 6,
            byte_order: crate::model::ByteOrder::LittleEndian,
            value_type: crate::model::ValueType::Unsigned,
            factor: 0.1,
            offset: 0.0,
            min: 0.0,
            max: 0.0,
            unit: String::new(),
            receivers: vec!["DBG".to_string()],
            multiplexing: crate::model::Multiplexing::MultiplexedBy(1),
            comment: None,
            value_descriptions: Vec::new(),
        });

        assert!(message.signal("SENSOR__rear").is_some());
        assert!(message.signal("SENSOR__front").is_none());
    }
}
