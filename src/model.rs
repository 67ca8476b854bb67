//! Document model for parsed DBC files.
//!
//! All types here are plain data: they are assembled once by the parsing
//! pipeline and are read-only afterwards. The root is [`Dbc`], which owns
//! the nodes, messages (each owning its signals), free value tables, and
//! custom-property definitions and assignments.

pub mod document;
pub mod message;
pub mod node;
pub mod properties;
pub mod signal;
pub mod value_table;

pub use document::Dbc;
pub use message::Message;
pub use node::Node;
pub use properties::{
    PropertyAssignment, PropertyDefinition, PropertyObjectType, PropertyPayload, PropertyTarget,
    PropertyValue,
};
pub use signal::{ByteOrder, Multiplexing, Signal, ValueType};
pub use value_table::{ValueDescription, ValueTable};
