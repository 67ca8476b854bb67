//! Custom properties
//!
//! Vendor-defined typed attributes attachable to nodes, messages,
//! signals, or environment variables. A property is declared once
//! (`BA_DEF_`), optionally given a default (`BA_DEF_DEF_`), and assigned
//! concrete values per object (`BA_`). Definitions, defaults, and
//! assignments may appear in any order relative to each other.
//!
//! Examples:
//! - `BA_DEF_ BO_ "GenMsgCycleTime" INT 0 3600;`
//! - `BA_DEF_ SG_ "VFrameFormat" ENUM "StandardCAN","ExtendedCAN";`
//! - `BA_DEF_DEF_ "GenMsgCycleTime" 100;`
//! - `BA_ "GenMsgCycleTime" BO_ 200 500;`

use serde::{Deserialize, Serialize};

/// Kind of object a property definition applies to. A `BA_DEF_` line
/// with no target token is Node-level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyObjectType {
    Node,
    Message,
    Signal,
    Environment,
}

/// Data type of a property plus its type-specific constraint payload.
/// The parser stores the declared bounds; it does not enforce them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyPayload {
    Integer { min: i64, max: i64 },
    Hex { min: i64, max: i64 },
    Float { min: f64, max: f64 },
    String,
    Enum { values: Vec<String> },
}

/// A concrete property value, typed to match its definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Integer(i64),
    Float(f64),
    String(String),
}

/// A `BA_DEF_` declaration, with the default merged in once (and if) the
/// matching `BA_DEF_DEF_` line arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub name: String,
    pub object_type: PropertyObjectType,
    pub payload: PropertyPayload,
    pub default: Option<PropertyValue>,
}

/// The object a `BA_` assignment targets, by natural key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyTarget {
    Global,
    Node(String),
    Message(u32),
    Signal { message_id: u32, name: String },
    Environment(String),
}

/// A `BA_` line: a value bound to one object under a named property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyAssignment {
    pub property: String,
    pub target: PropertyTarget,
    pub value: PropertyValue,
}
