//! Value tables
//!
//! A value table maps raw integer values to descriptive labels. Named
//! free-standing tables come from `VAL_TABLE_` statements; anonymous
//! tables attached to a specific signal come from `VAL_` statements and
//! live on [`crate::model::Signal::value_descriptions`].
//!
//! Examples:
//! - `VAL_TABLE_ OnOff 0 "Off" 1 "On" ;`
//! - `VAL_ 200 SENSOR__rear 0 "idle" 1 "active" ;`

use serde::{Deserialize, Serialize};

/// One raw-value-to-label entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDescription {
    pub raw: i64,
    pub label: String,
}

/// A named, free-standing value table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueTable {
    pub name: String,
    /// Entries in declaration order.
    pub entries: Vec<ValueDescription>,
}
