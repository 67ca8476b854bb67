//! Network node (ECU)
//!
//! Nodes are declared all at once on the `BU_:` line and identified by
//! name. A comment may be attached later by a `CM_ BU_` statement.
//!
//! Example:
//! - `BU_: GATEWAY SENSOR DBG`

use serde::{Deserialize, Serialize};

/// A node on the CAN bus. Identity is the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub comment: Option<String>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
        }
    }
}
