//! Document builder
//!
//! The builder is the only mutator during a parse. Grammar rules push
//! recognized entities into it; all cross-entity wiring happens here:
//! signals attach to the currently open message, comments and value
//! descriptions resolve their targets by natural key, defaults reconcile
//! against their definitions. Resolution is permissive: an entry whose
//! target is missing is dropped with a warning, never a failure.

use tracing::debug;

use crate::error::{Construct, ParseWarning};
use crate::model::{
    Dbc, Message, Node, PropertyAssignment, PropertyDefinition, PropertyPayload, PropertyTarget,
    PropertyValue, Signal, ValueDescription, ValueTable,
};

/// Object a `CM_` comment attaches to.
#[derive(Debug, Clone, PartialEq)]
pub enum CommentTarget {
    Node(String),
    Message(u32),
    Signal { message_id: u32, name: String },
}

/// Accumulates entities into an evolving [`Dbc`].
///
/// The message context is an explicit index into the message vector, not
/// a detached "current message" object, so signal attachment cannot
/// depend on hidden last-write state.
pub struct DbcBuilder {
    document: Dbc,
    /// Index of the message opened by the most recent `BO_` header.
    open_message: Option<usize>,
    /// Raw `BA_DEF_DEF_` values seen before their declaration, with the
    /// line each arrived on. Reconciled when the declaration shows up,
    /// or reported at build time if it never does.
    pending_defaults: Vec<PendingDefault>,
    warnings: Vec<ParseWarning>,
    current_line: usize,
}

struct PendingDefault {
    property: String,
    raw: String,
    line: usize,
}

impl DbcBuilder {
    pub fn new() -> Self {
        Self {
            document: Dbc::default(),
            open_message: None,
            pending_defaults: Vec::new(),
            warnings: Vec::new(),
            current_line: 0,
        }
    }

    /// Record the 1-based number of the line currently being dispatched,
    /// so warnings can point at the construct's first line.
    pub fn mark_line(&mut self, line: usize) {
        self.current_line = line;
    }

    pub fn warn(&mut self, construct: Construct, detail: impl Into<String>) {
        self.warn_at(self.current_line, construct, detail);
    }

    fn warn_at(&mut self, line: usize, construct: Construct, detail: impl Into<String>) {
        let warning = ParseWarning {
            line,
            construct,
            detail: detail.into(),
        };
        debug!(%warning, "parse warning");
        self.warnings.push(warning);
    }

    pub fn set_version(&mut self, version: String) {
        self.document.version = Some(version);
    }

    pub fn set_baud_rate(&mut self, baud_rate: u32) {
        self.document.baud_rate = Some(baud_rate);
    }

    pub fn add_node(&mut self, name: &str) {
        if self.document.nodes.iter().any(|n| n.name == name) {
            self.warn(Construct::Nodes, format!("node '{name}' declared twice"));
            return;
        }
        self.document.nodes.push(Node::new(name));
    }

    /// Append a message and open it as the attachment context for the
    /// signal lines that follow.
    pub fn add_message(&mut self, message: Message) {
        self.document.messages.push(message);
        self.open_message = Some(self.document.messages.len() - 1);
    }

    pub fn add_signal(&mut self, signal: Signal) {
        match self.open_message {
            Some(idx) => self.document.messages[idx].signals.push(signal),
            None => self.warn(
                Construct::Signal,
                format!("signal '{}' appears outside any message block", signal.name),
            ),
        }
    }

    pub fn attach_comment(&mut self, target: CommentTarget, text: String) {
        match target {
            CommentTarget::Node(name) => {
                match self.document.nodes.iter_mut().find(|n| n.name == name) {
                    Some(node) => node.comment = Some(text),
                    None => self.warn(
                        Construct::Comment,
                        format!("comment references unknown node '{name}'"),
                    ),
                }
            }
            CommentTarget::Message(id) => {
                match self.document.messages.iter_mut().find(|m| m.id == id) {
                    Some(message) => message.comment = Some(text),
                    None => self.warn(
                        Construct::Comment,
                        format!("comment references unknown message {id}"),
                    ),
                }
            }
            CommentTarget::Signal { message_id, name } => {
                match self.signal_mut(message_id, &name) {
                    Some(signal) => signal.comment = Some(text),
                    None => self.warn(
                        Construct::Comment,
                        format!("comment references unknown signal {message_id}/{name}"),
                    ),
                }
            }
        }
    }

    pub fn add_value_table(&mut self, table: ValueTable) {
        self.document.value_tables.push(table);
    }

    /// Attach an anonymous value table to a signal by composite key.
    pub fn add_value_descriptions(
        &mut self,
        message_id: u32,
        signal_name: &str,
        entries: Vec<ValueDescription>,
    ) {
        match self.signal_mut(message_id, signal_name) {
            Some(signal) => signal.value_descriptions = entries,
            None => self.warn(
                Construct::ValueDescriptions,
                format!("value descriptions reference unknown signal {message_id}/{signal_name}"),
            ),
        }
    }

    pub fn add_property_definition(&mut self, definition: PropertyDefinition) {
        self.document.property_definitions.push(definition);
        let idx = self.document.property_definitions.len() - 1;
        let name = &self.document.property_definitions[idx].name;
        if let Some(pos) = self.pending_defaults.iter().position(|p| &p.property == name) {
            let pending = self.pending_defaults.remove(pos);
            self.apply_default(idx, &pending.raw, pending.line);
        }
    }

    /// Reconcile a `BA_DEF_DEF_` line against its declaration. Defaults
    /// and declarations may arrive in either order; a default seen first
    /// is held until the declaration arrives, and one whose declaration
    /// never appears is reported at build time.
    pub fn add_property_default(&mut self, name: &str, raw: &str) {
        match self
            .document
            .property_definitions
            .iter()
            .position(|d| d.name == name)
        {
            Some(idx) => self.apply_default(idx, raw, self.current_line),
            None => {
                self.pending_defaults
                    .retain(|p| p.property != name);
                self.pending_defaults.push(PendingDefault {
                    property: name.to_string(),
                    raw: raw.to_string(),
                    line: self.current_line,
                });
            }
        }
    }

    fn apply_default(&mut self, idx: usize, raw: &str, line: usize) {
        match coerce_value(&self.document.property_definitions[idx].payload, raw) {
            Coerced::Value(value) => {
                self.document.property_definitions[idx].default = Some(value)
            }
            Coerced::Fallback(value, detail) => {
                self.warn_at(line, Construct::PropertyDefault, detail);
                self.document.property_definitions[idx].default = Some(value);
            }
        }
    }

    /// Record a `BA_` assignment, typing the raw literal against the
    /// named definition when one exists.
    pub fn add_property_assignment(&mut self, property: &str, target: PropertyTarget, raw: &str) {
        let value = match self.document.property_definition(property) {
            Some(definition) => match coerce_value(&definition.payload, raw) {
                Coerced::Value(value) => value,
                Coerced::Fallback(value, detail) => {
                    self.warn(Construct::PropertyAssignment, detail);
                    value
                }
            },
            None => {
                self.warn(
                    Construct::PropertyAssignment,
                    format!("assignment references undeclared property '{property}'"),
                );
                PropertyValue::String(raw.to_string())
            }
        };
        self.document.property_assignments.push(PropertyAssignment {
            property: property.to_string(),
            target,
            value,
        });
    }

    /// Materialize the finished document. Defaults still waiting for a
    /// declaration at this point will never find one.
    pub fn build(mut self) -> (Dbc, Vec<ParseWarning>) {
        for pending in std::mem::take(&mut self.pending_defaults) {
            self.warn_at(
                pending.line,
                Construct::PropertyDefault,
                format!("default for undeclared property '{}'", pending.property),
            );
        }
        (self.document, self.warnings)
    }

    fn signal_mut(&mut self, message_id: u32, name: &str) -> Option<&mut Signal> {
        self.document
            .messages
            .iter_mut()
            .find(|m| m.id == message_id)?
            .signals
            .iter_mut()
            .find(|s| s.name == name)
    }
}

impl Default for DbcBuilder {
    fn default() -> Self {
        Self::new()
    }
}

enum Coerced {
    Value(PropertyValue),
    /// Best-effort value plus the warning detail explaining the mismatch.
    Fallback(PropertyValue, String),
}

/// Coerce a raw literal (already unquoted) to the data type of the
/// property it belongs to. Numeric ranges are not enforced.
fn coerce_value(payload: &PropertyPayload, raw: &str) -> Coerced {
    match payload {
        PropertyPayload::Integer { .. } | PropertyPayload::Hex { .. } => {
            match raw.parse::<i64>() {
                Ok(n) => Coerced::Value(PropertyValue::Integer(n)),
                Err(_) => Coerced::Fallback(
                    PropertyValue::String(raw.to_string()),
                    format!("'{raw}' is not an integer"),
                ),
            }
        }
        PropertyPayload::Float { .. } => match raw.parse::<f64>() {
            Ok(n) => Coerced::Value(PropertyValue::Float(n)),
            Err(_) => Coerced::Fallback(
                PropertyValue::String(raw.to_string()),
                format!("'{raw}' is not a float"),
            ),
        },
        PropertyPayload::String => Coerced::Value(PropertyValue::String(raw.to_string())),
        PropertyPayload::Enum { values } => {
            // A numeric literal selects a label by index.
            if let Ok(idx) = raw.parse::<usize>() {
                return match values.get(idx) {
                    Some(label) => Coerced::Value(PropertyValue::String(label.clone())),
                    None => Coerced::Fallback(
                        PropertyValue::String(raw.to_string()),
                        format!("enum index {idx} is out of range"),
                    ),
                };
            }
            Coerced::Value(PropertyValue::String(raw.to_string()))
        }
    }
}
