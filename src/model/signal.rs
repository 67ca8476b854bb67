//! Signal
//!
//! A signal is a bit-field within a message, with a scale factor and
//! offset mapping the raw value to a physical unit. This crate stores the
//! formula parameters verbatim; it does not decode bus data.
//!
//! Syntax (one line in the owning message's block):
//!
//! `SG_ <name> [M|m<N>] : <start>|<length>@<order><sign> (<factor>,<offset>) [<min>|<max>] "<unit>" <receiver>[,<receiver>]*`
//!
//! Examples:
//! - `SG_ MCU_longitude : 28|29@1- (1E-006,0) [-10|35.6] "deg"  NEO`
//! - `SG_ SENSOR__rear m1 : 256|6@1+ (0.1,0) [0|0] ""  DBG`

use serde::{Deserialize, Serialize};

use super::value_table::ValueDescription;

/// Bit-layout convention for multi-byte signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Motorola; `@0` in the layout field.
    BigEndian,
    /// Intel; `@1`.
    LittleEndian,
}

/// Signedness of the raw value; `+` is unsigned, `-` is signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Unsigned,
    Signed,
}

/// Role of a signal in a multiplexed message.
///
/// The indicator is distinguished purely by the leading literal: `M`
/// marks the multiplexor, `m<N>` marks a signal active when the
/// multiplexor reads N, and absence means the signal is not multiplexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Multiplexing {
    #[default]
    None,
    /// `M`: this signal selects which multiplexed signals are active.
    Multiplexor,
    /// `m<N>`: active when the multiplexor value equals N.
    MultiplexedBy(u32),
}

/// A signal within a message. Names are unique within the owning message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub name: String,
    pub start_bit: u16,
    pub length: u16,
    pub byte_order: ByteOrder,
    pub value_type: ValueType,
    pub factor: f64,
    pub offset: f64,
    pub min: f64,
    pub max: f64,
    pub unit: String,
    /// Receiving node names in declaration order; possibly empty.
    pub receivers: Vec<String>,
    pub multiplexing: Multiplexing,
    pub comment: Option<String>,
    /// Anonymous value table attached by a `VAL_` statement.
    pub value_descriptions: Vec<ValueDescription>,
}

impl Signal {
    pub fn is_multiplexor(&self) -> bool {
        self.multiplexing == Multiplexing::Multiplexor
    }
}
