//! # candbc
//!
//! A parser for the DBC CAN database format.
//!
//! DBC files describe a CAN bus: the nodes on it, the messages they
//! exchange, the signals packed into each message, value tables, and
//! vendor-defined custom properties. `candbc` parses a file into a
//! read-only [`model::Dbc`] document:
//!
//! ```ignore
//! let parsed = candbc::parse(text);
//! for warning in &parsed.warnings {
//!     eprintln!("{warning}");
//! }
//! let speed = parsed.document.signal(200, "Speed");
//! ```
//!
//! File-content problems never abort a parse: owned-but-malformed lines
//! and unresolved cross-references are reported as warnings, and lines
//! belonging to no known construct are dropped for forward compatibility.

pub mod error;
pub mod model;
pub mod parsing;

pub use error::{Construct, DbcError, ParseWarning};
pub use model::Dbc;
pub use parsing::{parse, parse_reader, Parsed};
