//! Signal rule (`SG_`)
//!
//! Grammar:
//!
//! `SG_ <name> [M|m<N>] : <start>|<length>@<order><sign> (<factor>,<offset>) [<min>|<max>] "<unit>" <receiver>[,<receiver>]*`
//!
//! The multiplexing token is optional and valid both glued to the colon
//! and separated from it by a space. Numeric fields accept scientific
//! notation. A bare `SG_` prefix with no body is an accepted no-op match:
//! it guards against empty continuation artifacts and must not produce a
//! warning or any builder mutation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Construct;
use crate::model::{ByteOrder, Multiplexing, Signal, ValueType};
use crate::parsing::builder::DbcBuilder;
use crate::parsing::line_source::LineSource;
use crate::parsing::rules::LineRule;

const SIGNAL_STARTER: &str = "SG_";

static SIGNAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^SG_\s+(?P<name>\w+)\s*(?P<mux>M|m\d+)?\s*:\s*",
        r"(?P<start>\d+)\|(?P<length>\d+)@(?P<order>[01])(?P<sign>[+-])\s*",
        r"\(\s*(?P<factor>[0-9.+\-eE]+)\s*,\s*(?P<offset>[0-9.+\-eE]+)\s*\)\s*",
        r"\[\s*(?P<min>[0-9.+\-eE]+)\s*\|\s*(?P<max>[0-9.+\-eE]+)\s*\]\s*",
        r#""(?P<unit>[^"]*)"\s*(?P<receivers>[\w\s,]*)$"#,
    ))
    .unwrap()
});

pub struct SignalRule;

impl LineRule for SignalRule {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut DbcBuilder,
        _source: &mut dyn LineSource,
    ) -> bool {
        let line = line.trim();
        if !line.starts_with(SIGNAL_STARTER) {
            return false;
        }

        // Prefix-only artifact: owned, but contributes nothing.
        if line[SIGNAL_STARTER.len()..].trim().is_empty() {
            return true;
        }

        match SIGNAL_RE.captures(line).and_then(extract) {
            Some(signal) => builder.add_signal(signal),
            None => builder.warn(Construct::Signal, "malformed signal body"),
        }
        true
    }
}

fn extract(caps: regex::Captures) -> Option<Signal> {
    let multiplexing = match caps.name("mux").map(|m| m.as_str()) {
        None => Multiplexing::None,
        Some("M") => Multiplexing::Multiplexor,
        Some(token) => Multiplexing::MultiplexedBy(token[1..].parse().ok()?),
    };
    let byte_order = match &caps["order"] {
        "0" => ByteOrder::BigEndian,
        _ => ByteOrder::LittleEndian,
    };
    let value_type = match &caps["sign"] {
        "+" => ValueType::Unsigned,
        _ => ValueType::Signed,
    };

    Some(Signal {
        name: caps["name"].to_string(),
        start_bit: caps["start"].parse().ok()?,
        length: caps["length"].parse().ok()?,
        byte_order,
        value_type,
        factor: caps["factor"].parse().ok()?,
        offset: caps["offset"].parse().ok()?,
        min: caps["min"].parse().ok()?,
        max: caps["max"].parse().ok()?,
        unit: caps["unit"].to_string(),
        receivers: split_receivers(&caps["receivers"]),
        multiplexing,
        comment: None,
        value_descriptions: Vec::new(),
    })
}

/// Split strictly on comma, trimming surrounding whitespace per entry.
/// Order is preserved and placeholder tokens are kept literally.
fn split_receivers(list: &str) -> Vec<String> {
    if list.trim().is_empty() {
        return Vec::new();
    }
    list.split(',').map(|r| r.trim().to_string()).collect()
}
