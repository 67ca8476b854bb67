//! Message rule (`BO_`)
//!
//! `BO_ <id> <name>: <length> <transmitter>`
//!
//! Matching a header opens the builder's message context: the `SG_`
//! lines that follow, up to the next header, attach to this message.
//! The gate includes the trailing space so that `BO_TX_BU_` lines (an
//! unrelated construct) are not owned here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Construct;
use crate::model::Message;
use crate::parsing::builder::DbcBuilder;
use crate::parsing::line_source::LineSource;
use crate::parsing::rules::LineRule;

const MESSAGE_STARTER: &str = "BO_ ";

static MESSAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^BO_\s+(?P<id>\d+)\s+(?P<name>\w+)\s*:\s*(?P<length>\d+)\s+(?P<transmitter>\w+)")
        .unwrap()
});

pub struct MessageRule;

impl LineRule for MessageRule {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut DbcBuilder,
        _source: &mut dyn LineSource,
    ) -> bool {
        let line = line.trim();
        if !line.starts_with(MESSAGE_STARTER) {
            return false;
        }

        match MESSAGE_RE.captures(line).and_then(extract) {
            Some(message) => builder.add_message(message),
            None => builder.warn(Construct::Message, "malformed message header"),
        }
        true
    }
}

fn extract(caps: regex::Captures) -> Option<Message> {
    Some(Message::new(
        caps["id"].parse().ok()?,
        &caps["name"],
        caps["length"].parse().ok()?,
        &caps["transmitter"],
    ))
}
