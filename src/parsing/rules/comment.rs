//! Comment rule (`CM_`)
//!
//! Forms:
//! - `CM_ BU_ <node> "<text>";`
//! - `CM_ BO_ <id> "<text>";`
//! - `CM_ SG_ <id> <signal> "<text>";`
//! - `CM_ EV_ <name> "<text>";` (consumed; environment variables are not
//!   part of the model)
//! - `CM_ "<text>";` (file-level; consumed but not stored)
//!
//! Comment text may span lines, so the rule pulls continuations from the
//! source until the terminating `;`. If the source runs dry first, the
//! text gathered so far is matched as-is.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::error::Construct;
use crate::parsing::builder::{CommentTarget, DbcBuilder};
use crate::parsing::line_source::LineSource;
use crate::parsing::rules::{read_statement, LineRule};

static NODE_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)^CM_\s+BU_\s+(?P<node>\w+)\s+"(?P<text>.*)"\s*;?\s*$"#).unwrap());
static MESSAGE_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)^CM_\s+BO_\s+(?P<id>\d+)\s+"(?P<text>.*)"\s*;?\s*$"#).unwrap());
static SIGNAL_COMMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)^CM_\s+SG_\s+(?P<id>\d+)\s+(?P<signal>\w+)\s+"(?P<text>.*)"\s*;?\s*$"#)
        .unwrap()
});
static ENV_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)^CM_\s+EV_\s+\w+\s+".*"\s*;?\s*$"#).unwrap());
static GLOBAL_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)^CM_\s+".*"\s*;?\s*$"#).unwrap());

pub struct CommentRule;

impl LineRule for CommentRule {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut DbcBuilder,
        source: &mut dyn LineSource,
    ) -> bool {
        let line = line.trim();
        if !line.starts_with("CM_") {
            return false;
        }

        let statement = read_statement(line, source);

        if let Some(caps) = NODE_COMMENT_RE.captures(&statement) {
            builder.attach_comment(
                CommentTarget::Node(caps["node"].to_string()),
                caps["text"].to_string(),
            );
        } else if let Some(caps) = MESSAGE_COMMENT_RE.captures(&statement) {
            match caps["id"].parse() {
                Ok(id) => builder.attach_comment(
                    CommentTarget::Message(id),
                    caps["text"].to_string(),
                ),
                Err(_) => builder.warn(Construct::Comment, "message id out of range"),
            }
        } else if let Some(caps) = SIGNAL_COMMENT_RE.captures(&statement) {
            match caps["id"].parse() {
                Ok(id) => builder.attach_comment(
                    CommentTarget::Signal {
                        message_id: id,
                        name: caps["signal"].to_string(),
                    },
                    caps["text"].to_string(),
                ),
                Err(_) => builder.warn(Construct::Comment, "message id out of range"),
            }
        } else if ENV_COMMENT_RE.is_match(&statement) || GLOBAL_COMMENT_RE.is_match(&statement) {
            trace!("comment target outside the document model; dropped");
        } else {
            builder.warn(Construct::Comment, "malformed comment body");
        }
        true
    }
}
