//! Property assignment rule (`BA_`)
//!
//! `BA_ "<property>" [BU_ <node> | BO_ <id> | SG_ <id> <signal> | EV_ <name>] <value>;`
//!
//! With no target token the assignment is file-global. The value literal
//! is a bare signed number or a quoted string; it is typed against the
//! property's declaration by the builder. The gate uses the
//! space-suffixed starter `BA_ `, so the `BA_DEF_` family is never owned
//! here regardless of dispatch order.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Construct;
use crate::model::PropertyTarget;
use crate::parsing::builder::DbcBuilder;
use crate::parsing::line_source::LineSource;
use crate::parsing::rules::LineRule;

static ASSIGNMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^BA_\s+"(?P<name>[a-zA-Z_]\w*)"\s+"#,
        r#"(?:BU_\s+(?P<node>\w+)\s+"#,
        r#"|BO_\s+(?P<msg>\d+)\s+"#,
        r#"|SG_\s+(?P<sigmsg>\d+)\s+(?P<sig>\w+)\s+"#,
        r#"|EV_\s+(?P<env>\w+)\s+)?"#,
        r#"(?P<value>-?[0-9.+\-eE]+|"[^"]*")\s*;"#,
    ))
    .unwrap()
});

pub struct PropertyValueRule;

impl LineRule for PropertyValueRule {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut DbcBuilder,
        _source: &mut dyn LineSource,
    ) -> bool {
        let line = line.trim();
        if !line.starts_with("BA_ ") {
            return false;
        }

        match ASSIGNMENT_RE.captures(line).and_then(extract) {
            Some((name, target, raw)) => builder.add_property_assignment(&name, target, &raw),
            None => builder.warn(Construct::PropertyAssignment, "malformed property value"),
        }
        true
    }
}

fn extract(caps: regex::Captures) -> Option<(String, PropertyTarget, String)> {
    let target = if let Some(node) = caps.name("node") {
        PropertyTarget::Node(node.as_str().to_string())
    } else if let Some(msg) = caps.name("msg") {
        PropertyTarget::Message(msg.as_str().parse().ok()?)
    } else if let Some(sigmsg) = caps.name("sigmsg") {
        PropertyTarget::Signal {
            message_id: sigmsg.as_str().parse().ok()?,
            name: caps["sig"].to_string(),
        }
    } else if let Some(env) = caps.name("env") {
        PropertyTarget::Environment(env.as_str().to_string())
    } else {
        PropertyTarget::Global
    };

    let raw = caps["value"].replace('"', "");
    Some((caps["name"].to_string(), target, raw))
}
