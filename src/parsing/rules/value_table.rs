//! Value table rules (`VAL_TABLE_`, `VAL_`)
//!
//! `VAL_TABLE_ <name> <raw> "<label>" ... ;` declares a named,
//! free-standing table. `VAL_ <message id> <signal> <raw> "<label>" ... ;`
//! attaches an anonymous table to a signal. Both may span lines until the
//! terminating `;`. Entry pairs are pulled out with a second regex pass
//! over the captured entry group.
//!
//! `VAL_TABLE_` must be dispatched before `VAL_`; the descriptions rule
//! also gates on the space-suffixed starter so the collision cannot bite
//! even if the order changes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Construct;
use crate::model::{ValueDescription, ValueTable};
use crate::parsing::builder::DbcBuilder;
use crate::parsing::line_source::LineSource;
use crate::parsing::rules::{read_statement, LineRule};

static VALUE_TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)^VAL_TABLE_\s+(?P<name>\w+)\s*(?P<entries>.*?)\s*;?\s*$"#).unwrap()
});
static VALUE_DESCRIPTIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)^VAL_\s+(?P<id>\d+)\s+(?P<signal>\w+)\s*(?P<entries>.*?)\s*;?\s*$"#).unwrap()
});
static VALUE_ENTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?P<raw>-?\d+)\s+"(?P<label>[^"]*)""#).unwrap());

/// Extract `<raw> "<label>"` pairs in declaration order.
fn split_entries(entries: &str) -> Vec<ValueDescription> {
    VALUE_ENTRY_RE
        .captures_iter(entries)
        .filter_map(|caps| {
            Some(ValueDescription {
                raw: caps["raw"].parse().ok()?,
                label: caps["label"].to_string(),
            })
        })
        .collect()
}

pub struct ValueTableRule;

impl LineRule for ValueTableRule {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut DbcBuilder,
        source: &mut dyn LineSource,
    ) -> bool {
        let line = line.trim();
        if !line.starts_with("VAL_TABLE_ ") {
            return false;
        }

        let statement = read_statement(line, source);
        match VALUE_TABLE_RE.captures(&statement) {
            Some(caps) => builder.add_value_table(ValueTable {
                name: caps["name"].to_string(),
                entries: split_entries(&caps["entries"]),
            }),
            None => builder.warn(Construct::ValueTable, "malformed value table"),
        }
        true
    }
}

pub struct ValueDescriptionsRule;

impl LineRule for ValueDescriptionsRule {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut DbcBuilder,
        source: &mut dyn LineSource,
    ) -> bool {
        let line = line.trim();
        if !line.starts_with("VAL_ ") {
            return false;
        }

        let statement = read_statement(line, source);
        match VALUE_DESCRIPTIONS_RE.captures(&statement) {
            Some(caps) => match caps["id"].parse() {
                Ok(id) => builder.add_value_descriptions(
                    id,
                    &caps["signal"],
                    split_entries(&caps["entries"]),
                ),
                Err(_) => builder.warn(Construct::ValueDescriptions, "message id out of range"),
            },
            None => builder.warn(Construct::ValueDescriptions, "malformed value descriptions"),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Message;
    use crate::parsing::line_source::TextLines;
    use crate::parsing::rules::signal::SignalRule;

    #[test]
    fn test_named_table_single_line() {
        let mut builder = DbcBuilder::new();
        let mut source = TextLines::new("");
        assert!(ValueTableRule.try_parse(
            r#"VAL_TABLE_ OnOff 0 "Off" 1 "On" ;"#,
            &mut builder,
            &mut source
        ));

        let (dbc, warnings) = builder.build();
        assert!(warnings.is_empty());
        let table = dbc.value_table("OnOff").unwrap();
        assert_eq!(table.entries.len(), 2);
        assert_eq!(table.entries[0].raw, 0);
        assert_eq!(table.entries[0].label, "Off");
        assert_eq!(table.entries[1].raw, 1);
        assert_eq!(table.entries[1].label, "On");
    }

    #[test]
    fn test_named_table_spanning_lines() {
        let mut builder = DbcBuilder::new();
        let mut source = TextLines::new("2 \"Fault\" 3 \"NotAvailable\" ;\nBU_: ECU");
        assert!(ValueTableRule.try_parse(
            r#"VAL_TABLE_ States 0 "Idle" 1 "Running""#,
            &mut builder,
            &mut source
        ));
        assert_eq!(source.next_line().as_deref(), Some("BU_: ECU"));

        let (dbc, warnings) = builder.build();
        assert!(warnings.is_empty());
        let labels: Vec<_> = dbc.value_table("States").unwrap()
            .entries
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Idle", "Running", "Fault", "NotAvailable"]);
    }

    #[test]
    fn test_empty_table_is_valid() {
        let mut builder = DbcBuilder::new();
        let mut source = TextLines::new("");
        assert!(ValueTableRule.try_parse("VAL_TABLE_ Empty ;", &mut builder, &mut source));

        let (dbc, warnings) = builder.build();
        assert!(warnings.is_empty());
        assert!(dbc.value_table("Empty").unwrap().entries.is_empty());
    }

    #[test]
    fn test_negative_raw_values() {
        let mut builder = DbcBuilder::new();
        let mut source = TextLines::new("");
        assert!(ValueTableRule.try_parse(
            r#"VAL_TABLE_ Signed -1 "minus" 0 "zero" ;"#,
            &mut builder,
            &mut source
        ));

        let (dbc, _) = builder.build();
        assert_eq!(dbc.value_table("Signed").unwrap().entries[0].raw, -1);
    }

    #[test]
    fn test_descriptions_attach_to_signal() {
        let mut builder = DbcBuilder::new();
        builder.add_message(Message::new(200, "SENSOR", 39, "SENSOR"));
        let mut sig_source = TextLines::new("");
        assert!(SignalRule.try_parse(
            r#"SG_ Mode : 0|2@1+ (1,0) [0|3] "" DBG"#,
            &mut builder,
            &mut sig_source
        ));

        let mut source = TextLines::new("");
        assert!(ValueDescriptionsRule.try_parse(
            r#"VAL_ 200 Mode 0 "idle" 1 "active" ;"#,
            &mut builder,
            &mut source
        ));

        let (dbc, warnings) = builder.build();
        assert!(warnings.is_empty());
        let signal = dbc.signal(200, "Mode").unwrap();
        assert_eq!(signal.value_descriptions.len(), 2);
        assert_eq!(signal.value_descriptions[1].label, "active");
    }

    #[test]
    fn test_descriptions_for_unknown_signal_warn() {
        let mut builder = DbcBuilder::new();
        let mut source = TextLines::new("");
        assert!(ValueDescriptionsRule.try_parse(
            r#"VAL_ 999 Ghost 0 "idle" ;"#,
            &mut builder,
            &mut source
        ));

        let (_, warnings) = builder.build();
        assert_eq!(warnings[0].construct, Construct::ValueDescriptions);
    }

    #[test]
    fn test_table_starter_not_owned_by_descriptions_rule() {
        let mut builder = DbcBuilder::new();
        let mut source = TextLines::new("");
        assert!(!ValueDescriptionsRule.try_parse(
            r#"VAL_TABLE_ OnOff 0 "Off" ;"#,
            &mut builder,
            &mut source
        ));
    }
}
