//! Custom property declaration rules (`BA_DEF_`, `BA_DEF_DEF_`)
//!
//! One rule handles both starters, and the default starter is tested
//! first: `BA_DEF_DEF_` would otherwise collide with a naive check for
//! the shorter `BA_DEF_` family name.
//!
//! Declaration grammar: an optional target token (`BU_` node, `BO_`
//! message, `SG_` signal, `EV_` environment; absence means node-level),
//! a quoted name, and exactly one of five payload shapes:
//! `INT <min> <max>`, `HEX <min> <max>`, `FLOAT <min> <max>`, `STRING`,
//! `ENUM "<v1>","<v2>",...`.
//!
//! The default grammar captures the name and one literal (bare signed
//! number or quoted string); type reconciliation against the declaration
//! happens in the builder, not here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Construct;
use crate::model::{PropertyDefinition, PropertyObjectType, PropertyPayload};
use crate::parsing::builder::DbcBuilder;
use crate::parsing::line_source::LineSource;
use crate::parsing::rules::LineRule;

const PROPERTY_STARTER: &str = "BA_DEF_ ";
const DEFAULT_STARTER: &str = "BA_DEF_DEF_ ";

static PROPERTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^BA_DEF_\s+(?:(?P<object>BU_|BO_|SG_|EV_)\s+)?"(?P<name>[a-zA-Z_]\w*)"\s+"#,
        r#"(?:(?P<int>INT|HEX)\s+(?P<imin>-?\d+)\s+(?P<imax>-?\d+)"#,
        r#"|(?P<float>FLOAT)\s+(?P<fmin>[0-9.+\-eE]+)\s+(?P<fmax>[0-9.+\-eE]+)"#,
        r#"|(?P<string>STRING)"#,
        r#"|ENUM\s+(?P<enum>(?:"[^"]*"\s*,?\s*)*))"#,
        r#"\s*;"#,
    ))
    .unwrap()
});

static DEFAULT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^BA_DEF_DEF_\s+"(?P<name>[a-zA-Z_]\w*)"\s+(?P<value>-?\d+|[0-9.+\-eE]+|"[^"]*")\s*;"#)
        .unwrap()
});

static ENUM_LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""(?P<label>[^"]*)""#).unwrap());

pub struct PropertiesDefinitionRule;

impl LineRule for PropertiesDefinitionRule {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut DbcBuilder,
        _source: &mut dyn LineSource,
    ) -> bool {
        let line = line.trim();
        if !line.starts_with(PROPERTY_STARTER) && !line.starts_with(DEFAULT_STARTER) {
            return false;
        }

        if line.starts_with(DEFAULT_STARTER) {
            match DEFAULT_RE.captures(line) {
                Some(caps) => {
                    let value = caps["value"].replace('"', "");
                    builder.add_property_default(&caps["name"], &value);
                }
                None => builder.warn(Construct::PropertyDefault, "malformed property default"),
            }
            return true;
        }

        match PROPERTY_RE.captures(line).and_then(extract) {
            Some(definition) => builder.add_property_definition(definition),
            None => builder.warn(
                Construct::PropertyDefinition,
                "malformed property declaration",
            ),
        }
        true
    }
}

fn extract(caps: regex::Captures) -> Option<PropertyDefinition> {
    let object_type = match caps.name("object").map(|m| m.as_str()) {
        Some("BO_") => PropertyObjectType::Message,
        Some("SG_") => PropertyObjectType::Signal,
        Some("EV_") => PropertyObjectType::Environment,
        _ => PropertyObjectType::Node,
    };

    let payload = if let Some(kind) = caps.name("int") {
        let min = caps["imin"].parse().ok()?;
        let max = caps["imax"].parse().ok()?;
        if kind.as_str() == "INT" {
            PropertyPayload::Integer { min, max }
        } else {
            PropertyPayload::Hex { min, max }
        }
    } else if caps.name("float").is_some() {
        PropertyPayload::Float {
            min: caps["fmin"].parse().ok()?,
            max: caps["fmax"].parse().ok()?,
        }
    } else if caps.name("string").is_some() {
        PropertyPayload::String
    } else {
        PropertyPayload::Enum {
            values: ENUM_LABEL_RE
                .captures_iter(&caps["enum"])
                .map(|c| c["label"].to_string())
                .collect(),
        }
    };

    Some(PropertyDefinition {
        name: caps["name"].to_string(),
        object_type,
        payload,
        default: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyValue;
    use crate::parsing::line_source::TextLines;

    fn parse_into(line: &str, builder: &mut DbcBuilder) -> bool {
        let mut source = TextLines::new("");
        PropertiesDefinitionRule.try_parse(line, builder, &mut source)
    }

    #[test]
    fn test_message_int_declaration() {
        let mut builder = DbcBuilder::new();
        assert!(parse_into(
            r#"BA_DEF_ BO_ "GenMsgCycleTime" INT 0 3600;"#,
            &mut builder
        ));

        let (dbc, warnings) = builder.build();
        assert!(warnings.is_empty());
        let definition = dbc.property_definition("GenMsgCycleTime").unwrap();
        assert_eq!(definition.object_type, PropertyObjectType::Message);
        assert_eq!(
            definition.payload,
            PropertyPayload::Integer { min: 0, max: 3600 }
        );
    }

    #[test]
    fn test_signal_enum_declaration() {
        let mut builder = DbcBuilder::new();
        assert!(parse_into(
            r#"BA_DEF_ SG_ "VFrameFormat" ENUM "StandardCAN","ExtendedCAN";"#,
            &mut builder
        ));

        let (dbc, warnings) = builder.build();
        assert!(warnings.is_empty());
        let definition = dbc.property_definition("VFrameFormat").unwrap();
        assert_eq!(definition.object_type, PropertyObjectType::Signal);
        assert_eq!(
            definition.payload,
            PropertyPayload::Enum {
                values: vec!["StandardCAN".to_string(), "ExtendedCAN".to_string()]
            }
        );
    }

    #[test]
    fn test_declaration_without_target_is_node_level() {
        let mut builder = DbcBuilder::new();
        assert!(parse_into(r#"BA_DEF_ "BusType" STRING;"#, &mut builder));

        let (dbc, _) = builder.build();
        let definition = dbc.property_definition("BusType").unwrap();
        assert_eq!(definition.object_type, PropertyObjectType::Node);
        assert_eq!(definition.payload, PropertyPayload::String);
    }

    #[test]
    fn test_float_declaration() {
        let mut builder = DbcBuilder::new();
        assert!(parse_into(
            r#"BA_DEF_ SG_ "SignalGain" FLOAT 0.5 1.5e2;"#,
            &mut builder
        ));

        let (dbc, _) = builder.build();
        assert_eq!(
            dbc.property_definition("SignalGain").unwrap().payload,
            PropertyPayload::Float { min: 0.5, max: 150.0 }
        );
    }

    #[test]
    fn test_hex_declaration() {
        let mut builder = DbcBuilder::new();
        assert!(parse_into(r#"BA_DEF_ "Mask" HEX 0 255;"#, &mut builder));

        let (dbc, _) = builder.build();
        assert_eq!(
            dbc.property_definition("Mask").unwrap().payload,
            PropertyPayload::Hex { min: 0, max: 255 }
        );
    }

    #[test]
    fn test_default_after_declaration() {
        let mut builder = DbcBuilder::new();
        assert!(parse_into(
            r#"BA_DEF_ BO_ "GenMsgCycleTime" INT 0 3600;"#,
            &mut builder
        ));
        assert!(parse_into(
            r#"BA_DEF_DEF_ "GenMsgCycleTime" 100;"#,
            &mut builder
        ));

        let (dbc, warnings) = builder.build();
        assert!(warnings.is_empty());
        assert_eq!(
            dbc.property_definition("GenMsgCycleTime").unwrap().default,
            Some(PropertyValue::Integer(100))
        );
    }

    #[test]
    fn test_quoted_string_default() {
        let mut builder = DbcBuilder::new();
        assert!(parse_into(r#"BA_DEF_ "BusType" STRING;"#, &mut builder));
        assert!(parse_into(r#"BA_DEF_DEF_ "BusType" "CAN";"#, &mut builder));

        let (dbc, warnings) = builder.build();
        assert!(warnings.is_empty());
        assert_eq!(
            dbc.property_definition("BusType").unwrap().default,
            Some(PropertyValue::String("CAN".to_string()))
        );
    }

    #[test]
    fn test_default_without_declaration_does_not_crash() {
        let mut builder = DbcBuilder::new();
        assert!(parse_into(r#"BA_DEF_DEF_ "Unknown" 42;"#, &mut builder));

        let (dbc, warnings) = builder.build();
        assert!(dbc.property_definitions.is_empty());
        assert_eq!(warnings[0].construct, Construct::PropertyDefault);
    }

    #[test]
    fn test_malformed_declaration_is_owned_and_warns() {
        let mut builder = DbcBuilder::new();
        assert!(parse_into(r#"BA_DEF_ BO_ "Broken" WAT 1 2;"#, &mut builder));

        let (dbc, warnings) = builder.build();
        assert!(dbc.property_definitions.is_empty());
        assert_eq!(warnings[0].construct, Construct::PropertyDefinition);
    }

    #[test]
    fn test_bare_family_name_is_not_owned() {
        let mut builder = DbcBuilder::new();
        assert!(!parse_into("BA_DEF_", &mut builder));
        assert!(!parse_into("BA_DEF_SOMETHING_ELSE", &mut builder));
    }
}
