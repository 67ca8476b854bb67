//! Header rules: `VERSION`, the `NS_` symbol block, and `BS_:` bit timing.
//!
//! The `NS_` rule is the one place the parser looks ahead without a
//! terminating `;`: the block lists symbol names (many of which are other
//! constructs' starters, like `CM_` or `BA_DEF_`) on indented lines, so
//! they must be consumed here or they would be mis-dispatched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Construct;
use crate::parsing::builder::DbcBuilder;
use crate::parsing::line_source::LineSource;
use crate::parsing::rules::LineRule;

static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^VERSION\s+"(?P<text>[^"]*)""#).unwrap());

// Old-style `BS_: <baudrate>:<BTR1>,<BTR2>`; every field is optional in
// files seen in the wild, including the whole payload.
static BIT_TIMING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^BS_:\s*(?:(?P<baud>\d+)\s*(?::\s*\d+\s*,\s*\d+)?)?\s*$").unwrap()
});

pub struct VersionRule;

impl LineRule for VersionRule {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut DbcBuilder,
        _source: &mut dyn LineSource,
    ) -> bool {
        let line = line.trim();
        if !line.starts_with("VERSION") {
            return false;
        }

        match VERSION_RE.captures(line) {
            Some(caps) => builder.set_version(caps["text"].to_string()),
            None => builder.warn(Construct::Version, "malformed VERSION line"),
        }
        true
    }
}

pub struct SymbolsRule;

impl LineRule for SymbolsRule {
    fn try_parse(
        &self,
        line: &str,
        _builder: &mut DbcBuilder,
        source: &mut dyn LineSource,
    ) -> bool {
        if !line.trim().starts_with("NS_") {
            return false;
        }

        // Swallow the indented symbol-name lines; their content is not
        // part of the document model.
        while let Some(next) = source.peek_line() {
            let is_symbol = next.starts_with(char::is_whitespace) && !next.trim().is_empty();
            if !is_symbol {
                break;
            }
            source.next_line();
        }
        true
    }
}

pub struct BitTimingRule;

impl LineRule for BitTimingRule {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut DbcBuilder,
        _source: &mut dyn LineSource,
    ) -> bool {
        let line = line.trim();
        if !line.starts_with("BS_:") {
            return false;
        }

        match BIT_TIMING_RE.captures(line) {
            Some(caps) => {
                if let Some(baud) = caps.name("baud") {
                    match baud.as_str().parse() {
                        Ok(rate) => builder.set_baud_rate(rate),
                        Err(_) => builder.warn(Construct::BitTiming, "baud rate out of range"),
                    }
                }
            }
            None => builder.warn(Construct::BitTiming, "malformed bit-timing line"),
        }
        true
    }
}
