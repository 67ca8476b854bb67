//! Command-line interface for candbc
//! This binary parses DBC files and prints the resulting document model.
//!
//! Usage:
//!   candbc dump `<path>` [--format `<format>`]  - Parse and print the document model
//!   candbc check `<path>`                     - Parse and report grammar warnings

use clap::{Arg, Command};
use std::fs;

fn main() {
    let matches = Command::new("candbc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting DBC CAN database files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("dump")
                .about("Parse a DBC file and print the document model")
                .arg(
                    Arg::new("path")
                        .help("Path to the DBC file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'json', 'yaml')")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse a DBC file and report grammar warnings")
                .arg(
                    Arg::new("path")
                        .help("Path to the DBC file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("dump", dump_matches)) => {
            let path = dump_matches.get_one::<String>("path").unwrap();
            let format = dump_matches.get_one::<String>("format").unwrap();
            handle_dump_command(path, format);
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            handle_check_command(path);
        }
        _ => unreachable!(),
    }
}

fn read_and_parse(path: &str) -> candbc::Parsed {
    match fs::read_to_string(path) {
        Ok(text) => candbc::parse(&text),
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Handle the dump command
fn handle_dump_command(path: &str, format: &str) {
    let parsed = read_and_parse(path);
    for warning in &parsed.warnings {
        eprintln!("warning: {}", warning);
    }

    let output = match format {
        "yaml" => serde_yaml::to_string(&parsed.document)
            .unwrap_or_else(|e| format!("serialization error: {}", e)),
        _ => serde_json::to_string_pretty(&parsed.document)
            .unwrap_or_else(|e| format!("serialization error: {}", e)),
    };
    println!("{}", output);
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let parsed = read_and_parse(path);
    if parsed.warnings.is_empty() {
        println!(
            "OK: {} nodes, {} messages, {} signals",
            parsed.document.nodes.len(),
            parsed.document.messages.len(),
            parsed
                .document
                .messages
                .iter()
                .map(|m| m.signals.len())
                .sum::<usize>()
        );
        return;
    }

    for warning in &parsed.warnings {
        println!("{}", warning);
    }
    std::process::exit(2);
}
