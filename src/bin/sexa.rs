//! Command-line interface for sexa
//! This binary parses angle strings from the command line, mostly as a
//! quick way to inspect what the library makes of a given notation.
//!
//! Usage:
//!   sexa parse `<angle>` [--format `<format>`]  - Parse an angle and print the result
//!   sexa tokens `<angle>`                     - Print the token stream for an angle

use clap::{Arg, Command};
use sexa::angle::{lex, parse_angle};

fn main() {
    let matches = Command::new("sexa")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing sexagesimal angle strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse an angle string and print the result")
                .arg(
                    Arg::new("angle")
                        .help("The angle string to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream for an angle string")
                .arg(
                    Arg::new("angle")
                        .help("The angle string to tokenize")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let angle = parse_matches.get_one::<String>("angle").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(angle, format);
        }
        Some(("tokens", tokens_matches)) => {
            let angle = tokens_matches.get_one::<String>("angle").unwrap();
            handle_tokens_command(angle);
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(input: &str, format: &str) {
    let angle = parse_angle(input).unwrap_or_else(|error| {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    });

    match format {
        "json" => {
            let rendered = serde_json::to_string_pretty(&angle).unwrap_or_else(|error| {
                eprintln!("Serialization error: {}", error);
                std::process::exit(1);
            });
            println!("{}", rendered);
        }
        "text" => {
            println!("{}", angle);
            println!("value: {}", angle.signed_value());
        }
        other => {
            eprintln!("Unknown format '{}'", other);
            std::process::exit(1);
        }
    }
}

/// Handle the tokens command
fn handle_tokens_command(input: &str) {
    match lex(input) {
        Ok(tokens) => {
            for (token, span) in tokens {
                println!("{:>3}..{:<3} {:?}", span.start, span.end, token);
            }
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    }
}
