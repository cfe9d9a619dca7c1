//! Command-line interface for descent
//! This binary exposes the three pipeline stages as subcommands so each
//! artifact (tokens, trace, tree, layout) can be inspected from the shell.
//!
//! Usage:
//!   descent tokens `<expr>` [--format `<format>`]  - Print the token stream
//!   descent trace  `<expr>` [--format `<format>`]  - Print the parsing step trace
//!   descent tree   `<expr>` [--format `<format>`]  - Print the parse tree
//!   descent layout `<expr>` [--format `<format>`]  - Print the tree layout geometry

use clap::{Arg, Command};
use descent::expr::{compute_tree_layout, parse, to_treeviz_str, tokenize, ParseOutcome};
use serde::Serialize;

fn main() {
    let matches = Command::new("descent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect the lexing, parsing, and layout stages of an arithmetic expression")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream")
                .arg(expression_arg())
                .arg(format_arg("json")),
        )
        .subcommand(
            Command::new("trace")
                .about("Print the parsing step trace")
                .arg(expression_arg())
                .arg(format_arg("json")),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the parse tree")
                .arg(expression_arg())
                .arg(format_arg("text")),
        )
        .subcommand(
            Command::new("layout")
                .about("Print the tree layout geometry")
                .arg(expression_arg())
                .arg(format_arg("json")),
        )
        .get_matches();

    match matches.subcommand() {
        Some((name, sub)) => {
            let expression = sub.get_one::<String>("expression").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            match name {
                "tokens" => handle_tokens(expression, format),
                "trace" => handle_trace(expression, format),
                "tree" => handle_tree(expression, format),
                "layout" => handle_layout(expression, format),
                _ => unreachable!(),
            }
        }
        None => unreachable!(),
    }
}

fn expression_arg() -> Arg {
    Arg::new("expression")
        .help("The arithmetic expression to analyze")
        .required(true)
        .index(1)
}

fn format_arg(default: &'static str) -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (e.g., 'json', 'yaml')")
        .default_value(default)
}

fn handle_tokens(expression: &str, format: &str) {
    match tokenize(expression) {
        Ok(tokens) => emit(&tokens, format),
        Err(err) => fail(&err.to_string()),
    }
}

fn handle_trace(expression: &str, format: &str) {
    let outcome = parsed_outcome(expression);
    emit(&outcome.steps, format);
    if let Some(err) = outcome.error {
        fail(&err.to_string());
    }
}

fn handle_tree(expression: &str, format: &str) {
    let outcome = parsed_outcome(expression);
    match (outcome.tree, outcome.error) {
        (Some(tree), _) => {
            if format == "text" {
                print!("{}", to_treeviz_str(&tree));
            } else {
                emit(&tree, format);
            }
        }
        (None, Some(err)) => fail(&err.to_string()),
        (None, None) => unreachable!(),
    }
}

fn handle_layout(expression: &str, format: &str) {
    let outcome = parsed_outcome(expression);
    match (outcome.tree, outcome.error) {
        (Some(tree), _) => emit(&compute_tree_layout(Some(&tree)), format),
        (None, Some(err)) => fail(&err.to_string()),
        (None, None) => unreachable!(),
    }
}

fn parsed_outcome(expression: &str) -> ParseOutcome {
    match tokenize(expression) {
        Ok(tokens) => parse(&tokens),
        Err(err) => fail(&err.to_string()),
    }
}

fn emit<T: Serialize>(value: &T, format: &str) {
    let rendered = match format {
        "json" => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        "yaml" => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        other => Err(format!("unknown format '{}' (expected 'json' or 'yaml')", other)),
    };
    match rendered {
        Ok(text) => println!("{}", text),
        Err(message) => fail(&message),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
