//! Modl CLI
//!
//! Diagnostic commands for the modl front end: build metadata, the token
//! table, and scanning model files.

use std::fs;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use modl_core::buildinfo::{self, PRESOLVE_BUILD, SOLVER_BUILD};
use modl_core::diagnostics::{DiagnosticSeverity, Diagnostics, DiagnosticsOutput};
use modl_core::lexer::Token;
use modl_core::value::SemanticValue;
use modl_core::{Session, TokenKind};

#[derive(Parser)]
#[command(name = "modl")]
#[command(author, version, about = "Front-end tooling for the modl modeling language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the solver-suite build report
    Version {
        /// Output format (human, json)
        #[arg(short, long, default_value = "human")]
        format: String,
    },

    /// Dump the token table (name, code, class)
    Tokens {
        /// Output format (human, json)
        #[arg(short, long, default_value = "human")]
        format: String,
    },

    /// Tokenize a model file and print the token stream
    Scan {
        /// Path to the .modl file
        file: String,

        /// Output format (human, json)
        #[arg(short, long, default_value = "human")]
        format: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Version { format } => cmd_version(&format),
        Commands::Tokens { format } => cmd_tokens(&format),
        Commands::Scan { file, format } => cmd_scan(&file, &format),
    }
}

fn cmd_version(format: &str) -> ExitCode {
    match format {
        "json" => {
            let output = serde_json::json!({
                "solver": SOLVER_BUILD,
                "presolve": PRESOLVE_BUILD,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        _ => {
            print!("{}", buildinfo::report());
        }
    }
    ExitCode::SUCCESS
}

fn cmd_tokens(format: &str) -> ExitCode {
    match format {
        "json" => {
            let table: Vec<_> = TokenKind::ALL
                .iter()
                .map(|kind| {
                    serde_json::json!({
                        "name": kind.name(),
                        "code": kind.code(),
                        "class": kind.class().label(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&table).unwrap());
        }
        _ => {
            for kind in TokenKind::ALL {
                println!(
                    "{:>5}  {:<12} {}",
                    kind.code(),
                    kind.name(),
                    kind.class().label().dimmed()
                );
            }
        }
    }
    ExitCode::SUCCESS
}

fn scan_file(file: &str) -> Result<(Session, Vec<Token>, Diagnostics), std::io::Error> {
    let source = fs::read_to_string(file)?;
    let mut session = Session::new();
    let (tokens, diagnostics) = modl_core::scan(&source, file, &mut session);
    Ok((session, tokens, diagnostics))
}

fn cmd_scan(file: &str, format: &str) -> ExitCode {
    let (session, tokens, diagnostics) = match scan_file(file) {
        Ok(result) => result,
        Err(e) => {
            eprintln!(
                "{} Failed to read file '{}': {}",
                "error:".red().bold(),
                file,
                e
            );
            return ExitCode::from(2);
        }
    };

    match format {
        "json" => {
            let stream: Vec<_> = tokens
                .iter()
                .map(|token| {
                    let mut entry = serde_json::json!({
                        "kind": token.kind.name(),
                        "code": token.kind.code(),
                        "text": token.text,
                        "line": token.span.start.line,
                        "column": token.span.start.column,
                    });
                    if let Some(value) = &token.value {
                        entry["value"] = serde_json::Value::String(render_value(&session, value));
                    }
                    entry
                })
                .collect();
            let output = serde_json::json!({
                "status": if diagnostics.has_errors() { "error" } else { "ok" },
                "tokens": stream,
                "diagnostics": DiagnosticsOutput::from_diagnostics(&diagnostics),
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        _ => {
            for token in &tokens {
                let payload = token
                    .value
                    .as_ref()
                    .map(|v| render_value(&session, v))
                    .unwrap_or_default();
                println!(
                    "{:>4}:{:<3} {:>5}  {:<12} {:<16} {}",
                    token.span.start.line,
                    token.span.start.column,
                    token.kind.code(),
                    token.kind.name(),
                    token.text,
                    payload.dimmed()
                );
            }

            for diag in diagnostics.iter() {
                let severity_str = match diag.severity {
                    DiagnosticSeverity::Error => "error".red().bold(),
                    DiagnosticSeverity::Warning => "warning".yellow().bold(),
                    DiagnosticSeverity::Info => "info".blue().bold(),
                };
                println!(
                    "{}{} {} {}",
                    severity_str,
                    format!("[{}]", diag.code).dimmed(),
                    ":".bold(),
                    diag.message
                );
                println!(
                    "  {} {}:{}:{}",
                    "-->".blue().bold(),
                    diag.file,
                    diag.span.start.line,
                    diag.span.start.column
                );
            }

            if diagnostics.has_errors() {
                let error_count = diagnostics.errors().count();
                eprintln!(
                    "{}: could not scan `{}` cleanly due to {} previous error{}",
                    "error".red().bold(),
                    file,
                    error_count,
                    if error_count == 1 { "" } else { "s" }
                );
            } else {
                println!(
                    "{} `{}` scanned into {} tokens",
                    "Finished".green().bold(),
                    file,
                    tokens.len()
                );
            }
        }
    }

    if diagnostics.has_errors() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn render_value(session: &Session, value: &SemanticValue) -> String {
    match value {
        SemanticValue::Bits(bits) => format!("bits 0x{:03x}", bits),
        SemanticValue::Numb(id) => format!("numb {}", session.numbers.resolve(*id)),
        SemanticValue::Strg(id) => format!("strg \"{}\"", session.strings.resolve(*id)),
        SemanticValue::Name(id) => format!("name {}", session.strings.resolve(*id)),
        SemanticValue::Symbol(id) => {
            let symbol = session.symbols.get(*id);
            format!(
                "symbol {} ({})",
                session.strings.resolve(symbol.name),
                symbol.class.label()
            )
        }
        SemanticValue::Define(id) => {
            let define = session.defines.get(*id);
            format!(
                "define {} ({})",
                session.strings.resolve(define.name),
                define.class.label()
            )
        }
        SemanticValue::Code(id) => format!("code {:?}", id),
    }
}
