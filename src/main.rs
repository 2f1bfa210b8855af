use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use nestkit::config::Config;
use nestkit::document::node::Value;
use nestkit::file::loader::{load_document, load_from_stdin};
use nestkit::file::saver::{render, save_document};
use nestkit::file::{Document, Format};
use nestkit::functor::numeric_add;
use nestkit::{get, get_ref, has, merge, set, update};

/// nestkit - Query and edit nested YAML/JSON documents by dotted path
#[derive(Parser)]
#[command(name = "nestkit")]
#[command(version)]
#[command(about = "Query and edit nested YAML/JSON documents by dotted path", long_about = None)]
struct Cli {
    /// Document to operate on (`-` reads from stdin)
    file: String,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at PATH
    Get {
        path: String,
        /// YAML value printed when PATH does not exist
        #[arg(short, long)]
        default: Option<String>,
    },
    /// Tell whether PATH exists (exit status 1 if not)
    Has { path: String },
    /// Store a YAML value at PATH, creating missing mappings
    Set {
        path: String,
        value: String,
        /// Save the result back to FILE instead of printing it
        #[arg(short, long)]
        write: bool,
    },
    /// Add a number to the numeric value at PATH
    Incr {
        path: String,
        #[arg(default_value = "1", allow_negative_numbers = true)]
        by: String,
        #[arg(short, long)]
        write: bool,
    },
    /// Deep-merge another document onto FILE
    Merge {
        other: String,
        #[arg(short, long)]
        write: bool,
    },
    /// List the keys of the mapping at PATH (or of the root)
    Keys { path: Option<String> },
}

fn init_logging(config: &Config, verbose: bool) {
    let directive = if verbose {
        "nestkit=debug".to_string()
    } else {
        format!("nestkit={}", config.log_level)
    };

    let filter = EnvFilter::try_from_env("NESTKIT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses a command-line argument as a YAML value; `1` is a number, `a` a
/// string, `{x: 1}` a mapping.
fn parse_value_arg(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::from(text));
    }
    serde_yaml::from_str(text).with_context(|| format!("Invalid value '{}'", text))
}

fn load(file: &str) -> Result<Document> {
    if file == "-" {
        load_from_stdin()
    } else {
        load_document(file)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load();
    init_logging(&config, cli.verbose);

    match run(cli, &config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &Config) -> Result<ExitCode> {
    let document = load(&cli.file)?;
    let output_format = cli.format.unwrap_or(config.output_format);

    let (updated, write) = match cli.command {
        Command::Get { path, default } => {
            let default = match default {
                Some(text) => parse_value_arg(&text)?,
                None => Value::Null,
            };
            let value = get(&document.root, path.as_str(), default)?;
            print!("{}", render(&value, output_format, config.indent_size)?);
            return Ok(ExitCode::SUCCESS);
        }
        Command::Has { path } => {
            let found = has(&document.root, path.as_str())?;
            println!("{}", found);
            return Ok(if found { ExitCode::SUCCESS } else { ExitCode::from(1) });
        }
        Command::Keys { path } => {
            let target = match path {
                Some(path) => get_ref(&document.root, path.as_str())?,
                None => Some(&document.root),
            };
            let entries = target
                .and_then(Value::as_map)
                .context("No mapping at the given path")?;
            for key in entries.keys() {
                println!("{}", key);
            }
            return Ok(ExitCode::SUCCESS);
        }
        Command::Set { path, value, write } => {
            let value = parse_value_arg(&value)?;
            let updated = set(&document.root, path.as_str(), value)?;
            if updated == document.root && !has(&document.root, path.as_str())? {
                tracing::warn!("'{}' crosses a non-mapping value; document left unchanged", path);
            }
            (updated, write)
        }
        Command::Incr { path, by, write } => {
            let by = parse_value_arg(&by)?;
            anyhow::ensure!(by.is_number(), "Increment must be a number, got a {}", by.type_name());
            let add = numeric_add();
            let mut failure = None;
            let updated = update(&document.root, path.as_str(), |current| {
                match add(&current, &by) {
                    Some(sum) => sum,
                    None => {
                        failure = Some(current.type_name());
                        current
                    }
                }
            })?;
            if let Some(found) = failure {
                anyhow::bail!("Cannot increment a {} at '{}'", found, path);
            }
            if !has(&document.root, path.as_str())? {
                tracing::warn!("'{}' does not exist; document left unchanged", path);
            }
            (updated, write)
        }
        Command::Merge { other, write } => {
            let other = load(&other)?;
            (merge(&document.root, &other.root), write)
        }
    };

    if write {
        anyhow::ensure!(cli.file != "-", "Cannot write back to stdin");
        let document = Document {
            root: updated,
            ..document
        };
        save_document(&cli.file, &document, config)?;
    } else {
        print!("{}", render(&updated, output_format, config.indent_size)?);
    }

    Ok(ExitCode::SUCCESS)
}

