//! Kumu - Main entrypoint.
//!
//! A small driver around the Kumu trie. It loads configuration, initializes
//! logging, and runs one of the subcommands below.

use clap::{Parser, Subcommand};
use kumu_lib::config::{ConfigLoader, KumuConfig, LogConfig, ENV_PREFIX};
use kumu_lib::data_structures::KumuTrie;
use kumu_lib::error::{ErrorContext, ErrorReporter, KumuError, KumuResult, TracingErrorReporter};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Keys loaded by the `demo` subcommand.
const SAMPLE_KEYS: [&str; 9] = [
    "the", "hello", "there", "answer", "any", "by", "world", "their", "abc",
];

/// Command line arguments for Kumu.
#[derive(Parser, Debug)]
#[clap(name = "kumu", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Build a trie from built-in sample keys and list its contents
    Demo,

    /// Insert the given keys and print every stored word in order
    Words {
        /// Keys to insert
        #[clap(required = true)]
        keys: Vec<String>,

        /// Print the words as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Check whether a word splits into two dictionary entries
    Check {
        /// Dictionary entries, comma separated or repeated
        #[clap(short, long, required = true, value_delimiter = ',')]
        dictionary: Vec<String>,

        /// Word to split
        word: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    /// The subcommand as typed on the command line.
    fn name(&self) -> &'static str {
        match self {
            Command::Demo => "demo",
            Command::Words { .. } => "words",
            Command::Check { .. } => "check",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

/// Describes where configuration was loaded from, for error reports.
fn config_source(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("config file {}", path.display()),
        None => format!("defaults and {ENV_PREFIX}__* environment"),
    }
}

/// Initialize the logging system. `RUST_LOG` overrides the configured level.
fn init_logging(log: &LogConfig) -> KumuResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| KumuError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn run(command: Command, config: &KumuConfig) -> KumuResult<()> {
    match command {
        Command::Demo => {
            let mut trie = KumuTrie::with_config(config.trie.clone());
            for key in SAMPLE_KEYS {
                trie.insert(key)?;
            }
            info!(words = trie.count_words(), "Sample trie built");

            for word in &trie {
                println!("{word}");
            }

            let dictionary = ["the", "hello", "there"];
            for word in ["thehello", "thex"] {
                let possible = KumuTrie::is_formation_possible_with_config(
                    dictionary,
                    word,
                    config.trie.clone(),
                )?;
                println!("{word}: {possible}");
            }
            Ok(())
        }
        Command::Words { keys, json } => {
            let mut trie = KumuTrie::with_config(config.trie.clone());
            for key in &keys {
                trie.insert(key)?;
            }

            let words = trie.enumerate();
            if json {
                println!("{}", serde_json::to_string(&words)?);
            } else {
                for word in &words {
                    println!("{word}");
                }
            }
            Ok(())
        }
        Command::Check { dictionary, word } => {
            let possible =
                KumuTrie::is_formation_possible_with_config(&dictionary, &word, config.trie.clone())?;
            println!("{possible}");
            Ok(())
        }
        Command::Validate => {
            // Loading already validated the configuration.
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = KumuConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| KumuError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();
    let reporter = TracingErrorReporter;

    let config = match ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load() {
        Ok(config) => config,
        Err(e) => {
            // Fall back to default logging so the failure is still reported.
            if init_logging(&LogConfig::default()).is_err() {
                eprintln!("Configuration error: {e}");
            }
            reporter.report(
                ErrorContext::new(e.into(), "config")
                    .with_details(config_source(args.config.as_deref())),
            );
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(1);
    }

    let command = args.command.unwrap_or(Command::Demo);
    let name = command.name();
    if let Err(e) = run(command, &config) {
        reporter.report(ErrorContext::new(e, "cli").with_details(format!("subcommand {name}")));
        process::exit(1);
    }
}
