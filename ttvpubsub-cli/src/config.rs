//! src/config.rs
//!
//! Command-line flags, with environment variables (and `.env`) as fallback.
//! Precedence: flag > env var > built-in default.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, ValueEnum};

pub const ENV_INPUT: &str = "TTVPUBSUB_INPUT";
pub const ENV_OUTPUT: &str = "TTVPUBSUB_OUTPUT";
pub const ENV_LOG: &str = "TTVPUBSUB_LOG";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ttvpubsub")]
#[command(author, version, about = "Decode Twitch PubSub hype-train payloads")]
pub struct Args {
    /// File to read. Omit or pass "-" for stdin.
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Input is a whole PubSub frame ({"type":"MESSAGE",...}) rather than the bare event payload
    #[arg(long, default_value = "false")]
    pub frame: bool,

    /// How to print the decoded event
    #[arg(long, short = 'o', value_enum)]
    pub output: Option<OutputFormat>,

    /// Log level for this tool's own crates. RUST_LOG wins if set.
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Debug,
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    fn from_arg(arg: &str) -> Self {
        if arg == "-" { InputSource::Stdin } else { InputSource::File(PathBuf::from(arg)) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: InputSource,
    pub frame: bool,
    pub output: OutputFormat,
    pub log_level: String,
}

impl Config {
    /// Resolves against the process environment.
    pub fn resolve(args: Args) -> anyhow::Result<Self> {
        Self::resolve_with(args, |key| std::env::var(key).ok())
    }

    pub fn resolve_with<F>(args: Args, env: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = args
            .input
            .or_else(|| env(ENV_INPUT))
            .map(|s| InputSource::from_arg(&s))
            .unwrap_or(InputSource::Stdin);

        let output = match args.output {
            Some(fmt) => fmt,
            None => match env(ENV_OUTPUT) {
                Some(raw) => OutputFormat::from_str(&raw, true)
                    .map_err(|e| anyhow!("{}={:?}: {}", ENV_OUTPUT, raw, e))?,
                None => OutputFormat::default(),
            },
        };

        let log_level = args
            .log_level
            .or_else(|| env(ENV_LOG))
            .unwrap_or_else(|| "info".to_string());

        Ok(Self { input, frame: args.frame, output, log_level })
    }
}
