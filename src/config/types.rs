use serde::{Deserialize, Serialize};

use crate::args::FlagKind;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    /// Declared flags, in the order they are matched.
    #[serde(default)]
    pub flags: Vec<FlagEntry>,
}

/// Default settings for the resolver and its output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Trace every flag token through `tracing` (default: false).
    #[serde(default)]
    pub trace: bool,
    /// How resolved arguments are printed (default: lines).
    #[serde(default)]
    pub format: OutputFormat,
}

/// A declared flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagEntry {
    /// Flag name without leading hyphens (e.g., "verbose").
    pub name: String,
    /// "bool" or "value".
    pub kind: FlagKind,
}

/// Output format for resolved arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One argument per line.
    #[default]
    Lines,
    /// A JSON array of strings.
    Json,
    /// NUL-terminated arguments, for `xargs -0`.
    Nul,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            trace: false,
            format: OutputFormat::Lines,
        }
    }
}
