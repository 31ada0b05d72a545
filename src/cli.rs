//! Command-line interface of the `flagnames` binary.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::args::{FlagKind, FlagRegistry, Resolution, Resolver};
use crate::config::{Config, ConfigError, FlagEntry, OutputFormat};

/// Expand abbreviated flags into their long form.
///
/// Prints ARGS with every unambiguous abbreviation of a declared flag
/// rewritten to `--name` or `--name=value`.
#[derive(Debug, Parser)]
#[command(name = "flagnames", version)]
pub struct Cli {
    /// Flag declaration file (default: the user config file, if present)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Declare a boolean flag
    #[arg(short = 'b', long = "bool", value_name = "NAME")]
    pub bools: Vec<String>,

    /// Declare a flag that takes a value
    #[arg(short = 'f', long = "flag", value_name = "NAME")]
    pub values: Vec<String>,

    /// Trace every flag token on stderr
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Arguments to resolve
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Settings for one run, merged from the config file and the command line.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub registry: FlagRegistry,
    pub trace: bool,
    pub format: OutputFormat,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top of it.
    ///
    /// Flags declared in the file come first, then `--bool`, then `--flag`.
    /// Command-line declarations obey the same rules as the file's, so a
    /// name declared in both is an error.
    pub fn settings(&self) -> Result<RunSettings, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let declared = self
            .bools
            .iter()
            .map(|name| (name, FlagKind::Bool))
            .chain(self.values.iter().map(|name| (name, FlagKind::Value)));
        config.flags.extend(declared.map(|(name, kind)| FlagEntry {
            name: name.clone(),
            kind,
        }));
        config.validate()?;

        Ok(RunSettings {
            registry: config.registry(),
            trace: self.trace || config.defaults.trace,
            format: self.format.unwrap_or(config.defaults.format),
        })
    }
}

impl RunSettings {
    pub fn resolve(&self, args: &[String]) -> Resolution {
        Resolver::new(&self.registry)
            .with_trace(self.trace)
            .resolve(args)
    }
}

/// Write resolved arguments in the requested format.
pub fn write_args<W: Write>(out: &mut W, args: &[String], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for arg in args {
                writeln!(out, "{}", arg)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, args)?;
            writeln!(out)?;
        }
        OutputFormat::Nul => {
            for arg in args {
                out.write_all(arg.as_bytes())?;
                out.write_all(b"\0")?;
            }
        }
    }
    out.flush()
}
