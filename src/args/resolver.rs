//! Abbreviation resolver — raw args → args with flags in their long form.

use std::ffi::{OsStr, OsString};

use crate::args::registry::{FlagRegistry, KnownFlag};
use crate::args::token::Token;

/// Result of resolving raw arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution<T = String> {
    /// Resolved arguments in order.
    pub args: Vec<T>,
    /// Notes about tokens left untouched (unknown or ambiguous flags).
    /// Advisory only: the downstream parser reports the real error.
    pub warnings: Vec<String>,
}

/// Rewrites abbreviated flags against a registry.
///
/// Flag interpretation stops at a solitary `--` or at the first ambiguous
/// flag. Positional arguments do not stop it, so `-v file -q` resolves both
/// flags.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'r> {
    registry: &'r FlagRegistry,
    trace: bool,
}

/// What happened to a single flag token.
enum Lookup<'r> {
    Unknown,
    Ambiguous(Vec<&'r str>),
    Found(&'r KnownFlag),
}

/// One output token.
enum Piece {
    /// The input token at this index, unchanged.
    Keep(usize),
    /// A flag rewritten to its long form, possibly with a merged value.
    Rewritten(String),
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r FlagRegistry) -> Self {
        Self {
            registry,
            trace: false,
        }
    }

    /// Emit a `debug` event per flag token under `flagnames::resolve`.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Resolve `args` (without the program name).
    pub fn resolve<S: AsRef<str>>(&self, args: &[S]) -> Resolution {
        let views: Vec<Option<&str>> = args.iter().map(|arg| Some(arg.as_ref())).collect();
        let (pieces, warnings) = self.plan(&views);

        Resolution {
            args: pieces
                .into_iter()
                .map(|piece| match piece {
                    Piece::Keep(i) => args[i].as_ref().to_string(),
                    Piece::Rewritten(arg) => arg,
                })
                .collect(),
            warnings,
        }
    }

    /// Resolve OS strings (without the program name).
    ///
    /// Tokens that are not valid UTF-8 can't name a known flag: they pass
    /// through byte for byte and are never merged into a preceding flag.
    pub fn resolve_os<S: AsRef<OsStr>>(&self, args: &[S]) -> Resolution<OsString> {
        let views: Vec<Option<&str>> = args.iter().map(|arg| arg.as_ref().to_str()).collect();
        let (pieces, warnings) = self.plan(&views);

        Resolution {
            args: pieces
                .into_iter()
                .map(|piece| match piece {
                    Piece::Keep(i) => args[i].as_ref().to_os_string(),
                    Piece::Rewritten(arg) => OsString::from(arg),
                })
                .collect(),
            warnings,
        }
    }

    /// Decide the output for `args`; `None` marks a token that isn't UTF-8.
    fn plan(&self, args: &[Option<&str>]) -> (Vec<Piece>, Vec<String>) {
        let mut out = Vec::with_capacity(args.len());
        let mut warnings = Vec::new();
        let mut parsing = true;
        let mut iter = args.iter().copied().enumerate().peekable();

        while let Some((index, arg)) = iter.next() {
            let Some(arg) = arg.filter(|_| parsing) else {
                out.push(Piece::Keep(index));
                continue;
            };

            let (name, inline_value) = match Token::classify(arg) {
                Token::EndOfFlags => {
                    parsing = false;
                    out.push(Piece::Keep(index));
                    continue;
                }
                Token::Plain => {
                    out.push(Piece::Keep(index));
                    continue;
                }
                Token::Flag { name, value } => (name, value),
            };

            // "-", "---" and "-=x" carry no name to match on.
            if name.is_empty() {
                out.push(Piece::Keep(index));
                continue;
            }

            match self.lookup(name) {
                Lookup::Unknown => {
                    warnings.push(format!("{}: unknown flag, left as is", arg));
                    out.push(Piece::Keep(index));
                    self.trace_token(arg, name, arg);
                }
                Lookup::Ambiguous(candidates) => {
                    warnings.push(format!(
                        "{}: ambiguous flag, could be any of --{}; not resolving further flags",
                        arg,
                        candidates.join(", --")
                    ));
                    out.push(Piece::Keep(index));
                    parsing = false;
                    self.trace_token(arg, name, arg);
                }
                Lookup::Found(flag) => {
                    let mut rewritten = format!("--{}", flag.name);
                    let value = inline_value.or_else(|| {
                        iter.next_if(|(_, next)| next.is_some_and(|n| absorbs(flag, n)))
                            .and_then(|(_, next)| next)
                    });
                    if let Some(value) = value {
                        rewritten.push('=');
                        rewritten.push_str(value);
                    }
                    self.trace_token(arg, name, &rewritten);
                    out.push(Piece::Rewritten(rewritten));
                }
            }
        }

        if self.trace {
            tracing::debug!(
                target: "flagnames::resolve",
                tokens = out.len(),
                warnings = warnings.len(),
                "resolution finished"
            );
        }

        (out, warnings)
    }

    fn lookup(&self, name: &str) -> Lookup<'r> {
        match self.registry.candidates(name).as_slice() {
            [] => Lookup::Unknown,
            [flag] => Lookup::Found(*flag),
            many => Lookup::Ambiguous(many.iter().map(|f| f.name.as_str()).collect()),
        }
    }

    fn trace_token(&self, arg: &str, given: &str, emitted: &str) {
        if self.trace {
            tracing::debug!(target: "flagnames::resolve", arg, given, emitted, "flag token");
        }
    }
}

/// Whether `next` may be absorbed as the value of `flag`.
fn absorbs(flag: &KnownFlag, next: &str) -> bool {
    !Token::is_flag_like(next) && flag.accepts_value(next)
}

/// Resolve `args` against `registry` with default options.
pub fn resolve<S: AsRef<str>>(registry: &FlagRegistry, args: &[S]) -> Vec<String> {
    Resolver::new(registry).resolve(args).args
}

/// Resolve OS strings against `registry` with default options.
pub fn resolve_os<S: AsRef<OsStr>>(registry: &FlagRegistry, args: &[S]) -> Vec<OsString> {
    Resolver::new(registry).resolve_os(args).args
}

/// Resolve the current process arguments (program name excluded).
///
/// Returns the new vector; process state is left alone. Arguments that are
/// not valid UTF-8 are kept as they are.
pub fn resolve_process_args(registry: &FlagRegistry) -> Vec<OsString> {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    resolve_os(registry, &args)
}
