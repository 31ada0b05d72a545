//! Token classifier — raw argument string → token kind.

/// The marker that ends flag interpretation.
pub const END_OF_FLAGS: &str = "--";

/// A classified argument token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A solitary `--`. Everything after it is taken verbatim.
    EndOfFlags,
    /// Starts with a hyphen. Leading hyphens are stripped from `name` and an
    /// inline value is split off at the first `=`.
    Flag {
        name: &'a str,
        value: Option<&'a str>,
    },
    /// Anything else: a positional argument or a flag value.
    Plain,
}

impl<'a> Token<'a> {
    /// Classify a single raw argument.
    ///
    /// A lone `-` is a flag token with an empty name; the resolver leaves it
    /// untouched so it keeps its usual "read stdin" meaning.
    pub fn classify(arg: &'a str) -> Self {
        if arg == END_OF_FLAGS {
            return Token::EndOfFlags;
        }
        if !arg.starts_with('-') {
            return Token::Plain;
        }

        let stripped = arg.trim_start_matches('-');
        match stripped.split_once('=') {
            Some((name, value)) => Token::Flag {
                name,
                value: Some(value),
            },
            None => Token::Flag {
                name: stripped,
                value: None,
            },
        }
    }

    /// True for tokens that could be mistaken for a flag.
    pub fn is_flag_like(arg: &str) -> bool {
        arg.starts_with('-')
    }
}
