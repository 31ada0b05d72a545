//! Abbreviated flag resolution.
//!
//! Rewrites short or abbreviated flags into their long form so a strict
//! parser can take the result as-is:
//!
//! ```text
//! Raw args → Classify token → Match against registry → Rewrite / absorb value
//! ```
//!
//! Ambiguous and unknown flags are never rejected here; they pass through
//! untouched and the downstream parser reports them.

mod registry;
mod resolver;
mod token;

pub use registry::{FlagKind, FlagRegistry, KnownFlag, HELP_FLAG};
pub use resolver::{resolve, resolve_os, resolve_process_args, Resolution, Resolver};
pub use token::{Token, END_OF_FLAGS};
