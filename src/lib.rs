//! Resolve abbreviated command-line flags into their long form.
//!
//! ```
//! use flagnames::args::{resolve, FlagRegistry};
//!
//! let registry = FlagRegistry::new()
//!     .with_bool("verbose")
//!     .with_value("id")
//!     .with_value("item")
//!     .with_value("prefix");
//!
//! let args = resolve(&registry, &["-v", "-p=myprefix", "-it", "62", "a"]);
//! assert_eq!(args, ["--verbose", "--prefix=myprefix", "--item=62", "a"]);
//! ```

pub mod args;
pub mod cli;
pub mod config;
pub mod logging;
