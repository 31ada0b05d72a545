//! Flag registry — the set of flag names the downstream parser accepts.

use serde::{Deserialize, Serialize};

/// Name of the flag every registry carries.
pub const HELP_FLAG: &str = "help";

/// Whether a flag takes a value, and which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    /// Switch that never takes a value (e.g., --help, clap's `SetTrue`).
    /// The following token is never absorbed.
    Switch,
    /// Boolean flag (e.g., --verbose[=false]). A following token is only
    /// taken as its value when it is literally `true` or `false`.
    Bool,
    /// Flag that takes a value (e.g., --prefix NAME).
    Value,
}

/// A single known flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownFlag {
    /// Name without leading hyphens (e.g., "verbose").
    pub name: String,
    pub kind: FlagKind,
}

impl KnownFlag {
    pub fn new(name: impl Into<String>, kind: FlagKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_bool(&self) -> bool {
        self.kind == FlagKind::Bool
    }

    /// Whether `next` may be merged into this flag as `--name=next`.
    pub fn accepts_value(&self, next: &str) -> bool {
        match self.kind {
            FlagKind::Switch => false,
            FlagKind::Bool => next == "true" || next == "false",
            FlagKind::Value => true,
        }
    }
}

/// Ordered set of known flags with unique names.
///
/// Always contains `help`. Declaring a name twice keeps the first
/// declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRegistry {
    flags: Vec<KnownFlag>,
}

impl FlagRegistry {
    /// A registry that only knows `help`.
    pub fn new() -> Self {
        Self {
            flags: vec![KnownFlag::new(HELP_FLAG, FlagKind::Switch)],
        }
    }

    /// Add a flag, ignoring it if the name is already known.
    pub fn with_flag(mut self, flag: KnownFlag) -> Self {
        self.insert(flag);
        self
    }

    /// Add a switch that never takes a value.
    pub fn with_switch(self, name: impl Into<String>) -> Self {
        self.with_flag(KnownFlag::new(name, FlagKind::Switch))
    }

    /// Add a boolean flag.
    pub fn with_bool(self, name: impl Into<String>) -> Self {
        self.with_flag(KnownFlag::new(name, FlagKind::Bool))
    }

    /// Add a flag that takes a value.
    pub fn with_value(self, name: impl Into<String>) -> Self {
        self.with_flag(KnownFlag::new(name, FlagKind::Value))
    }

    /// Add a flag in place. Returns false if the name was already known.
    pub fn insert(&mut self, flag: KnownFlag) -> bool {
        if self.contains(&flag.name) {
            return false;
        }
        self.flags.push(flag);
        true
    }

    pub fn get(&self, name: &str) -> Option<&KnownFlag> {
        self.flags.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All flags whose name starts with `prefix`, in declaration order.
    pub fn candidates(&self, prefix: &str) -> Vec<&KnownFlag> {
        self.flags
            .iter()
            .filter(|f| f.name.starts_with(prefix))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KnownFlag> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Always false: `help` is present from construction on.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Derive the registry from a clap command.
    ///
    /// Every argument with a long name becomes a known flag:
    /// - a switch when its action takes no value (`SetTrue`, `Count`,
    ///   `Help`, ...)
    /// - boolean when its value is optional, the shape of a
    ///   `--flag[=true|false]` switch
    /// - a value flag otherwise
    ///
    /// Positional arguments are skipped.
    pub fn from_command(command: &clap::Command) -> Self {
        let mut command = command.clone();
        command.build();

        let mut registry = Self::new();
        for arg in command.get_arguments() {
            let Some(long) = arg.get_long() else {
                continue;
            };
            let (min_values, max_values) = arg
                .get_num_args()
                .map_or((1, 1), |range| (range.min_values(), range.max_values()));
            let kind = if !arg.get_action().takes_values() || max_values == 0 {
                FlagKind::Switch
            } else if min_values == 0 {
                FlagKind::Bool
            } else {
                FlagKind::Value
            };
            registry.insert(KnownFlag::new(long, kind));
        }
        registry
    }
}

impl Default for FlagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<KnownFlag> for FlagRegistry {
    fn from_iter<I: IntoIterator<Item = KnownFlag>>(iter: I) -> Self {
        let mut registry = Self::new();
        for flag in iter {
            registry.insert(flag);
        }
        registry
    }
}

impl Extend<KnownFlag> for FlagRegistry {
    fn extend<I: IntoIterator<Item = KnownFlag>>(&mut self, iter: I) {
        for flag in iter {
            self.insert(flag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ArgAction, Command};

    #[test]
    fn new_registry_knows_help() {
        let registry = FlagRegistry::new();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        assert_eq!(registry.get("help").map(|f| f.kind), Some(FlagKind::Switch));
        assert_eq!(
            registry.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            vec![HELP_FLAG]
        );
    }

    #[test]
    fn duplicate_names_keep_first_declaration() {
        let registry = FlagRegistry::new().with_bool("verbose").with_value("verbose");
        assert_eq!(registry.len(), 2);
        assert!(registry.get("verbose").is_some_and(KnownFlag::is_bool));
    }

    #[test]
    fn explicit_help_is_not_duplicated() {
        let registry: FlagRegistry = [KnownFlag::new("help", FlagKind::Switch)]
            .into_iter()
            .collect();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn candidates_are_prefix_matches_in_order() {
        let registry = FlagRegistry::new()
            .with_bool("verbose")
            .with_value("id")
            .with_value("item")
            .with_value("prefix");

        let names: Vec<_> = registry
            .candidates("i")
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["id", "item"]);

        // Prefix, not substring.
        assert_eq!(registry.candidates("tem").len(), 0);
    }

    #[test]
    fn empty_prefix_matches_everything() {
        let registry = FlagRegistry::new().with_bool("verbose");
        assert_eq!(registry.candidates("").len(), 2);
    }

    #[test]
    fn from_command_classifies_by_action_and_arity() {
        let command = Command::new("myprog")
            .arg(Arg::new("verbose").long("verbose").action(ArgAction::SetTrue))
            .arg(Arg::new("count").long("count").action(ArgAction::Count))
            .arg(
                Arg::new("debug")
                    .long("debug")
                    .num_args(0..=1)
                    .require_equals(true)
                    .default_missing_value("true")
                    .value_parser(clap::value_parser!(bool)),
            )
            .arg(Arg::new("prefix").long("prefix"))
            .arg(Arg::new("files").num_args(0..));

        let registry = FlagRegistry::from_command(&command);

        assert_eq!(registry.get("verbose").map(|f| f.kind), Some(FlagKind::Switch));
        assert_eq!(registry.get("count").map(|f| f.kind), Some(FlagKind::Switch));
        assert_eq!(registry.get("debug").map(|f| f.kind), Some(FlagKind::Bool));
        assert_eq!(registry.get("prefix").map(|f| f.kind), Some(FlagKind::Value));
        assert_eq!(registry.get("help").map(|f| f.kind), Some(FlagKind::Switch));
        assert!(!registry.contains("files"));
    }

    #[test]
    fn accepts_value_by_kind() {
        let switch = KnownFlag::new("quiet", FlagKind::Switch);
        let boolean = KnownFlag::new("verbose", FlagKind::Bool);
        let value = KnownFlag::new("prefix", FlagKind::Value);

        assert!(!switch.accepts_value("true"));
        assert!(boolean.accepts_value("false"));
        assert!(!boolean.accepts_value("yes"));
        assert!(value.accepts_value("yes"));
    }
}
