//! Per-run analyzer option session
//!
//! Owns the raw option store together with one memo cell per honored option.
//! Every getter resolves lazily on first use and is stable afterwards.

use crate::analyzer::accessors::{BudgetCells, FlagCells};
use crate::analyzer::{
    CheckerIdentity, ExplorationStrategy, InlineableMemberKind, InterproceduralMode, Memo,
    OptionEnum, UserMode,
};
use crate::config::ConfigTable;
use crate::types::{OptionError, ValidationReport};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub(super) struct OptionCells {
    pub(super) user_mode: Memo<UserMode>,
    pub(super) ipa_mode: Memo<InterproceduralMode>,
    pub(super) exploration_strategy: Memo<ExplorationStrategy>,
    pub(super) member_inlining: Memo<InlineableMemberKind>,
    pub(super) max_inlinable_size: Memo<u32>,
    pub(super) max_nodes: Memo<u32>,
    pub(super) ctu_dir: Memo<String>,
    pub(super) ctu_index_name: Memo<String>,
    pub(super) flags: FlagCells,
    pub(super) budgets: BudgetCells,
}

/// Typed view over one run's configuration.
#[derive(Debug, Default)]
pub struct AnalyzerOptions {
    pub(super) config: ConfigTable,
    pub(super) cells: OptionCells,
}

impl From<ConfigTable> for AnalyzerOptions {
    fn from(config: ConfigTable) -> Self {
        Self::new(config)
    }
}

impl AnalyzerOptions {
    pub fn new(config: ConfigTable) -> Self {
        debug!("Creating analyzer options over {} raw option(s)", config.len());
        Self {
            config,
            cells: OptionCells::default(),
        }
    }

    /// The raw store, including defaults recorded by global reads so far.
    pub fn config(&self) -> &ConfigTable {
        &self.config
    }

    /// Direct store access. Values already resolved are not re-read.
    pub fn config_mut(&mut self) -> &mut ConfigTable {
        &mut self.config
    }

    pub fn into_config(self) -> ConfigTable {
        self.config
    }

    // Typed getters. `checker` selects a scoped lookup; without it the
    // lookup is global and records `default` for an unset key.

    pub fn string_option(
        &mut self,
        name: &str,
        default: &str,
        checker: Option<&dyn CheckerIdentity>,
        search_parents: bool,
    ) -> String {
        lookup(&mut self.config, name, default, checker, search_parents).to_string()
    }

    /// `"true"` / `"false"`; anything else resolves to `default`.
    pub fn bool_option(
        &mut self,
        name: &str,
        default: bool,
        checker: Option<&dyn CheckerIdentity>,
        search_parents: bool,
    ) -> bool {
        resolve_bool(&mut self.config, name, default, checker, search_parents)
    }

    pub fn integer_option(
        &mut self,
        name: &str,
        default: i32,
        checker: Option<&dyn CheckerIdentity>,
        search_parents: bool,
    ) -> Result<i32, OptionError> {
        let default = default.to_string();
        let value = lookup(&mut self.config, name, &default, checker, search_parents);
        decode_integer(name, value)
    }

    pub fn unsigned_option(
        &mut self,
        name: &str,
        default: u32,
        checker: Option<&dyn CheckerIdentity>,
        search_parents: bool,
    ) -> Result<u32, OptionError> {
        resolve_unsigned(&mut self.config, name, default, checker, search_parents)
    }

    pub fn enum_option<T: OptionEnum>(
        &mut self,
        name: &str,
        default: T,
        checker: Option<&dyn CheckerIdentity>,
        search_parents: bool,
    ) -> Result<T, OptionError> {
        let value = lookup(&mut self.config, name, default.token(), checker, search_parents);
        T::decode(name, value)
    }

    // Variants backed by a caller-owned cell, for options introduced by
    // individual checkers.

    pub fn cached_string_option(
        &mut self,
        cell: &mut Memo<String>,
        name: &str,
        default: &str,
        checker: Option<&dyn CheckerIdentity>,
        search_parents: bool,
    ) -> String {
        cell.get_or_resolve(|| Ok(self.string_option(name, default, checker, search_parents)))
            .unwrap_or_else(|_| default.to_string())
    }

    pub fn cached_bool_option(
        &mut self,
        cell: &mut Memo<bool>,
        name: &str,
        default: bool,
        checker: Option<&dyn CheckerIdentity>,
        search_parents: bool,
    ) -> bool {
        cell.get_or_resolve(|| Ok(self.bool_option(name, default, checker, search_parents)))
            .unwrap_or(default)
    }

    pub fn cached_integer_option(
        &mut self,
        cell: &mut Memo<i32>,
        name: &str,
        default: i32,
        checker: Option<&dyn CheckerIdentity>,
        search_parents: bool,
    ) -> Result<i32, OptionError> {
        cell.get_or_resolve(|| self.integer_option(name, default, checker, search_parents))
    }

    pub fn cached_enum_option<T: OptionEnum>(
        &mut self,
        cell: &mut Memo<T>,
        name: &str,
        default: T,
        checker: Option<&dyn CheckerIdentity>,
        search_parents: bool,
    ) -> Result<T, OptionError> {
        cell.get_or_resolve(|| self.enum_option(name, default, checker, search_parents))
    }

    // Closed-domain options.

    /// `mode`: `shallow` or `deep` (default).
    pub fn user_mode(&mut self) -> Result<UserMode, OptionError> {
        let config = &mut self.config;
        self.cells
            .user_mode
            .get_or_resolve(|| UserMode::decode("mode", config.global_option("mode", "deep")))
    }

    /// `exploration_strategy`, default `unexplored_first_queue`.
    pub fn exploration_strategy(&mut self) -> Result<ExplorationStrategy, OptionError> {
        let config = &mut self.config;
        self.cells.exploration_strategy.get_or_resolve(|| {
            ExplorationStrategy::decode(
                "exploration_strategy",
                config.global_option("exploration_strategy", "unexplored_first_queue"),
            )
        })
    }

    /// `ipa`; the default follows the user mode: `inlining` when shallow,
    /// `dynamic-bifurcate` when deep.
    pub fn interprocedural_mode(&mut self) -> Result<InterproceduralMode, OptionError> {
        if let Some(outcome) = self.cells.ipa_mode.get() {
            return outcome;
        }
        let outcome = self
            .mode_default(
                InterproceduralMode::Inlining,
                InterproceduralMode::DynamicDispatchBifurcate,
            )
            .and_then(|default| self.enum_option("ipa", default, None, false));
        self.cells.ipa_mode.settle(outcome)
    }

    /// `c++-inlining`, default `destructors`.
    pub fn cxx_member_inlining_mode(&mut self) -> Result<InlineableMemberKind, OptionError> {
        let config = &mut self.config;
        self.cells.member_inlining.get_or_resolve(|| {
            InlineableMemberKind::decode(
                "c++-inlining",
                config.global_option("c++-inlining", "destructors"),
            )
        })
    }

    /// Whether members of kind `requested` may be inlined.
    ///
    /// Always false below `InterproceduralMode::Inlining`. A checker may
    /// narrow or widen the session-wide `c++-inlining` with a scoped key;
    /// the scoped lookup is not cached.
    pub fn may_inline_member(
        &mut self,
        requested: InlineableMemberKind,
        checker: Option<&dyn CheckerIdentity>,
    ) -> Result<bool, OptionError> {
        if self.interprocedural_mode()? < InterproceduralMode::Inlining {
            return Ok(false);
        }
        let session = self.cxx_member_inlining_mode()?;
        let configured = match checker {
            Some(_) => self.enum_option("c++-inlining", session, checker, true)?,
            None => session,
        };
        Ok(configured >= requested)
    }

    // Budgets whose baseline follows the user mode.

    /// `max-inlinable-size`: 4 when shallow, 100 when deep.
    pub fn max_inlinable_size(&mut self) -> Result<u32, OptionError> {
        if let Some(outcome) = self.cells.max_inlinable_size.get() {
            return outcome;
        }
        let outcome = self
            .mode_default(4, 100)
            .and_then(|default| self.unsigned_option("max-inlinable-size", default, None, false));
        self.cells.max_inlinable_size.settle(outcome)
    }

    /// `max-nodes`: 75000 when shallow, 225000 when deep.
    pub fn max_nodes_per_top_level_function(&mut self) -> Result<u32, OptionError> {
        if let Some(outcome) = self.cells.max_nodes.get() {
            return outcome;
        }
        let outcome = self
            .mode_default(75_000, 225_000)
            .and_then(|default| self.unsigned_option("max-nodes", default, None, false));
        self.cells.max_nodes.settle(outcome)
    }

    fn mode_default<T>(&mut self, shallow: T, deep: T) -> Result<T, OptionError> {
        Ok(match self.user_mode()? {
            UserMode::Shallow => shallow,
            UserMode::Deep => deep,
        })
    }

    // Cross translation unit analysis.

    /// `ctu-dir`, or the empty string unless it names an existing directory.
    pub fn ctu_dir(&mut self) -> String {
        let config = &mut self.config;
        self.cells
            .ctu_dir
            .get_or_resolve(|| {
                let dir = config.global_option("ctu-dir", "");
                if Path::new(dir).is_dir() {
                    Ok(dir.to_string())
                } else {
                    debug!("Ignoring ctu-dir '{}': not a directory", dir);
                    Ok(String::new())
                }
            })
            .unwrap_or_default()
    }

    /// `ctu-index-name`, default `externalFnMap.txt`.
    pub fn ctu_index_name(&mut self) -> String {
        let config = &mut self.config;
        self.cells
            .ctu_index_name
            .get_or_resolve(|| {
                Ok(config
                    .global_option("ctu-index-name", "externalFnMap.txt")
                    .to_string())
            })
            .unwrap_or_default()
    }

    /// Resolve every honored option now and report all invalid values at once.
    ///
    /// Afterwards the raw store holds the effective value of every honored
    /// global option, which is what a configuration dump shows.
    pub fn validate(&mut self) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::default();

        let outcomes = [
            self.user_mode().err(),
            self.interprocedural_mode().err(),
            self.exploration_strategy().err(),
            self.cxx_member_inlining_mode().err(),
            self.max_inlinable_size().err(),
            self.max_nodes_per_top_level_function().err(),
        ];
        for error in outcomes.into_iter().flatten() {
            report.push(error);
        }
        if self.user_mode().is_err() {
            for error in self.decode_mode_dependent_overrides() {
                report.push(error);
            }
        }
        for error in self.resolve_budgets() {
            report.push(error);
        }

        self.resolve_flags();
        self.ctu_dir();
        self.ctu_index_name();

        if report.is_empty() {
            debug!("Validated {} option(s)", self.config.len());
            Ok(())
        } else {
            Err(report)
        }
    }
}

impl AnalyzerOptions {
    /// Check explicitly set keys whose default follows the user mode.
    ///
    /// Their getters fail with the mode error when the mode is invalid, which
    /// would hide a malformed value set for the key itself.
    fn decode_mode_dependent_overrides(&self) -> Vec<OptionError> {
        let checks: [(&str, fn(&str, &str) -> Option<OptionError>); 3] = [
            ("ipa", |key, value| InterproceduralMode::decode(key, value).err()),
            ("max-inlinable-size", |key, value| decode_unsigned(key, value).err()),
            ("max-nodes", |key, value| decode_unsigned(key, value).err()),
        ];
        checks
            .into_iter()
            .filter_map(|(key, check)| self.config.get(key).and_then(|value| check(key, value)))
            .collect()
    }
}

fn lookup<'a>(
    config: &'a mut ConfigTable,
    name: &str,
    default: &'a str,
    checker: Option<&dyn CheckerIdentity>,
    search_parents: bool,
) -> &'a str {
    match checker {
        Some(checker) => config.checker_option(checker.full_name(), name, default, search_parents),
        None => config.global_option(name, default),
    }
}

pub(super) fn resolve_bool(
    config: &mut ConfigTable,
    name: &str,
    default: bool,
    checker: Option<&dyn CheckerIdentity>,
    search_parents: bool,
) -> bool {
    let token = if default { "true" } else { "false" };
    match lookup(config, name, token, checker, search_parents) {
        "true" => true,
        "false" => false,
        other => {
            warn!(
                "Option '{}' expects true or false, got '{}'; using {}",
                name, other, default
            );
            default
        }
    }
}

pub(super) fn resolve_unsigned(
    config: &mut ConfigTable,
    name: &str,
    default: u32,
    checker: Option<&dyn CheckerIdentity>,
    search_parents: bool,
) -> Result<u32, OptionError> {
    let default = default.to_string();
    decode_unsigned(name, lookup(config, name, &default, checker, search_parents))
}

/// Base-10 `int`: optional `-`, digits only, within `i32`.
fn decode_integer(name: &str, value: &str) -> Result<i32, OptionError> {
    let invalid = || OptionError::InvalidInteger {
        key: name.to_string(),
        value: value.to_string(),
    };
    if value.starts_with('+') {
        return Err(invalid());
    }
    let wide = value.parse::<i64>().map_err(|_| invalid())?;
    i32::try_from(wide).map_err(|_| OptionError::OutOfRange {
        key: name.to_string(),
        value: wide,
    })
}

fn decode_unsigned(name: &str, value: &str) -> Result<u32, OptionError> {
    let value = decode_integer(name, value)?;
    u32::try_from(value).map_err(|_| OptionError::OutOfRange {
        key: name.to_string(),
        value: i64::from(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> AnalyzerOptions {
        AnalyzerOptions::new(pairs.iter().copied().collect())
    }

    #[test]
    fn test_getters_are_idempotent() {
        let mut opts = options(&[("mode", "shallow"), ("max-nodes", "42")]);

        assert_eq!(opts.user_mode(), opts.user_mode());
        assert_eq!(opts.max_nodes_per_top_level_function(), Ok(42));
        assert_eq!(opts.max_nodes_per_top_level_function(), Ok(42));
    }

    #[test]
    fn test_resolved_value_survives_store_mutation() {
        let mut opts = options(&[("ipa", "none")]);
        assert_eq!(opts.interprocedural_mode(), Ok(InterproceduralMode::None));

        opts.config_mut().insert("ipa", "inlining");
        assert_eq!(opts.interprocedural_mode(), Ok(InterproceduralMode::None));
    }

    #[test]
    fn test_global_read_records_first_default() {
        let mut opts = options(&[]);

        assert_eq!(opts.string_option("foo", "bar", None, false), "bar");
        assert_eq!(opts.config().get("foo"), Some("bar"));
        assert_eq!(opts.string_option("foo", "baz", None, false), "bar");
    }

    #[test]
    fn test_scoped_getters() {
        let mut opts = options(&[("alpha.core:strict", "true"), ("alpha.core:limit", "12")]);
        let checker = "alpha.core.CastSize";

        assert!(opts.bool_option("strict", false, Some(&checker), true));
        assert!(!opts.bool_option("strict", false, Some(&checker), false));
        assert_eq!(opts.integer_option("limit", 3, Some(&checker), true), Ok(12));
        assert_eq!(opts.integer_option("limit", 3, Some(&checker), false), Ok(3));
        assert!(opts.config().get("strict").is_none());
    }

    #[test]
    fn test_unrecognized_bool_falls_back_silently() {
        let mut opts = options(&[("widen-loops", "yes"), ("prune-paths", "TRUE")]);

        assert!(!opts.bool_option("widen-loops", false, None, false));
        assert!(opts.bool_option("widen-loops", true, None, false));
        assert!(!opts.bool_option("prune-paths", false, None, false));
    }

    #[test]
    fn test_invalid_integer_is_reported() {
        let mut opts = options(&[("graph-trim-interval", "12abc")]);

        let err = opts.integer_option("graph-trim-interval", 1000, None, false).unwrap_err();
        assert!(matches!(
            err,
            OptionError::InvalidInteger { ref key, ref value, .. }
                if key == "graph-trim-interval" && value == "12abc"
        ));
    }

    #[test]
    fn test_negative_unsigned_is_out_of_range() {
        let mut opts = options(&[("max-nodes", "-5")]);
        assert_eq!(
            opts.max_nodes_per_top_level_function(),
            Err(OptionError::OutOfRange {
                key: "max-nodes".to_string(),
                value: -5
            })
        );
    }

    #[test]
    fn test_negative_signed_integer_allowed() {
        let mut opts = options(&[("offset", "-5")]);
        assert_eq!(opts.integer_option("offset", 0, None, false), Ok(-5));
    }

    #[test]
    fn test_mode_derived_budgets() {
        let mut shallow = options(&[("mode", "shallow")]);
        assert_eq!(shallow.max_nodes_per_top_level_function(), Ok(75_000));
        assert_eq!(shallow.max_inlinable_size(), Ok(4));

        let mut deep = options(&[("mode", "deep")]);
        assert_eq!(deep.max_nodes_per_top_level_function(), Ok(225_000));
        assert_eq!(deep.max_inlinable_size(), Ok(100));
    }

    #[test]
    fn test_explicit_budget_overrides_mode_baseline() {
        let mut opts = options(&[("mode", "shallow"), ("max-inlinable-size", "9")]);
        assert_eq!(opts.max_inlinable_size(), Ok(9));
    }

    #[test]
    fn test_mode_derived_ipa() {
        assert_eq!(
            options(&[("mode", "shallow")]).interprocedural_mode(),
            Ok(InterproceduralMode::Inlining)
        );
        assert_eq!(
            options(&[]).interprocedural_mode(),
            Ok(InterproceduralMode::DynamicDispatchBifurcate)
        );
        assert_eq!(
            options(&[("mode", "shallow"), ("ipa", "basic-inlining")]).interprocedural_mode(),
            Ok(InterproceduralMode::BasicInlining)
        );
    }

    #[test]
    fn test_derived_default_is_recorded() {
        let mut opts = options(&[("mode", "shallow")]);
        opts.interprocedural_mode().unwrap();
        assert_eq!(opts.config().get("ipa"), Some("inlining"));
    }

    #[test]
    fn test_invalid_mode_is_an_error() {
        let mut opts = options(&[("mode", "sideways")]);

        let err = opts.user_mode().unwrap_err();
        assert_eq!(err.key(), "mode");
        // Everything derived from the mode fails with the same error.
        assert_eq!(opts.max_inlinable_size(), Err(err.clone()));
        assert_eq!(opts.interprocedural_mode(), Err(err));
    }

    #[test]
    fn test_member_inlining_containment() {
        let mut methods = options(&[("ipa", "inlining"), ("c++-inlining", "methods")]);
        assert_eq!(methods.may_inline_member(InlineableMemberKind::Destructors, None), Ok(true));

        let mut ctors = options(&[("ipa", "inlining"), ("c++-inlining", "constructors")]);
        assert_eq!(ctors.may_inline_member(InlineableMemberKind::Destructors, None), Ok(false));
        assert_eq!(ctors.may_inline_member(InlineableMemberKind::Constructors, None), Ok(true));
    }

    #[test]
    fn test_member_inlining_needs_inlining_ipa() {
        let mut opts = options(&[("ipa", "basic-inlining"), ("c++-inlining", "methods")]);
        assert_eq!(opts.may_inline_member(InlineableMemberKind::Constructors, None), Ok(false));
        assert!(!opts.cells.member_inlining.is_resolved());
    }

    #[test]
    fn test_member_inlining_checker_override() {
        let mut opts = options(&[
            ("ipa", "dynamic"),
            ("c++-inlining", "constructors"),
            ("cplusplus:c++-inlining", "methods"),
        ]);
        let checker = "cplusplus.NewDelete";

        assert_eq!(
            opts.may_inline_member(InlineableMemberKind::MemberFunctions, Some(&checker)),
            Ok(true)
        );
        assert_eq!(
            opts.may_inline_member(InlineableMemberKind::MemberFunctions, None),
            Ok(false)
        );
    }

    #[test]
    fn test_default_exploration_strategy() {
        assert_eq!(
            options(&[]).exploration_strategy(),
            Ok(ExplorationStrategy::UnexploredFirstQueue)
        );
        assert_eq!(
            options(&[("exploration_strategy", "dfs")]).exploration_strategy(),
            Ok(ExplorationStrategy::Dfs)
        );
    }

    #[test]
    fn test_ctu_dir_probe() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_string_lossy().to_string();

        let mut existing = options(&[("ctu-dir", path.as_str())]);
        assert_eq!(existing.ctu_dir(), path);

        let missing = dir.path().join("missing").to_string_lossy().to_string();
        let mut absent = options(&[("ctu-dir", missing.as_str())]);
        assert_eq!(absent.ctu_dir(), "");

        let file = tempfile::NamedTempFile::new().unwrap();
        let file_path = file.path().to_string_lossy().to_string();
        let mut not_dir = options(&[("ctu-dir", file_path.as_str())]);
        assert_eq!(not_dir.ctu_dir(), "");

        assert_eq!(options(&[]).ctu_index_name(), "externalFnMap.txt");
    }

    #[test]
    fn test_cached_variants_resolve_once() {
        let mut opts = options(&[("unix.Malloc:optimistic", "true")]);
        let checker = String::from("unix.Malloc");
        let mut cell = Memo::default();

        assert!(opts.cached_bool_option(&mut cell, "optimistic", false, Some(&checker), true));
        opts.config_mut().insert("unix.Malloc:optimistic", "false");
        assert!(opts.cached_bool_option(&mut cell, "optimistic", false, Some(&checker), true));
    }

    #[test]
    fn test_validate_reports_every_violation() {
        let mut opts = options(&[
            ("mode", "sideways"),
            ("exploration_strategy", "random"),
            ("graph-trim-interval", "often"),
        ]);

        let report = opts.validate().unwrap_err();
        let keys: Vec<&str> = report.errors().iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["mode", "exploration_strategy", "graph-trim-interval"]);
    }

    #[test]
    fn test_validate_fills_dump() {
        let mut opts = options(&[("mode", "shallow")]);
        opts.validate().unwrap();

        let config = opts.config();
        assert_eq!(config.get("ipa"), Some("inlining"));
        assert_eq!(config.get("max-nodes"), Some("75000"));
        assert_eq!(config.get("cfg-temporary-dtors"), Some("true"));
        assert_eq!(config.get("ctu-index-name"), Some("externalFnMap.txt"));
    }

    #[test]
    fn test_validate_reports_overrides_hidden_by_bad_mode() {
        let mut opts = options(&[("mode", "sideways"), ("max-nodes", "abc"), ("ipa", "bogus")]);

        let report = opts.validate().unwrap_err();
        let keys: Vec<&str> = report.errors().iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["mode", "ipa", "max-nodes"]);
    }

    #[test]
    fn test_validate_bad_mode_with_valid_overrides() {
        let mut opts = options(&[("mode", "sideways"), ("max-inlinable-size", "7"), ("ipa", "none")]);

        let report = opts.validate().unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report.errors()[0].key(), "mode");
    }

    #[test]
    fn test_invalid_ipa_token() {
        let mut opts = options(&[("ipa", "bogus")]);

        let err = opts.interprocedural_mode().unwrap_err();
        assert!(matches!(
            err,
            OptionError::InvalidToken { ref key, ref value, ref expected }
                if key == "ipa" && value == "bogus" && expected.len() == 5
        ));
        assert_eq!(
            opts.may_inline_member(InlineableMemberKind::Constructors, None),
            Err(err)
        );
    }

    #[test]
    fn test_invalid_member_inlining_token() {
        let mut opts = options(&[("ipa", "inlining"), ("c++-inlining", "everything")]);

        let err = opts
            .may_inline_member(InlineableMemberKind::Destructors, None)
            .unwrap_err();
        assert!(matches!(
            err,
            OptionError::InvalidToken { ref key, ref value, .. }
                if key == "c++-inlining" && value == "everything"
        ));

        let report = opts.validate().unwrap_err();
        let keys: Vec<&str> = report.errors().iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["c++-inlining"]);
    }

    #[test]
    fn test_budget_above_u32_range() {
        let mut opts = options(&[("max-nodes", "4294967296")]);
        assert_eq!(
            opts.max_nodes_per_top_level_function(),
            Err(OptionError::OutOfRange {
                key: "max-nodes".to_string(),
                value: 4_294_967_296
            })
        );
    }

    #[test]
    fn test_integer_outside_int_range() {
        let mut opts = options(&[("graph-trim-interval", "3000000000")]);
        assert_eq!(
            opts.graph_trim_interval(),
            Err(OptionError::OutOfRange {
                key: "graph-trim-interval".to_string(),
                value: 3_000_000_000
            })
        );
    }

    #[test]
    fn test_leading_plus_rejected() {
        let mut opts = options(&[("max-nodes", "+5"), ("offset", "+1")]);

        assert_eq!(
            opts.max_nodes_per_top_level_function(),
            Err(OptionError::InvalidInteger {
                key: "max-nodes".to_string(),
                value: "+5".to_string()
            })
        );
        assert!(opts.integer_option("offset", 0, None, false).is_err());
    }
}
