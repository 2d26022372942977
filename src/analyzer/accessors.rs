//! Global options with literal defaults
//!
//! Each entry expands to a memo cell and a getter on `AnalyzerOptions`.

use crate::analyzer::options::{resolve_bool, resolve_unsigned};
use crate::analyzer::{AnalyzerOptions, Memo};
use crate::types::OptionError;

macro_rules! flag_options {
    ($( $(#[$doc:meta])* $method:ident => $key:literal, $default:literal; )+) => {
        #[derive(Debug, Default)]
        pub(super) struct FlagCells {
            $( $method: Memo<bool>, )+
        }

        /// Boolean options with their defaults.
        pub const FLAG_OPTIONS: &[(&str, bool)] = &[ $( ($key, $default), )+ ];

        impl AnalyzerOptions {
            $(
                $(#[$doc])*
                pub fn $method(&mut self) -> bool {
                    let config = &mut self.config;
                    self.cells
                        .flags
                        .$method
                        .get_or_resolve(|| Ok(resolve_bool(config, $key, $default, None, false)))
                        .unwrap_or($default)
                }
            )+

            pub(super) fn resolve_flags(&mut self) {
                $( self.$method(); )+
            }
        }
    };
}

macro_rules! budget_options {
    ($( $(#[$doc:meta])* $method:ident => $key:literal, $default:literal; )+) => {
        #[derive(Debug, Default)]
        pub(super) struct BudgetCells {
            $( $method: Memo<u32>, )+
        }

        /// Unsigned options with fixed defaults. `max-inlinable-size` and
        /// `max-nodes` are absent: their defaults follow the user mode.
        pub const BUDGET_OPTIONS: &[(&str, u32)] = &[ $( ($key, $default), )+ ];

        impl AnalyzerOptions {
            $(
                $(#[$doc])*
                pub fn $method(&mut self) -> Result<u32, OptionError> {
                    let config = &mut self.config;
                    self.cells
                        .budgets
                        .$method
                        .get_or_resolve(|| resolve_unsigned(config, $key, $default, None, false))
                }
            )+

            /// Resolve every fixed-default budget, returning the failures.
            pub(super) fn resolve_budgets(&mut self) -> Vec<OptionError> {
                let mut errors = Vec::new();
                $(
                    if let Err(err) = self.$method() {
                        errors.push(err);
                    }
                )+
                errors
            }
        }
    };
}

flag_options! {
    /// Include temporary destructors in the CFG.
    include_temporary_dtors_in_cfg => "cfg-temporary-dtors", true;
    /// Include implicit destructors in the CFG.
    include_implicit_dtors_in_cfg => "cfg-implicit-dtors", true;
    /// Include lifetime-end markers in the CFG.
    include_lifetime_in_cfg => "cfg-lifetime", false;
    /// Include loop-exit markers in the CFG.
    include_loop_exit_in_cfg => "cfg-loopexit", false;
    /// Attach construction context to constructor calls in the CFG.
    include_rich_constructors_in_cfg => "cfg-rich-constructors", true;
    /// Include scope begin/end markers in the CFG.
    include_scopes_in_cfg => "cfg-scopes", false;
    may_inline_cxx_standard_library => "c++-stdlib-inlining", true;
    may_inline_template_functions => "c++-template-inlining", true;
    may_inline_cxx_allocator => "c++-allocator-inlining", true;
    /// Inline methods of container classes (off: they are usually too costly).
    may_inline_cxx_container_methods => "c++-container-inlining", false;
    may_inline_cxx_shared_ptr_dtor => "c++-shared_ptr-inlining", false;
    may_inline_cxx_temporary_dtors => "c++-temp-dtor-inlining", true;
    may_inline_objc_method => "objc-inlining", true;
    should_suppress_null_return_paths => "suppress-null-return-paths", true;
    should_avoid_suppressing_null_argument_paths => "avoid-suppressing-null-argument-paths", false;
    should_suppress_inlined_defensive_checks => "suppress-inlined-defensive-checks", true;
    should_suppress_from_cxx_standard_library => "suppress-c++-stdlib", true;
    /// Re-check reported paths with an SMT solver.
    should_crosscheck_with_z3 => "crosscheck-with-z3", false;
    should_report_issues_in_main_source_file => "report-in-main-source-file", false;
    should_write_stable_report_filename => "stable-report-filename", false;
    should_serialize_stats => "serialize-stats", false;
    should_elide_constructors => "elide-constructors", true;
    /// Synthesize bodies for well-known functions without a definition.
    should_synthesize_bodies => "faux-bodies", true;
    should_prune_paths => "prune-paths", true;
    should_conditionalize_static_initializers => "cfg-conditional-static-initializers", true;
    should_inline_lambdas => "inline-lambdas", true;
    should_widen_loops => "widen-loops", false;
    should_unroll_loops => "unroll-loops", false;
    should_display_notes_as_events => "notes-as-events", false;
    should_display_macro_expansions => "expand-macros", false;
    should_aggressively_simplify_binary_operation => "aggressive-binary-operation-simplification", false;
    /// Split the path on comparisons instead of keeping a symbolic result.
    should_eagerly_assume => "eagerly-assume", true;
    naive_ctu_enabled => "experimental-enable-naive-ctu-analysis", false;
}

budget_options! {
    /// Functions with at most this many CFG blocks are always inlined.
    always_inline_size => "ipa-always-inline-size", 3;
    /// Number of nodes between exploded graph trims; 0 disables trimming.
    graph_trim_interval => "graph-trim-interval", 1000;
    max_symbol_complexity => "max-symbol-complexity", 35;
    /// How often a large function may be inlined along one path.
    max_times_inline_large => "max-times-inline-large", 32;
    /// CFG size at which a function counts as large.
    min_cfg_size_treat_functions_as_large => "min-cfg-size-treat-functions-as-large", 14;
}
