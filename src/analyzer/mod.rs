//! Typed analyzer options
//!
//! Resolution pipeline, leaf first:
//! 1. Scope lookup in the raw store (`ConfigTable`)
//! 2. Decoding into bool / integer / closed enum, memoized per session
//! 3. Defaults derived from other options (the user mode picks the
//!    baseline for `ipa`, `max-inlinable-size` and `max-nodes`)

mod accessors;
mod checkers;
mod kinds;
mod memo;
mod options;

pub use accessors::{BUDGET_OPTIONS, FLAG_OPTIONS};
pub use checkers::{list_checkers, CheckerIdentity};
pub use kinds::{
    ExplorationStrategy, InlineableMemberKind, InterproceduralMode, OptionEnum, UserMode,
};
pub use memo::Memo;
pub use options::AnalyzerOptions;
