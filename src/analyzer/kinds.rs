//! Closed option domains
//!
//! Variant order is significant: `InterproceduralMode` and
//! `InlineableMemberKind` are compared with `<` / `>=`.

use crate::types::OptionError;
use std::fmt;

/// An option whose value is one token out of a fixed table.
pub trait OptionEnum: Copy + Eq + Sized + 'static {
    const TOKENS: &'static [(&'static str, Self)];

    fn from_token(token: &str) -> Option<Self> {
        Self::TOKENS
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, value)| *value)
    }

    fn token(self) -> &'static str {
        Self::TOKENS
            .iter()
            .find(|(_, value)| *value == self)
            .map(|(t, _)| *t)
            .unwrap_or_default()
    }

    fn decode(key: &str, token: &str) -> Result<Self, OptionError> {
        Self::from_token(token).ok_or_else(|| OptionError::InvalidToken {
            key: key.to_string(),
            value: token.to_string(),
            expected: Self::TOKENS.iter().map(|(t, _)| *t).collect(),
        })
    }
}

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl OptionEnum for $name {
            const TOKENS: &'static [(&'static str, Self)] = &[$(($token, $name::$variant)),+];
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

option_enum! {
    /// High-level analysis depth; selects the defaults of several budgets.
    pub enum UserMode {
        Shallow => "shallow",
        Deep => "deep",
    }
}

option_enum! {
    /// How calls are modeled during path exploration.
    #[derive(PartialOrd, Ord)]
    pub enum InterproceduralMode {
        /// Calls are evaluated conservatively.
        None => "none",
        /// Only C functions and blocks are inlined.
        BasicInlining => "basic-inlining",
        /// Calls whose definition is statically known are inlined.
        Inlining => "inlining",
        /// Virtual calls are inlined when the dynamic type is known.
        DynamicDispatch => "dynamic",
        /// As above, splitting the path when the dynamic type is only a guess.
        DynamicDispatchBifurcate => "dynamic-bifurcate",
    }
}

option_enum! {
    /// C++ member kinds that may be inlined, each level including the ones below it.
    #[derive(PartialOrd, Ord)]
    pub enum InlineableMemberKind {
        None => "none",
        Constructors => "constructors",
        Destructors => "destructors",
        MemberFunctions => "methods",
    }
}

option_enum! {
    /// Worklist order of the path-sensitive engine.
    pub enum ExplorationStrategy {
        Dfs => "dfs",
        Bfs => "bfs",
        UnexploredFirst => "unexplored_first",
        UnexploredFirstQueue => "unexplored_first_queue",
        UnexploredFirstLocationQueue => "unexplored_first_location_queue",
        BfsBlockDfsContents => "bfs_block_dfs_contents",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interprocedural_order() {
        use InterproceduralMode::*;
        assert!(None < BasicInlining);
        assert!(BasicInlining < Inlining);
        assert!(Inlining < DynamicDispatch);
        assert!(DynamicDispatch < DynamicDispatchBifurcate);
    }

    #[test]
    fn test_member_kind_order() {
        use InlineableMemberKind::*;
        assert!(MemberFunctions >= Destructors);
        assert!(Destructors > Constructors);
        assert!(Constructors > None);
    }

    #[test]
    fn test_decode_known_token() {
        assert_eq!(
            ExplorationStrategy::decode("exploration_strategy", "bfs_block_dfs_contents"),
            Ok(ExplorationStrategy::BfsBlockDfsContents)
        );
        assert_eq!(
            InterproceduralMode::decode("ipa", "dynamic"),
            Ok(InterproceduralMode::DynamicDispatch)
        );
    }

    #[test]
    fn test_decode_rejects_unknown_token() {
        let err = UserMode::decode("mode", "sideways").unwrap_err();
        assert_eq!(
            err,
            OptionError::InvalidToken {
                key: "mode".to_string(),
                value: "sideways".to_string(),
                expected: vec!["shallow", "deep"],
            }
        );
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert!(UserMode::from_token("Deep").is_none());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(InlineableMemberKind::MemberFunctions.to_string(), "methods");
        assert_eq!(InterproceduralMode::DynamicDispatchBifurcate.token(), "dynamic-bifurcate");
    }
}
