//! Checker identity and the user-visible checker list

/// Anything that names a checker by its dotted full name, e.g. `alpha.core.CastSize`.
///
/// Scoped option lookup only ever looks at this name.
pub trait CheckerIdentity {
    fn full_name(&self) -> &str;
}

impl CheckerIdentity for &str {
    fn full_name(&self) -> &str {
        self
    }
}

impl CheckerIdentity for String {
    fn full_name(&self) -> &str {
        self
    }
}

impl CheckerIdentity for crate::config::CheckerInfo {
    fn full_name(&self) -> &str {
        &self.name
    }
}

const DEBUG_PREFIX: &str = "debug.";
const EXPERIMENTAL_PREFIX: &str = "alpha.";

/// Filter a master checker list, keeping its order and any duplicates.
///
/// `debug.` checkers are always dropped; `alpha.` checkers are dropped unless
/// `include_experimental` is set.
pub fn list_checkers<'a, I>(all: I, include_experimental: bool) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    all.into_iter()
        .filter(|name| {
            !name.starts_with(DEBUG_PREFIX)
                && (include_experimental || !name.starts_with(EXPERIMENTAL_PREFIX))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASTER: [&str; 3] = ["debug.X", "alpha.Y", "core.Z"];

    #[test]
    fn test_excludes_debug_and_alpha() {
        assert_eq!(list_checkers(MASTER, false), vec!["core.Z"]);
    }

    #[test]
    fn test_includes_experimental() {
        assert_eq!(list_checkers(MASTER, true), vec!["alpha.Y", "core.Z"]);
    }

    #[test]
    fn test_keeps_order_and_duplicates() {
        let master = ["unix.Malloc", "core.Z", "unix.Malloc", "debug.Stats"];
        assert_eq!(
            list_checkers(master, false),
            vec!["unix.Malloc", "core.Z", "unix.Malloc"]
        );
    }

    #[test]
    fn test_prefix_needs_dot() {
        assert_eq!(
            list_checkers(["alphabet.Soup", "debugging.Aid"], false),
            vec!["alphabet.Soup", "debugging.Aid"]
        );
    }
}
