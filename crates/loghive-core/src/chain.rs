//! Ancestor chain resolution.
//!
//! The chain of a name is the ordered list of its registered strict
//! ancestors, most specific first, with `root` appended last. It is derived
//! from the current name set on demand; callers that memoize it must drop the
//! memo whenever a name is added, since a new intermediate logger changes the
//! chain of every descendant.

use loghive_types::{LoggerName, ROOT};

/// Resolve the ancestor chain for `name` against the registered names.
///
/// A registered name `A` (other than `root`) qualifies when `name` starts
/// with `A + "."`. Qualifying names are sorted by descending length; `root`
/// is appended when it is registered and `name` is not itself `root`.
///
/// ```
/// use loghive_core::resolve_chain;
/// use loghive_types::LoggerName;
///
/// let names: Vec<LoggerName> = ["root", "a", "a.b", "ab", "a.b.c.d"]
///     .iter()
///     .map(|n| LoggerName::new(n).unwrap())
///     .collect();
///
/// let chain = resolve_chain("a.b.c", &names);
/// let chain: Vec<&str> = chain.iter().map(|n| n.as_str()).collect();
/// assert_eq!(chain, vec!["a.b", "a", "root"]);
/// ```
pub fn resolve_chain<'a, I>(name: &str, registered: I) -> Vec<LoggerName>
where
    I: IntoIterator<Item = &'a LoggerName>,
{
    if name == ROOT {
        return Vec::new();
    }

    let mut has_root = false;
    let mut chain: Vec<LoggerName> = Vec::new();

    for candidate in registered {
        if candidate.is_root() {
            has_root = true;
        } else if is_strict_prefix(candidate.as_str(), name) {
            chain.push(candidate.clone());
        }
    }

    chain.sort_by(|a, b| b.as_str().len().cmp(&a.as_str().len()));

    if has_root {
        chain.push(LoggerName::root());
    }

    chain
}

fn is_strict_prefix(ancestor: &str, name: &str) -> bool {
    name.len() > ancestor.len()
        && name.starts_with(ancestor)
        && name.as_bytes()[ancestor.len()] == b'.'
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(list: &[&str]) -> Vec<LoggerName> {
        list.iter().map(|n| LoggerName::new(n).unwrap()).collect()
    }

    fn strs(chain: &[LoggerName]) -> Vec<&str> {
        chain.iter().map(|n| n.as_str()).collect()
    }

    #[test]
    fn test_longest_prefix_first() {
        let registered = names(&["a", "root", "a.b.c", "a.b"]);
        assert_eq!(strs(&resolve_chain("a.b.c.d", &registered)), vec!["a.b.c", "a.b", "a", "root"]);
    }

    #[test]
    fn test_origin_not_in_own_chain() {
        let registered = names(&["root", "a", "a.b"]);
        assert_eq!(strs(&resolve_chain("a.b", &registered)), vec!["a", "root"]);
    }

    #[test]
    fn test_skips_unregistered_intermediates() {
        let registered = names(&["root", "a", "a.b.c"]);
        assert_eq!(strs(&resolve_chain("a.b.c.d.e", &registered)), vec!["a.b.c", "a", "root"]);
    }

    #[test]
    fn test_lexically_similar_names_excluded() {
        let registered = names(&["root", "ab", "abc", "abc.de"]);
        assert_eq!(strs(&resolve_chain("abc.def", &registered)), vec!["abc", "root"]);
    }

    #[test]
    fn test_root_has_empty_chain() {
        let registered = names(&["root", "a"]);
        assert!(resolve_chain("root", &registered).is_empty());
    }

    #[test]
    fn test_no_root_no_ancestors() {
        let registered = names(&["x", "y.z"]);
        assert!(resolve_chain("a.b", &registered).is_empty());
        assert_eq!(strs(&resolve_chain("x.q", &registered)), vec!["x"]);
    }

    #[test]
    fn test_unknown_name_reaches_root() {
        let registered = names(&["root"]);
        assert_eq!(strs(&resolve_chain("unknown", &registered)), vec!["root"]);
    }

    #[test]
    fn test_root_listed_once_for_root_children() {
        let registered = names(&["root", "root.child"]);
        assert_eq!(strs(&resolve_chain("root.child.leaf", &registered)), vec!["root.child", "root"]);
    }

    proptest! {
        #[test]
        fn prop_chain_is_descending_and_ends_at_root(
            segments in prop::collection::vec("[a-c]{1,2}", 1..6),
            extra in prop::collection::vec("[a-c]{1,2}(\\.[a-c]{1,2}){0,3}", 0..8),
        ) {
            let target = segments.join(".");
            let mut registered = names(&["root"]);
            for depth in 1..segments.len() {
                registered.push(LoggerName::new(segments[..depth].join(".")).unwrap());
            }
            for name in &extra {
                registered.push(LoggerName::new(name).unwrap());
            }
            registered.sort();
            registered.dedup();

            let chain = resolve_chain(&target, &registered);
            prop_assert_eq!(chain.last().map(|n| n.as_str()), Some("root"));

            let body = &chain[..chain.len() - 1];
            prop_assert!(body.windows(2).all(|w| w[0].as_str().len() > w[1].as_str().len()));
            prop_assert!(body.iter().all(|a| is_strict_prefix(a.as_str(), &target)));
            prop_assert!(!body.iter().any(|a| a.as_str() == target));
            prop_assert!(body.len() >= segments.len() - 1);
        }
    }
}
