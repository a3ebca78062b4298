//! Deployment root path derivation.

/// Derive the project-level root path from a deployment mount path.
///
/// The root path keeps only the first mount-path segment, re-wrapped in
/// slashes. Version metadata assets live at the project root rather than
/// under each version, so the result is the same for every published version
/// of a project: `/my-project/dev/` and `/my-project/v2/` both resolve to
/// `/my-project/`.
///
/// Total over arbitrary input. Empty strings, `/`, and slash-only paths
/// resolve to `/`; repeated or missing slashes are tolerated.
pub fn resolve_root(mount_path: &str) -> String {
    match mount_path.split('/').find(|segment| !segment.is_empty()) {
        Some(segment) => format!("/{}/", segment),
        None => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_mount_resolves_to_root() {
        assert_eq!(resolve_root("/"), "/");
        assert_eq!(resolve_root(""), "/");
    }

    #[test]
    fn slash_only_path_resolves_to_root() {
        assert_eq!(resolve_root("///"), "/");
    }

    #[test]
    fn keeps_only_the_first_segment() {
        assert_eq!(resolve_root("/my-project/dev/"), "/my-project/");
        assert_eq!(resolve_root("/my-project/v1.2.3/"), "/my-project/");
        assert_eq!(resolve_root("/a/b/c/"), "/a/");
    }

    #[test]
    fn single_segment_resolves_to_itself() {
        assert_eq!(resolve_root("/my-project/"), "/my-project/");
    }

    #[test]
    fn tolerates_unwrapped_and_repeated_slashes() {
        assert_eq!(resolve_root("docs"), "/docs/");
        assert_eq!(resolve_root("//docs//v1//"), "/docs/");
    }

    #[test]
    fn output_is_slash_wrapped_with_at_most_one_segment() {
        for input in ["", "/", "///", "/a/", "/a/b/", "a/b/c", "//x", "x//"] {
            let root = resolve_root(input);
            assert!(root.starts_with('/'), "{input:?} -> {root:?}");
            assert!(root.ends_with('/'), "{input:?} -> {root:?}");
            assert!(
                root.split('/').filter(|s| !s.is_empty()).count() <= 1,
                "{input:?} -> {root:?}"
            );
        }
    }
}
