//! Folder path helpers
//!
//! Folder paths are `/`-delimited strings. The empty string is the root folder.
//! Everything here works on segments, never on raw substrings, so sibling
//! folders that share a name fragment (`Render` vs `Rendering`) stay distinct.

use smallvec::SmallVec;

/// Path separator used by folder paths
pub const SEPARATOR: char = '/';

/// Segments of a folder path. Menu trees are shallow, so this rarely spills.
pub type Segments<'a> = SmallVec<[&'a str; 4]>;

/// Split a path into its segments (root yields no segments)
pub fn segments(path: &str) -> Segments<'_> {
    if path.is_empty() {
        return Segments::new();
    }
    path.split(SEPARATOR).collect()
}

/// Number of segments in a path (0 for root)
pub fn depth(path: &str) -> usize {
    if path.is_empty() {
        0
    } else {
        path.split(SEPARATOR).count()
    }
}

/// Parent of a path with the last segment dropped.
///
/// Root has no parent and resolves to itself.
pub fn parent(path: &str) -> String {
    match path.rfind(SEPARATOR) {
        Some(idx) => path[..idx].to_string(),
        None => String::new(),
    }
}

/// Last segment of a path (empty for root)
pub fn last_segment(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or_default()
}

/// Whether `candidate` is an immediate child folder of `parent`
pub fn is_child_of(candidate: &str, parent: &str) -> bool {
    if candidate.is_empty() || depth(candidate) != depth(parent) + 1 {
        return false;
    }
    if parent.is_empty() {
        return true;
    }
    candidate
        .strip_prefix(parent)
        .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

/// Normalize a declared path: trim separators and drop empty segments.
///
/// `"/Rendering//Post/"` becomes `"Rendering/Post"`.
pub fn normalize(path: &str) -> String {
    let parts: Segments<'_> = path
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    parts.join("/")
}

/// Every proper, non-root ancestor of `path`, shallowest first.
///
/// `"a/b/c"` yields `["a", "a/b"]`.
pub fn ancestors(path: &str) -> Vec<String> {
    let parts = segments(path);
    (1..parts.len()).map(|n| parts[..n].join("/")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth() {
        assert_eq!(depth(""), 0);
        assert_eq!(depth("Rendering"), 1);
        assert_eq!(depth("Rendering/Post/Bloom"), 3);
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent("Rendering/Post"), "Rendering");
        assert_eq!(parent("Rendering"), "");
        // Root resolves to itself
        assert_eq!(parent(""), "");
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("Rendering/Post"), "Post");
        assert_eq!(last_segment("Time"), "Time");
        assert_eq!(last_segment(""), "");
    }

    #[test]
    fn test_is_child_of_root() {
        assert!(is_child_of("Rendering", ""));
        assert!(!is_child_of("Rendering/Post", ""));
        assert!(!is_child_of("", ""));
    }

    #[test]
    fn test_is_child_of_uses_segment_prefix() {
        assert!(is_child_of("Rendering/Post", "Rendering"));
        assert!(!is_child_of("Render/Post", "Rendering"));
        // Substring containment would wrongly accept these
        assert!(!is_child_of("Rendering/Post", "Render"));
        assert!(!is_child_of("Debug/Rendering", "Rendering"));
        assert!(!is_child_of("Rendering/Post/Bloom", "Rendering"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/Rendering//Post/"), "Rendering/Post");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("///"), "");
        assert_eq!(normalize(" Time "), "Time");
    }

    #[test]
    fn test_ancestors() {
        assert_eq!(ancestors("a/b/c"), vec!["a".to_string(), "a/b".to_string()]);
        assert!(ancestors("a").is_empty());
        assert!(ancestors("").is_empty());
    }

    #[test]
    fn test_segments() {
        assert!(segments("").is_empty());
        assert_eq!(segments("a/b").as_slice(), &["a", "b"]);
    }
}
