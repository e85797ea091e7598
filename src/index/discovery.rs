//! Local file enumeration by glob patterns.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use glob::MatchOptions;

use crate::{Error, Result};

/// Wildcards never match a leading dot, so hidden files and directories
/// are only found by patterns that name the dot explicitly.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Files under a root directory matched by a set of glob patterns.
///
/// Each pattern matches recursively (`<root>/**/<pattern>`). Paths keep
/// pattern order, then walker order within a pattern; a path matched by
/// several patterns is listed once.
#[derive(Debug, Clone, Default)]
pub struct LocalFileSet {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl LocalFileSet {
    /// Enumerate on the blocking pool.
    pub async fn discover(root: impl Into<PathBuf>, patterns: &[String]) -> Result<Self> {
        let root = root.into();
        let patterns = patterns.to_vec();

        tokio::task::spawn_blocking(move || Self::discover_blocking(root, &patterns))
            .await
            .map_err(|e| Error::Io(std::io::Error::other(format!("glob task failed: {}", e))))?
    }

    /// A missing root yields an empty set, not an error.
    pub fn discover_blocking(root: impl Into<PathBuf>, patterns: &[String]) -> Result<Self> {
        let root = root.into();
        let escaped_root = glob::Pattern::escape(&root.to_string_lossy());

        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for pattern in patterns {
            let full_pattern = Path::new(&escaped_root).join("**").join(pattern);
            let paths = glob::glob_with(&full_pattern.to_string_lossy(), MATCH_OPTIONS)?;

            for path in paths.filter_map(|r| r.ok()) {
                if path.is_file() && seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        }

        tracing::debug!(
            root = %root.display(),
            patterns = ?patterns,
            count = files.len(),
            "Local files discovered"
        );

        Ok(Self { root, files })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Base names of every file, as a set.
    pub fn names(&self) -> BTreeSet<String> {
        self.files.iter().filter_map(|p| file_name(p)).collect()
    }
}

pub(crate) fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_recursive_match() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("nested/deeper")).unwrap();
        std::fs::write(root.join("a.md"), "a").unwrap();
        std::fs::write(root.join("nested/b.md"), "b").unwrap();
        std::fs::write(root.join("nested/deeper/c.md"), "c").unwrap();
        std::fs::write(root.join("skip.rs"), "fn main() {}").unwrap();

        let set = LocalFileSet::discover_blocking(root, &patterns(&["*.md"])).unwrap();
        let names: Vec<_> = set.names().into_iter().collect();
        assert_eq!(names, vec!["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn test_pattern_order_and_dedup() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("notes.txt"), "").unwrap();
        std::fs::write(root.join("paper.pdf"), "").unwrap();

        let set =
            LocalFileSet::discover_blocking(root, &patterns(&["*.pdf", "*.txt", "*"])).unwrap();
        let order: Vec<_> = set.paths().iter().filter_map(|p| file_name(p)).collect();
        assert_eq!(order, vec!["paper.pdf", "notes.txt"]);
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        let set = LocalFileSet::discover_blocking(dir.path().join("absent"), &patterns(&["*.md"]))
            .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("folder.md")).unwrap();
        let set = LocalFileSet::discover_blocking(dir.path(), &patterns(&["*.md"])).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = tempdir().unwrap();
        let err = LocalFileSet::discover_blocking(dir.path(), &patterns(&["[*.md"])).unwrap_err();
        assert!(matches!(err, Error::Pattern(_)));
    }

    #[test]
    fn test_same_name_in_two_directories() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("x")).unwrap();
        std::fs::write(dir.path().join("readme.md"), "").unwrap();
        std::fs::write(dir.path().join("x/readme.md"), "").unwrap();

        let set = LocalFileSet::discover_blocking(dir.path(), &patterns(&["*.md"])).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.names().len(), 1);
    }

    #[test]
    fn test_hidden_entries_are_skipped() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("docs/.obsidian")).unwrap();
        std::fs::write(root.join("a.md"), "a").unwrap();
        std::fs::write(root.join(".secret.md"), "s").unwrap();
        std::fs::write(root.join(".git/notes.md"), "n").unwrap();
        std::fs::write(root.join("docs/b.md"), "b").unwrap();
        std::fs::write(root.join("docs/.obsidian/workspace.md"), "w").unwrap();

        let set = LocalFileSet::discover_blocking(root, &patterns(&["*.md"])).unwrap();
        let names: Vec<_> = set.names().into_iter().collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_explicit_dot_pattern_matches_dotfile() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".notes.md"), "").unwrap();

        let set = LocalFileSet::discover_blocking(dir.path(), &patterns(&[".*.md"])).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_hidden_root_is_searched() {
        let dir = tempdir().unwrap();
        let root = dir.path().join(".cache");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("a.txt"), "").unwrap();

        let set = LocalFileSet::discover_blocking(&root, &patterns(&["*.txt"])).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[tokio::test]
    async fn test_discover_async() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        let set = LocalFileSet::discover(dir.path(), &patterns(&["*.txt"]))
            .await
            .unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.root(), dir.path());
    }
}
