//! Reuse check: find an existing index holding exactly the local file names.
//!
//! Equivalence is by base file name only. Two files with the same name and
//! different contents compare equal, and an index missing a file whose
//! upload failed earlier never matches again.

use std::collections::{BTreeSet, HashMap};

use super::RemoteIndexApi;
use crate::Result;

/// An existing index with its member files resolved to names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSnapshot {
    pub id: String,
    pub name: Option<String>,
    pub file_ids: Vec<String>,
    /// `None` when a member id has no entry in the remote file listing.
    pub file_names: Option<BTreeSet<String>>,
}

impl IndexSnapshot {
    pub fn resolve(
        id: impl Into<String>,
        name: Option<String>,
        file_ids: Vec<String>,
        names_by_id: &HashMap<String, String>,
    ) -> Self {
        let file_names = file_ids
            .iter()
            .map(|file_id| names_by_id.get(file_id).cloned())
            .collect::<Option<BTreeSet<_>>>();

        Self {
            id: id.into(),
            name,
            file_ids,
            file_names,
        }
    }

    pub fn matches(&self, local_names: &BTreeSet<String>) -> bool {
        self.file_names
            .as_ref()
            .is_some_and(|names| !names.is_empty() && names == local_names)
    }
}

/// First index, in listing order, whose name set equals `local_names`.
pub fn find_matching_index<'a, I>(
    local_names: &BTreeSet<String>,
    indexes: I,
) -> Option<&'a IndexSnapshot>
where
    I: IntoIterator<Item = &'a IndexSnapshot>,
{
    indexes
        .into_iter()
        .find(|snapshot| snapshot.matches(local_names))
}

/// Walk remote indexes in listing order and return the first match.
///
/// Member lists are fetched lazily, so listing stops at the first match.
/// An index whose members cannot be listed is skipped.
pub(crate) async fn find_reusable_index(
    api: &dyn RemoteIndexApi,
    local_names: &BTreeSet<String>,
) -> Result<Option<IndexSnapshot>> {
    let indexes = api.list_indexes().await?;
    if indexes.is_empty() {
        return Ok(None);
    }

    let names_by_id: HashMap<String, String> = api
        .list_files()
        .await?
        .into_iter()
        .map(|f| (f.id, f.filename))
        .collect();

    for index in indexes {
        let file_ids = match api.list_index_files(&index.id).await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(
                    vector_store_id = %index.id,
                    error = %e,
                    "Skipping vector store whose files could not be listed"
                );
                continue;
            }
        };
        let snapshot = IndexSnapshot::resolve(index.id, index.name, file_ids, &names_by_id);
        if snapshot.matches(local_names) {
            return Ok(Some(snapshot));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn snapshot(id: &str, file_names: Option<&[&str]>) -> IndexSnapshot {
        IndexSnapshot {
            id: id.to_string(),
            name: None,
            file_ids: Vec::new(),
            file_names: file_names.map(names),
        }
    }

    #[test]
    fn test_exact_set_matches() {
        let local = names(&["a.pdf", "b.pdf"]);
        let indexes = vec![
            snapshot("vs_1", Some(&["a.pdf"])),
            snapshot("vs_2", Some(&["b.pdf", "a.pdf"])),
        ];
        let found = find_matching_index(&local, &indexes).unwrap();
        assert_eq!(found.id, "vs_2");
    }

    #[test]
    fn test_superset_and_subset_do_not_match() {
        let local = names(&["a.pdf", "b.pdf"]);
        let indexes = vec![
            snapshot("vs_small", Some(&["a.pdf"])),
            snapshot("vs_big", Some(&["a.pdf", "b.pdf", "c.pdf"])),
        ];
        assert!(find_matching_index(&local, &indexes).is_none());
    }

    #[test]
    fn test_first_of_ties_wins() {
        let local = names(&["a.pdf"]);
        let indexes = vec![
            snapshot("vs_first", Some(&["a.pdf"])),
            snapshot("vs_second", Some(&["a.pdf"])),
        ];
        assert_eq!(find_matching_index(&local, &indexes).unwrap().id, "vs_first");
    }

    #[test]
    fn test_unresolved_or_empty_never_matches() {
        let local = names(&["a.pdf"]);
        assert!(!snapshot("vs_1", None).matches(&local));
        assert!(!snapshot("vs_2", Some(&[])).matches(&BTreeSet::new()));
    }

    #[test]
    fn test_resolve_marks_unknown_ids() {
        let by_id: HashMap<String, String> =
            [("file-1".to_string(), "a.pdf".to_string())].into_iter().collect();

        let known = IndexSnapshot::resolve("vs", None, vec!["file-1".into()], &by_id);
        assert_eq!(known.file_names, Some(names(&["a.pdf"])));

        let unknown =
            IndexSnapshot::resolve("vs", None, vec!["file-1".into(), "file-9".into()], &by_id);
        assert!(unknown.file_names.is_none());
    }

    mod scan {
        use super::*;
        use crate::index::testing::FakeRemote;

        #[tokio::test]
        async fn test_unlistable_index_is_skipped() {
            let remote = FakeRemote::new();
            remote.seed_index("vs_broken", None, &["a.pdf"]);
            remote.seed_index("vs_good", Some("docs"), &["a.pdf"]);
            remote.fail_members_of("vs_broken");

            let found = find_reusable_index(&remote, &names(&["a.pdf"]))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(found.id, "vs_good");
            assert_eq!(found.name.as_deref(), Some("docs"));
        }

        #[tokio::test]
        async fn test_file_listing_failure_is_returned() {
            let remote = FakeRemote::new();
            remote.seed_index("vs_1", None, &["a.pdf"]);
            remote.fail_file_listing();

            assert!(find_reusable_index(&remote, &names(&["a.pdf"])).await.is_err());
        }

        #[tokio::test]
        async fn test_no_indexes_skips_file_listing() {
            let remote = FakeRemote::new();
            remote.fail_file_listing();

            let found = find_reusable_index(&remote, &names(&["a.pdf"])).await.unwrap();
            assert!(found.is_none());
            assert_eq!(remote.call_count(), 1);
        }
    }
}
