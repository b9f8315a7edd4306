//! The in-memory working set of user records.

use admin_directory_client::DirectoryUser;
use tracing::debug;

use crate::intake::IntakeDraft;
use crate::record::RecordId;
use crate::record::UserRecord;

/// Ordered collection of [`UserRecord`]s. Local additions are prepended, so
/// the order is meaningful but is not an arrival log.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<UserRecord>,
}

/// What a hydration did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hydration {
    pub fetched: usize,
    pub kept_local: usize,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Prepend a record built from `draft`. Returns `None`, leaving the store
    /// untouched, when any draft field is empty.
    pub fn add(&mut self, draft: &IntakeDraft) -> Option<RecordId> {
        if !draft.is_complete() {
            return None;
        }
        let record = UserRecord::local(
            draft.name.clone(),
            draft.email.clone(),
            draft.company.clone(),
        );
        let id = record.id;
        self.records.insert(0, record);
        debug!(%id, len = self.records.len(), "local record added");
        Some(id)
    }

    /// Replace every directory-sourced record with `fetched` (in received
    /// order). Local records already present stay in front, in their current
    /// relative order.
    pub fn hydrate(&mut self, fetched: Vec<DirectoryUser>) -> Hydration {
        let mut next: Vec<UserRecord> = self
            .records
            .drain(..)
            .filter(UserRecord::is_local)
            .collect();
        let kept_local = next.len();
        let fetched_count = fetched.len();
        next.extend(fetched.into_iter().map(UserRecord::from_directory));
        self.records = next;
        Hydration {
            fetched: fetched_count,
            kept_local,
        }
    }

    pub fn remove(&mut self, id: RecordId) -> Option<UserRecord> {
        let idx = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordOrigin;
    use pretty_assertions::assert_eq;

    fn directory_user(name: &str, company: &str) -> DirectoryUser {
        DirectoryUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            company: company.to_string(),
        }
    }

    fn draft(name: &str, email: &str, company: &str) -> IntakeDraft {
        IntakeDraft {
            name: name.to_string(),
            email: email.to_string(),
            company: company.to_string(),
        }
    }

    fn names(store: &RecordStore) -> Vec<&str> {
        store.records().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn starts_empty() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn hydrate_keeps_upstream_order() {
        let mut store = RecordStore::new();
        let summary = store.hydrate(vec![
            directory_user("Zed", "Z"),
            directory_user("Amy", ""),
            directory_user("Zed", "Z"),
        ]);
        assert_eq!(
            summary,
            Hydration {
                fetched: 3,
                kept_local: 0
            }
        );
        assert_eq!(names(&store), vec!["Zed", "Amy", "Zed"]);
        assert!(
            store
                .records()
                .iter()
                .all(|r| r.origin == RecordOrigin::Directory)
        );
    }

    #[test]
    fn add_prepends_complete_drafts() {
        let mut store = RecordStore::new();
        store.hydrate(vec![directory_user("Amy", "A")]);
        let id = store
            .add(&draft("Ada Lovelace", "ada@example.com", "Analytical"))
            .unwrap();

        assert_eq!(names(&store), vec!["Ada Lovelace", "Amy"]);
        let record = store.get(id).unwrap();
        assert_eq!(record.email, "ada@example.com");
        assert_eq!(record.company, "Analytical");
        assert!(record.is_local());
    }

    #[test]
    fn add_rejects_drafts_with_empty_fields() {
        let mut store = RecordStore::new();
        store.hydrate(vec![directory_user("Amy", "A")]);
        let before = store.records().to_vec();

        for incomplete in [
            draft("", "e@x.io", "C"),
            draft("N", "", "C"),
            draft("N", "e@x.io", ""),
            draft("", "", ""),
        ] {
            assert_eq!(store.add(&incomplete), None);
        }

        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut store = RecordStore::new();
        assert!(store.add(&draft(" ", " ", " ")).is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn hydrate_keeps_local_additions_in_front() {
        let mut store = RecordStore::new();
        store.add(&draft("First", "1@x.io", "One")).unwrap();
        store.add(&draft("Second", "2@x.io", "Two")).unwrap();

        let summary = store.hydrate(vec![directory_user("Amy", "A"), directory_user("Bob", "B")]);

        assert_eq!(summary.kept_local, 2);
        assert_eq!(names(&store), vec!["Second", "First", "Amy", "Bob"]);
    }

    #[test]
    fn remove_is_keyed_by_id() {
        let mut store = RecordStore::new();
        let first = store.add(&draft("Same", "s@x.io", "S")).unwrap();
        let second = store.add(&draft("Same", "s@x.io", "S")).unwrap();

        let removed = store.remove(first).unwrap();

        assert_eq!(removed.id, first);
        assert_eq!(store.len(), 1);
        assert!(store.get(second).is_some());
        assert!(store.remove(first).is_none());
    }
}
