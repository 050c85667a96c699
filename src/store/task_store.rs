use tracing::{debug, warn};

use crate::error::{Result, TaskpadError};
use crate::task::{Task, TaskStats};

use super::decode::{decode, DecodedContent};
use super::storage::Storage;

/// How the initial list was obtained, so the caller can phrase its
/// startup feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Backing file did not exist; it will be created on first save.
    NewFile,
    Structured,
    /// Legacy plain-text file; migrated to the structured format on the
    /// next save.
    LegacyLines,
    /// File present but unreadable; the list starts empty.
    Unreadable(String),
}

/// Owns the ordered task list and its backing file.
///
/// Tasks are addressed by 1-based position, which stays contiguous across
/// removals. Index resolution lives entirely behind this type, so a
/// stable-ID scheme could replace it without touching callers.
pub struct TaskStore {
    storage: Box<dyn Storage>,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Loading never fails: a missing, unreadable, or undecodable backing
    /// file degrades to an empty list, reported through `LoadSource`.
    pub fn load(storage: Box<dyn Storage>) -> (Self, LoadSource) {
        let (tasks, source) = match storage.read() {
            Ok(None) => (Vec::new(), LoadSource::NewFile),
            Ok(Some(content)) => match decode(&content) {
                DecodedContent::Structured(tasks) => (tasks, LoadSource::Structured),
                DecodedContent::LegacyLines(tasks) => (tasks, LoadSource::LegacyLines),
            },
            Err(e) => {
                warn!(error = %e, "Failed to read task file, starting empty");
                (Vec::new(), LoadSource::Unreadable(e.to_string()))
            }
        };

        (Self { storage, tasks }, source)
    }

    /// Serialize the full list back to the backing file, overwriting it.
    /// A failure leaves the in-memory list untouched so the next mutation
    /// can retry.
    pub fn save(&mut self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.tasks)?;
        self.storage.write(&content)?;
        debug!(count = self.tasks.len(), "Saved task list");
        Ok(())
    }

    pub fn add(&mut self, description: &str) -> Result<&Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskpadError::EmptyDescription);
        }

        self.tasks.push(Task::new(description));
        self.save()?;
        Ok(self.tasks.last().expect("just pushed"))
    }

    /// Removes the task at the given position; later positions shift down
    /// by one. Returns the removed record.
    pub fn remove(&mut self, index: usize) -> Result<Task> {
        let slot = self.resolve(index)?;
        let removed = self.tasks.remove(slot);
        self.save()?;
        Ok(removed)
    }

    pub fn set_completed(&mut self, index: usize, completed: bool) -> Result<&Task> {
        let slot = self.resolve(index)?;
        self.tasks[slot].completed = completed;
        self.save()?;
        Ok(&self.tasks[slot])
    }

    /// Replaces the description in place; position, completion flag, and
    /// creation timestamp are unchanged. Returns the old description.
    pub fn edit(&mut self, index: usize, new_description: &str) -> Result<String> {
        let slot = self.resolve(index)?;

        let new_description = new_description.trim();
        if new_description.is_empty() {
            return Err(TaskpadError::EmptyDescription);
        }

        let old = std::mem::replace(
            &mut self.tasks[slot].description,
            new_description.to_string(),
        );
        self.save()?;
        Ok(old)
    }

    /// Descriptions `clear_completed` would delete, for the caller's
    /// confirmation listing. The store itself never prompts.
    pub fn completed_descriptions(&self) -> Vec<String> {
        self.tasks
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.description.clone())
            .collect()
    }

    /// Removes every completed task, preserving the relative order of the
    /// remainder. Zero completed tasks is a no-op, not an error, and does
    /// not touch the file.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let cleared = before - self.tasks.len();

        if cleared > 0 {
            self.save()?;
        }
        Ok(cleared)
    }

    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total,
            completed,
            pending: total - completed,
        }
    }

    pub fn get(&self, index: usize) -> Result<&Task> {
        let slot = self.resolve(index)?;
        Ok(&self.tasks[slot])
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Name of the backing file, for user feedback.
    pub fn file_label(&self) -> String {
        self.storage.describe()
    }

    /// Map a 1-based position to a list slot.
    fn resolve(&self, index: usize) -> Result<usize> {
        if index >= 1 && index <= self.tasks.len() {
            Ok(index - 1)
        } else {
            Err(TaskpadError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    /// In-memory storage standing in for the filesystem.
    #[derive(Clone, Default)]
    struct MemoryStorage {
        content: Rc<RefCell<Option<String>>>,
    }

    impl MemoryStorage {
        fn with_content(content: &str) -> Self {
            Self {
                content: Rc::new(RefCell::new(Some(content.to_string()))),
            }
        }

        fn content(&self) -> Option<String> {
            self.content.borrow().clone()
        }
    }

    impl Storage for MemoryStorage {
        fn read(&self) -> io::Result<Option<String>> {
            Ok(self.content.borrow().clone())
        }

        fn write(&mut self, content: &str) -> io::Result<()> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    /// Storage that can read but never write.
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn read(&self) -> io::Result<Option<String>> {
            Ok(None)
        }

        fn write(&mut self, _content: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    /// Storage whose read fails, as with a non-UTF-8 file.
    struct UnreadableStorage;

    impl Storage for UnreadableStorage {
        fn read(&self) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::InvalidData, "not UTF-8"))
        }

        fn write(&mut self, _content: &str) -> io::Result<()> {
            Ok(())
        }

        fn describe(&self) -> String {
            "unreadable".to_string()
        }
    }

    fn empty_store() -> (MemoryStorage, TaskStore) {
        let storage = MemoryStorage::default();
        let (store, source) = TaskStore::load(Box::new(storage.clone()));
        assert_eq!(source, LoadSource::NewFile);
        (storage, store)
    }

    #[test]
    fn test_load_missing_file_starts_empty() {
        let (_storage, store) = empty_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_unreadable_degrades_to_empty() {
        let (store, source) = TaskStore::load(Box::new(UnreadableStorage));
        assert!(matches!(source, LoadSource::Unreadable(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_legacy_lines() {
        let storage = MemoryStorage::with_content("buy milk\nwalk dog");
        let (store, source) = TaskStore::load(Box::new(storage));
        assert_eq!(source, LoadSource::LegacyLines);
        assert_eq!(store.len(), 2);
        assert!(store.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_add_trims_and_persists() {
        let (storage, mut store) = empty_store();
        store.add("  buy milk  ").unwrap();

        assert_eq!(store.tasks()[0].description, "buy milk");
        let saved = storage.content().unwrap();
        assert!(saved.contains(r#""task": "buy milk""#));
    }

    #[test]
    fn test_add_empty_is_rejected_without_mutation() {
        let (storage, mut store) = empty_store();

        for input in ["", "   ", "\t\n"] {
            let err = store.add(input).unwrap_err();
            assert!(err.is_validation());
        }
        assert!(store.is_empty());
        // No persistence attempt happened.
        assert_eq!(storage.content(), None);
    }

    #[test]
    fn test_remove_shifts_later_positions() {
        let (_storage, mut store) = empty_store();
        for desc in ["a", "b", "c", "d"] {
            store.add(desc).unwrap();
        }

        let removed = store.remove(2).unwrap();
        assert_eq!(removed.description, "b");
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(2).unwrap().description, "c");
        assert_eq!(store.get(3).unwrap().description, "d");
    }

    #[test]
    fn test_out_of_range_indices_are_rejected() {
        let (_storage, mut store) = empty_store();
        assert!(store.remove(0).is_err());
        assert!(store.remove(1).is_err());
        assert!(store.set_completed(1, true).is_err());

        store.add("a").unwrap();
        assert!(store.remove(0).is_err());
        assert!(store.remove(2).is_err());
        assert!(store.set_completed(2, true).is_err());
        assert!(store.edit(2, "x").is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_edit_replaces_description_only() {
        let (_storage, mut store) = empty_store();
        store.add("draft report").unwrap();
        store.set_completed(1, true).unwrap();
        let created = store.get(1).unwrap().created.clone();

        let old = store.edit(1, " final report ").unwrap();
        assert_eq!(old, "draft report");

        let task = store.get(1).unwrap();
        assert_eq!(task.description, "final report");
        assert!(task.completed);
        assert_eq!(task.created, created);
    }

    #[test]
    fn test_edit_empty_is_rejected_without_mutation() {
        let (_storage, mut store) = empty_store();
        store.add("a").unwrap();
        assert!(store.edit(1, "  ").is_err());
        assert_eq!(store.get(1).unwrap().description, "a");
    }

    #[test]
    fn test_clear_completed_preserves_order_and_is_idempotent() {
        let (_storage, mut store) = empty_store();
        for desc in ["a", "b", "c", "d"] {
            store.add(desc).unwrap();
        }
        store.set_completed(1, true).unwrap();
        store.set_completed(3, true).unwrap();

        assert_eq!(store.completed_descriptions(), vec!["a", "c"]);
        assert_eq!(store.clear_completed().unwrap(), 2);

        let remaining: Vec<_> = store.tasks().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(remaining, vec!["b", "d"]);

        // Already clear: a no-op both times.
        assert_eq!(store.clear_completed().unwrap(), 0);
        assert_eq!(store.clear_completed().unwrap(), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_stats_counts() {
        let (_storage, mut store) = empty_store();
        assert_eq!(store.stats(), TaskStats::default());

        for desc in ["a", "b", "c"] {
            store.add(desc).unwrap();
        }
        store.set_completed(2, true).unwrap();

        let stats = store.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
    }

    #[test]
    fn test_save_failure_is_surfaced_but_keeps_memory_state() {
        let (mut store, _source) = TaskStore::load(Box::new(BrokenStorage));

        let err = store.add("buy milk").unwrap_err();
        assert!(!err.is_validation());
        // The in-memory list still holds the task, so a later save can retry.
        assert_eq!(store.len(), 1);
    }
}
