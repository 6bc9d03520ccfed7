use std::sync::Mutex;

use crate::error::DirectoryError;
use crate::store::Store;
use crate::types::BookmarkEntry;
use crate::types::SupervisorRecord;

/// Storage key holding the serialized bookmark list.
pub const BOOKMARKS_KEY: &str = "fyp_supervisor_bookmarks";

/// The user's saved supervisors, persisted under [`BOOKMARKS_KEY`].
///
/// Every operation reads the full list, works on it in memory and writes
/// the full list back. Failures are logged and reported as an empty list or
/// `false`, never as an error. A stored value that no longer decodes reads
/// as empty and makes `add` and `toggle` fail until [`BookmarkStore::clear`]
/// replaces it. Separate processes sharing one store are not coordinated;
/// the last writer wins.
pub struct BookmarkStore {
    store: Box<dyn Store>,
    // Serialises read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl BookmarkStore {
    pub fn new(store: Box<dyn Store>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    pub fn get_all(&self) -> Vec<BookmarkEntry> {
        self.try_get_all().unwrap_or_else(|e| {
            tracing::error!("error reading bookmarks: {e}");
            Vec::new()
        })
    }

    /// Bookmark `record` unless an entry with its id is already stored.
    /// Returns `true` only when the list grew.
    pub fn add(&self, record: &SupervisorRecord) -> bool {
        if record.id.is_empty() {
            tracing::error!("invalid supervisor record: missing id");
            return false;
        }
        self.locked(|| self.try_add(BookmarkEntry::from(record)))
            .unwrap_or_else(|e| {
                tracing::error!("error saving bookmark: {e}");
                false
            })
    }

    /// Drop every entry with `id`. Returns `true` iff something was removed.
    pub fn remove(&self, id: &str) -> bool {
        self.locked(|| self.try_remove(id)).unwrap_or_else(|e| {
            tracing::error!("error removing bookmark: {e}");
            false
        })
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.get_all().iter().any(|entry| entry.id == id)
    }

    /// Flip the bookmark state of `record` and report whether it is
    /// bookmarked afterwards.
    ///
    /// When removal fails the result is `true` although the stored state may
    /// not have changed; callers rely on this.
    pub fn toggle(&self, record: &SupervisorRecord) -> bool {
        if self.is_bookmarked(&record.id) {
            !self.remove(&record.id)
        } else {
            self.add(record)
        }
    }

    /// Overwrite the stored list with an empty one, whatever it held.
    pub fn clear(&self) -> bool {
        self.locked(|| self.write_all(&[])).map_or_else(
            |e| {
                tracing::error!("error clearing bookmarks: {e}");
                false
            },
            |()| true,
        )
    }

    pub fn len(&self) -> usize {
        self.get_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored entries, or the read/decode failure.
    pub fn try_get_all(&self) -> Result<Vec<BookmarkEntry>, DirectoryError> {
        match self.store.get(BOOKMARKS_KEY)? {
            Some(data) => Ok(serde_json::from_slice(&data)?),
            None => Ok(Vec::new()),
        }
    }

    fn try_add(&self, entry: BookmarkEntry) -> Result<bool, DirectoryError> {
        let mut entries = self.try_get_all()?;
        if entries.iter().any(|e| e.id == entry.id) {
            return Ok(false);
        }
        entries.push(entry);
        self.write_all(&entries)?;
        Ok(true)
    }

    fn try_remove(&self, id: &str) -> Result<bool, DirectoryError> {
        let entries = self.try_get_all()?;
        let before = entries.len();
        let kept: Vec<_> = entries.into_iter().filter(|e| e.id != id).collect();
        if kept.len() == before {
            return Ok(false);
        }
        self.write_all(&kept)?;
        Ok(true)
    }

    fn write_all(&self, entries: &[BookmarkEntry]) -> Result<(), DirectoryError> {
        let data = serde_json::to_vec(entries)?;
        self.store.set(BOOKMARKS_KEY, &data)?;
        tracing::debug!("bookmarks: wrote {} entries", entries.len());
        Ok(())
    }

    fn locked<T>(
        &self,
        f: impl FnOnce() -> Result<T, DirectoryError>,
    ) -> Result<T, DirectoryError> {
        // Writes replace the whole list, so a poisoned lock leaves no partial state.
        let _guard = self.lock.lock().unwrap_or_else(|p| p.into_inner());
        f()
    }
}
