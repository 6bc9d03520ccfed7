use std::path::Path;
use std::path::PathBuf;

use crate::bookmarks::BookmarkStore;
use crate::store::Store;
use crate::store::file::FileStore;
use crate::store::memory::MemoryStore;

#[cfg(feature = "sqlite")]
use crate::store::sqlite::SqliteStore;

/// Backend selection for bookmark persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    File,
    Memory,
    #[cfg(feature = "sqlite")]
    Sqlite,
}

impl Backend {
    /// `sqlite` without the feature compiled in, or anything unknown, is `File`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Backend::Memory,
            #[cfg(feature = "sqlite")]
            "sqlite" => Backend::Sqlite,
            _ => Backend::File,
        }
    }
}

/// Choose backend using env `FYP_BOOKMARK_BACKEND` if present: `file`,
/// `memory` or `sqlite`. Defaults to `file`.
pub fn choose_backend_from_env() -> Backend {
    Backend::parse(&std::env::var("FYP_BOOKMARK_BACKEND").unwrap_or_default())
}

/// Directory for persisted state: `FYP_DATA_DIR`, else the platform data
/// dir, else `./.fyp`.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FYP_DATA_DIR")
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|d| d.join("fyp-supervisor"))
        .unwrap_or_else(|| PathBuf::from(".fyp"))
}

/// Build a store under `data_dir`.
///
/// `FYP_BOOKMARK_DB` overrides the SQLite file path.
pub fn open_store(data_dir: &Path, backend: Option<Backend>) -> anyhow::Result<Box<dyn Store>> {
    let be = backend.unwrap_or_else(choose_backend_from_env);
    tracing::debug!("opening {be:?} bookmark store in {}", data_dir.display());
    Ok(match be {
        Backend::File => Box::new(FileStore::new(data_dir)),
        Backend::Memory => Box::new(MemoryStore::new()),
        #[cfg(feature = "sqlite")]
        Backend::Sqlite => {
            let path = std::env::var("FYP_BOOKMARK_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("bookmarks.db"));
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            Box::new(SqliteStore::new(path))
        }
    })
}

pub fn open_bookmarks(data_dir: &Path, backend: Option<Backend>) -> anyhow::Result<BookmarkStore> {
    Ok(BookmarkStore::new(open_store(data_dir, backend)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_backend_names() {
        assert_eq!(Backend::parse("MEMORY"), Backend::Memory);
        assert_eq!(Backend::parse("file"), Backend::File);
        assert_eq!(Backend::parse(""), Backend::File);
        #[cfg(feature = "sqlite")]
        assert_eq!(Backend::parse("sqlite"), Backend::Sqlite);
        #[cfg(not(feature = "sqlite"))]
        assert_eq!(Backend::parse("sqlite"), Backend::File);
    }

    #[test]
    fn file_backend_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = crate::catalog::Catalog::builtin();
        let first = &catalog.supervisors[0];

        let bookmarks = open_bookmarks(dir.path(), Some(Backend::File)).unwrap();
        assert!(bookmarks.add(first));

        let reopened = open_bookmarks(dir.path(), Some(Backend::File)).unwrap();
        assert!(reopened.is_bookmarked(&first.id));
        assert!(dir.path().join("fyp_supervisor_bookmarks.json").exists());
    }
}
