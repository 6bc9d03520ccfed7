//! Supervisor directory core: catalog filtering and sorting, plus a
//! persisted bookmark list behind a pluggable key-value store.

pub mod bookmarks;
pub mod catalog;
pub mod error;
pub mod factory;
pub mod filter;
pub mod search;
pub mod session;
pub mod sort;
pub mod store;
pub mod types;

pub use bookmarks::BOOKMARKS_KEY;
pub use bookmarks::BookmarkStore;
pub use catalog::Catalog;
pub use error::DirectoryError;
pub use filter::filter;
pub use session::DirectoryView;
pub use sort::sort;
