//! Bookshelf - Local Book Catalog
//!
//! Keeps a collection of book records in key-value storage, seeds it with a
//! sample set on first use, and turns the collection plus a search query and
//! genre filter into a highlighted listing for the terminal or an HTML page.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod highlight;
pub mod placeholder;
pub mod record;
pub mod render;
pub mod samples;
pub mod storage;
pub mod store;
pub mod view;

pub use catalog::Catalog;
pub use error::{ConfigError, StorageError};
pub use record::{BookDraft, BookRecord};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::Store;
pub use view::{GenreFilter, ListEntry, Query};
