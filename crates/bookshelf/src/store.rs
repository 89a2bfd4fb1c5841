//! Owner of the authoritative collection and its persistence

use serde_json::Value;

use crate::error::StorageError;
use crate::record::BookRecord;
use crate::samples::sample_books;
use crate::storage::KeyValueStorage;

pub const STORAGE_KEY: &str = "allbooks_sample_v1";

pub struct Store<S> {
  storage: S,
  key: String,
  books: Vec<BookRecord>,
}

impl<S: KeyValueStorage> Store<S> {
  pub fn new(storage: S) -> Self {
    Self::with_key(storage, STORAGE_KEY)
  }

  pub fn with_key(storage: S, key: &str) -> Self {
    Self { storage, key: key.to_string(), books: Vec::new() }
  }

  /// Read the collection from storage.
  ///
  /// A missing or empty entry, or one that is not a JSON array, is replaced
  /// with the sample collection, which is written back and returned. Array
  /// elements are never validated. Only backend failures are errors.
  pub fn load(&mut self) -> Result<Vec<BookRecord>, StorageError> {
    let raw = self.storage.get(&self.key)?;

    let parsed = match raw.as_deref() {
      None | Some("") => {
        tracing::info!(key = %self.key, "no stored collection, seeding samples");
        None
      }
      Some(raw) => match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(items) => Some(items.into_iter().map(record_from_value).collect::<Vec<BookRecord>>()),
        Err(e) => {
          tracing::error!(key = %self.key, error = %e, "can't parse books from storage, resetting");
          None
        }
      },
    };

    match parsed {
      Some(books) => {
        tracing::debug!(key = %self.key, count = books.len(), "loaded collection");
        self.books = books;
      }
      None => self.save(sample_books())?,
    }

    Ok(self.books.clone())
  }

  /// Overwrite the stored entry with `books`. The in-memory collection only
  /// changes once the write has succeeded.
  pub fn save(&mut self, books: Vec<BookRecord>) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(&books)?;
    self.storage.set(&self.key, &encoded)?;
    tracing::debug!(key = %self.key, count = books.len(), "saved collection");
    self.books = books;
    Ok(())
  }

  /// The collection as of the last load or save
  pub fn all(&self) -> &[BookRecord] {
    &self.books
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn storage(&self) -> &S {
    &self.storage
  }

  pub fn into_storage(self) -> S {
    self.storage
  }
}

/// Objects read leniently; anything else in the array becomes an empty record
fn record_from_value(value: Value) -> BookRecord {
  if !value.is_object() {
    return BookRecord::default();
  }
  serde_json::from_value(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::storage::MemoryStorage;

  struct BrokenStorage;

  impl KeyValueStorage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
      Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
      Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
  }

  fn book(id: &str, title: &str) -> BookRecord {
    BookRecord::new(id.into(), title.into(), "".into(), "".into(), "".into(), "".into())
  }

  #[test]
  fn test_load_seeds_empty_storage() {
    let mut store = Store::new(MemoryStorage::new());
    let books = store.load().unwrap();

    assert_eq!(books.len(), 6);
    assert_eq!(books[0].title, "The Little Prince");
    assert_eq!(store.all(), books.as_slice());

    let stored = store.storage().get(STORAGE_KEY).unwrap().unwrap();
    let persisted: Vec<BookRecord> = serde_json::from_str(&stored).unwrap();
    assert_eq!(persisted, books);
  }

  #[test]
  fn test_load_seeds_empty_string_entry() {
    let mut store = Store::new(MemoryStorage::with_entry(STORAGE_KEY, ""));
    assert_eq!(store.load().unwrap().len(), 6);
  }

  #[test]
  fn test_load_reseeds_corrupt_entry() {
    let mut store = Store::new(MemoryStorage::with_entry(STORAGE_KEY, "{not json"));
    let books = store.load().unwrap();

    assert_eq!(books.len(), 6);
    let stored = store.storage().get(STORAGE_KEY).unwrap().unwrap();
    assert!(stored.starts_with('['));
  }

  #[test]
  fn test_load_reseeds_non_array_entry() {
    let mut store = Store::new(MemoryStorage::with_entry(STORAGE_KEY, r#"{"title": "x"}"#));
    assert_eq!(store.load().unwrap().len(), 6);
  }

  #[test]
  fn test_load_returns_stored_collection_verbatim() {
    let stored = r#"[{"id":"a","title":"Only Book"},{"id":"b"}]"#;
    let mut store = Store::new(MemoryStorage::with_entry(STORAGE_KEY, stored));
    let books = store.load().unwrap();

    assert_eq!(books, vec![book("a", "Only Book"), book("b", "")]);
  }

  #[test]
  fn test_load_keeps_arrays_with_non_object_elements() {
    let stored = r#"[{"id":"keep","title":"My Only Book"},5,null,"text"]"#;
    let mut store = Store::new(MemoryStorage::with_entry(STORAGE_KEY, stored));
    let books = store.load().unwrap();

    assert_eq!(books.len(), 4);
    assert_eq!(books[0], book("keep", "My Only Book"));
    assert!(books[1..].iter().all(|b| *b == BookRecord::default()));
    assert_eq!(books[1].normalized().title, "Untitled");
    assert_eq!(store.storage().get(STORAGE_KEY).unwrap().as_deref(), Some(stored));
  }

  #[test]
  fn test_load_is_idempotent() {
    let mut store = Store::new(MemoryStorage::new());
    let first = store.load().unwrap();
    let second = store.load().unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn test_save_then_load_round_trips() {
    let mut store = Store::new(MemoryStorage::new());
    let books = vec![book("1", "One"), book("2", "Two")];

    store.save(books.clone()).unwrap();
    assert_eq!(store.all(), books.as_slice());
    assert_eq!(store.load().unwrap(), books);
  }

  #[test]
  fn test_saved_empty_collection_stays_empty() {
    // "[]" parses fine, so it is not treated as missing
    let mut store = Store::new(MemoryStorage::new());
    store.save(Vec::new()).unwrap();
    assert!(store.load().unwrap().is_empty());
  }

  #[test]
  fn test_custom_key() {
    let mut store = Store::with_key(MemoryStorage::new(), "other");
    store.load().unwrap();
    assert_eq!(store.key(), "other");

    let storage = store.into_storage();
    assert!(storage.get("other").unwrap().is_some());
    assert!(storage.get(STORAGE_KEY).unwrap().is_none());
  }

  #[test]
  fn test_write_failure_propagates() {
    let mut store = Store::new(BrokenStorage);
    let result = store.load();
    assert!(matches!(result, Err(StorageError::Unavailable(_))));
    assert!(store.all().is_empty());
  }
}
