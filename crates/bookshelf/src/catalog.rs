use crate::error::StorageError;
use crate::record::{BookDraft, BookRecord};
use crate::storage::KeyValueStorage;
use crate::store::Store;
use crate::view::{build_listing, genre_options, GenreOption, ListEntry, Query};

/// The loaded collection plus everything derived from it.
///
/// `add` is the only mutation; it persists before returning and refreshes the
/// genre options.
pub struct Catalog<S> {
  store: Store<S>,
  genre_options: Vec<GenreOption>,
}

impl<S: KeyValueStorage> Catalog<S> {
  /// Load (or seed) the collection from `storage` under the default key
  pub fn open(storage: S) -> Result<Self, StorageError> {
    Self::from_store(Store::new(storage))
  }

  pub fn from_store(mut store: Store<S>) -> Result<Self, StorageError> {
    store.load()?;
    let genre_options = genre_options(store.all());
    Ok(Self { store, genre_options })
  }

  pub fn books(&self) -> &[BookRecord] {
    self.store.all()
  }

  pub fn genre_options(&self) -> &[GenreOption] {
    &self.genre_options
  }

  pub fn listing(&self, query: &Query) -> Vec<ListEntry> {
    build_listing(self.books(), query)
  }

  /// Build a record from `draft`, put it first and persist the collection
  pub fn add(&mut self, draft: BookDraft) -> Result<&BookRecord, StorageError> {
    let record = draft.into_record();
    tracing::info!(id = %record.id, title = %record.title, "adding book");

    let mut books = Vec::with_capacity(self.books().len() + 1);
    books.push(record);
    books.extend_from_slice(self.books());

    self.store.save(books)?;
    self.genre_options = genre_options(self.store.all());

    Ok(&self.store.all()[0])
  }

  pub fn store(&self) -> &Store<S> {
    &self.store
  }
}
