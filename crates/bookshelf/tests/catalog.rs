use anyhow::Result;
use bookshelf::config::{self, Config};
use bookshelf::store::STORAGE_KEY;
use bookshelf::view::genre_options;
use bookshelf::{BookDraft, BookRecord, Catalog, FileStorage, KeyValueStorage, ListEntry, Query, Store};
use serial_test::serial;
use std::env;
use tempfile::TempDir;

fn setup_temp_root() -> TempDir {
  let temp_dir = TempDir::new().unwrap();
  env::set_var(config::ROOT_ENV_VAR, temp_dir.path());
  temp_dir
}

fn titles(entries: &[ListEntry]) -> Vec<String> {
  entries
    .iter()
    .filter_map(|entry| match entry {
      ListEntry::Card(card) => Some(card.title.text()),
      ListEntry::NoResults => None,
    })
    .collect()
}

#[test]
#[serial]
fn test_config_load_uses_env_root() -> Result<()> {
  let temp = setup_temp_root();
  let config = Config::load()?;

  assert_eq!(config.root(), temp.path());
  assert_eq!(config.storage().path_for(&config.storage_key), temp.path().join("allbooks_sample_v1.json"));
  Ok(())
}

#[test]
#[serial]
fn test_config_json_in_env_root_is_read() -> Result<()> {
  let temp = setup_temp_root();
  std::fs::write(temp.path().join(config::CONFIG_FILE_NAME), r#"{"storage_key":"my_shelf","data_dir":"books"}"#)?;

  let config = Config::load()?;
  assert_eq!(config.storage_key, "my_shelf");
  assert_eq!(config.data_dir(), temp.path().join("books"));

  Catalog::from_store(Store::with_key(config.storage(), &config.storage_key))?;
  assert!(temp.path().join("books").join("my_shelf.json").exists());
  Ok(())
}

#[test]
#[serial]
fn test_file_backed_catalog_survives_reopen() -> Result<()> {
  let temp = setup_temp_root();
  let config = Config::load()?;

  let mut catalog = Catalog::open(config.storage())?;
  let added = catalog.add(BookDraft { title: "Dune".into(), genre: "Science Fiction".into(), ..Default::default() })?.clone();

  let reopened = Catalog::open(FileStorage::new(temp.path()))?;
  assert_eq!(reopened.books().len(), 7);
  assert_eq!(reopened.books()[0], added);
  assert!(reopened.genre_options().iter().any(|o| o.value == "Science Fiction"));
  Ok(())
}

#[test]
fn test_store_round_trip_through_files() -> Result<()> {
  let temp = TempDir::new()?;
  let books = vec![
    BookRecord::new("a".into(), "First".into(), "".into(), "".into(), "".into(), "".into()),
    BookRecord::new("b".into(), "Second".into(), "Someone".into(), "Essays".into(), "Short.".into(), "".into()),
  ];

  let mut store = Store::new(FileStorage::new(temp.path()));
  store.save(books.clone())?;

  let mut fresh = Store::new(FileStorage::new(temp.path()));
  assert_eq!(fresh.load()?, books);
  assert_eq!(fresh.load()?, books);
  Ok(())
}

#[test]
fn test_load_twice_returns_same_seeded_ids() -> Result<()> {
  let temp = TempDir::new()?;

  let first = Store::new(FileStorage::new(temp.path())).load()?;
  let second = Store::new(FileStorage::new(temp.path())).load()?;
  assert_eq!(first, second);
  Ok(())
}

#[test]
fn test_hand_edited_storage_is_tolerated() -> Result<()> {
  let temp = TempDir::new()?;
  let mut storage = FileStorage::new(temp.path());
  storage.set(STORAGE_KEY, r#"[{"id":"x","title":"Odd","genre":null,"year":1999},{"title":"No id"}]"#)?;

  let catalog = Catalog::open(storage)?;
  assert_eq!(catalog.books().len(), 2);
  assert_eq!(titles(&catalog.listing(&Query::parse("odd", "all"))), vec!["Odd"]);

  let genres: Vec<_> = genre_options(catalog.books()).into_iter().map(|o| o.value).collect();
  assert_eq!(genres, vec!["all", "Unknown"]);
  Ok(())
}

#[test]
fn test_sample_scenarios() -> Result<()> {
  let temp = TempDir::new()?;
  let catalog = Catalog::open(FileStorage::new(temp.path()))?;

  assert_eq!(titles(&catalog.listing(&Query::parse("", "Science"))), vec!["A Brief History of Time"]);

  let found = titles(&catalog.listing(&Query::parse("the", "all")));
  let prince = found.iter().position(|t| t == "The Little Prince").unwrap();
  let hobbit = found.iter().position(|t| t == "The Hobbit").unwrap();
  assert!(prince < hobbit);

  assert_eq!(catalog.listing(&Query::parse("no such book", "all")), vec![ListEntry::NoResults]);
  Ok(())
}

#[test]
fn test_filtered_results_are_subsequence_of_collection() -> Result<()> {
  let temp = TempDir::new()?;
  let mut catalog = Catalog::open(FileStorage::new(temp.path()))?;
  for (title, genre) in [("Alpha", "History"), ("Beta", "history"), ("Gamma", "Science")] {
    catalog.add(BookDraft { title: title.into(), genre: genre.into(), ..Default::default() })?;
  }

  let all_titles: Vec<_> = catalog.books().iter().map(|b| b.title.clone()).collect();
  let filtered = titles(&catalog.listing(&Query::parse("", "HISTORY")));
  assert_eq!(filtered, vec!["Beta", "Alpha", "Sapiens: A Brief History of Humankind"]);

  let mut cursor = all_titles.iter();
  for title in &filtered {
    assert!(cursor.any(|t| t == title), "{title} out of order");
  }
  Ok(())
}
