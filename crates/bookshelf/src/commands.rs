use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::display;
use crate::record::BookDraft;
use crate::render;
use crate::storage::FileStorage;
use crate::store::Store;
use crate::view::Query;

/// Open the catalog described by `config`, seeding it on first use
pub fn open_catalog(config: &Config) -> Result<Catalog<FileStorage>> {
  let storage = config.storage();
  let dir = storage.dir().display().to_string();
  let store = Store::with_key(storage, &config.storage_key);
  Catalog::from_store(store).with_context(|| format!("Failed to open catalog in {dir}"))
}

/// Print the cards matching `terms` and `genre`
pub fn list_books(catalog: &Catalog<FileStorage>, terms: &[String], genre: &str) -> Result<()> {
  let query = Query::parse(&terms.join(" "), genre);
  let entries = catalog.listing(&query);
  display::print_listing(&entries);
  Ok(())
}

/// Add a new book to the front of the collection
pub fn add_book(catalog: &mut Catalog<FileStorage>, draft: BookDraft) -> Result<()> {
  let record = catalog.add(draft).context("Failed to save the collection")?;
  let title = record.normalized().title;

  println!("{} Added {} ({})", "✓".green(), title.yellow(), record.id.dimmed());
  Ok(())
}

/// Print the genre filter options
pub fn list_genres(catalog: &Catalog<FileStorage>) -> Result<()> {
  display::print_genre_options(catalog.genre_options());
  Ok(())
}

/// Render the listing as a standalone HTML page, to `output` or stdout
pub fn render_page(catalog: &Catalog<FileStorage>, search: &str, genre: &str, output: Option<&Path>) -> Result<()> {
  let query = Query::parse(search, genre);
  let page = render::render_page(catalog.genre_options(), &query, &catalog.listing(&query));

  match output {
    Some(path) => {
      fs::write(path, page).with_context(|| format!("Failed to write {}", path.display()))?;
      bentley::success!("Wrote {}", path.display());
    }
    None => print!("{page}"),
  }
  Ok(())
}
