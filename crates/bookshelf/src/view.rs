//! Filter, search and highlight pipeline
//!
//! Pure functions from (collection, query) to the list that gets displayed.
//! Nothing here touches storage or output.

use std::collections::BTreeSet;

use crate::highlight::{Highlighted, Matcher};
use crate::record::BookRecord;

/// Filter value meaning "no genre restriction"
pub const ALL_GENRES: &str = "all";
pub const ALL_GENRES_LABEL: &str = "All genres";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenreFilter {
  #[default]
  All,
  Only(String),
}

impl GenreFilter {
  /// `all` and the empty string mean no restriction; anything else is a genre
  pub fn parse(value: &str) -> Self {
    if value.is_empty() || value == ALL_GENRES {
      GenreFilter::All
    } else {
      GenreFilter::Only(value.to_string())
    }
  }

  pub fn value(&self) -> &str {
    match self {
      GenreFilter::All => ALL_GENRES,
      GenreFilter::Only(genre) => genre,
    }
  }

  /// Exact, case-insensitive comparison against a record's genre
  pub fn matches(&self, book: &BookRecord) -> bool {
    match self {
      GenreFilter::All => true,
      GenreFilter::Only(genre) => book.genre.to_lowercase() == genre.to_lowercase(),
    }
  }
}

/// Current search box text and genre selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
  search: Matcher,
  pub genre: GenreFilter,
}

impl Query {
  pub fn new(search: &str, genre: GenreFilter) -> Self {
    Self { search: Matcher::new(search.trim()), genre }
  }

  /// Convenience for raw input values, e.g. `Query::parse("hobbit", "all")`
  pub fn parse(search: &str, genre: &str) -> Self {
    Self::new(search, GenreFilter::parse(genre))
  }

  /// The trimmed search text
  pub fn search(&self) -> &str {
    self.search.query()
  }

  /// The compiled search, shared by filtering and highlighting
  pub fn matcher(&self) -> &Matcher {
    &self.search
  }

  /// Substring match of the search text against title, author, description
  /// or genre, ignoring case. An empty search matches everything.
  pub fn matches_search(&self, book: &BookRecord) -> bool {
    if self.search.is_empty() {
      return true;
    }

    [&book.title, &book.author, &book.description, &book.genre].iter().any(|field| self.search.is_match(field))
  }
}

/// Records passing both the genre filter and the search, in collection order
pub fn filter_books<'a>(books: &'a [BookRecord], query: &Query) -> Vec<&'a BookRecord> {
  books.iter().filter(|book| query.genre.matches(book)).filter(|book| query.matches_search(book)).collect()
}

/// A displayable record with display defaults and highlighting applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
  pub id: String,
  pub title: Highlighted,
  pub author: Highlighted,
  pub genre: String,
  pub description: Highlighted,
  pub cover: String,
  pub fallback_cover: String,
}

impl BookCard {
  pub fn new(book: &BookRecord, matcher: &Matcher) -> Self {
    let normalized = book.normalized();
    Self {
      id: book.id.clone(),
      title: matcher.highlight(&normalized.title),
      author: matcher.highlight(&normalized.author),
      genre: normalized.genre,
      description: matcher.highlight(&normalized.description),
      cover: normalized.cover,
      fallback_cover: normalized.fallback_cover,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
  Card(BookCard),
  /// Shown instead of an empty list
  NoResults,
}

/// Run the whole pipeline. Never returns an empty list.
pub fn build_listing(books: &[BookRecord], query: &Query) -> Vec<ListEntry> {
  let matching = filter_books(books, query);
  if matching.is_empty() {
    return vec![ListEntry::NoResults];
  }

  matching.into_iter().map(|book| ListEntry::Card(BookCard::new(book, query.matcher()))).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreOption {
  pub value: String,
  pub label: String,
}

/// "All genres" followed by every distinct genre, sorted
pub fn genre_options(books: &[BookRecord]) -> Vec<GenreOption> {
  let genres: BTreeSet<&str> = books.iter().map(BookRecord::genre_option).collect();

  let mut options = Vec::with_capacity(genres.len() + 1);
  options.push(GenreOption { value: ALL_GENRES.to_string(), label: ALL_GENRES_LABEL.to_string() });
  options.extend(genres.into_iter().map(|genre| GenreOption { value: genre.to_string(), label: genre.to_string() }));
  options
}
