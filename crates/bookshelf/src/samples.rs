use crate::record::{generate_id, BookRecord};

// (title, author, genre, description, cover)
const SAMPLE_BOOKS: [(&str, &str, &str, &str, &str); 6] = [
  (
    "The Little Prince",
    "Antoine de Saint-Exupéry",
    "Children's Fiction",
    "A poetic tale about a pilot stranded in the desert and a little prince from another planet.",
    "https://upload.wikimedia.org/wikipedia/en/3/30/Littleprince.JPG",
  ),
  (
    "Sapiens: A Brief History of Humankind",
    "Yuval Noah Harari",
    "History",
    "A sweeping exploration of human history, cognition, and society.",
    "",
  ),
  (
    "A Brief History of Time",
    "Stephen Hawking",
    "Science",
    "An accessible introduction to cosmology and the origin of the universe.",
    "",
  ),
  (
    "Becoming",
    "Michelle Obama",
    "Biography",
    "A memoir by the former First Lady of the United States.",
    "",
  ),
  (
    "The Hobbit",
    "J.R.R. Tolkien",
    "Fantasy",
    "Bilbo Baggins goes on a grand adventure with dwarves and a dragon.",
    "",
  ),
  (
    "Clean Code",
    "Robert C. Martin",
    "Programming",
    "A handbook of agile software craftsmanship and best practices for writing clean code.",
    "",
  ),
];

/// The starter collection written when storage is empty or unreadable.
/// Every call generates fresh ids.
pub fn sample_books() -> Vec<BookRecord> {
  SAMPLE_BOOKS
    .iter()
    .map(|(title, author, genre, description, cover)| {
      BookRecord::new(
        generate_id(),
        title.to_string(),
        author.to_string(),
        genre.to_string(),
        description.to_string(),
        cover.to_string(),
      )
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_six_samples_with_unique_ids() {
    let books = sample_books();
    assert_eq!(books.len(), 6);

    let ids: HashSet<_> = books.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids.len(), 6);
    assert!(books.iter().all(|b| !b.id.is_empty()));
  }

  #[test]
  fn test_sample_order() {
    let titles: Vec<_> = sample_books().into_iter().map(|b| b.title).collect();
    assert_eq!(titles.first().map(String::as_str), Some("The Little Prince"));
    assert_eq!(titles.last().map(String::as_str), Some("Clean Code"));
  }
}
