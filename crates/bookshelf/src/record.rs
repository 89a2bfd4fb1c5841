use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::placeholder::placeholder_cover;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_AUTHOR: &str = "Unknown author";
pub const DEFAULT_GENRE: &str = "Uncategorized";

/// A single book in the collection.
///
/// Stored data is not validated: missing, `null` or non-text fields read as
/// text (empty when absent) and display defaults are applied later by
/// [`BookRecord::normalized`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
  #[serde(default, deserialize_with = "lenient_string")]
  pub id: String,
  #[serde(default, deserialize_with = "lenient_string")]
  pub title: String,
  #[serde(default, deserialize_with = "lenient_string")]
  pub author: String,
  #[serde(default, deserialize_with = "lenient_string")]
  pub genre: String,
  #[serde(default, deserialize_with = "lenient_string")]
  pub description: String,
  #[serde(default, deserialize_with = "lenient_string")]
  pub cover: String,
}

/// A record with every display default applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBook {
  pub title: String,
  pub author: String,
  pub genre: String,
  pub description: String,
  /// The stored cover URL, or the generated placeholder when there is none
  pub cover: String,
  /// What to show if the cover URL fails to load
  pub fallback_cover: String,
}

impl BookRecord {
  pub fn new(
    id: String,
    title: String,
    author: String,
    genre: String,
    description: String,
    cover: String,
  ) -> Self {
    Self { id, title, author, genre, description, cover }
  }

  pub fn normalized(&self) -> NormalizedBook {
    let fallback_cover = placeholder_cover(&self.title);
    NormalizedBook {
      title: or_default(&self.title, DEFAULT_TITLE),
      author: or_default(&self.author, DEFAULT_AUTHOR),
      genre: or_default(&self.genre, DEFAULT_GENRE),
      description: self.description.clone(),
      cover: if self.cover.is_empty() { fallback_cover.clone() } else { self.cover.clone() },
      fallback_cover,
    }
  }

  /// The genre as it appears in the genre option list
  pub fn genre_option(&self) -> &str {
    if self.genre.is_empty() {
      "Unknown"
    } else {
      self.genre.trim()
    }
  }
}

/// User-entered fields for a new record. Nothing is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
  pub title: String,
  pub author: String,
  pub genre: String,
  pub description: String,
  pub cover: String,
}

impl BookDraft {
  /// Trim every field and attach a freshly generated id
  pub fn into_record(self) -> BookRecord {
    BookRecord {
      id: generate_id(),
      title: self.title.trim().to_string(),
      author: self.author.trim().to_string(),
      genre: self.genre.trim().to_string(),
      description: self.description.trim().to_string(),
      cover: self.cover.trim().to_string(),
    }
  }
}

pub fn generate_id() -> String {
  Uuid::new_v4().simple().to_string()
}

fn or_default(value: &str, default: &str) -> String {
  if value.is_empty() {
    default.to_string()
  } else {
    value.to_string()
  }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;
  Ok(match value {
    None | Some(Value::Null) => String::new(),
    Some(Value::String(text)) => text,
    Some(other) => other.to_string(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalized_applies_defaults() {
    let record = BookRecord::new("1".into(), "".into(), "".into(), "".into(), "".into(), "".into());
    let book = record.normalized();

    assert_eq!(book.title, "Untitled");
    assert_eq!(book.author, "Unknown author");
    assert_eq!(book.genre, "Uncategorized");
    assert_eq!(book.description, "");
    assert!(book.cover.starts_with("data:image/svg+xml;utf8,"));
    assert_eq!(book.cover, book.fallback_cover);
  }

  #[test]
  fn test_normalized_keeps_cover_url() {
    let record = BookRecord::new(
      "1".into(),
      "Dune".into(),
      "Frank Herbert".into(),
      "Science Fiction".into(),
      "Spice.".into(),
      "https://example.com/dune.jpg".into(),
    );
    let book = record.normalized();

    assert_eq!(book.title, "Dune");
    assert_eq!(book.cover, "https://example.com/dune.jpg");
    assert_eq!(book.fallback_cover, placeholder_cover("Dune"));
  }

  #[test]
  fn test_lenient_deserialization() {
    let json = r#"{"id": 7, "title": null, "genre": true, "description": ["a"]}"#;
    let record: BookRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.id, "7");
    assert_eq!(record.title, "");
    assert_eq!(record.author, "");
    assert_eq!(record.genre, "true");
    assert_eq!(record.description, r#"["a"]"#);
  }

  #[test]
  fn test_draft_is_trimmed_and_gets_an_id() {
    let draft = BookDraft {
      title: "  Dune ".into(),
      author: "\tFrank Herbert\n".into(),
      genre: " Science Fiction ".into(),
      description: "".into(),
      cover: "  ".into(),
    };
    let record = draft.into_record();

    assert!(!record.id.is_empty());
    assert_eq!(record.title, "Dune");
    assert_eq!(record.author, "Frank Herbert");
    assert_eq!(record.genre, "Science Fiction");
    assert_eq!(record.cover, "");
  }

  #[test]
  fn test_generated_ids_differ() {
    assert_ne!(generate_id(), generate_id());
  }

  #[test]
  fn test_genre_option() {
    let mut record = BookRecord::new("1".into(), "".into(), "".into(), "".into(), "".into(), "".into());
    assert_eq!(record.genre_option(), "Unknown");

    record.genre = "  Fantasy ".into();
    assert_eq!(record.genre_option(), "Fantasy");
  }
}
