//! Query highlighting and markup escaping
//!
//! Matching runs on the raw text and each piece is escaped on its own, so a
//! query can never match inside an entity like `&amp;` and the `<mark>`
//! marker is the only unescaped markup in the output.

use regex::{Regex, RegexBuilder};

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  Plain(String),
  Match(String),
}

/// Text split into matched and unmatched runs, case preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighted {
  segments: Vec<Segment>,
}

impl Highlighted {
  /// Split `text` on case-insensitive occurrences of `query`.
  /// An empty query yields the whole text as one plain run.
  pub fn new(text: &str, query: &str) -> Self {
    Matcher::new(query).highlight(text)
  }

  pub fn plain(text: &str) -> Self {
    let segments = if text.is_empty() { Vec::new() } else { vec![Segment::Plain(text.to_string())] };
    Self { segments }
  }

  fn split(text: &str, pattern: &Regex) -> Self {
    let mut segments = Vec::new();
    let mut last = 0;

    for found in pattern.find_iter(text) {
      if found.start() > last {
        segments.push(Segment::Plain(text[last..found.start()].to_string()));
      }
      segments.push(Segment::Match(found.as_str().to_string()));
      last = found.end();
    }

    if last < text.len() {
      segments.push(Segment::Plain(text[last..].to_string()));
    }

    Self { segments }
  }

  pub fn segments(&self) -> &[Segment] {
    &self.segments
  }

  pub fn match_count(&self) -> usize {
    self.segments.iter().filter(|s| matches!(s, Segment::Match(_))).count()
  }

  /// The original text, without markers
  pub fn text(&self) -> String {
    self
      .segments
      .iter()
      .map(|segment| match segment {
        Segment::Plain(text) | Segment::Match(text) => text.as_str(),
      })
      .collect()
  }

  /// Escaped markup with every match wrapped in `<mark>`
  pub fn to_html(&self) -> String {
    let mut html = String::new();
    for segment in &self.segments {
      match segment {
        Segment::Plain(text) => html.push_str(&escape_html(text)),
        Segment::Match(text) => {
          html.push_str(MARK_OPEN);
          html.push_str(&escape_html(text));
          html.push_str(MARK_CLOSE);
        }
      }
    }
    html
  }
}

/// Escape `text` and mark case-insensitive occurrences of `query`
pub fn highlight(text: &str, query: &str) -> String {
  Highlighted::new(text, query).to_html()
}

/// A search query compiled once and shared by filtering and highlighting,
/// so a record is listed exactly when some field of it gets a match.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
  query: String,
  pattern: Option<Regex>,
}

impl Matcher {
  pub fn new(query: &str) -> Self {
    Self { query: query.to_string(), pattern: query_pattern(query) }
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  pub fn is_empty(&self) -> bool {
    self.query.is_empty()
  }

  /// Case-insensitive substring test. An empty query matches everything.
  pub fn is_match(&self, text: &str) -> bool {
    match &self.pattern {
      Some(pattern) => pattern.is_match(text),
      None if self.query.is_empty() => true,
      // pattern failed to build; still filter, just without highlighting
      None => text.to_lowercase().contains(&self.query.to_lowercase()),
    }
  }

  pub fn highlight(&self, text: &str) -> Highlighted {
    match &self.pattern {
      Some(pattern) => Highlighted::split(text, pattern),
      None => Highlighted::plain(text),
    }
  }
}

impl PartialEq for Matcher {
  fn eq(&self, other: &Self) -> bool {
    self.query == other.query
  }
}

impl Eq for Matcher {}

fn query_pattern(query: &str) -> Option<Regex> {
  if query.is_empty() {
    return None;
  }

  match RegexBuilder::new(&regex::escape(query)).case_insensitive(true).build() {
    Ok(pattern) => Some(pattern),
    Err(e) => {
      tracing::warn!(error = %e, "query too large to highlight");
      None
    }
  }
}

/// Escape text for HTML element content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      _ => escaped.push(c),
    }
  }
  escaped
}

/// Escape text for SVG text content
pub fn escape_xml(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      _ => escaped.push(c),
    }
  }
  escaped
}
