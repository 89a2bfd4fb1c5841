//! Display formatting utilities for CLI output

use colored::*;
use std::ops::Range;

use crate::highlight::{Highlighted, Segment};
use crate::view::{BookCard, GenreOption, ListEntry};

const WRAP_WIDTH: usize = 80;

/// Color matched runs so they stand out in a terminal
pub fn colorize(text: &Highlighted) -> String {
  text
    .segments()
    .iter()
    .map(|segment| match segment {
      Segment::Plain(text) => text.to_string(),
      Segment::Match(text) => paint_match(text),
    })
    .collect()
}

fn paint_match(text: &str) -> String {
  text.yellow().bold().to_string()
}

/// Wrap highlighted text to fit within a specified width, passing matched
/// runs through `paint`. Matches are located on the unwrapped text, so one
/// spanning a line break is painted on both lines.
pub fn wrap_highlighted(text: &Highlighted, width: usize, paint: impl Fn(&str) -> String) -> Vec<String> {
  let full = text.text();
  let matches = match_ranges(text);
  let mut lines = Vec::new();

  let mut offset = 0;
  for paragraph in full.split('\n') {
    let words = word_ranges(paragraph, offset);
    offset += paragraph.len() + 1;

    if words.is_empty() {
      lines.push(String::new());
      continue;
    }

    let mut current_line: Vec<Range<usize>> = Vec::new();
    let mut current_width = 0;
    for word in words {
      let word_width = full[word.clone()].chars().count();
      if !current_line.is_empty() && current_width + 1 + word_width > width {
        lines.push(paint_line(&full, &current_line, &matches, &paint));
        current_line.clear();
        current_width = 0;
      }
      if !current_line.is_empty() {
        current_width += 1;
      }
      current_width += word_width;
      current_line.push(word);
    }

    lines.push(paint_line(&full, &current_line, &matches, &paint));
  }

  lines
}

/// Byte ranges of the matched runs within `text.text()`
fn match_ranges(text: &Highlighted) -> Vec<Range<usize>> {
  let mut ranges = Vec::new();
  let mut offset = 0;
  for segment in text.segments() {
    match segment {
      Segment::Plain(run) => offset += run.len(),
      Segment::Match(run) => {
        ranges.push(offset..offset + run.len());
        offset += run.len();
      }
    }
  }
  ranges
}

fn word_ranges(paragraph: &str, offset: usize) -> Vec<Range<usize>> {
  let mut words = Vec::new();
  let mut word_start = None;
  for (i, c) in paragraph.char_indices() {
    match (c.is_whitespace(), word_start) {
      (false, None) => word_start = Some(i),
      (true, Some(start)) => {
        words.push(offset + start..offset + i);
        word_start = None;
      }
      _ => {}
    }
  }
  if let Some(start) = word_start {
    words.push(offset + start..offset + paragraph.len());
  }
  words
}

fn paint_line(full: &str, words: &[Range<usize>], matches: &[Range<usize>], paint: &impl Fn(&str) -> String) -> String {
  let mut out = String::new();
  for (i, word) in words.iter().enumerate() {
    if i > 0 {
      let gap = words[i - 1].end..word.start;
      if matches.iter().any(|m| m.start <= gap.start && m.end >= gap.end) {
        out.push_str(&paint(" "));
      } else {
        out.push(' ');
      }
    }

    let mut pos = word.start;
    for m in matches {
      let (start, end) = (m.start.max(word.start), m.end.min(word.end));
      if start >= end {
        continue;
      }
      out.push_str(&full[pos..start]);
      out.push_str(&paint(&full[start..end]));
      pos = end;
    }
    out.push_str(&full[pos..word.end]);
  }
  out
}

/// Terminal block for one card
pub fn format_card(card: &BookCard) -> String {
  let mut out = format!("=== {} ===\n", colorize(&card.title).bold());
  out.push_str(&format!("{} • {}\n", colorize(&card.author), card.genre.cyan()));

  for line in wrap_highlighted(&card.description, WRAP_WIDTH, paint_match) {
    out.push_str(&line);
    out.push('\n');
  }

  if card.cover != card.fallback_cover {
    out.push_str(&format!("{} {}\n", "cover:".dimmed(), card.cover));
  }
  out
}

pub fn format_entry(entry: &ListEntry) -> String {
  match entry {
    ListEntry::Card(card) => format_card(card),
    ListEntry::NoResults => {
      format!("{}\n{}\n", "No results".yellow().bold(), "Try changing filters or add a new book.".dimmed())
    }
  }
}

pub fn print_listing(entries: &[ListEntry]) {
  let blocks: Vec<String> = entries.iter().map(format_entry).collect();
  print!("{}", blocks.join("\n"));
}

pub fn print_genre_options(options: &[GenreOption]) {
  for option in options {
    if option.value == option.label {
      println!("{}", option.value);
    } else {
      println!("{} {}", option.value, format!("({})", option.label).dimmed());
    }
  }
}
