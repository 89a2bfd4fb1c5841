//! Static HTML rendering of a listing
//!
//! Every interpolated value is either escaped here or already escaped by
//! [`Highlighted::to_html`](crate::highlight::Highlighted::to_html).

use crate::highlight::escape_html;
use crate::view::{BookCard, GenreFilter, GenreOption, ListEntry, Query, ALL_GENRES};

const EMPTY_STATE: &str = r#"<div class="card"><div class="card-body"><h3>No results</h3><p class="meta">Try changing filters or add a new book.</p></div></div>"#;

const STYLE: &str = r#"
body { font-family: Arial, Helvetica, sans-serif; margin: 0; background: #faf7f2; color: #2b2525; }
header { display: flex; gap: 12px; align-items: center; padding: 16px 24px; background: #fff; box-shadow: 0 1px 4px rgba(0,0,0,.08); }
header h1 { font-size: 20px; margin: 0 auto 0 0; }
#booksSection { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 20px; padding: 24px; }
.card { background: #fff; border-radius: 12px; overflow: hidden; box-shadow: 0 2px 8px rgba(0,0,0,.08); }
.cover img { width: 100%; aspect-ratio: 5 / 7; object-fit: cover; display: block; }
.card-body { padding: 12px 16px; }
.card-body h3 { margin: 0 0 6px; font-size: 17px; }
.meta { color: #6b6060; font-size: 13px; }
.desc { font-size: 14px; line-height: 1.4; }
mark { background: #ffe29f; padding: 0 1px; }
"#;

pub fn render_card(card: &BookCard) -> String {
  let title = card.title.text();
  format!(
    concat!(
      r#"<article class="card" data-id="{id}">"#,
      r#"<div class="cover"><img alt="{alt} cover" src="{src}" onerror="this.onerror=null;this.src='{fallback}'"></div>"#,
      r#"<div class="card-body"><h3>{title}</h3>"#,
      r#"<div class="meta">{author} • <em>{genre}</em></div>"#,
      r#"<p class="desc">{description}</p></div></article>"#,
    ),
    id = escape_html(&card.id),
    alt = escape_html(&title),
    src = escape_html(&card.cover),
    fallback = escape_html(&card.fallback_cover),
    title = card.title.to_html(),
    author = card.author.to_html(),
    genre = escape_html(&card.genre),
    description = card.description.to_html(),
  )
}

pub fn render_entry(entry: &ListEntry) -> String {
  match entry {
    ListEntry::Card(card) => render_card(card),
    ListEntry::NoResults => EMPTY_STATE.to_string(),
  }
}

pub fn render_listing(entries: &[ListEntry]) -> String {
  entries.iter().map(render_entry).collect::<Vec<_>>().join("\n")
}

/// The genre `<select>` with `selected` marked
pub fn render_genre_select(options: &[GenreOption], selected: &GenreFilter) -> String {
  let mut html = String::from(r#"<select id="genreFilter" name="genre">"#);
  for option in options {
    let is_selected = match selected {
      GenreFilter::All => option.value == ALL_GENRES,
      GenreFilter::Only(genre) => option.value != ALL_GENRES && option.value.to_lowercase() == genre.to_lowercase(),
    };
    html.push_str(&format!(
      r#"<option value="{}"{}>{}</option>"#,
      escape_html(&option.value),
      if is_selected { " selected" } else { "" },
      escape_html(&option.label),
    ));
  }
  html.push_str("</select>");
  html
}

/// A complete standalone page: search box, genre dropdown and the card list
pub fn render_page(options: &[GenreOption], query: &Query, entries: &[ListEntry]) -> String {
  format!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>All Books</title>
<style>{style}</style>
</head>
<body>
<header>
<h1>All Books</h1>
<form method="get">
<input id="searchInput" name="q" type="search" placeholder="Search title, author, description..." value="{search}">
{select}
</form>
</header>
<main id="booksSection">
{cards}
</main>
</body>
</html>
"#,
    style = STYLE,
    search = escape_html(query.search()),
    select = render_genre_select(options, &query.genre),
    cards = render_listing(entries),
  )
}
