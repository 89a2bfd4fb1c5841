use crate::highlight::escape_xml;

const MAX_TITLE_CHARS: usize = 18;
const EMPTY_TITLE: &str = "Book";

/// Deterministic SVG cover for books without a cover URL, as a data URI.
/// Depends on nothing but the title.
pub fn placeholder_cover(title: &str) -> String {
  let label: String =
    if title.is_empty() { EMPTY_TITLE.to_string() } else { title.chars().take(MAX_TITLE_CHARS).collect() };

  let svg = format!(
    "<svg xmlns='http://www.w3.org/2000/svg' width='300' height='420'>\
     <defs><linearGradient id='g' x1='0' x2='1'>\
     <stop offset='0' stop-color='#ffe29f'/><stop offset='1' stop-color='#ffa99f'/>\
     </linearGradient></defs>\
     <rect width='100%' height='100%' fill='url(#g)' rx='12'/>\
     <text x='50%' y='52%' font-size='28' text-anchor='middle' fill='#423a3a' \
     font-family='Arial, Helvetica, sans-serif'>{}</text></svg>",
    escape_xml(&label)
  );

  format!("data:image/svg+xml;utf8,{}", urlencoding::encode(&svg))
}
