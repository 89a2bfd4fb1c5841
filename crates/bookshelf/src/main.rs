use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use bookshelf::commands;
use bookshelf::config::Config;
use bookshelf::record::BookDraft;
use bookshelf::view::ALL_GENRES;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Bookshelf - Local Book Catalog\nSearch, filter and add books in a locally stored collection")]
#[command(version)]
struct Cli {
  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

/// Fields of a new book; all optional
#[derive(Args)]
struct BookFields {
  #[arg(short, long, default_value = "")]
  title: String,
  #[arg(short, long, default_value = "")]
  author: String,
  #[arg(short, long, default_value = "")]
  genre: String,
  #[arg(short, long, default_value = "")]
  description: String,
  /// Cover image URL
  #[arg(short, long, default_value = "")]
  cover: String,
}

impl From<BookFields> for BookDraft {
  fn from(fields: BookFields) -> Self {
    BookDraft {
      title: fields.title,
      author: fields.author,
      genre: fields.genre,
      description: fields.description,
      cover: fields.cover,
    }
  }
}

#[derive(Subcommand)]
enum Commands {
  /// List books, optionally filtered by search terms and genre
  List {
    /// Genre to restrict to ("all" for every genre)
    #[arg(short, long, default_value = ALL_GENRES)]
    genre: String,
    /// Search terms, matched against title, author, description and genre
    terms: Vec<String>,
  },
  /// Add a new book to the front of the collection
  Add {
    #[command(flatten)]
    fields: BookFields,
  },
  /// List the genre filter options
  Genres,
  /// Render the listing as an HTML page
  Render {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Genre to restrict to ("all" for every genre)
    #[arg(short, long, default_value = ALL_GENRES)]
    genre: String,
    /// Search text
    #[arg(short, long, default_value = "")]
    query: String,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  bentley::init_tracing("bookshelf", cli.verbose);

  let config = Config::load()?;
  let mut catalog = commands::open_catalog(&config)?;

  match cli.command {
    Commands::List { genre, terms } => {
      commands::list_books(&catalog, &terms, &genre)?;
    }
    Commands::Add { fields } => {
      commands::add_book(&mut catalog, fields.into())?;
    }
    Commands::Genres => {
      commands::list_genres(&catalog)?;
    }
    Commands::Render { output, genre, query } => {
      commands::render_page(&catalog, &query, &genre, output.as_deref())?;
    }
  }

  Ok(())
}
