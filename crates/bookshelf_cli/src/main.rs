//! Bookshelf CLI
//!
//! Command-line driver for the book collection.
//!
//! # Commands
//!
//! - `demo` - exercise the collection API against a storage file
//! - `dump` - print every book stored in a file
//! - `convert` - re-encode a storage file into another format

use bookshelf_codecs::{CborCodec, FixedBinaryCodec, XmlCodec};
use bookshelf_core::{Book, BookStorage, Bookshelf};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Bookshelf command-line tools.
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a sample collection, exercise it, and round-trip it through a file
    Demo {
        /// Storage format
        #[arg(short, long, value_enum)]
        format: StorageFormat,

        /// Storage file path
        #[arg(short, long)]
        path: PathBuf,
    },

    /// Print every book stored in a file
    Dump {
        /// Storage format
        #[arg(short, long, value_enum)]
        format: StorageFormat,

        /// Storage file path
        #[arg(short, long)]
        path: PathBuf,
    },

    /// Re-encode a storage file into another format
    Convert {
        /// Source format
        #[arg(long, value_enum)]
        from_format: StorageFormat,

        /// Source file path
        #[arg(long)]
        from: PathBuf,

        /// Destination format
        #[arg(long, value_enum)]
        to_format: StorageFormat,

        /// Destination file path
        #[arg(long)]
        to: PathBuf,
    },
}

/// On-disk encoding selection.
#[derive(Clone, Copy, ValueEnum)]
enum StorageFormat {
    /// Sequential fixed-field binary records
    Fixed,
    /// One self-describing CBOR blob
    Cbor,
    /// XML document
    Xml,
}

impl StorageFormat {
    fn codec(self, path: &Path) -> Box<dyn BookStorage> {
        match self {
            Self::Fixed => Box::new(FixedBinaryCodec::new(path)),
            Self::Cbor => Box::new(CborCodec::new(path)),
            Self::Xml => Box::new(XmlCodec::new(path)),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Demo { format, path } => demo(format, &path)?,
        Commands::Dump { format, path } => dump(format, &path)?,
        Commands::Convert {
            from_format,
            from,
            to_format,
            to,
        } => convert(from_format, &from, to_format, &to)?,
    }

    Ok(())
}

fn sample_books() -> Result<Vec<Book>, Box<dyn std::error::Error>> {
    Ok(vec![
        Book::new("Orwell", "1984", 1949, "Dystopian", 267)?,
        Book::new(
            "Rowling",
            "Harry Potter and the Goblet of Fire",
            2000,
            "Fantasy",
            636,
        )?,
        Book::new("Petrarch", "Canzoniere", 1372, "Poetry", 366)?,
    ])
}

fn demo(format: StorageFormat, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut shelf = Bookshelf::from_books(sample_books()?)?;

    println!("Collection ({} books):", shelf.len());
    print_books(&shelf);

    match shelf.find(|b| b.genre() == "Dystopian") {
        Some(book) => {
            println!("Found a dystopian book:\n{book}\n");
            let book = book.clone();
            shelf.remove(&book)?;
            println!("Removed it; {} books remain.\n", shelf.len());
        }
        None => println!("No dystopian books on the shelf.\n"),
    }

    shelf.sort_by(|a, b| a.publishing_year().cmp(&b.publishing_year()));
    println!("Sorted by publishing year:");
    print_books(&shelf);

    let codec = format.codec(path);
    shelf.save_to(codec.as_ref())?;

    let mut restored = Bookshelf::new();
    restored.load_from(codec.as_ref())?;
    println!("Reloaded {} books from {}.", restored.len(), path.display());

    Ok(())
}

fn dump(format: StorageFormat, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let codec = format.codec(path);
    let mut shelf = Bookshelf::new();
    shelf.load_from(codec.as_ref())?;

    print_books(&shelf);
    println!("{} books in {}.", shelf.len(), path.display());
    Ok(())
}

fn convert(
    from_format: StorageFormat,
    from: &Path,
    to_format: StorageFormat,
    to: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = from_format.codec(from);
    let destination = to_format.codec(to);

    let mut shelf = Bookshelf::new();
    shelf.load_from(source.as_ref())?;
    shelf.save_to(destination.as_ref())?;

    println!(
        "Converted {} books from {} to {}.",
        shelf.len(),
        from.display(),
        to.display()
    );
    Ok(())
}

fn print_books(shelf: &Bookshelf) {
    for book in shelf {
        println!("{book}\n");
    }
}
