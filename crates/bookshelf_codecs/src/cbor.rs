//! Self-describing CBOR codec.

use crate::target;
use bookshelf_core::{Book, BookStorage, StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Whole-collection CBOR storage.
///
/// The entire collection is serialized as a single CBOR blob: an array of
/// maps with named fields. CBOR carries type and shape information in the
/// encoding itself, so the reader needs no external schema to reconstruct
/// the books, and a write-then-read round trip preserves field values and
/// collection order exactly.
///
/// Decoded records still pass through [`Book`] validation; a blob whose
/// field values violate the book invariants is corrupt, not merely odd.
#[derive(Debug, Clone)]
pub struct CborCodec {
    path: PathBuf,
}

/// Serde mirror of [`Book`] with public fields.
///
/// Keeps the on-disk field names stable independently of the entity's
/// internal layout.
#[derive(Serialize, Deserialize)]
struct BookRecord {
    author: String,
    title: String,
    #[serde(rename = "publishingYear")]
    publishing_year: i32,
    genre: String,
    #[serde(rename = "numberOfPages")]
    pages: i32,
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            author: book.author().to_string(),
            title: book.title().to_string(),
            publishing_year: book.publishing_year(),
            genre: book.genre().to_string(),
            pages: book.pages(),
        }
    }
}

impl BookRecord {
    fn into_book(self) -> StorageResult<Book> {
        Book::new(
            self.author,
            self.title,
            self.publishing_year,
            self.genre,
            self.pages,
        )
        .map_err(|e| StorageError::corrupt(format!("decoded record is not a valid book: {e}")))
    }
}

impl CborCodec {
    /// Creates a codec bound to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the storage target.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStorage for CborCodec {
    fn read_all(&self) -> StorageResult<Vec<Book>> {
        let payload = target::read_bytes(&self.path)?;

        let records: Vec<BookRecord> = ciborium::from_reader(payload.as_slice())
            .map_err(|e| StorageError::corrupt(format!("CBOR decode failed: {e}")))?;

        debug!(count = records.len(), path = %self.path.display(), "read CBOR blob");
        records.into_iter().map(BookRecord::into_book).collect()
    }

    fn write_all(&self, books: &[Book]) -> StorageResult<()> {
        let records: Vec<BookRecord> = books.iter().map(BookRecord::from).collect();

        let mut buf = Vec::new();
        ciborium::into_writer(&records, &mut buf).map_err(io::Error::other)?;

        debug!(count = books.len(), path = %self.path.display(), "writing CBOR blob");
        target::write_bytes(&self.path, &buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new("Orwell", "1984", 1949, "Dystopian", 267).unwrap(),
            Book::new(
                "Rowling",
                "Harry Potter and the Goblet of Fire",
                2000,
                "Fantasy",
                636,
            )
            .unwrap(),
        ]
    }

    #[test]
    fn roundtrip_empty() {
        let dir = tempdir().unwrap();
        let codec = CborCodec::new(dir.path().join("books.cbor"));

        codec.write_all(&[]).unwrap();
        assert!(codec.read_all().unwrap().is_empty());
    }

    #[test]
    fn roundtrip_many_preserves_order() {
        let dir = tempdir().unwrap();
        let codec = CborCodec::new(dir.path().join("books.cbor"));
        let books = sample_books();

        codec.write_all(&books).unwrap();
        assert_eq!(codec.read_all().unwrap(), books);
    }

    #[test]
    fn missing_file_is_target_missing() {
        let dir = tempdir().unwrap();
        let codec = CborCodec::new(dir.path().join("absent.cbor"));

        let result = codec.read_all();
        assert!(matches!(result, Err(StorageError::TargetMissing { .. })));
    }

    #[test]
    fn garbage_blob_is_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.cbor");
        std::fs::write(&path, b"not CBOR at all").unwrap();

        let result = CborCodec::new(&path).read_all();
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn invalid_field_values_are_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.cbor");

        // A structurally valid blob whose record violates book invariants.
        let record = BookRecord {
            author: "Orwell".to_string(),
            title: "1984".to_string(),
            publishing_year: 1949,
            genre: "Dystopian".to_string(),
            pages: 0,
        };
        let mut buf = Vec::new();
        ciborium::into_writer(&vec![record], &mut buf).unwrap();
        std::fs::write(&path, &buf).unwrap();

        let result = CborCodec::new(&path).read_all();
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn write_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let codec = CborCodec::new(dir.path().join("books.cbor"));
        let books = sample_books();

        codec.write_all(&books).unwrap();
        codec.write_all(&books[..1]).unwrap();

        assert_eq!(codec.read_all().unwrap(), books[..1]);
    }
}
