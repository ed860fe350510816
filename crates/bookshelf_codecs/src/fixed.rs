//! Fixed-field binary codec.

use crate::target;
use bookshelf_core::{Book, BookStorage, StorageError, StorageResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sequential fixed-field binary storage.
///
/// One record per book, written in collection order with no header, record
/// count, checksum, or separator:
///
/// ```text
/// [u32 LE author_len][author UTF-8]
/// [u32 LE title_len][title UTF-8]
/// [i32 LE publishing_year]
/// [u32 LE genre_len][genre UTF-8]
/// [i32 LE pages]
/// ```
///
/// Reading consumes records until end of file. A record that cannot be
/// fully consumed - a truncated length prefix, short string bytes, or a
/// short integer - is corrupt, as is any string that is not valid UTF-8
/// or any decoded field that fails [`Book`] validation.
#[derive(Debug, Clone)]
pub struct FixedBinaryCodec {
    path: PathBuf,
}

impl FixedBinaryCodec {
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

impl BookStorage for FixedBinaryCodec {
    fn read_all(&self) -> StorageResult<Vec<Book>> {
        let payload = target::read_bytes(&self.path)?;

        let mut books = Vec::new();
        let mut cursor = 0;
        while cursor < payload.len() {
            books.push(decode_record(&payload, &mut cursor)?);
        }

        debug!(count = books.len(), path = %self.path.display(), "read fixed binary records");
        Ok(books)
    }

    fn write_all(&self, books: &[Book]) -> StorageResult<()> {
        let mut buf = Vec::new();
        for book in books {
            encode_record(&mut buf, book);
        }

        debug!(count = books.len(), path = %self.path.display(), "writing fixed binary records");
        target::write_bytes(&self.path, &buf)
    }
}

fn encode_record(buf: &mut Vec<u8>, book: &Book) {
    encode_text(buf, book.author());
    encode_text(buf, book.title());
    buf.extend_from_slice(&book.publishing_year().to_le_bytes());
    encode_text(buf, book.genre());
    buf.extend_from_slice(&book.pages().to_le_bytes());
}

fn encode_text(buf: &mut Vec<u8>, text: &str) {
    buf.extend_from_slice(&(text.len() as u32).to_le_bytes());
    buf.extend_from_slice(text.as_bytes());
}

fn decode_record(payload: &[u8], cursor: &mut usize) -> StorageResult<Book> {
    let author = decode_text(payload, cursor)?;
    let title = decode_text(payload, cursor)?;
    let publishing_year = decode_i32(payload, cursor)?;
    let genre = decode_text(payload, cursor)?;
    let pages = decode_i32(payload, cursor)?;

    Book::new(author, title, publishing_year, genre, pages)
        .map_err(|e| StorageError::corrupt(format!("decoded record is not a valid book: {e}")))
}

fn decode_text(payload: &[u8], cursor: &mut usize) -> StorageResult<String> {
    let len = decode_u32(payload, cursor)? as usize;
    if *cursor + len > payload.len() {
        return Err(StorageError::corrupt("truncated record: short string"));
    }
    let text = std::str::from_utf8(&payload[*cursor..*cursor + len])
        .map_err(|_| StorageError::corrupt("string is not valid UTF-8"))?
        .to_string();
    *cursor += len;
    Ok(text)
}

fn decode_u32(payload: &[u8], cursor: &mut usize) -> StorageResult<u32> {
    let bytes: [u8; 4] = payload
        .get(*cursor..*cursor + 4)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| StorageError::corrupt("truncated record: short length prefix"))?;
    *cursor += 4;
    Ok(u32::from_le_bytes(bytes))
}

fn decode_i32(payload: &[u8], cursor: &mut usize) -> StorageResult<i32> {
    let bytes: [u8; 4] = payload
        .get(*cursor..*cursor + 4)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| StorageError::corrupt("truncated record: short integer"))?;
    *cursor += 4;
    Ok(i32::from_le_bytes(bytes))
}
