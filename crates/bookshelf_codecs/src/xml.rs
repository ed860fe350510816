//! XML document codec.

use crate::target;
use bookshelf_core::{Book, BookStorage, StorageError, StorageResult};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const ROOT_TAG: &str = "library";
const BOOK_TAG: &str = "book";
const AUTHOR_TAG: &str = "author";
const TITLE_TAG: &str = "title";
const YEAR_TAG: &str = "publishingYear";
const GENRE_TAG: &str = "genre";
const PAGES_TAG: &str = "numberOfPages";

/// XML document storage.
///
/// The document is a `<library>` root wrapping zero or more `<book>`
/// elements, each holding five named leaf elements (`author`, `title`,
/// `publishingYear`, `genre`, `numberOfPages`) with numbers as decimal
/// text. On read the leaf elements are looked up by name, in any order.
///
/// A root with zero `<book>` children is a valid empty library. A missing
/// or malformed root, a `<book>` missing a required child, or a numeric
/// child that fails to parse is corrupt.
#[derive(Debug, Clone)]
pub struct XmlCodec {
    path: PathBuf,
}

impl XmlCodec {
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

impl BookStorage for XmlCodec {
    fn read_all(&self) -> StorageResult<Vec<Book>> {
        let payload = target::read_bytes(&self.path)?;
        let content = String::from_utf8(payload)
            .map_err(|_| StorageError::corrupt("document is not valid UTF-8"))?;

        let books = parse_document(&content)?;
        debug!(count = books.len(), path = %self.path.display(), "read XML document");
        Ok(books)
    }

    fn write_all(&self, books: &[Book]) -> StorageResult<()> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(write_error)?;
        writer
            .write_event(Event::Start(BytesStart::new(ROOT_TAG)))
            .map_err(write_error)?;
        for book in books {
            writer
                .write_event(Event::Start(BytesStart::new(BOOK_TAG)))
                .map_err(write_error)?;
            write_field(&mut writer, AUTHOR_TAG, book.author())?;
            write_field(&mut writer, TITLE_TAG, book.title())?;
            write_field(&mut writer, YEAR_TAG, &book.publishing_year().to_string())?;
            write_field(&mut writer, GENRE_TAG, book.genre())?;
            write_field(&mut writer, PAGES_TAG, &book.pages().to_string())?;
            writer
                .write_event(Event::End(BytesEnd::new(BOOK_TAG)))
                .map_err(write_error)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(ROOT_TAG)))
            .map_err(write_error)?;

        debug!(count = books.len(), path = %self.path.display(), "writing XML document");
        target::write_bytes(&self.path, &writer.into_inner())
    }
}

fn write_field(writer: &mut Writer<Vec<u8>>, tag: &str, value: &str) -> StorageResult<()> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(write_error)?;
    writer
        .write_event(Event::Text(BytesText::new(value)))
        .map_err(write_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(write_error)?;
    Ok(())
}

fn write_error(e: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> StorageError {
    StorageError::Io(io::Error::other(e))
}

/// Accumulates the child elements of one `<book>` until it closes.
#[derive(Default)]
struct PendingBook {
    author: Option<String>,
    title: Option<String>,
    publishing_year: Option<String>,
    genre: Option<String>,
    pages: Option<String>,
}

impl PendingBook {
    fn set(&mut self, tag: &str, value: String) {
        match tag {
            AUTHOR_TAG => self.author = Some(value),
            TITLE_TAG => self.title = Some(value),
            YEAR_TAG => self.publishing_year = Some(value),
            GENRE_TAG => self.genre = Some(value),
            PAGES_TAG => self.pages = Some(value),
            // Unknown children are ignored; lookup is by name.
            _ => {}
        }
    }

    fn into_book(self) -> StorageResult<Book> {
        let author = require(self.author, AUTHOR_TAG)?;
        let title = require(self.title, TITLE_TAG)?;
        let publishing_year = parse_number(&require(self.publishing_year, YEAR_TAG)?, YEAR_TAG)?;
        let genre = require(self.genre, GENRE_TAG)?;
        let pages = parse_number(&require(self.pages, PAGES_TAG)?, PAGES_TAG)?;

        Book::new(author, title, publishing_year, genre, pages)
            .map_err(|e| StorageError::corrupt(format!("book element is not a valid book: {e}")))
    }
}

fn require(value: Option<String>, tag: &str) -> StorageResult<String> {
    value.ok_or_else(|| StorageError::corrupt(format!("book element missing <{tag}>")))
}

fn parse_number(value: &str, tag: &str) -> StorageResult<i32> {
    value
        .trim()
        .parse()
        .map_err(|_| StorageError::corrupt(format!("<{tag}> is not a number: {value:?}")))
}

fn parse_document(content: &str) -> StorageResult<Vec<Book>> {
    // Text is not trimmed: entity references split a field value into
    // several text events, and trimming would drop interior spaces.
    // Whitespace between elements arrives outside any field and is ignored.
    let mut reader = Reader::from_str(content);

    let mut books = Vec::new();
    let mut root_seen = false;
    let mut pending: Option<PendingBook> = None;
    let mut current_field: Option<String> = None;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name();
                if !root_seen {
                    if name.as_ref() != ROOT_TAG.as_bytes() {
                        return Err(unexpected_element(name.as_ref()));
                    }
                    root_seen = true;
                } else if pending.is_none() {
                    if name.as_ref() != BOOK_TAG.as_bytes() {
                        return Err(unexpected_element(name.as_ref()));
                    }
                    pending = Some(PendingBook::default());
                } else if current_field.is_none() {
                    current_field = Some(String::from_utf8_lossy(name.as_ref()).into_owned());
                    text.clear();
                } else {
                    return Err(unexpected_element(name.as_ref()));
                }
            }
            Ok(Event::Empty(e)) => {
                let name = e.name();
                if !root_seen {
                    if name.as_ref() != ROOT_TAG.as_bytes() {
                        return Err(unexpected_element(name.as_ref()));
                    }
                    // An empty root is a valid empty library.
                    root_seen = true;
                } else if pending.is_none() {
                    if name.as_ref() != BOOK_TAG.as_bytes() {
                        return Err(unexpected_element(name.as_ref()));
                    }
                    // A childless book is missing every required field.
                    books.push(PendingBook::default().into_book()?);
                } else if current_field.is_none() {
                    let tag = String::from_utf8_lossy(name.as_ref()).into_owned();
                    if let Some(fields) = pending.as_mut() {
                        fields.set(&tag, String::new());
                    }
                } else {
                    return Err(unexpected_element(name.as_ref()));
                }
            }
            Ok(Event::Text(e)) => {
                if current_field.is_some() {
                    text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if current_field.is_some() {
                    let entity = String::from_utf8_lossy(e.as_ref()).into_owned();
                    match resolve_entity(&entity) {
                        Some(resolved) => text.push_str(&resolved),
                        None => {
                            return Err(StorageError::corrupt(format!(
                                "unknown entity reference: &{entity};"
                            )))
                        }
                    }
                }
            }
            Ok(Event::End(e)) => {
                if let Some(tag) = current_field.take() {
                    if let Some(fields) = pending.as_mut() {
                        fields.set(&tag, std::mem::take(&mut text));
                    }
                } else if e.name().as_ref() == BOOK_TAG.as_bytes() {
                    if let Some(fields) = pending.take() {
                        books.push(fields.into_book()?);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(StorageError::corrupt(format!("malformed XML: {e}"))),
        }
    }

    if !root_seen {
        return Err(StorageError::corrupt(format!(
            "document has no <{ROOT_TAG}> root"
        )));
    }

    Ok(books)
}

fn unexpected_element(name: &[u8]) -> StorageError {
    StorageError::corrupt(format!(
        "unexpected element <{}>",
        String::from_utf8_lossy(name)
    ))
}

fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "amp" => return Some("&".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "quot" => return Some("\"".to_string()),
        "apos" => return Some("'".to_string()),
        _ => {}
    }

    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse().ok()
    } else {
        None
    };
    code.and_then(char::from_u32).map(|c| c.to_string())
}
