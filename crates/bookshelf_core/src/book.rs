//! The book record.

use crate::error::{ShelfError, ShelfResult};
use std::fmt;

/// A validated book record.
///
/// Invariants (enforced at construction and on every setter):
///
/// - `author`, `title`, and `genre` are never empty
/// - `pages` is strictly positive
/// - `publishing_year` may hold any value, including sentinels
///
/// Equality and hashing are structural over all five fields. The ordering
/// compares author, then title, publishing year, genre, and pages - field
/// declaration order drives the derived `Ord`, so it must not be changed.
///
/// # Example
///
/// ```
/// use bookshelf_core::Book;
///
/// let book = Book::new("Orwell", "1984", 1949, "Dystopian", 267).unwrap();
/// assert_eq!(book.author(), "Orwell");
///
/// // Validation rejects bad values and keeps the old ones.
/// let mut book = book;
/// assert!(book.set_author("").is_err());
/// assert_eq!(book.author(), "Orwell");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Book {
    author: String,
    title: String,
    publishing_year: i32,
    genre: String,
    pages: i32,
}

impl Book {
    /// Creates a book from its five fields.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Validation`] if `author`, `title`, or `genre`
    /// is empty, or if `pages` is not strictly positive.
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        publishing_year: i32,
        genre: impl Into<String>,
        pages: i32,
    ) -> ShelfResult<Self> {
        let author = author.into();
        let title = title.into();
        let genre = genre.into();

        validate_text("author", &author)?;
        validate_text("title", &title)?;
        validate_text("genre", &genre)?;
        validate_pages(pages)?;

        Ok(Self {
            author,
            title,
            publishing_year,
            genre,
            pages,
        })
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the publishing year.
    #[must_use]
    pub fn publishing_year(&self) -> i32 {
        self.publishing_year
    }

    /// Returns the genre.
    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Returns the page count.
    #[must_use]
    pub fn pages(&self) -> i32 {
        self.pages
    }

    /// Replaces the author.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Validation`] if the new value is empty; the
    /// previous value is kept.
    pub fn set_author(&mut self, author: impl Into<String>) -> ShelfResult<()> {
        let author = author.into();
        validate_text("author", &author)?;
        self.author = author;
        Ok(())
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Validation`] if the new value is empty; the
    /// previous value is kept.
    pub fn set_title(&mut self, title: impl Into<String>) -> ShelfResult<()> {
        let title = title.into();
        validate_text("title", &title)?;
        self.title = title;
        Ok(())
    }

    /// Replaces the publishing year. Any value is accepted.
    pub fn set_publishing_year(&mut self, publishing_year: i32) {
        self.publishing_year = publishing_year;
    }

    /// Replaces the genre.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Validation`] if the new value is empty; the
    /// previous value is kept.
    pub fn set_genre(&mut self, genre: impl Into<String>) -> ShelfResult<()> {
        let genre = genre.into();
        validate_text("genre", &genre)?;
        self.genre = genre;
        Ok(())
    }

    /// Replaces the page count.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Validation`] if the new value is not strictly
    /// positive; the previous value is kept.
    pub fn set_pages(&mut self, pages: i32) -> ShelfResult<()> {
        validate_pages(pages)?;
        self.pages = pages;
        Ok(())
    }
}

impl fmt::Display for Book {
    /// Renders the canonical textual representation of the book.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Author: {}\nTitle: {}\nPublishing Year: {}\nGenre: {}\nNumber Of Pages: {}",
            self.author, self.title, self.publishing_year, self.genre, self.pages
        )
    }
}

fn validate_text(field: &'static str, value: &str) -> ShelfResult<()> {
    if value.is_empty() {
        return Err(ShelfError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn validate_pages(pages: i32) -> ShelfResult<()> {
    if pages <= 0 {
        return Err(ShelfError::validation(
            "pages",
            format!("must be greater than 0, got {pages}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn orwell() -> Book {
        Book::new("Orwell", "1984", 1949, "Dystopian", 267).unwrap()
    }

    fn hash_of(book: &Book) -> u64 {
        let mut hasher = DefaultHasher::new();
        book.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn new_keeps_field_values() {
        let book = orwell();
        assert_eq!(book.author(), "Orwell");
        assert_eq!(book.title(), "1984");
        assert_eq!(book.publishing_year(), 1949);
        assert_eq!(book.genre(), "Dystopian");
        assert_eq!(book.pages(), 267);
    }

    #[test]
    fn new_rejects_empty_text_fields() {
        assert!(Book::new("", "1984", 1949, "Dystopian", 267).is_err());
        assert!(Book::new("Orwell", "", 1949, "Dystopian", 267).is_err());
        assert!(Book::new("Orwell", "1984", 1949, "", 267).is_err());
    }

    #[test]
    fn new_rejects_non_positive_pages() {
        assert!(Book::new("Orwell", "1984", 1949, "Dystopian", 0).is_err());
        assert!(Book::new("Orwell", "1984", 1949, "Dystopian", -5).is_err());
    }

    #[test]
    fn new_accepts_any_publishing_year() {
        assert!(Book::new("Anonymous", "Epic", -800, "Poetry", 300).is_ok());
        assert!(Book::new("Anonymous", "Epic", i32::MIN, "Poetry", 300).is_ok());
    }

    #[test]
    fn setters_validate_and_keep_prior_value() {
        let mut book = orwell();

        assert!(book.set_author("").is_err());
        assert_eq!(book.author(), "Orwell");

        assert!(book.set_title("").is_err());
        assert_eq!(book.title(), "1984");

        assert!(book.set_genre("").is_err());
        assert_eq!(book.genre(), "Dystopian");

        assert!(book.set_pages(0).is_err());
        assert_eq!(book.pages(), 267);
    }

    #[test]
    fn setters_apply_valid_values() {
        let mut book = orwell();
        book.set_author("Eric Blair").unwrap();
        book.set_title("Nineteen Eighty-Four").unwrap();
        book.set_publishing_year(1950);
        book.set_genre("Fiction").unwrap();
        book.set_pages(328).unwrap();

        assert_eq!(book.author(), "Eric Blair");
        assert_eq!(book.title(), "Nineteen Eighty-Four");
        assert_eq!(book.publishing_year(), 1950);
        assert_eq!(book.genre(), "Fiction");
        assert_eq!(book.pages(), 328);
    }

    #[test]
    fn equality_is_structural() {
        let a = orwell();
        let b = orwell();
        assert_eq!(a, b);

        let mut c = orwell();
        c.set_pages(268).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn equal_books_hash_equally() {
        assert_eq!(hash_of(&orwell()), hash_of(&orwell()));
    }

    #[test]
    fn ordering_cascades_through_fields() {
        let a = Book::new("Abbott", "Flatland", 1884, "Satire", 96).unwrap();
        let b = Book::new("Orwell", "1984", 1949, "Dystopian", 267).unwrap();
        let c = Book::new("Orwell", "Animal Farm", 1945, "Satire", 112).unwrap();
        let d = Book::new("Orwell", "Animal Farm", 1946, "Satire", 112).unwrap();

        // Author decides first, then title, then year.
        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
    }

    #[test]
    fn ordering_is_total() {
        let a = Book::new("A", "T", 1, "G", 1).unwrap();
        let b = Book::new("B", "T", 1, "G", 1).unwrap();
        let c = Book::new("C", "T", 1, "G", 1).unwrap();

        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
        assert!(a < b && b < c && a < c);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn display_is_the_canonical_representation() {
        let rendered = orwell().to_string();
        assert_eq!(
            rendered,
            "Author: Orwell\nTitle: 1984\nPublishing Year: 1949\nGenre: Dystopian\nNumber Of Pages: 267"
        );
    }
}
