//! The book collection service.

use crate::book::Book;
use crate::error::{ShelfError, ShelfResult};
use crate::storage::BookStorage;
use std::cmp::Ordering;
use tracing::{debug, info};

/// An ordered, duplicate-free collection of books.
///
/// Books keep their insertion order until an explicit sort. Two books are
/// duplicates when they are structurally equal over all five fields (see
/// [`Book`]). The shelf owns its books exclusively; mutation requires
/// `&mut self`, so exclusive single-owner access is enforced by the borrow
/// checker rather than by locks.
///
/// Persistence is delegated to a [`BookStorage`] backend chosen per call,
/// so one shelf can be saved to and loaded from any number of formats.
///
/// # Example
///
/// ```
/// use bookshelf_core::{Book, Bookshelf};
///
/// let mut shelf = Bookshelf::new();
/// shelf.add(Book::new("Rowling", "Harry Potter and the Goblet of Fire", 2000, "Fantasy", 636).unwrap()).unwrap();
/// shelf.add(Book::new("Orwell", "1984", 1949, "Dystopian", 267).unwrap()).unwrap();
///
/// shelf.sort_by(|a, b| a.publishing_year().cmp(&b.publishing_year()));
/// assert_eq!(shelf.books()[0].publishing_year(), 1949);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Bookshelf {
    books: Vec<Book>,
}

impl Bookshelf {
    /// Creates an empty shelf.
    #[must_use]
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Creates a shelf pre-populated from a sequence of books.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::DuplicateBook`] if the sequence contains two
    /// structurally equal books.
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> ShelfResult<Self> {
        let mut shelf = Self::new();
        for book in books {
            shelf.add(book)?;
        }
        Ok(shelf)
    }

    /// Appends a book to the shelf.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::DuplicateBook`] if an equal book is already
    /// present.
    pub fn add(&mut self, book: Book) -> ShelfResult<()> {
        if self.books.contains(&book) {
            return Err(ShelfError::duplicate_book(book.title()));
        }
        debug!(title = book.title(), "adding book");
        self.books.push(book);
        Ok(())
    }

    /// Removes the book equal to `book` from the shelf.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::BookNotFound`] if no equal book is present.
    pub fn remove(&mut self, book: &Book) -> ShelfResult<()> {
        let position = self
            .books
            .iter()
            .position(|b| b == book)
            .ok_or_else(|| ShelfError::book_not_found(book.title()))?;
        debug!(title = book.title(), "removing book");
        self.books.remove(position);
        Ok(())
    }

    /// Returns the first book matching the predicate, in current order.
    ///
    /// `None` means nothing matched; absence is a normal outcome, not an
    /// error.
    pub fn find<P>(&self, predicate: P) -> Option<&Book>
    where
        P: Fn(&Book) -> bool,
    {
        self.books.iter().find(|book| predicate(book))
    }

    /// Reorders the shelf in place using the supplied comparator.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Book, &Book) -> Ordering,
    {
        self.books.sort_by(compare);
    }

    /// Reorders the shelf in place by the natural book order.
    pub fn sort(&mut self) {
        self.books.sort();
    }

    /// Writes the full collection to the given storage backend.
    ///
    /// # Errors
    ///
    /// Propagates any [`StorageError`](crate::StorageError) from the
    /// backend.
    pub fn save_to(&self, storage: &dyn BookStorage) -> ShelfResult<()> {
        storage.write_all(&self.books)?;
        info!(count = self.books.len(), "saved shelf");
        Ok(())
    }

    /// Replaces the collection with the contents of the storage backend.
    ///
    /// The new sequence is fully read before it is swapped in; on any read
    /// failure the shelf keeps its previous contents.
    ///
    /// # Errors
    ///
    /// Propagates any [`StorageError`](crate::StorageError) from the
    /// backend.
    pub fn load_from(&mut self, storage: &dyn BookStorage) -> ShelfResult<()> {
        let books = storage.read_all()?;
        info!(count = books.len(), "loaded shelf");
        self.books = books;
        Ok(())
    }

    /// Returns the books in current order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns an iterator over the books in current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Returns the number of books on the shelf.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` if the shelf holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl<'a> IntoIterator for &'a Bookshelf {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
