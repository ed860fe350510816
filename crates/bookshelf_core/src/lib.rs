//! # Bookshelf Core
//!
//! In-memory book collection with pluggable persistence.
//!
//! The crate provides three pieces:
//!
//! - [`Book`] - a validated book record with structural equality and a
//!   total order over (author, title, publishing year, genre, pages)
//! - [`Bookshelf`] - an ordered, duplicate-free collection of books with
//!   add/remove/find/sort operations
//! - [`BookStorage`] - the capability trait persistence backends implement
//!
//! Codec implementations of [`BookStorage`] live in the `bookshelf_codecs`
//! crate; this crate only defines the contract they satisfy.
//!
//! ## Example
//!
//! ```
//! use bookshelf_core::{Book, Bookshelf};
//!
//! let mut shelf = Bookshelf::new();
//! let book = Book::new("Orwell", "1984", 1949, "Dystopian", 267).unwrap();
//! shelf.add(book).unwrap();
//!
//! let found = shelf.find(|b| b.genre() == "Dystopian");
//! assert!(found.is_some());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod error;
mod shelf;
mod storage;

pub use book::Book;
pub use error::{ShelfError, ShelfResult, StorageError, StorageResult};
pub use shelf::Bookshelf;
pub use storage::BookStorage;
