//! Error types for the book collection and its storage backends.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for collection operations.
pub type ShelfResult<T> = Result<T, ShelfError>;

/// Errors that can occur when working with books and bookshelves.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// A field value failed validation.
    #[error("invalid {field}: {message}")]
    Validation {
        /// The field that was rejected.
        field: &'static str,
        /// Description of the violated rule.
        message: String,
    },

    /// The book is already present in the collection.
    #[error("book already in the collection: {title}")]
    DuplicateBook {
        /// Title of the duplicate book.
        title: String,
    },

    /// The book is not present in the collection.
    #[error("book not found in the collection: {title}")]
    BookNotFound {
        /// Title of the missing book.
        title: String,
    },

    /// A storage backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ShelfError {
    /// Creates a validation error.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a duplicate book error.
    pub fn duplicate_book(title: impl Into<String>) -> Self {
        Self::DuplicateBook {
            title: title.into(),
        }
    }

    /// Creates a book not found error.
    pub fn book_not_found(title: impl Into<String>) -> Self {
        Self::BookNotFound {
            title: title.into(),
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while reading or writing a storage target.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage target does not exist.
    #[error("storage target missing: {path}")]
    TargetMissing {
        /// Path of the missing target.
        path: PathBuf,
    },

    /// The stored data cannot be decoded into valid books.
    #[error("corrupt data: {message}")]
    Corrupt {
        /// Description of the corruption.
        message: String,
    },

    /// An I/O error unrelated to content.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StorageError {
    /// Creates a target missing error.
    pub fn target_missing(path: impl Into<PathBuf>) -> Self {
        Self::TargetMissing { path: path.into() }
    }

    /// Creates a corrupt data error.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }
}
