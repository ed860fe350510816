//! Storage capability trait definition.

use crate::book::Book;
use crate::error::StorageResult;

/// A persistence backend for a book collection.
///
/// Implementations are **stateless codecs** bound to a single target
/// (typically a file path) at construction. They encode and decode the
/// full collection in one shot; there is no partial or streaming I/O.
///
/// # Invariants
///
/// - `write_all` overwrites the target completely; contents before the
///   call are discarded regardless of prior size
/// - `read_all` materializes every stored book, preserving write order
/// - a write-then-read round trip yields the same books in the same order
///
/// # Implementors
///
/// The `bookshelf_codecs` crate ships three implementations: a fixed-field
/// binary encoding, a self-describing CBOR encoding, and an XML document
/// encoding.
pub trait BookStorage {
    /// Reads every book stored in the target.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the target does not exist ([`TargetMissing`])
    /// - the contents cannot be decoded into valid books ([`Corrupt`])
    /// - an I/O error occurs ([`Io`])
    ///
    /// [`TargetMissing`]: crate::StorageError::TargetMissing
    /// [`Corrupt`]: crate::StorageError::Corrupt
    /// [`Io`]: crate::StorageError::Io
    fn read_all(&self) -> StorageResult<Vec<Book>>;

    /// Replaces the target's contents with the given books.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn write_all(&self, books: &[Book]) -> StorageResult<()>;
}
