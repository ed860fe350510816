//! # Bookshelf Codecs
//!
//! Storage backend implementations for `bookshelf_core`.
//!
//! Each codec implements [`bookshelf_core::BookStorage`] against a single
//! file path and encodes the whole collection in one shot:
//!
//! - [`FixedBinaryCodec`] - sequential fixed-field records with
//!   length-prefixed strings and little-endian integers; no header, no
//!   record count, end of file terminates the stream
//! - [`CborCodec`] - one self-describing CBOR blob holding the whole
//!   collection as an array of named-field maps
//! - [`XmlCodec`] - a `<library>` document with one `<book>` element per
//!   record
//!
//! Codecs share no state with each other or with the collection service.
//!
//! ## Example
//!
//! ```no_run
//! use bookshelf_codecs::XmlCodec;
//! use bookshelf_core::{Book, BookStorage};
//!
//! let codec = XmlCodec::new("library.xml");
//! let books = vec![Book::new("Orwell", "1984", 1949, "Dystopian", 267).unwrap()];
//! codec.write_all(&books)?;
//! let restored = codec.read_all()?;
//! # Ok::<(), bookshelf_core::StorageError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod cbor;
mod fixed;
mod target;
mod xml;

pub use cbor::CborCodec;
pub use fixed::FixedBinaryCodec;
pub use xml::XmlCodec;
