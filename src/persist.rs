//! JSON snapshot persistence.
//!
//! The on-disk format is the book itself: a single JSON object whose keys
//! are contact identifiers and whose values are the records, with no
//! envelope or version field. Saving is a blocking whole-store write with
//! no atomicity guarantee; an interrupted write can leave a truncated
//! file.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind};
use std::path::Path;

use crate::error::PersistError;
use crate::store::ContactBook;

/// Writes the whole book to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Propagates file-creation and write failures as [`PersistError::Io`].
pub fn save_to_path(book: &ContactBook, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, book)?;
    tracing::info!(path = %path.display(), contacts = book.len(), "saved snapshot");
    Ok(())
}

/// Reads a book back from `path`.
///
/// A missing file and a file whose top-level JSON value is not an object
/// both yield an empty book rather than an error.
///
/// # Errors
///
/// Propagates read failures other than not-found as [`PersistError::Io`]
/// and malformed JSON as [`PersistError::Malformed`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ContactBook, PersistError> {
    let path = path.as_ref();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no snapshot on disk; starting empty");
            return Ok(ContactBook::new());
        }
        Err(err) => return Err(err.into()),
    };

    let value: serde_json::Value = serde_json::from_str(&raw)?;
    if !value.is_object() {
        tracing::warn!(path = %path.display(), "snapshot top level is not an object; starting empty");
        return Ok(ContactBook::new());
    }

    let book: ContactBook = serde_json::from_value(value)?;
    tracing::info!(path = %path.display(), contacts = book.len(), "loaded snapshot");
    Ok(book)
}
