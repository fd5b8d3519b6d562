//! Validation policy shared by every write operation.
//!
//! Create and update differ only in which fields they require and in how
//! the body id relates to the path id; both go through this module so the
//! services cannot drift apart.

use super::BookRecord;

/// Why a payload was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("book id in path ({path}) and body ({body}) must match")]
    IdMismatch { path: String, body: String },
}

/// Required fields for a new record: `id`, `title`, `author`.
pub fn check_new(book: &BookRecord) -> Result<(), ValidationError> {
    require(&[("id", &book.id), ("title", &book.title), ("author", &book.author)])
}

/// Required fields for a replacement: `title`, `author`.
///
/// The id comes from the path; see [`reconcile_id`].
pub fn check_replacement(book: &BookRecord) -> Result<(), ValidationError> {
    require(&[("title", &book.title), ("author", &book.author)])
}

/// Align the body id with the path id.
///
/// An empty body id takes the path id; a different non-empty one is refused.
pub fn reconcile_id(path_id: &str, mut book: BookRecord) -> Result<BookRecord, ValidationError> {
    if book.id.is_empty() {
        book.id = path_id.to_string();
    }
    if book.id != path_id {
        return Err(ValidationError::IdMismatch {
            path: path_id.to_string(),
            body: book.id,
        });
    }
    Ok(book)
}

fn require(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}
