//! Example records loaded by the designated seeding service.

use tracing::{debug, info};

use super::BookRecord;
use crate::store::{DocumentStore, DocumentsExt, StoreError};

/// What a seeding run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// The fixed example catalogue.
pub fn example_books() -> Vec<BookRecord> {
    vec![
        BookRecord::new("example1", "The Vortex", "José Eustasio Rivera")
            .with_edition("958-30-0804-4")
            .with_pages("292")
            .with_year("1924"),
        BookRecord::new("example2", "Frankenstein", "Mary Shelley")
            .with_edition("978-3-649-64609-9")
            .with_pages("280")
            .with_year("1818"),
        BookRecord::new("example3", "The Black Cat", "Edgar Allan Poe")
            .with_edition("978-3-99168-238-7")
            .with_pages("280")
            .with_year("1843"),
    ]
}

/// Insert the example books, skipping any id already present.
///
/// Safe to run any number of times, from any number of services.
pub fn seed<S: DocumentStore>(store: &S) -> Result<SeedReport, StoreError> {
    let books = store.documents::<BookRecord>();
    let mut report = SeedReport::default();

    for book in example_books() {
        match books.insert(&book) {
            Ok(_) => report.inserted += 1,
            Err(StoreError::Duplicate { .. }) => {
                debug!(id = %book.id, "example book already present");
                report.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    info!(inserted = report.inserted, skipped = report.skipped, "seeded example books");
    Ok(report)
}
