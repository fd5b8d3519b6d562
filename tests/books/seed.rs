//! Example data seeding.

use bookstore::book::seed::{example_books, seed, SeedReport};
use bookstore::{BookRecord, DocumentsExt, InMemoryStore};

#[test]
fn seeding_inserts_the_three_examples() {
    let store = InMemoryStore::new();
    let report = seed(&store).unwrap();
    assert_eq!(report, SeedReport { inserted: 3, skipped: 0 });

    let ids: Vec<String> = store
        .documents::<BookRecord>()
        .all()
        .unwrap()
        .into_iter()
        .map(|stored| stored.data.id)
        .collect();
    assert_eq!(ids, vec!["example1", "example2", "example3"]);
}

#[test]
fn seeding_twice_inserts_nothing_the_second_time() {
    let store = InMemoryStore::new();
    seed(&store).unwrap();
    let report = seed(&store).unwrap();
    assert_eq!(report, SeedReport { inserted: 0, skipped: 3 });
    assert_eq!(store.len().unwrap(), 3);
}

#[test]
fn seeding_keeps_existing_records() {
    let store = InMemoryStore::new();
    let mine = BookRecord::new("example2", "My Frankenstein", "Me");
    store.documents::<BookRecord>().insert(&mine).unwrap();

    let report = seed(&store).unwrap();
    assert_eq!(report.inserted, 2);
    let kept = store.documents::<BookRecord>().get("example2").unwrap().unwrap();
    assert_eq!(kept.data, mine);
}

#[test]
fn examples_are_complete_records() {
    for book in example_books() {
        assert!(!book.title.is_empty() && !book.author.is_empty());
        assert!(!book.edition.is_empty() && !book.pages.is_empty() && !book.year.is_empty());
    }
}
