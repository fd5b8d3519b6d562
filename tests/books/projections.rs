//! Distinct author and year listings.

use bookstore::microsvc::Request;
use serde_json::{json, Value};

use crate::support::{book, create, full_service};

fn authors(service: &bookstore::microsvc::Service<bookstore::InMemoryStore>) -> Value {
    service.dispatch("authors.list", Request::new()).unwrap().body
}

#[test]
fn authors_are_listed_once_each() {
    let service = full_service();
    create(&service, book("b1", "T1", "Mary Shelley")).unwrap();
    create(&service, book("b2", "T2", "Mary Shelley")).unwrap();
    create(&service, book("b3", "T3", "Edgar Allan Poe")).unwrap();

    assert_eq!(
        authors(&service),
        json!([{ "author": "Edgar Allan Poe" }, { "author": "Mary Shelley" }])
    );
}

#[test]
fn empty_store_has_no_authors() {
    let service = full_service();
    assert_eq!(authors(&service), json!([]));
}

#[test]
fn books_without_a_year_contribute_nothing() {
    let service = full_service();
    create(&service, json!({ "id": "b1", "title": "T", "author": "A", "year": "1818" })).unwrap();
    create(&service, json!({ "id": "b2", "title": "T", "author": "A", "year": "1818" })).unwrap();
    create(&service, book("b3", "T", "A")).unwrap();

    let years = service.dispatch("years.list", Request::new()).unwrap().body;
    assert_eq!(years, json!([{ "year": "1818" }]));
}
