//! Create/update/delete policy, exercised through dispatch.

use bookstore::microsvc::HandlerError;
use bookstore::BookRecord;
use serde_json::json;

use crate::support::{book, create, delete, full_service, list, stored, update};

#[test]
fn created_book_is_listed_exactly_once() {
    let service = full_service();

    let reply = create(&service, book("b1", "T", "A")).unwrap();
    assert_eq!(reply.status, 201);
    assert_eq!(reply.body["book"]["id"], "b1");
    assert!(reply.body["inserted_id"].as_str().is_some_and(|key| !key.is_empty()));

    let books = list(&service);
    assert_eq!(books.iter().filter(|b| b["id"] == "b1").count(), 1);
}

#[test]
fn listing_never_exposes_the_internal_key() {
    let service = full_service();
    let reply = create(&service, book("b1", "T", "A")).unwrap();
    let key = reply.body["inserted_id"].as_str().unwrap().to_string();

    let books = list(&service);
    assert_eq!(
        books[0],
        json!({
            "id": "b1",
            "title": "T",
            "author": "A",
            "edition": "",
            "pages": "",
            "year": ""
        })
    );
    assert!(!books[0].to_string().contains(&key));
}

#[test]
fn duplicate_create_conflicts_and_leaves_store_unchanged() {
    let service = full_service();
    create(&service, book("b1", "T", "A")).unwrap();

    let result = create(&service, book("b1", "Other", "Someone"));
    assert!(matches!(result, Err(HandlerError::Conflict(_))));
    assert_eq!(result.unwrap_err().status_code(), 409);

    assert_eq!(stored(&service), vec![BookRecord::new("b1", "T", "A")]);
}

#[test]
fn create_with_empty_title_is_refused_and_creates_nothing() {
    let service = full_service();

    let result = create(&service, book("b1", "", "A"));
    let err = result.unwrap_err();
    assert!(matches!(err, HandlerError::Validation(_)));
    assert_eq!(err.status_code(), 400);
    assert!(err.to_string().contains("title"));

    assert!(stored(&service).is_empty());
}

#[test]
fn create_reports_every_missing_field() {
    let service = full_service();
    let err = create(&service, json!({ "edition": "1st" })).unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation failed: missing required fields: id, title, author"
    );
}

#[test]
fn create_ignores_a_client_supplied_key() {
    let service = full_service();
    let mut body = book("b1", "T", "A");
    body["_id"] = json!("forged");

    let reply = create(&service, body).unwrap();
    assert_ne!(reply.body["inserted_id"], "forged");
    assert!(reply.body["book"].get("_id").is_none());
}

#[test]
fn create_without_a_body_is_rejected_by_the_guard() {
    let service = full_service();
    let err = service
        .dispatch("books.create", bookstore::microsvc::Request::new())
        .unwrap_err();
    assert!(matches!(err, HandlerError::GuardRejected(_)));
}

#[test]
fn update_of_missing_book_is_not_found() {
    let service = full_service();
    let err = update(&service, "ghost", book("", "T", "A")).unwrap_err();
    assert!(matches!(err, HandlerError::NotFound(_)));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn update_with_mismatched_body_id_is_refused() {
    let service = full_service();
    create(&service, book("b1", "T", "A")).unwrap();

    let err = update(&service, "b1", book("b2", "T2", "A")).unwrap_err();
    assert!(matches!(err, HandlerError::Validation(_)));
    assert_eq!(stored(&service)[0].title, "T");
}

#[test]
fn update_checks_required_fields_before_existence() {
    let service = full_service();
    let err = update(&service, "ghost", json!({ "author": "A" })).unwrap_err();
    assert!(matches!(err, HandlerError::Validation(_)));
}

#[test]
fn update_replaces_the_whole_record() {
    let service = full_service();
    create(
        &service,
        json!({ "id": "b1", "title": "T", "author": "A", "year": "1999", "pages": "10" }),
    )
    .unwrap();

    let reply = update(&service, "b1", json!({ "title": "T2", "author": "A" })).unwrap();
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, json!({ "matched_count": 1, "modified_count": 1 }));

    assert_eq!(stored(&service), vec![BookRecord::new("b1", "T2", "A")]);
}

#[test]
fn delete_twice_is_not_found_the_second_time() {
    let service = full_service();
    create(&service, book("b1", "T", "A")).unwrap();

    let reply = delete(&service, "b1").unwrap();
    assert_eq!(reply.body, json!({ "deleted_count": 1 }));

    let err = delete(&service, "b1").unwrap_err();
    assert!(matches!(err, HandlerError::NotFound(_)));
    assert!(list(&service).is_empty());
}

#[test]
fn delete_of_missing_book_is_not_found() {
    let service = full_service();
    let err = delete(&service, "nope").unwrap_err();
    assert_eq!(err.status_code(), 404);
}
