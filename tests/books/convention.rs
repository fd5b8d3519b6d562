//! Handler modules registered by convention.

use bookstore::handlers;
use bookstore::microsvc::{HandlerError, Method, Request, Service};
use bookstore::InMemoryStore;

#[test]
fn each_service_answers_only_its_own_routes() {
    let reader = bookstore::register_handlers!(
        Service::new(InMemoryStore::new()),
        handlers::books_list,
        handlers::authors_list,
        handlers::years_list,
    );

    assert_eq!(
        reader.route_names(),
        vec!["books.list", "authors.list", "years.list"]
    );
    let err = reader
        .dispatch("books.delete", Request::new().with_param("id", "b1"))
        .unwrap_err();
    assert!(matches!(err, HandlerError::UnknownRoute(_)));
}

#[test]
fn routes_carry_method_and_path() {
    assert_eq!(handlers::books_create::ROUTE.method, Method::Post);
    assert_eq!(handlers::books_create::ROUTE.path, "/api/books");
    assert_eq!(handlers::books_update::ROUTE.method, Method::Put);
    assert_eq!(handlers::books_update::ROUTE.path, "/api/books/:id");
    assert_eq!(handlers::books_delete::ROUTE.method, Method::Delete);
    assert_eq!(handlers::years_list::ROUTE.path, "/api/years");
}

#[test]
fn services_sharing_a_store_see_each_others_writes() {
    let store = InMemoryStore::new();
    let writer = bookstore::register_handlers!(
        Service::new(store.clone()),
        handlers::books_create,
    );
    let reader = bookstore::register_handlers!(Service::new(store), handlers::books_list);

    writer
        .dispatch(
            "books.create",
            Request::new().with_body(crate::support::book("b1", "T", "A")),
        )
        .unwrap();

    let books = reader.dispatch("books.list", Request::new()).unwrap().body;
    assert_eq!(books[0]["id"], "b1");
}
