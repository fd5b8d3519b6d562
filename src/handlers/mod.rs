//! Route handlers, one per file, following the microsvc convention.
//!
//! | Route | Method | Path |
//! |---|---|---|
//! | `books.list` | GET | `/api/books` |
//! | `authors.list` | GET | `/api/authors` |
//! | `years.list` | GET | `/api/years` |
//! | `books.create` | POST | `/api/books` |
//! | `books.update` | PUT | `/api/books/:id` |
//! | `books.delete` | DELETE | `/api/books/:id` |

pub mod authors_list;
pub mod books_create;
pub mod books_delete;
pub mod books_list;
pub mod books_update;
pub mod years_list;
