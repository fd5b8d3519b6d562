//! Book records - the single entity the bookstore services share.

pub mod seed;
pub mod validation;

use serde::{Deserialize, Serialize};

use crate::Document;

/// A book as clients send it and as it is stored.
///
/// Every field is text, `pages` and `year` included. Absent fields
/// deserialize to the empty string; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Document)]
#[document(collection = "books")]
#[serde(default)]
pub struct BookRecord {
    #[document(id)]
    pub id: String,
    pub title: String,
    pub author: String,
    pub edition: String,
    pub pages: String,
    pub year: String,
}

impl BookRecord {
    /// A record with the required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = edition.into();
        self
    }

    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = pages.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }
}

/// One entry of the distinct-authors projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorEntry {
    pub author: String,
}

/// One entry of the distinct-years projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEntry {
    pub year: String,
}
