//! Bookstore service integration tests.

mod convention;
mod policy;
mod projections;
mod race;
mod seed;
mod support;

#[cfg(feature = "http")]
mod http;
