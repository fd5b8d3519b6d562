//! Context passed to route handlers.
//!
//! Carries the path parameters, the decoded JSON body and a
//! reference to the store. Handlers access everything they need through
//! the context.

use serde::de::DeserializeOwned;

use super::error::HandlerError;
use super::route::Request;

/// The context passed to every route handler.
///
/// Generic over `S` (the store type) so handlers can run against
/// whatever store the service was built with.
///
/// ## Example
///
/// ```ignore
/// pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Reply, HandlerError> {
///     let id = ctx.param("id")?;
///     let book = ctx.input::<BookRecord>()?;
///     // ...
/// }
/// ```
pub struct Context<'a, S> {
    request: Request,
    store: &'a S,
}

impl<'a, S> Context<'a, S> {
    pub(crate) fn new(request: Request, store: &'a S) -> Self {
        Self { request, store }
    }

    /// Deserialize the body into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        if self.request.body().is_null() {
            return Err(HandlerError::DecodeFailed("missing request body".into()));
        }
        serde_json::from_value(self.request.body().clone())
            .map_err(|e| HandlerError::DecodeFailed(e.to_string()))
    }

    /// A path parameter by name.
    pub fn param(&self, name: &str) -> Result<&str, HandlerError> {
        self.request
            .params()
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| HandlerError::DecodeFailed(format!("missing path parameter: {}", name)))
    }

    /// Whether the body is a JSON object.
    pub fn has_body(&self) -> bool {
        self.request.body().is_object()
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        self.store
    }
}
