//! Service - route handler registry and dispatch.
//!
//! `Service<S>` holds a store and the routes one process answers to.
//! Each handler receives a `Context<S>` and returns `Result<Reply, HandlerError>`.
//!
//! ## Example
//!
//! ```ignore
//! use bookstore::microsvc::{Reply, Request, Route, Service};
//!
//! let service = Service::new(InMemoryStore::new())
//!     .route(Route::get("ping", "/ping"), |_ctx| Reply::ok(&"pong"));
//!
//! let reply = service.dispatch("ping", Request::new())?;
//! ```

use tracing::debug;

use super::context::Context;
use super::error::HandlerError;
use super::route::{Reply, Request, Route};

type Guard<S> = Box<dyn Fn(&Context<S>) -> bool + Send + Sync>;
type Handle<S> = Box<dyn Fn(&Context<S>) -> Result<Reply, HandlerError> + Send + Sync>;

/// A registered route handler with optional guard.
struct RouteHandler<S> {
    route: Route,
    guard: Option<Guard<S>>,
    handle: Handle<S>,
}

/// A microservice that routes requests to handler functions.
///
/// Generic over `S`, the store type. Handlers receive a `Context<S>`
/// and reach the store via `ctx.store()`.
pub struct Service<S> {
    name: String,
    store: S,
    handlers: Vec<RouteHandler<S>>,
}

impl<S: Send + Sync + 'static> Service<S> {
    /// Create a new service with the given store.
    pub fn new(store: S) -> Self {
        Self {
            name: "bookstore".to_string(),
            store,
            handlers: Vec::new(),
        }
    }

    /// Name reported by the health route and in logs.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Register a route handler.
    ///
    /// Uses builder pattern, returns `self` for chaining. A second
    /// registration under the same route name replaces the first.
    pub fn route<F>(self, route: Route, handler: F) -> Self
    where
        F: Fn(&Context<S>) -> Result<Reply, HandlerError> + Send + Sync + 'static,
    {
        self.register(route, None, Box::new(handler))
    }

    /// Register a route handler with a guard function.
    ///
    /// The guard is called before the handler. If it returns `false`,
    /// the request is rejected with `HandlerError::GuardRejected`.
    pub fn route_guarded<G, F>(self, route: Route, guard: G, handler: F) -> Self
    where
        G: Fn(&Context<S>) -> bool + Send + Sync + 'static,
        F: Fn(&Context<S>) -> Result<Reply, HandlerError> + Send + Sync + 'static,
    {
        self.register(route, Some(Box::new(guard)), Box::new(handler))
    }

    fn register(mut self, route: Route, guard: Option<Guard<S>>, handle: Handle<S>) -> Self {
        self.handlers.retain(|h| h.route.name != route.name);
        self.handlers.push(RouteHandler {
            route,
            guard,
            handle,
        });
        self
    }

    /// Dispatch a request to the route registered under `name`.
    ///
    /// Builds a `Context` from the request, runs the guard (if any),
    /// then calls the handler.
    pub fn dispatch(&self, name: &str, request: Request) -> Result<Reply, HandlerError> {
        let handler = self
            .handlers
            .iter()
            .find(|h| h.route.name == name)
            .ok_or_else(|| HandlerError::UnknownRoute(name.to_string()))?;

        let ctx = Context::new(request, &self.store);

        if let Some(guard) = &handler.guard {
            if !guard(&ctx) {
                debug!(route = name, "guard rejected request");
                return Err(HandlerError::GuardRejected(name.to_string()));
            }
        }

        (handler.handle)(&ctx)
    }

    /// Registered routes, in registration order.
    pub fn routes(&self) -> Vec<Route> {
        self.handlers.iter().map(|h| h.route).collect()
    }

    /// Registered route names, in registration order.
    pub fn route_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.route.name).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
