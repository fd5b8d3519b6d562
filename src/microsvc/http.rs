//! HTTP transport for microsvc. Mounts every registered route on axum.
//!
//! Requires the `http` feature.
//!
//! ## Routes
//!
//! - one route per registered handler, at its method and path template
//! - `GET /health`: `{ "ok": true, "service": ..., "routes": [...] }`
//!
//! Handlers are synchronous; each request runs its handler on tokio's
//! blocking pool so a slow store call never stalls the reactor.
//!
//! ## Example
//!
//! ```ignore
//! let service = Arc::new(
//!     bookstore::register_handlers!(Service::new(store), handlers::books_list)
//! );
//!
//! // Get the router to compose with other axum routes
//! let app = microsvc::router(service.clone());
//!
//! // Or serve directly
//! microsvc::serve(service, "0.0.0.0:3001".parse()?).await?;
//! ```

use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, MethodFilter, MethodRouter};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use super::error::HandlerError;
use super::route::{Method, Request};
use super::service::Service;

/// Build an axum `Router` serving every route registered on the service.
pub fn router<S: Send + Sync + 'static>(service: Arc<Service<S>>) -> Router {
    let mut paths: BTreeMap<&'static str, MethodRouter> = BTreeMap::new();

    for route in service.routes() {
        let handler = {
            let service = service.clone();
            move |params: Option<Path<HashMap<String, String>>>, body: Bytes| {
                let service = service.clone();
                let params = params.map(|Path(params)| params).unwrap_or_default();
                async move { dispatch_route(service, route.name, params, body).await }
            }
        };

        let methods = paths.remove(route.path).unwrap_or_else(MethodRouter::new);
        paths.insert(route.path, methods.on(method_filter(route.method), handler));
    }

    let health = {
        let service = service.clone();
        move || health_handler(service.clone())
    };
    let mut app = Router::new().route("/health", get(health));
    for (path, methods) in paths {
        app = app.route(path, methods);
    }

    app.layer(TraceLayer::new_for_http())
}

/// Serve the service over HTTP at the given address until Ctrl-C.
pub async fn serve<S: Send + Sync + 'static>(
    service: Arc<Service<S>>,
    addr: SocketAddr,
) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    serve_listener(service, listener).await
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve_listener<S: Send + Sync + 'static>(
    service: Arc<Service<S>>,
    listener: TcpListener,
) -> Result<(), std::io::Error> {
    info!(
        service = service.name(),
        addr = %listener.local_addr()?,
        routes = ?service.route_names(),
        "listening"
    );
    let app = router(service);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => warn!(error = %err, "could not listen for shutdown signal"),
    }
}

fn method_filter(method: Method) -> MethodFilter {
    match method {
        Method::Get => MethodFilter::GET,
        Method::Post => MethodFilter::POST,
        Method::Put => MethodFilter::PUT,
        Method::Delete => MethodFilter::DELETE,
    }
}

/// `GET /health`.
async fn health_handler<S: Send + Sync + 'static>(service: Arc<Service<S>>) -> impl IntoResponse {
    Json(json!({
        "ok": true,
        "service": service.name(),
        "routes": service.route_names(),
    }))
}

/// Decode the request, run the handler on the blocking pool, encode the reply.
async fn dispatch_route<S: Send + Sync + 'static>(
    service: Arc<Service<S>>,
    name: &'static str,
    params: HashMap<String, String>,
    body: Bytes,
) -> Response {
    let request = match Request::new().with_params(params).with_json_bytes(&body) {
        Ok(request) => request,
        Err(err) => return error_response(name, err),
    };

    match tokio::task::spawn_blocking(move || service.dispatch(name, request)).await {
        Ok(Ok(reply)) => {
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::OK);
            (status, Json(reply.body)).into_response()
        }
        Ok(Err(err)) => error_response(name, err),
        Err(join) => error_response(name, HandlerError::Other(Box::new(join))),
    }
}

fn error_response(route: &str, err: HandlerError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(route, error = %err, "request failed");
    } else {
        debug!(route, error = %err, "request refused");
    }
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
