//! Route metadata and the request/reply values a handler sees.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::error::HandlerError;

/// HTTP verbs a route can answer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// A named operation bound to a method and a path template.
///
/// Path parameters use the `:name` form, e.g. `/api/books/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
}

impl Route {
    pub const fn new(name: &'static str, method: Method, path: &'static str) -> Self {
        Self { name, method, path }
    }

    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Method::Get, path)
    }

    pub const fn post(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Method::Post, path)
    }

    pub const fn put(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Method::Put, path)
    }

    pub const fn delete(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Method::Delete, path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.method, self.path, self.name)
    }
}

/// Transport-independent request: path parameters plus a JSON body.
#[derive(Debug, Clone, Default)]
pub struct Request {
    params: HashMap<String, String>,
    body: Value,
}

impl Request {
    /// An empty request: no parameters, `null` body.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// Parse a raw body. Empty or all-whitespace input becomes `null`.
    pub fn with_json_bytes(self, bytes: &[u8]) -> Result<Self, HandlerError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(self.with_body(Value::Null));
        }
        let body = serde_json::from_slice(bytes)
            .map_err(|e| HandlerError::DecodeFailed(e.to_string()))?;
        Ok(self.with_body(body))
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}

/// What a handler answers: a status code and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    /// Serialize `body` under the given status.
    pub fn json<T: Serialize + ?Sized>(status: u16, body: &T) -> Result<Self, HandlerError> {
        let body =
            serde_json::to_value(body).map_err(|e| HandlerError::EncodeFailed(e.to_string()))?;
        Ok(Self { status, body })
    }

    /// 200 OK.
    pub fn ok<T: Serialize + ?Sized>(body: &T) -> Result<Self, HandlerError> {
        Self::json(200, body)
    }

    /// 201 Created.
    pub fn created<T: Serialize + ?Sized>(body: &T) -> Result<Self, HandlerError> {
        Self::json(201, body)
    }
}
