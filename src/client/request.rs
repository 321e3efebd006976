//! Request descriptions
//!
//! An [`ApiRequest`] is what the endpoint groups build and what a
//! [`RequestExecutor`](super::RequestExecutor) executes. Keeping it a plain
//! value lets tests assert on the exact method, path and query.

use serde::Serialize;

use super::error::{ClientError, ClientResult};

/// HTTP methods used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

/// Where a path is resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Relative to the API base (`http://host/api`)
    Api,
    /// Relative to the server root (`http://host`)
    Root,
}

/// A single REST call, independent of the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub scope: Scope,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            scope: Scope::Api,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Builder method: add a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Builder method: add `page` and `per_page`
    pub fn page(self, page: u32, per_page: u32) -> Self {
        self.query("page", page).query("per_page", per_page)
    }

    /// Builder method: attach a JSON body
    pub fn json<B: Serialize>(mut self, body: &B) -> ClientResult<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ClientError::InvalidRequest(format!("Request build error: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Builder method: resolve against the server root instead of the API base
    pub fn at_root(mut self) -> Self {
        self.scope = Scope::Root;
        self
    }

    /// Path plus percent-encoded query string
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.path, query)
    }
}

/// Percent-encode a single path segment (ids are opaque strings)
pub fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_without_query() {
        let req = ApiRequest::get("/dashboard/stats");
        assert_eq!(req.path_and_query(), "/dashboard/stats");
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.scope, Scope::Api);
    }

    #[test]
    fn test_page_query() {
        let req = ApiRequest::get("/study_sessions").page(2, 10);
        assert_eq!(req.path_and_query(), "/study_sessions?page=2&per_page=10");
    }

    #[test]
    fn test_query_is_encoded() {
        let req = ApiRequest::get("/words").query("search", "食べる & drink");
        assert_eq!(
            req.path_and_query(),
            "/words?search=%E9%A3%9F%E3%81%B9%E3%82%8B%20%26%20drink"
        );
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("a/b"), "a%2Fb");
        assert_eq!(segment("42"), "42");
    }
}
