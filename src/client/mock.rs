//! In-memory [`RequestExecutor`] for unit tests.
//!
//! Replies are registered per path (optionally with query string) and
//! consumed in order; the last reply for a route is sticky. Every executed
//! request is recorded.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use super::error::{ClientError, ClientResult};
use super::executor::RequestExecutor;
use super::request::ApiRequest;

#[derive(Debug, Clone)]
enum MockReply {
    Json(serde_json::Value),
    Api { status: u16, message: String },
}

/// Scripted executor
#[derive(Default)]
pub struct MockExecutor {
    routes: Mutex<HashMap<String, VecDeque<MockReply>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON reply for a route
    pub fn respond(&self, route: &str, body: serde_json::Value) {
        self.push(route, MockReply::Json(body));
    }

    /// Queue an API error reply for a route
    pub fn fail(&self, route: &str, status: u16, message: &str) {
        self.push(
            route,
            MockReply::Api {
                status,
                message: message.to_string(),
            },
        );
    }

    fn push(&self, route: &str, reply: MockReply) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.entry(route.to_string()).or_default().push_back(reply);
        }
    }

    /// All requests executed so far
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of requests that hit `route` (path with or without query)
    pub fn hits(&self, route: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.path == route || r.path_and_query() == route)
            .count()
    }

    fn next_reply(&self, request: &ApiRequest) -> Option<MockReply> {
        let mut routes = self.routes.lock().ok()?;
        let full = request.path_and_query();

        let key = if routes.contains_key(&full) {
            full
        } else {
            request.path.clone()
        };

        let queue = routes.get_mut(&key)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl RequestExecutor for MockExecutor {
    async fn execute(&self, request: ApiRequest) -> ClientResult<serde_json::Value> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let reply = self.next_reply(&request).ok_or_else(|| ClientError::Api {
            status: 404,
            message: format!("No mock route for {} {}", request.method, request.path_and_query()),
        })?;

        match reply {
            MockReply::Json(value) => Ok(value),
            MockReply::Api { status, message } => Err(ClientError::Api { status, message }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_replies_are_consumed_in_order() {
        let mock = MockExecutor::new();
        mock.respond("/words", json!(1));
        mock.respond("/words", json!(2));

        let first = mock.execute(ApiRequest::get("/words")).await.unwrap();
        let second = mock.execute(ApiRequest::get("/words")).await.unwrap();
        let third = mock.execute(ApiRequest::get("/words")).await.unwrap();

        assert_eq!(first, json!(1));
        assert_eq!(second, json!(2));
        assert_eq!(third, json!(2));
        assert_eq!(mock.hits("/words"), 3);
    }

    #[tokio::test]
    async fn test_query_route_takes_precedence() {
        let mock = MockExecutor::new();
        mock.respond("/words", json!("any"));
        mock.respond("/words?page=2&per_page=20", json!("second page"));

        let value = mock
            .execute(ApiRequest::get("/words").page(2, 20))
            .await
            .unwrap();
        assert_eq!(value, json!("second page"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let mock = MockExecutor::new();
        let err = mock.execute(ApiRequest::get("/nope")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_fail_reply_is_api_error() {
        let mock = MockExecutor::new();
        mock.fail("/groups/7", 500, "database unavailable");

        let err = mock.execute(ApiRequest::get("/groups/7")).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.user_message(), "database unavailable");
    }
}
