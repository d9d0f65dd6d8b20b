use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use reqwest::Method;

use super::{ApiRequest, ApiResponse, Transport};
use crate::error::{Result, TeamsError};

type ResponseKey = (Method, String);

/// In-memory transport that replays canned responses.
///
/// Responses are queued per `(method, url)` and handed out first in, first
/// out. A request with nothing queued fails with [`TeamsError::NoResponseSet`].
/// Give every test its own instance.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<ResponseKey, VecDeque<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `response` behind any already registered for `method` and `url`.
    pub fn register(&self, method: Method, url: impl Into<String>, response: ApiResponse) {
        lock(&self.responses)
            .entry((method, url.into()))
            .or_default()
            .push_back(response);
    }

    pub fn with_response(self, method: Method, url: impl Into<String>, response: ApiResponse) -> Self {
        self.register(method, url, response);
        self
    }

    /// Requests seen so far, in dispatch order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    /// Number of registered responses not yet handed out.
    pub fn pending(&self) -> usize {
        lock(&self.responses).values().map(VecDeque::len).sum()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse> {
        let key = (request.method.clone(), request.url.to_string());
        lock(&self.requests).push(request);

        lock(&self.responses)
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .ok_or(TeamsError::NoResponseSet {
                method: key.0,
                url: key.1,
            })
    }
}

// A panicking test can poison the lock; the data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
