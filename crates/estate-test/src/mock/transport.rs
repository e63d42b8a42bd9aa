//! Recording HTTP transport.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use estate_core::{Error, HttpRequest, HttpResponse, HttpService, HttpTransport, Result};
use serde::Serialize;

/// A canned outcome for one request.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this response (any status).
    Response(HttpResponse),
    /// Fail at the transport level with this message.
    TransportFailure(String),
}

#[derive(Debug, Default)]
struct MockState {
    replies: VecDeque<MockReply>,
    requests: Vec<HttpRequest>,
}

/// Mock HTTP transport for testing.
///
/// Replies are consumed in the order they were queued. When the queue is
/// empty every request fails with a transport error. Clones share state.
#[derive(Clone, Default, Debug)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Creates a mock with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply.
    #[must_use]
    pub fn with_reply(self, reply: MockReply) -> Self {
        self.state().replies.push_back(reply);
        self
    }

    /// Queues a response.
    #[must_use]
    pub fn with_response(self, response: HttpResponse) -> Self {
        self.with_reply(MockReply::Response(response))
    }

    /// Queues a `200 OK` response with a text body.
    #[must_use]
    pub fn with_text(self, body: impl Into<String>) -> Self {
        self.with_response(HttpResponse::ok(body.into()))
    }

    /// Queues a `200 OK` response with `value` serialized as JSON.
    #[must_use]
    pub fn with_json<T: Serialize + ?Sized>(self, value: &T) -> Self {
        let body = serde_json::to_vec(value).unwrap_or_default();
        self.with_response(HttpResponse::ok(body))
    }

    /// Queues a non-success response with the given status line and empty body.
    #[must_use]
    pub fn with_status(self, status: u16, status_text: impl Into<String>) -> Self {
        self.with_response(HttpResponse::new(status, status_text, Vec::new()))
    }

    /// Queues a transport-level failure.
    #[must_use]
    pub fn with_transport_failure(self, message: impl Into<String>) -> Self {
        self.with_reply(MockReply::TransportFailure(message.into()))
    }

    /// Returns the number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.state().requests.len()
    }

    /// Returns all requests received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state().requests.clone()
    }

    /// Returns the most recent request, if any.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.state().requests.last().cloned()
    }

    /// Wraps a clone of this mock in an [`HttpService`].
    pub fn service(&self) -> HttpService {
        HttpService::new(self.clone())
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A panic inside a test must not hide the recorded requests.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut state = self.state();
        state.requests.push(request.clone());

        match state.replies.pop_front() {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::TransportFailure(message)) => {
                Err(Error::transport().with_message(message))
            }
            None => Err(Error::transport().with_message("no mock reply queued")),
        }
    }
}
