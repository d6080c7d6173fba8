//! Scripted transport for service tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::transport::{ApiRequest, ApiResponse, HttpTransport, TransportError};

/// Replays queued results in order and records every request it sees.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    replies: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn replying(status: u16, body: serde_json::Value) -> Self {
        let mock = Self::default();
        mock.push(Ok(ApiResponse::new(status, body.to_string())));
        mock
    }

    pub(crate) fn failing(error: TransportError) -> Self {
        let mock = Self::default();
        mock.push(Err(error));
        mock
    }

    pub(crate) fn push(&self, reply: Result<ApiResponse, TransportError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}
