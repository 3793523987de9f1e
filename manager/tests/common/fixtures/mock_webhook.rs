//! Mock webhook server for testing fire delivery
//!
//! This simulates a webhook endpoint that receives fire events,
//! allowing tests to verify timers deliver their payloads correctly.

use serde_json::Value;
use std::sync::{Arc, Mutex};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Captured webhook request
#[derive(Debug, Clone)]
pub struct WebhookRequest {
    pub body: Value,
}

/// Mock webhook server that captures fire events
pub struct MockWebhookServer {
    pub server: MockServer,
    captured_requests: Arc<Mutex<Vec<WebhookRequest>>>,
}

impl MockWebhookServer {
    /// Create a new mock webhook server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let captured_requests = Arc::new(Mutex::new(Vec::new()));

        Self {
            server,
            captured_requests,
        }
    }

    /// The URL timers should be configured with
    pub fn webhook_url(&self) -> String {
        format!("{}/webhook", self.server.uri())
    }

    /// Mock successful webhook delivery
    pub async fn mock_success(&self) {
        let requests = self.captured_requests.clone();

        Mock::given(method("POST"))
            .and(path("/webhook"))
            .respond_with(move |req: &Request| {
                if let Ok(body) = req.body_json::<Value>() {
                    requests.lock().unwrap().push(WebhookRequest { body });
                }
                ResponseTemplate::new(200)
            })
            .mount(&self.server)
            .await;
    }

    /// Mock webhook failure
    pub async fn mock_failure(&self, status_code: u16) {
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&self.server)
            .await;
    }

    /// All fire events received so far
    pub fn captured_requests(&self) -> Vec<WebhookRequest> {
        self.captured_requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.captured_requests.lock().unwrap().len()
    }
}
