//! Scripted generation backend for studio tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use storygrid_core::{GenerateRequest, GenerateResponse, Output};
use storygrid_error::{GeminiError, GeminiErrorKind, StoryGridError, StoryGridResult};
use storygrid_interface::GenerationDriver;
use tokio::sync::{oneshot, watch};

/// A single scripted reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// One text part
    Text(String),
    /// One inline image part, optionally preceded by text
    Image { caption: Option<String>, data: Vec<u8> },
    /// Only text, where an image was expected
    TextOnly(String),
    /// A backend failure
    Error(GeminiErrorKind),
}

impl MockResponse {
    pub fn text(text: impl Into<String>) -> Self {
        MockResponse::Text(text.into())
    }

    pub fn image(data: Vec<u8>) -> Self {
        MockResponse::Image {
            caption: None,
            data,
        }
    }

    fn into_result(self) -> StoryGridResult<GenerateResponse> {
        match self {
            MockResponse::Text(text) | MockResponse::TextOnly(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text)],
            }),
            MockResponse::Image { caption, data } => {
                let mut outputs: Vec<Output> = caption.into_iter().map(Output::Text).collect();
                outputs.push(Output::Image {
                    mime: Some("image/png".to_string()),
                    data,
                });
                Ok(GenerateResponse { outputs })
            }
            MockResponse::Error(kind) => Err(StoryGridError::from(GeminiError::new(kind))),
        }
    }
}

struct Scripted {
    response: MockResponse,
    gate: Option<oneshot::Receiver<()>>,
}

/// Mock backend that replays queued responses in order.
///
/// Every request is recorded. A response queued with
/// [`MockDriver::push_held`] is not delivered until its release handle
/// fires, which keeps the caller's operation pending.
pub struct MockDriver {
    queue: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<GenerateRequest>>,
    calls: watch::Sender<usize>,
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDriver {
    pub fn new() -> Self {
        let (calls, _) = watch::channel(0);
        Self {
            queue: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            calls,
        }
    }

    /// Queue a response delivered immediately.
    pub fn push(&self, response: MockResponse) {
        self.queue.lock().unwrap().push_back(Scripted {
            response,
            gate: None,
        });
    }

    /// Queue a response delivered once the returned sender fires.
    pub fn push_held(&self, response: MockResponse) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.queue.lock().unwrap().push_back(Scripted {
            response,
            gate: Some(gate),
        });
        release
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        *self.calls.borrow()
    }

    /// Wait until at least `n` requests have arrived.
    pub async fn wait_for_calls(&self, n: usize) {
        let mut rx = self.calls.subscribe();
        rx.wait_for(|count| *count >= n)
            .await
            .expect("mock driver dropped while waiting");
    }

    /// All requests received, oldest first.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> GenerateRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> StoryGridResult<GenerateResponse> {
        let scripted = {
            self.requests.lock().unwrap().push(req.clone());
            self.queue
                .lock()
                .unwrap()
                .pop_front()
                .expect("mock driver has no response queued")
        };
        self.calls.send_modify(|count| *count += 1);

        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }
        scripted.response.into_result()
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
