//! Deterministic `CompletionGateway` for tests. Never touches the network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatPrompt, CompletionGateway, Credential, LlmError};

pub enum StubReply {
    Text(String),
    ApiError { status: u16, message: String },
    Empty,
}

pub struct StubGateway {
    reply: StubReply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<ChatPrompt>>,
}

impl StubGateway {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(StubReply::Text(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<ChatPrompt> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionGateway for StubGateway {
    async fn complete(
        &self,
        prompt: &ChatPrompt,
        _credential: &Credential,
    ) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.clone());

        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::ApiError { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
            StubReply::Empty => Err(LlmError::EmptyContent),
        }
    }
}
