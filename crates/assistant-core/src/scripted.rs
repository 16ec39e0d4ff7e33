//! Scripted generator - returns canned replies.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::GeneratorError;
use crate::message::ChatMessage;
use crate::trait_def::Generator;

/// A generator that replays a fixed script of replies.
///
/// Useful for testing the interpolation pipeline and the chat endpoint
/// without a model backend. Replies are returned in order; once the
/// script is exhausted the last reply repeats.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<String>>,
    last: Mutex<String>,
}

impl ScriptedGenerator {
    /// Create a generator that replays the given replies in order.
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            last: Mutex::new(String::new()),
        }
    }

    /// Create a generator that always returns the same reply.
    pub fn fixed(reply: impl Into<String>) -> Self {
        let reply = reply.into();
        Self {
            replies: Mutex::new(VecDeque::new()),
            last: Mutex::new(reply),
        }
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    async fn generate(&self, _messages: Vec<ChatMessage>) -> Result<String, GeneratorError> {
        let mut replies = self.replies.lock().await;
        let mut last = self.last.lock().await;
        if let Some(next) = replies.pop_front() {
            *last = next;
        }
        Ok(last.clone())
    }

    fn name(&self) -> &str {
        "ScriptedGenerator"
    }
}
