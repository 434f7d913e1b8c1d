use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AssistantError, AssistantResult};
use crate::rules::{Intent, RuleBook};

/// Longest message the chat box accepts
pub const MAX_MESSAGE_CHARS: usize = 1000;

pub const WELCOME_MESSAGE: &str = "Hi! I'm the CareDesk assistant. Ask me about appointments, refills, test results, billing or office hours.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
}

/// One user message and the answer it got
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub id: Uuid,
    pub user_message: String,
    pub reply: Reply,
    pub at: DateTime<Utc>,
}

/// Scripted chat assistant
///
/// Keeps a transcript for display only; replies never depend on it.
#[derive(Debug, Clone)]
pub struct Assistant {
    rules: RuleBook,
    typing_delay: Duration,
    transcript: Vec<Exchange>,
}

impl Assistant {
    pub fn new(rules: RuleBook) -> Self {
        Self {
            rules,
            typing_delay: Duration::ZERO,
            transcript: Vec::new(),
        }
    }

    /// Simulated "assistant is typing" pause used by [`Assistant::respond`]
    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    pub fn welcome(&self) -> &'static str {
        WELCOME_MESSAGE
    }

    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    fn check(input: &str) -> AssistantResult<&str> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AssistantError::EmptyMessage);
        }
        let length = trimmed.chars().count();
        if length > MAX_MESSAGE_CHARS {
            return Err(AssistantError::MessageTooLong(length, MAX_MESSAGE_CHARS));
        }
        Ok(trimmed)
    }

    /// Answer immediately
    pub fn reply(&mut self, input: &str) -> AssistantResult<Reply> {
        let message = Self::check(input)?;
        let (intent, text) = self.rules.answer(message);
        let reply = Reply {
            intent,
            text: text.to_string(),
        };

        debug!(?intent, "assistant matched rule");

        self.transcript.push(Exchange {
            id: Uuid::new_v4(),
            user_message: message.to_string(),
            reply: reply.clone(),
            at: Utc::now(),
        });
        Ok(reply)
    }

    /// Answer after the typing delay
    pub async fn respond(&mut self, input: &str) -> AssistantResult<Reply> {
        Self::check(input)?;
        if !self.typing_delay.is_zero() {
            tokio::time::sleep(self.typing_delay).await;
        }
        self.reply(input)
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(RuleBook::default_rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_message_rejected() {
        let mut assistant = Assistant::default();
        assert_eq!(assistant.reply("   "), Err(AssistantError::EmptyMessage));
        assert!(assistant.transcript().is_empty());
    }

    #[test]
    fn test_long_message_rejected() {
        let mut assistant = Assistant::default();
        let long = "a".repeat(MAX_MESSAGE_CHARS + 1);
        assert_eq!(
            assistant.reply(&long),
            Err(AssistantError::MessageTooLong(MAX_MESSAGE_CHARS + 1, MAX_MESSAGE_CHARS))
        );
    }

    #[test]
    fn test_transcript_records_trimmed_message() {
        let mut assistant = Assistant::default();
        assistant.reply("  hello  ").unwrap();
        assert_eq!(assistant.transcript().len(), 1);
        assert_eq!(assistant.transcript()[0].user_message, "hello");
        assert_eq!(assistant.transcript()[0].reply.intent, Intent::Greeting);

        assistant.clear_transcript();
        assert!(assistant.transcript().is_empty());
    }
}
