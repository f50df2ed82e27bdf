//! Chat transcript between a guest and the concierge.
//!
//! Every message, from either side, is rendered through the same line and
//! inline pipeline as a standalone reply.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::block::Block;
use crate::config::Config;
use crate::error::Error;
use crate::parser;
use crate::render::{Node, render_blocks};

/// Opening message of every conversation.
pub const GREETING: &str =
    "Namaste! I am Mero Support. How can I assist you with your booking today?";

/// Reply used when hotel data could not be loaded.
pub const FALLBACK_REPLY: &str = "I'm having trouble connecting to the hotel database right now. Please contact the front desk directly for assistance.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    #[serde(alias = "ai")]
    Concierge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn concierge(text: impl Into<String>) -> Self {
        Self {
            role: Role::Concierge,
            text: text.into(),
        }
    }

    pub fn blocks(&self, config: &Config) -> Vec<Block> {
        crate::parse_with_config(&self.text, config)
    }

    pub fn nodes(&self, config: &Config) -> Vec<Node> {
        render_blocks(self.blocks(config), config)
    }
}

/// Ordered conversation, oldest message first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// A conversation holding only the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::concierge(GREETING)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a guest message. Blank input is ignored and returns `false`.
    pub fn push_user(&mut self, text: &str) -> bool {
        if parser::trim(text).is_empty() {
            return false;
        }
        self.messages.push(Message::user(text));
        true
    }

    pub fn push_reply(&mut self, text: impl Into<String>) {
        self.messages.push(Message::concierge(text));
    }

    pub fn push_fallback(&mut self) {
        debug!("hotel data unavailable, answering with fallback");
        self.push_reply(FALLBACK_REPLY);
    }

    /// Drop the conversation and start over from the greeting.
    pub fn reset(&mut self) {
        debug!(discarded = self.messages.len(), "resetting transcript");
        *self = Self::new();
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
