//! Ordered conversation transcripts.

use crate::{AuthorRole, ColloquyConfig, JsonStyle, Message, codec};
use colloquy_error::ColloquyResult;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// An ordered conversation transcript.
///
/// Messages are kept in the order they were added. Nothing here removes or
/// reorders them.
///
/// # Examples
///
/// ```
/// use colloquy_core::{AuthorRole, ChatHistory};
///
/// let mut history = ChatHistory::new();
/// history.add_message(AuthorRole::System, "You are terse.");
/// history.add_message(AuthorRole::User, "hi");
///
/// let restored = ChatHistory::from_json(&history.to_json()).unwrap();
/// assert_eq!(restored, history);
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct ChatHistory {
    /// Messages in conversation order
    #[serde(default)]
    messages: Vec<Message>,
}

impl ChatHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history holding copies of `messages`, in the same order.
    ///
    /// Later changes to the caller's messages do not reach the history.
    pub fn from_messages(messages: &[Message]) -> Self {
        Self {
            messages: messages.to_vec(),
        }
    }

    /// Appends a message to the end of the transcript.
    pub fn add_message(&mut self, author_role: AuthorRole, content: impl Into<String>) {
        self.messages.push(Message::new(author_role, content));
        trace!(
            role = %author_role,
            message_count = self.messages.len(),
            "Appended message"
        );
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recently added message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Iterates messages oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Encodes the history as indented JSON.
    pub fn to_json(&self) -> String {
        self.to_json_with_style(JsonStyle::Pretty)
    }

    /// Encodes the history with the given layout.
    pub fn to_json_with_style(&self, style: JsonStyle) -> String {
        codec::encode(self, style)
    }

    /// Encodes the history with the layout named in `config`.
    pub fn to_json_with_config(&self, config: &ColloquyConfig) -> String {
        self.to_json_with_style(*config.json_style())
    }

    /// Decodes a history from JSON.
    ///
    /// Decoding is all-or-nothing: the first bad message fails the whole
    /// call. A missing `messages` key yields an empty history.
    ///
    /// # Errors
    ///
    /// Returns a [`colloquy_error::ChatHistoryError`] when the text is not
    /// JSON, is not shaped like a history, or names an unknown role.
    pub fn from_json(json: &str) -> ColloquyResult<Self> {
        Ok(codec::decode(json)?)
    }
}

impl From<Vec<Message>> for ChatHistory {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl FromIterator<Message> for ChatHistory {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl Extend<Message> for ChatHistory {
    fn extend<I: IntoIterator<Item = Message>>(&mut self, iter: I) {
        self.messages.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ChatHistory {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
