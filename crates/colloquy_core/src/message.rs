//! A single transcript entry.

use crate::AuthorRole;
use serde::{Deserialize, Serialize};

/// One role-tagged unit of chat content.
///
/// # Examples
///
/// ```
/// use colloquy_core::{AuthorRole, Message};
///
/// let mut message = Message::new(AuthorRole::User, "Hello!");
/// assert_eq!(*message.author_role(), AuthorRole::User);
///
/// message.set_content("Hello again!");
/// assert_eq!(message.content(), "Hello again!");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "set_", borrow_self, into)]
#[builder(setter(into))]
pub struct Message {
    /// Who wrote the message
    author_role: AuthorRole,
    /// Message text
    content: String,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(author_role: AuthorRole, content: impl Into<String>) -> Self {
        Self {
            author_role,
            content: content.into(),
        }
    }

    /// Returns a builder for constructing a Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}
