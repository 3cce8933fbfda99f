//! Chat transcript model for the Colloquy library.
//!
//! A [`ChatHistory`] is an ordered list of [`Message`]s, each tagged with the
//! [`AuthorRole`] that produced it. Histories round-trip through a stable JSON
//! shape:
//!
//! ```json
//! {
//!   "messages": [
//!     { "author_role": "User", "content": "hi" }
//!   ]
//! }
//! ```
//!
//! Roles are always written by name, never by ordinal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod codec;
mod config;
mod history;
mod message;
mod observability;
mod role;

pub use codec::JsonStyle;
pub use config::{ColloquyConfig, ColloquyConfigBuilder};
pub use history::ChatHistory;
pub use message::{Message, MessageBuilder};
pub use observability::{init_tracing, init_tracing_from_config};
pub use role::AuthorRole;
