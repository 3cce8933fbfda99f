//! JSON codec for chat histories.
//!
//! The wire shape is fixed independently of the in-memory field names:
//! a top-level object with a `messages` array whose entries carry
//! `author_role` (the role name) and `content`.

use crate::{AuthorRole, ChatHistory, Message};
use colloquy_error::{ChatHistoryError, ChatHistoryErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

const MESSAGES: &str = "messages";
const AUTHOR_ROLE: &str = "author_role";
const CONTENT: &str = "content";

/// Output layout for encoded histories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonStyle {
    /// Two-space indented, one field per line (default)
    #[default]
    Pretty,
    /// Single line, no insignificant whitespace
    Compact,
}

#[instrument(skip_all, fields(message_count = history.len(), style = ?style))]
pub(crate) fn encode(history: &ChatHistory, style: JsonStyle) -> String {
    let messages = history.iter().map(encode_message).collect();

    let mut root = Map::new();
    root.insert(MESSAGES.to_string(), Value::Array(messages));
    let root = Value::Object(root);

    let encoded = match style {
        JsonStyle::Pretty => format!("{:#}", root),
        JsonStyle::Compact => root.to_string(),
    };
    debug!(bytes = encoded.len(), "Encoded chat history");
    encoded
}

fn encode_message(message: &Message) -> Value {
    let mut fields = Map::new();
    fields.insert(
        AUTHOR_ROLE.to_string(),
        Value::String(message.author_role().to_string()),
    );
    fields.insert(CONTENT.to_string(), Value::String(message.content().clone()));
    Value::Object(fields)
}

#[instrument(skip_all, fields(input_len = json.len()))]
pub(crate) fn decode(json: &str) -> Result<ChatHistory, ChatHistoryError> {
    let root: Value = serde_json::from_str(json).map_err(|e| {
        debug!(error = %e, "Chat history is not valid JSON");
        ChatHistoryError::new(ChatHistoryErrorKind::MalformedJson(e.to_string()))
    })?;

    let mut root = match root {
        Value::Object(root) => root,
        other => {
            return Err(schema_mismatch(format!(
                "expected an object at top level, found {}",
                type_name(&other)
            )));
        }
    };

    let entries = match root.remove(MESSAGES) {
        None => Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(schema_mismatch(format!(
                "`{}` must be an array, found {}",
                MESSAGES,
                type_name(&other)
            )));
        }
    };

    let messages = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| decode_message(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(message_count = messages.len(), "Decoded chat history");
    Ok(ChatHistory::from(messages))
}

fn decode_message(index: usize, entry: &Value) -> Result<Message, ChatHistoryError> {
    let Value::Object(fields) = entry else {
        return Err(schema_mismatch(format!(
            "message {} must be an object, found {}",
            index,
            type_name(entry)
        )));
    };

    let role_name = string_field(index, fields, AUTHOR_ROLE)?;
    let author_role = role_name.parse::<AuthorRole>().map_err(|_| {
        debug!(index, role = role_name, "Rejected unknown author role");
        ChatHistoryError::new(ChatHistoryErrorKind::UnknownRoleName(role_name.to_string()))
    })?;
    let content = string_field(index, fields, CONTENT)?;

    Ok(Message::new(author_role, content))
}

fn string_field<'a>(
    index: usize,
    fields: &'a Map<String, Value>,
    name: &str,
) -> Result<&'a str, ChatHistoryError> {
    match fields.get(name) {
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(schema_mismatch(format!(
            "message {} field `{}` must be a string, found {}",
            index,
            name,
            type_name(other)
        ))),
        None => Err(schema_mismatch(format!(
            "message {} is missing field `{}`",
            index, name
        ))),
    }
}

#[track_caller]
fn schema_mismatch(detail: String) -> ChatHistoryError {
    debug!(%detail, "Chat history does not match the expected shape");
    ChatHistoryError::new(ChatHistoryErrorKind::SchemaMismatch(detail))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
