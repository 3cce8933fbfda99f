//! Author roles for transcript messages.

use serde::{Deserialize, Serialize};

/// Who authored a message.
///
/// The discriminants are stable ordinals, but the JSON form is always the
/// variant name so renumbering never breaks stored transcripts.
///
/// # Examples
///
/// ```
/// use colloquy_core::AuthorRole;
///
/// let role: AuthorRole = "Assistant".parse().unwrap();
/// assert_eq!(role, AuthorRole::Assistant);
/// assert_eq!(role.value(), 2);
/// assert_eq!(AuthorRole::default(), AuthorRole::Unknown);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[repr(i8)]
pub enum AuthorRole {
    /// Role is unset or unrecognised
    #[default]
    Unknown = -1,
    /// A system prompt, written by neither the user nor the model
    System = 0,
    /// The user
    User = 1,
    /// The language model
    Assistant = 2,
}

impl AuthorRole {
    /// Numeric ordinal of the role.
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl TryFrom<i8> for AuthorRole {
    type Error = i8;

    /// Maps an ordinal back to its role, returning the ordinal on failure.
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Unknown),
            0 => Ok(Self::System),
            1 => Ok(Self::User),
            2 => Ok(Self::Assistant),
            other => Err(other),
        }
    }
}
