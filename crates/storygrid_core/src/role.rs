//! Conversation roles.

use serde::{Deserialize, Serialize};

/// Who authored a message.
///
/// ```
/// use storygrid_core::Role;
///
/// assert_eq!(Role::User.to_string(), "User");
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
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// The person using StoryGrid
    User,
}
