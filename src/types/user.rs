//! Social network members and friendship outcomes.

use serde::Serialize;

/// Identifier handed out by [`SocialNetwork::add_user`](crate::engine::SocialNetwork::add_user).
pub type UserId = u64;

/// A member of a social network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Sequential ID assigned at creation.
    pub id: UserId,
    /// Display name.
    pub name: String,
}

impl User {
    /// Create a user with the given ID and name.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Outcome of an attempt to add a friendship.
///
/// Rejections are expected while populating a network, so they are reported
/// as a status rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FriendshipStatus {
    /// Both directions were inserted.
    Added,
    /// A user cannot befriend themself.
    SelfFriendshipRejected,
    /// The two users are already friends.
    DuplicateFriendshipRejected,
}

impl FriendshipStatus {
    /// Whether the friendship was actually created.
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added)
    }

    /// Return a human-readable name for this status.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::SelfFriendshipRejected => "self_friendship_rejected",
            Self::DuplicateFriendshipRejected => "duplicate_friendship_rejected",
        }
    }
}
