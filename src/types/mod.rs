//! All data types for the graph-walks library.

pub mod error;
pub mod user;

use std::fmt::Debug;
use std::hash::Hash;

pub use error::{GraphError, GraphResult};
pub use user::{FriendshipStatus, User, UserId};

/// Returned by [`earliest_ancestor_or_sentinel`](crate::engine::earliest_ancestor_or_sentinel)
/// when the queried individual has no recorded parents.
pub const NO_ANCESTOR: i64 = -1;

/// First ID issued by a fresh social network.
pub const FIRST_USER_ID: UserId = 1;

/// Anything usable as a vertex identifier.
pub trait VertexId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> VertexId for T {}

/// An ordered walk: first element is the start, last is the frontier.
pub type Path<V> = Vec<V>;
