//! Social network — users joined by symmetric friendships.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, warn};
use serde::Serialize;

use crate::graph::traversal::bfs_all_paths;
use crate::graph::DirectedGraph;
use crate::types::{FriendshipStatus, GraphError, GraphResult, Path, User, UserId, FIRST_USER_ID};

/// Users plus an undirected friendship relation stored as a symmetric
/// directed graph.
#[derive(Debug, Clone)]
pub struct SocialNetwork {
    /// All users, indexed by ID.
    users: HashMap<UserId, User>,
    /// Friendships; every edge has its mirror.
    friendships: DirectedGraph<UserId>,
    /// Next ID to hand out.
    next_id: UserId,
}

/// Serializable view of a network with users and friend lists sorted by ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSnapshot {
    /// Users in ID order.
    pub users: Vec<User>,
    /// User ID -> friend IDs, ascending.
    pub friendships: BTreeMap<UserId, Vec<UserId>>,
}

impl SocialNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            friendships: DirectedGraph::new(),
            next_id: FIRST_USER_ID,
        }
    }

    /// Drop every user and friendship; IDs restart from [`FIRST_USER_ID`].
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of friendships (each pair counted once).
    pub fn friendship_count(&self) -> usize {
        self.friendships.edge_count() / 2
    }

    /// Get a user by ID.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// The underlying friendship graph.
    pub fn friendships(&self) -> &DirectedGraph<UserId> {
        &self.friendships
    }

    /// Create a user with the next sequential ID.
    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        let id = self.next_id;
        self.next_id += 1;
        self.users.insert(id, User::new(id, name));
        self.friendships.add_vertex(id);
        id
    }

    /// Friends of a user.
    pub fn friends_of(&self, id: UserId) -> GraphResult<&HashSet<UserId>> {
        self.ensure_user(id)?;
        self.friendships.neighbors(&id)
    }

    /// Befriend two users in both directions.
    ///
    /// Self-friendships and repeated friendships are rejected without touching
    /// the relation.
    pub fn add_friendship(
        &mut self,
        user_id: UserId,
        friend_id: UserId,
    ) -> GraphResult<FriendshipStatus> {
        self.ensure_user(user_id)?;
        self.ensure_user(friend_id)?;

        if user_id == friend_id {
            warn!("user {} cannot befriend themself", user_id);
            return Ok(FriendshipStatus::SelfFriendshipRejected);
        }
        if self.friendships.has_edge(&user_id, &friend_id)
            || self.friendships.has_edge(&friend_id, &user_id)
        {
            warn!("users {} and {} are already friends", user_id, friend_id);
            return Ok(FriendshipStatus::DuplicateFriendshipRejected);
        }

        self.friendships.add_edge(user_id, friend_id)?;
        self.friendships.add_edge(friend_id, user_id)?;
        Ok(FriendshipStatus::Added)
    }

    /// Shortest friendship path from `user_id` to everyone in their extended
    /// network, the user included.
    pub fn shortest_paths_from(
        &self,
        user_id: UserId,
    ) -> GraphResult<HashMap<UserId, Path<UserId>>> {
        self.ensure_user(user_id)?;
        let paths = bfs_all_paths(&self.friendships, &user_id)?;
        debug!(
            "user {} reaches {} of {} users",
            user_id,
            paths.len(),
            self.users.len()
        );
        Ok(paths)
    }

    /// Sorted, serializable copy of the network.
    pub fn snapshot(&self) -> NetworkSnapshot {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        let friendships = self
            .friendships
            .adjacency_snapshot()
            .into_iter()
            .map(|(id, friends)| (id, friends.into_iter().collect()))
            .collect();
        NetworkSnapshot { users, friendships }
    }

    /// Pretty-printed JSON of [`snapshot`](Self::snapshot).
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    fn ensure_user(&self, id: UserId) -> GraphResult<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::UnknownUser(id))
        }
    }
}

impl Default for SocialNetwork {
    fn default() -> Self {
        Self::new()
    }
}
