//! High-level queries built on the directed graph.

pub mod ancestry;
pub mod social;

pub use ancestry::{
    ancestry_graph, earliest_ancestor, earliest_ancestor_in, earliest_ancestor_or_sentinel,
};
pub use social::{NetworkSnapshot, SocialNetwork};
