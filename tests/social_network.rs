//! SocialNetwork users, friendships and shortest friendship paths.

use std::collections::HashMap;

use graph_walks::engine::SocialNetwork;
use graph_walks::types::{FriendshipStatus, GraphError, UserId, FIRST_USER_ID};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==================== Helper ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Users 1..=4 joined in a line: 1 - 2 - 3 - 4.
fn line_network() -> SocialNetwork {
    let mut network = SocialNetwork::new();
    for name in ["ada", "bo", "cy", "di"] {
        network.add_user(name);
    }
    for (a, b) in [(1, 2), (2, 3), (3, 4)] {
        assert_eq!(network.add_friendship(a, b).unwrap(), FriendshipStatus::Added);
    }
    network
}

// ==================== User Tests ====================

#[test]
fn test_user_ids_sequential() {
    let mut network = SocialNetwork::new();
    let first = network.add_user("ada");
    let second = network.add_user("bo");
    assert_eq!(first, FIRST_USER_ID);
    assert_eq!(second, FIRST_USER_ID + 1);
    assert_eq!(network.user(second).unwrap().name, "bo");
    assert_eq!(network.user_count(), 2);
    assert!(network.user(99).is_none());
}

#[test]
fn test_reset_restarts_ids() {
    let mut network = line_network();
    network.reset();
    assert_eq!(network.user_count(), 0);
    assert_eq!(network.friendship_count(), 0);
    assert_eq!(network.add_user("again"), FIRST_USER_ID);
}

// ==================== Friendship Tests ====================

#[test]
fn test_friendship_is_symmetric() {
    let network = line_network();
    assert_eq!(network.friendship_count(), 3);
    for (a, b) in [(1, 2), (2, 3), (3, 4)] {
        assert!(network.friendships().has_edge(&a, &b));
        assert!(network.friendships().has_edge(&b, &a));
    }
    assert!(network.friends_of(2).unwrap().contains(&1));
    assert!(network.friends_of(2).unwrap().contains(&3));
}

#[test]
fn test_self_friendship_rejected() {
    init_logger();
    let mut network = line_network();
    let status = network.add_friendship(1, 1).unwrap();
    assert_eq!(status, FriendshipStatus::SelfFriendshipRejected);
    assert!(!status.is_added());
    assert!(!network.friendships().has_edge(&1, &1));
    assert_eq!(network.friendship_count(), 3);
}

#[test]
fn test_duplicate_friendship_rejected() {
    let mut network = SocialNetwork::new();
    let a = network.add_user("ada");
    let b = network.add_user("bo");

    assert!(network.add_friendship(a, b).unwrap().is_added());
    let before = network.friendships().adjacency_snapshot();

    assert_eq!(
        network.add_friendship(a, b).unwrap(),
        FriendshipStatus::DuplicateFriendshipRejected
    );
    assert_eq!(
        network.add_friendship(b, a).unwrap(),
        FriendshipStatus::DuplicateFriendshipRejected
    );
    assert_eq!(network.friendships().adjacency_snapshot(), before);
    assert_eq!(network.friendship_count(), 1);
}

#[test]
fn test_friendship_unknown_user() {
    let mut network = line_network();
    assert!(matches!(
        network.add_friendship(1, 42),
        Err(GraphError::UnknownUser(42))
    ));
    assert!(matches!(
        network.friends_of(0),
        Err(GraphError::UnknownUser(0))
    ));
}

// ==================== Shortest Path Tests ====================

#[test]
fn test_shortest_paths_line() {
    let network = line_network();
    let paths = network.shortest_paths_from(1).unwrap();

    let expected: HashMap<UserId, Vec<UserId>> = HashMap::from([
        (1, vec![1]),
        (2, vec![1, 2]),
        (3, vec![1, 2, 3]),
        (4, vec![1, 2, 3, 4]),
    ]);
    assert_eq!(paths, expected);
}

#[test]
fn test_shortest_paths_prefers_shortcut() {
    let mut network = line_network();
    network.add_friendship(1, 4).unwrap();
    let paths = network.shortest_paths_from(1).unwrap();
    assert_eq!(paths[&4], vec![1, 4]);
    assert_eq!(paths[&3].len(), 3);
}

#[test]
fn test_shortest_paths_isolated_user() {
    let mut network = line_network();
    let loner = network.add_user("eve");
    let paths = network.shortest_paths_from(loner).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[&loner], vec![loner]);

    assert!(!network.shortest_paths_from(1).unwrap().contains_key(&loner));
}

#[test]
fn test_shortest_paths_unknown_user() {
    let network = line_network();
    assert!(matches!(
        network.shortest_paths_from(7),
        Err(GraphError::UnknownUser(7))
    ));
}

#[test]
fn test_random_network_paths_are_friend_chains() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut network = SocialNetwork::new();
    for i in 0..30 {
        network.add_user(format!("user {}", i));
    }
    let mut added = 0;
    while added < 40 {
        let a = rng.gen_range(1..=30);
        let b = rng.gen_range(1..=30);
        if network.add_friendship(a, b).unwrap().is_added() {
            added += 1;
        }
    }
    assert_eq!(network.friendship_count(), 40);

    let paths = network.shortest_paths_from(1).unwrap();
    for (user, path) in &paths {
        assert_eq!(path.first(), Some(&1));
        assert_eq!(path.last(), Some(user));
        for pair in path.windows(2) {
            assert!(network.friends_of(pair[0]).unwrap().contains(&pair[1]));
        }
        // Friends sit at most one hop apart from each other
        for friend in network.friends_of(*user).unwrap() {
            assert!(paths[friend].len().abs_diff(path.len()) <= 1);
        }
    }
}

// ==================== Snapshot Tests ====================

#[test]
fn test_snapshot_sorted() {
    let network = line_network();
    let snapshot = network.snapshot();
    let ids: Vec<UserId> = snapshot.users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(snapshot.friendships[&2], vec![1, 3]);
    assert_eq!(snapshot.friendships[&4], vec![3]);
}

#[test]
fn test_snapshot_json() {
    let network = line_network();
    let json = network.to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["users"][0]["name"], "ada");
    assert_eq!(value["friendships"]["3"], serde_json::json!([2, 4]));
}
