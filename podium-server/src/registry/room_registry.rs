use dashmap::DashMap;
use podium_core::{ConnId, RoomId};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Result of a `join`: the member count after the call, and whether the
/// connection was actually inserted (a repeat join of an existing member
/// leaves the set untouched and must not re-trigger the ready signal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
    pub members: usize,
    pub newly_joined: bool,
}

/// In-memory map from room id to the set of connected members.
///
/// A room entry exists iff its member set is non-empty: rooms are created
/// on first join and deleted the moment the last member leaves. All
/// operations take effect under the DashMap shard guard for the room key,
/// so the count a caller observes is consistent with its own mutation.
#[derive(Clone, Default)]
pub struct RoomRegistry {
    rooms: Arc<DashMap<RoomId, HashSet<ConnId>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `conn_id` to `room_id`, creating the room if absent.
    /// Idempotent for an existing member.
    pub fn join(&self, room_id: &RoomId, conn_id: &ConnId) -> JoinOutcome {
        let mut members = self.rooms.entry(room_id.clone()).or_default();
        if members.is_empty() {
            info!("Creating room {}", room_id);
        }
        let newly_joined = members.insert(conn_id.clone());
        JoinOutcome {
            members: members.len(),
            newly_joined,
        }
    }

    /// Removes `conn_id` from `room_id` and returns the remaining member
    /// count. Leaving an unknown room or a room the connection is not in
    /// is a no-op.
    pub fn leave(&self, room_id: &RoomId, conn_id: &ConnId) -> usize {
        let remaining = match self.rooms.get_mut(room_id) {
            Some(mut members) => {
                members.remove(conn_id);
                members.len()
            }
            None => return 0,
        };

        if remaining == 0 {
            self.drop_if_empty(room_id);
        }
        remaining
    }

    /// Removes `conn_id` from every room it belongs to and returns the
    /// affected room ids, so the caller can notify whoever is left.
    pub fn leave_all(&self, conn_id: &ConnId) -> Vec<RoomId> {
        let mut affected = Vec::new();
        for mut entry in self.rooms.iter_mut() {
            if entry.value_mut().remove(conn_id) {
                affected.push(entry.key().clone());
            }
        }

        for room_id in &affected {
            self.drop_if_empty(room_id);
        }
        affected
    }

    /// Snapshot of the current members of a room (empty if absent).
    pub fn members(&self, room_id: &RoomId) -> Vec<ConnId> {
        self.rooms
            .get(room_id)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn member_count(&self, room_id: &RoomId) -> usize {
        self.rooms.get(room_id).map(|m| m.len()).unwrap_or(0)
    }

    pub fn contains(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }

    fn drop_if_empty(&self, room_id: &RoomId) {
        if self
            .rooms
            .remove_if(room_id, |_, members| members.is_empty())
            .is_some()
        {
            info!("Room {} is empty, deleting", room_id);
        }
    }
}
