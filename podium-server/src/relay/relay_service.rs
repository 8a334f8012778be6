use crate::registry::RoomRegistry;
use axum::extract::ws::Message;
use dashmap::DashMap;
use podium_core::{ClientEvent, ConnId, RoomId, ServerEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

struct RelayInner {
    conns: DashMap<ConnId, mpsc::UnboundedSender<Message>>,
    registry: RoomRegistry,
}

/// Dispatches inbound signaling events and delivers outbound events to
/// connected clients. Dispatch is synchronous: registry mutations and
/// queue pushes only, so no lock is ever held across network I/O.
#[derive(Clone)]
pub struct RelayService {
    inner: Arc<RelayInner>,
}

impl RelayService {
    pub fn new(registry: RoomRegistry) -> Self {
        Self {
            inner: Arc::new(RelayInner {
                conns: DashMap::new(),
                registry,
            }),
        }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.inner.registry
    }

    pub fn add_conn(&self, conn_id: ConnId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.conns.insert(conn_id, tx);
    }

    pub fn handle_event(&self, conn_id: &ConnId, event: ClientEvent) {
        match event {
            ClientEvent::JoinRoom { room_id } => {
                let outcome = self.inner.registry.join(&room_id, conn_id);
                info!(
                    "{} joined room {} ({} members)",
                    conn_id, room_id, outcome.members
                );

                // Ready signal: fires on the genuine 1 -> 2 transition only,
                // to the whole room including the joiner.
                if outcome.newly_joined && outcome.members == 2 {
                    info!("Room {} has two members, notifying", room_id);
                    self.broadcast(&room_id, &ServerEvent::UserConnected, None);
                }
            }
            ClientEvent::Offer { offer, room_id } => {
                self.broadcast(&room_id, &ServerEvent::Offer { offer }, Some(conn_id));
            }
            ClientEvent::Answer { answer, room_id } => {
                self.broadcast(&room_id, &ServerEvent::Answer { answer }, Some(conn_id));
            }
            ClientEvent::IceCandidate { candidate, room_id } => {
                self.broadcast(
                    &room_id,
                    &ServerEvent::IceCandidate { candidate },
                    Some(conn_id),
                );
            }
        }
    }

    /// Cleanup path shared by voluntary close and transport error: drop the
    /// outbound queue, leave every room, and tell whoever is left.
    pub fn disconnect(&self, conn_id: &ConnId) {
        self.inner.conns.remove(conn_id);

        for room_id in self.inner.registry.leave_all(conn_id) {
            // Emptied rooms are already gone; broadcasting to them is a no-op.
            self.broadcast(&room_id, &ServerEvent::UserDisconnected, None);
        }
    }

    fn broadcast(&self, room_id: &RoomId, event: &ServerEvent, skip: Option<&ConnId>) {
        let json = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize server event: {}", e);
                return;
            }
        };

        for member in self.inner.registry.members(room_id) {
            if skip.is_some_and(|sender| sender == &member) {
                continue;
            }
            let Some(conn) = self.inner.conns.get(&member) else {
                warn!(
                    "Room {} lists {} but it has no live connection",
                    room_id, member
                );
                continue;
            };
            if conn.send(Message::Text(json.clone().into())).is_err() {
                warn!("Failed to queue event for {}", member);
            }
        }
    }
}
