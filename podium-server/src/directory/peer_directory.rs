use axum::extract::ws::Message;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use podium_core::{PeerId, PeerServerMsg};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, warn};

#[derive(Debug, Error, PartialEq)]
pub enum DirectoryError {
    #[error("peer id '{0}' is already registered")]
    DuplicateId(PeerId),
}

/// Point-to-point sibling of the room registry: a map from peer id to an
/// open connection's outbound queue. Messages addressed to an id are
/// forwarded 1:1; there is no delivery confirmation.
#[derive(Clone, Default)]
pub struct PeerDirectory {
    peers: Arc<DashMap<PeerId, mpsc::UnboundedSender<Message>>>,
}

impl PeerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `peer_id` to a connection. Rejected while the id is held by a
    /// live connection; a binding whose channel has closed is reclaimed.
    pub fn register(
        &self,
        peer_id: PeerId,
        tx: mpsc::UnboundedSender<Message>,
    ) -> Result<(), DirectoryError> {
        match self.peers.entry(peer_id.clone()) {
            Entry::Occupied(mut occupied) => {
                if !occupied.get().is_closed() {
                    return Err(DirectoryError::DuplicateId(peer_id));
                }
                occupied.insert(tx);
                Ok(())
            }
            Entry::Vacant(vacant) => {
                vacant.insert(tx);
                Ok(())
            }
        }
    }

    /// Removes the binding for `peer_id` if it still points at `tx`'s
    /// channel. Idempotent, and a late cleanup cannot evict a successor
    /// that reclaimed the id.
    pub fn unregister(&self, peer_id: &PeerId, tx: &mpsc::UnboundedSender<Message>) {
        self.peers
            .remove_if(peer_id, |_, current| current.same_channel(tx));
    }

    /// Outbound queue bound to `peer_id`, if any.
    pub fn lookup(&self, peer_id: &PeerId) -> Option<mpsc::UnboundedSender<Message>> {
        self.peers.get(peer_id).map(|peer| peer.value().clone())
    }

    /// Forwards a message to `to`. An unknown or dead target is logged and
    /// dropped; the originator gets no error.
    pub fn send(&self, to: &PeerId, msg: &PeerServerMsg) {
        let json = match serde_json::to_string(msg) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize directory message: {}", e);
                return;
            }
        };

        let Some(peer) = self.lookup(to) else {
            warn!("Dropping message for unknown peer {}", to);
            return;
        };
        if peer.send(Message::Text(json.into())).is_err() {
            warn!("Failed to queue message for peer {}", to);
        }
    }
}
