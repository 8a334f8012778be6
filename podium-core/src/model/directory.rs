use crate::model::peer::PeerId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound messages on the peer-directory endpoint. Both kinds are relayed
/// 1:1 to the target peer; `call` carries media-negotiation handshakes,
/// `connect` arbitrary application data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum PeerClientMsg {
    Connect { to: PeerId, payload: Value },
    Call { to: PeerId, payload: Value },
}

/// Outbound messages on the peer-directory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum PeerServerMsg {
    /// Registration acknowledged; carries the (possibly server-issued) id.
    Open { peer_id: PeerId },
    Connect { from: PeerId, payload: Value },
    Call { from: PeerId, payload: Value },
    /// Registration rejected; sent once before the socket closes.
    Error { message: String },
}
