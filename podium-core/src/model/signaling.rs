use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound events on the room-signaling endpoint. Offer/answer/candidate
/// payloads are opaque to the relay and forwarded verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ClientEvent {
    JoinRoom {
        room_id: RoomId,
    },
    Offer {
        offer: Value,
        room_id: RoomId,
    },
    Answer {
        answer: Value,
        room_id: RoomId,
    },
    IceCandidate {
        candidate: Value,
        room_id: RoomId,
    },
}

/// Outbound events on the room-signaling endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    /// The room reached two members and is ready for negotiation.
    UserConnected,
    /// A member of the room dropped its connection.
    UserDisconnected,
    Offer { offer: Value },
    Answer { answer: Value },
    IceCandidate { candidate: Value },
}
