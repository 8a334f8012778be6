mod conn;
mod directory;
mod peer;
mod room;
mod signaling;

pub use conn::ConnId;
pub use directory::{PeerClientMsg, PeerServerMsg};
pub use peer::PeerId;
pub use room::RoomId;
pub use signaling::{ClientEvent, ServerEvent};
