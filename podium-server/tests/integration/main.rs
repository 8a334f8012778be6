mod messaging_tests;
mod registry_tests;
mod utils;

use tracing::Level;

use podium_server::{RelayService, RoomRegistry};

use crate::utils::FakeConn;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_relay() -> RelayService {
    RelayService::new(RoomRegistry::new())
}

/// Registers a fake client with the relay, standing in for an accepted
/// WebSocket connection.
pub fn connect(relay: &RelayService) -> FakeConn {
    let conn = FakeConn::new();
    relay.add_conn(conn.id.clone(), conn.sender());
    conn
}
