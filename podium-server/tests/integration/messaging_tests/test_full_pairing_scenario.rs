use podium_core::{ClientEvent, RoomId, ServerEvent};
use serde_json::json;

use crate::{connect, create_test_relay, init_tracing};

// The whole presenter/controller pairing flow end to end: join, ready
// signal, offer relay, disconnect notification, room teardown.
#[test]
fn two_peers_pair_up_and_tear_down() {
    init_tracing();

    let relay = create_test_relay();
    let mut c1 = connect(&relay);
    let mut c2 = connect(&relay);
    let room = RoomId::from("abc");

    relay.handle_event(
        &c1.id,
        ClientEvent::JoinRoom {
            room_id: room.clone(),
        },
    );
    relay.handle_event(
        &c2.id,
        ClientEvent::JoinRoom {
            room_id: room.clone(),
        },
    );

    assert_eq!(c1.next_event(), Some(ServerEvent::UserConnected));
    assert_eq!(c2.next_event(), Some(ServerEvent::UserConnected));

    let offer = json!({"sdp": "X"});
    relay.handle_event(
        &c1.id,
        ClientEvent::Offer {
            offer: offer.clone(),
            room_id: room.clone(),
        },
    );
    assert_eq!(c2.next_event(), Some(ServerEvent::Offer { offer }));
    assert_eq!(c1.next_event(), None);

    relay.disconnect(&c2.id);
    assert_eq!(c1.next_event(), Some(ServerEvent::UserDisconnected));
    assert_eq!(relay.registry().member_count(&room), 1);

    relay.disconnect(&c1.id);
    assert!(!relay.registry().contains(&room));
}
