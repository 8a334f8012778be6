use podium_core::{ClientEvent, RoomId, ServerEvent};
use serde_json::json;

use crate::{connect, create_test_relay, init_tracing};

#[test]
fn candidates_from_one_sender_arrive_in_order() {
    init_tracing();

    let relay = create_test_relay();
    let c1 = connect(&relay);
    let mut c2 = connect(&relay);
    let room = RoomId::from("abc");

    for conn in [&c1, &c2] {
        relay.handle_event(
            &conn.id,
            ClientEvent::JoinRoom {
                room_id: room.clone(),
            },
        );
    }
    c2.drain();

    let count = 10;
    for i in 0..count {
        relay.handle_event(
            &c1.id,
            ClientEvent::IceCandidate {
                candidate: json!({"seq": i}),
                room_id: room.clone(),
            },
        );
    }

    for i in 0..count {
        assert_eq!(
            c2.next_event(),
            Some(ServerEvent::IceCandidate {
                candidate: json!({"seq": i}),
            }),
            "candidate {} arrived out of order",
            i
        );
    }
    assert_eq!(c2.next_event(), None);
}
