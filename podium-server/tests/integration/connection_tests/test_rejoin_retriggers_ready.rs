use podium_core::{ClientEvent, RoomId, ServerEvent};

use crate::{connect, create_test_relay, init_tracing};

#[test]
fn ready_fires_again_after_dropping_below_two() {
    init_tracing();

    let relay = create_test_relay();
    let mut c1 = connect(&relay);
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
    c1.drain();
    c2.drain();

    relay.disconnect(&c2.id);
    assert_eq!(c1.next_event(), Some(ServerEvent::UserDisconnected));

    let mut c3 = connect(&relay);
    relay.handle_event(&c3.id, ClientEvent::JoinRoom { room_id: room });

    assert_eq!(c1.next_event(), Some(ServerEvent::UserConnected));
    assert_eq!(c3.next_event(), Some(ServerEvent::UserConnected));
}
