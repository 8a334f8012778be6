use podium_core::{ConnId, RoomId};
use podium_server::RoomRegistry;

#[test]
fn leaving_twice_is_a_no_op() {
    let registry = RoomRegistry::new();
    let room = RoomId::from("abc");
    let c1 = ConnId::new();
    let c2 = ConnId::new();

    registry.join(&room, &c1);
    registry.join(&room, &c2);

    assert_eq!(registry.leave(&room, &c2), 1);
    assert_eq!(registry.leave(&room, &c2), 1);
    assert_eq!(registry.member_count(&room), 1);
}

#[test]
fn leaving_an_unknown_room_is_a_no_op() {
    let registry = RoomRegistry::new();

    assert_eq!(registry.leave(&RoomId::from("nope"), &ConnId::new()), 0);
    assert!(!registry.contains(&RoomId::from("nope")));
}

#[test]
fn leave_all_for_an_unknown_connection_is_empty() {
    let registry = RoomRegistry::new();
    registry.join(&RoomId::from("abc"), &ConnId::new());

    assert!(registry.leave_all(&ConnId::new()).is_empty());
    assert_eq!(registry.member_count(&RoomId::from("abc")), 1);
}
