mod test_full_pairing_scenario;
mod test_relay_preserves_sender_order;
