use commsdeck_core::{ConsoleEvent, ConsoleModel, ConsoleStateUpdate, RawLocale};

fn granted_model(max_len: usize) -> ConsoleModel {
    let mut model = ConsoleModel::new(max_len);
    model.apply(ConsoleStateUpdate::all_permissions(true));
    model
}

#[test]
fn new_model_denies_everything() {
    let model = ConsoleModel::new(256);
    assert!(!model.announce_enabled());
    assert!(!model.broadcast_enabled());
    assert!(!model.call_enabled());
    assert!(!model.alert_selectable());
    assert!(!model.countdown_started());
    assert!(model.alert_options().is_empty());
}

#[test]
fn announce_disabled_without_permission_regardless_of_length() {
    let mut model = ConsoleModel::new(10);
    model.message = "hi".to_string();
    assert!(!model.announce_enabled());

    model.apply(ConsoleStateUpdate {
        can_announce: Some(true),
        ..Default::default()
    });
    assert!(model.announce_enabled());
}

#[test]
fn announce_disabled_when_message_exceeds_limit() {
    let mut model = granted_model(5);
    model.message = "12345".to_string();
    assert!(!model.message_too_long());
    assert!(model.announce_enabled());

    model.message = "123456".to_string();
    assert!(model.message_too_long());
    assert!(!model.announce_enabled());
}

#[test]
fn length_limit_counts_chars_not_bytes() {
    let mut model = granted_model(4);
    model.message = "äöüß".to_string(); // 4 chars, 8 bytes
    assert!(!model.message_too_long());
    assert!(model.announce_enabled());
}

#[test]
fn broadcast_is_not_length_gated() {
    let mut model = granted_model(3);
    model.message = "way past the limit".to_string();
    assert!(!model.announce_enabled());
    assert!(model.broadcast_enabled());
}

#[test]
fn press_announce_emits_current_buffer() {
    let mut model = granted_model(256);
    model.message = "all hands to stations".to_string();

    let mut events = Vec::new();
    model.press_announce(&mut events);
    assert_eq!(
        events,
        vec![ConsoleEvent::Announce("all hands to stations".to_string())]
    );

    // Pressing again without a text change repeats the identical payload.
    model.press_announce(&mut events);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], events[1]);
}

#[test]
fn press_broadcast_emits_current_buffer() {
    let mut model = granted_model(256);
    model.message = "short message".to_string();

    let mut events = Vec::new();
    model.press_broadcast(&mut events);
    assert_eq!(
        events,
        vec![ConsoleEvent::Broadcast("short message".to_string())]
    );
}

#[test]
fn administrative_presses_emit_payloadless_events() {
    let model = granted_model(256);
    let mut events = Vec::new();
    model.press_shuttle(&mut events);
    model.press_maintenance(&mut events);
    model.press_centcomm(&mut events);
    assert_eq!(
        events,
        vec![
            ConsoleEvent::EmergencyShuttle,
            ConsoleEvent::Maintenance,
            ConsoleEvent::CentComm,
        ]
    );
}

#[test]
fn locked_alert_renders_single_option() {
    let mut model = ConsoleModel::new(256);
    model.update_alert_levels(None, "red", &RawLocale);

    assert_eq!(model.alert_options().len(), 1);
    assert_eq!(model.alert_options()[0].id, "red");
    // RawLocale has no catalog, so the label falls back to the raw id.
    assert_eq!(model.alert_options()[0].label, "red");
    assert_eq!(model.selected_alert(), Some(0));
    assert_eq!(model.current_level(), "red");
}

#[test]
fn alert_list_renders_in_order_with_current_selected() {
    let mut model = ConsoleModel::new(256);
    let levels: Vec<String> = ["green", "blue", "red"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    model.update_alert_levels(Some(&levels), "blue", &RawLocale);

    let ids: Vec<&str> = model.alert_options().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["green", "blue", "red"]);
    assert_eq!(model.selected_alert(), Some(1));
}

#[test]
fn current_level_missing_from_list_selects_nothing() {
    let mut model = ConsoleModel::new(256);
    let levels: Vec<String> = ["green", "blue"].iter().map(|s| s.to_string()).collect();
    model.update_alert_levels(Some(&levels), "delta", &RawLocale);

    assert_eq!(model.alert_options().len(), 2);
    assert_eq!(model.selected_alert(), None);
}

#[test]
fn update_alert_levels_replaces_previous_options() {
    let mut model = ConsoleModel::new(256);
    let first: Vec<String> = ["green", "blue", "red"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    model.update_alert_levels(Some(&first), "green", &RawLocale);
    model.update_alert_levels(None, "gamma", &RawLocale);

    assert_eq!(model.alert_options().len(), 1);
    assert_eq!(model.alert_options()[0].id, "gamma");
}

#[test]
fn select_alert_emits_raw_id_not_label() {
    struct FancyLocale;
    impl commsdeck_core::Localize for FancyLocale {
        fn t(&self, key: &str) -> String {
            key.to_string()
        }
        fn try_t(&self, key: &str) -> Option<String> {
            Some(format!("Translated {key}"))
        }
        fn t_args(&self, key: &str, _args: &[(&str, &str)]) -> String {
            key.to_string()
        }
    }

    let mut model = ConsoleModel::new(256);
    let levels: Vec<String> = ["green", "red"].iter().map(|s| s.to_string()).collect();
    model.update_alert_levels(Some(&levels), "green", &FancyLocale);
    assert_eq!(model.alert_options()[1].label, "Translated alert-level-red");

    let mut events = Vec::new();
    model.select_alert(1, &mut events);
    assert_eq!(events, vec![ConsoleEvent::AlertLevel("red".to_string())]);
    assert_eq!(model.selected_alert(), Some(1));
}

#[test]
fn select_alert_out_of_range_is_a_no_op() {
    let mut model = ConsoleModel::new(256);
    let levels: Vec<String> = ["green"].iter().map(|s| s.to_string()).collect();
    model.update_alert_levels(Some(&levels), "green", &RawLocale);

    let mut events = Vec::new();
    model.select_alert(7, &mut events);
    assert!(events.is_empty());
    assert_eq!(model.selected_alert(), Some(0));
}

#[test]
fn update_calls_emit_no_events() {
    use commsdeck_core::FixedClock;
    use std::time::Duration;

    let mut model = granted_model(256);
    let mut events = Vec::new();

    model.update_alert_levels(None, "green", &RawLocale);
    model.apply(ConsoleStateUpdate {
        countdown_started: Some(true),
        countdown_end: Some(Some(Duration::from_secs(600))),
        ..Default::default()
    });
    model.update_countdown(&FixedClock(Duration::from_secs(0)), &RawLocale);

    assert!(events.is_empty());
    // Interaction still works after updates.
    model.press_centcomm(&mut events);
    assert_eq!(events, vec![ConsoleEvent::CentComm]);
}

#[test]
fn state_update_round_trips_through_serde() {
    use std::time::Duration;

    let update = ConsoleStateUpdate {
        can_announce: Some(true),
        countdown_end: Some(Some(Duration::from_secs(90))),
        current_level: Some("violet".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_string(&update).expect("serialize update");
    let back: ConsoleStateUpdate = serde_json::from_str(&json).expect("deserialize update");
    assert_eq!(update, back);
}
