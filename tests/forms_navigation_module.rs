use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use giftdesk::forms::navigation::{
    clamp_selection, form_action_from_key, move_selection, parse_scripted_keys, FormAction,
};

fn key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn forms_navigation_module_maps_core_keys() {
    assert_eq!(
        form_action_from_key(key_event(KeyCode::Up)),
        Some(FormAction::MovePrev)
    );
    assert_eq!(
        form_action_from_key(key_event(KeyCode::Enter)),
        Some(FormAction::Edit)
    );
    assert_eq!(
        form_action_from_key(key_event(KeyCode::Char('s'))),
        Some(FormAction::Submit)
    );
    assert_eq!(
        form_action_from_key(key_event(KeyCode::Esc)),
        Some(FormAction::Cancel)
    );
    assert_eq!(form_action_from_key(key_event(KeyCode::Char('x'))), None);
}

#[test]
fn forms_navigation_module_ctrl_c_cancels() {
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(form_action_from_key(key), Some(FormAction::Cancel));
}

#[test]
fn forms_navigation_module_selection_stays_in_bounds() {
    assert_eq!(move_selection(0, FormAction::MovePrev, 5), 0);
    assert_eq!(move_selection(4, FormAction::MoveNext, 5), 4);
    assert_eq!(move_selection(2, FormAction::MoveNext, 5), 3);
    assert_eq!(clamp_selection(9, 4), 3);
    assert_eq!(clamp_selection(2, 0), 0);
}

#[test]
fn forms_navigation_module_parses_scripted_keys() {
    let keys = parse_scripted_keys("down,down,enter,esc").expect("parse scripted keys");
    let mapped = keys
        .iter()
        .map(|key| form_action_from_key(*key))
        .collect::<Vec<_>>();
    assert_eq!(
        mapped,
        vec![
            Some(FormAction::MoveNext),
            Some(FormAction::MoveNext),
            Some(FormAction::Edit),
            Some(FormAction::Cancel),
        ]
    );
    assert!(parse_scripted_keys("down,warp").is_err());
}
