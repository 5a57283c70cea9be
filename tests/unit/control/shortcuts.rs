use super::*;
use crate::config::model::LowerThird;
use crate::store::storage::MemoryStorage;

fn fresh() -> StudioStore<MemoryStorage> {
    StudioStore::open(MemoryStorage::new(), None)
}

#[test]
fn key_bindings_are_case_insensitive() {
    assert_eq!(Action::from_key("h", Focus::None), Some(Action::ToggleUi));
    assert_eq!(Action::from_key("H", Focus::None), Some(Action::ToggleUi));
    assert_eq!(
        Action::from_key("F", Focus::None),
        Some(Action::ToggleFullscreen)
    );
    assert_eq!(Action::from_key("g", Focus::None), Some(Action::ToggleGuides));
    assert_eq!(Action::from_key("l", Focus::None), Some(Action::ToggleLogo));
    assert_eq!(
        Action::from_key("T", Focus::None),
        Some(Action::ToggleTeleprompter)
    );
    assert_eq!(Action::from_key("[", Focus::None), Some(Action::TickerSlower));
    assert_eq!(Action::from_key("]", Focus::None), Some(Action::TickerFaster));
    assert_eq!(
        Action::from_key("4", Focus::None),
        Some(Action::SelectScene(Scene::SoftOrbs))
    );
}

#[test]
fn unbound_keys_are_ignored() {
    for key in ["", "5", "0", "x", "Enter", "hh", "\u{00E9}"] {
        assert_eq!(Action::from_key(key, Focus::None), None, "{key:?}");
    }
}

#[test]
fn text_focus_swallows_shortcuts() {
    assert_eq!(Action::from_key("h", Focus::TextInput), None);
    assert_eq!(Action::from_key("1", Focus::TextArea), None);

    let mut store = fresh();
    assert_eq!(handle_key(&mut store, "g", Focus::TextInput), None);
    assert!(!store.current().show_guides);
    assert_eq!(store.storage().writes(), 1);
}

#[test]
fn toggles_flip_state_and_persist() {
    let mut store = fresh();
    assert_eq!(
        handle_key(&mut store, "g", Focus::None),
        Some(Dispatch::Patched)
    );
    assert!(store.current().show_guides);
    handle_key(&mut store, "G", Focus::None);
    assert!(!store.current().show_guides);

    handle_key(&mut store, "l", Focus::None);
    assert!(!store.current().show_logo);
    handle_key(&mut store, "t", Focus::None);
    assert!(store.current().show_teleprompter);
    handle_key(&mut store, "h", Focus::None);
    assert!(!store.current().show_ui);
    assert_eq!(store.storage().writes(), 6);
}

#[test]
fn fullscreen_leaves_state_alone() {
    let mut store = fresh();
    let before = store.current().clone();
    assert_eq!(
        handle_key(&mut store, "f", Focus::None),
        Some(Dispatch::Fullscreen)
    );
    assert_eq!(store.current(), &before);
    assert_eq!(store.storage().writes(), 1);
}

#[test]
fn number_keys_select_scenes() {
    let mut store = fresh();
    handle_key(&mut store, "3", Focus::None);
    assert_eq!(store.current().scene, 3);
    handle_key(&mut store, "1", Focus::None);
    assert_eq!(store.current().scene, 1);
}

#[test]
fn ticker_speed_steps_within_bounds() {
    let mut store = fresh();
    handle_key(&mut store, "]", Focus::None);
    assert_eq!(store.current().ticker_speed, 45);
    handle_key(&mut store, "[", Focus::None);
    handle_key(&mut store, "[", Focus::None);
    assert_eq!(store.current().ticker_speed, 35);

    for _ in 0..100 {
        handle_key(&mut store, "[", Focus::None);
    }
    assert_eq!(store.current().ticker_speed, 10);
    for _ in 0..100 {
        handle_key(&mut store, "]", Focus::None);
    }
    assert_eq!(store.current().ticker_speed, 200);
}

#[test]
fn panel_helpers() {
    let mut store = fresh();
    handle_key(&mut store, "t", Focus::None);
    close_teleprompter(&mut store);
    assert!(!store.current().show_teleprompter);

    set_lower_third_title(&mut store, "Live");
    set_lower_third_subtitle(&mut store, "Episode 7");
    assert_eq!(
        store.current().lower_third,
        LowerThird::new("Live", "Episode 7")
    );

    hide_ui(&mut store);
    assert!(!store.current().show_ui);
}

#[test]
fn display_names() {
    assert_eq!(Action::ToggleUi.to_string(), "toggle-ui");
    assert_eq!(Action::SelectScene(Scene::NeonNoir).to_string(), "scene-3");
}
