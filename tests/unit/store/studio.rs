use super::*;
use crate::config::model::{LowerThird, Resolution};
use crate::foundation::color::HexColor;
use crate::store::storage::MemoryStorage;

fn stored(json: &str) -> MemoryStorage {
    MemoryStorage::with_entry(STORAGE_KEY, json)
}

fn persisted(store: &StudioStore<MemoryStorage>) -> StudioConfig {
    let raw = store.storage().get(STORAGE_KEY).unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn empty_everything_yields_defaults_and_persists_them() {
    let store = StudioStore::open(MemoryStorage::new(), None);
    assert_eq!(store.origin(), InitSource::Defaults);
    assert_eq!(store.current(), &StudioConfig::default());
    assert_eq!(store.storage().writes(), 1);
    assert_eq!(persisted(&store), StudioConfig::default());
}

#[test]
fn storage_layer_is_merged_over_defaults() {
    let store = StudioStore::open(stored(r#"{"scene":2,"intensity":10}"#), None);
    assert_eq!(store.origin(), InitSource::Storage);
    assert_eq!(store.current().scene, 2);
    assert_eq!(store.current().intensity, 10);
    assert_eq!(store.current().ticker_speed, 40);
}

#[test]
fn fragment_wins_over_storage() {
    let mut shared = StudioConfig::default();
    shared.scene = 3;
    shared.ticker_text = "from the link".to_owned();
    let token = codec::encode(&shared);

    let store = StudioStore::open(
        stored(r#"{"scene":2,"tickerText":"from storage","intensity":5}"#),
        Some(&token),
    );
    assert_eq!(store.origin(), InitSource::Fragment);
    assert_eq!(store.current().scene, 3);
    assert_eq!(store.current().ticker_text, "from the link");
    // Storage is not layered underneath a fragment snapshot.
    assert_eq!(store.current().intensity, 65);
}

#[test]
fn bad_fragment_falls_through_to_storage() {
    let store = StudioStore::open(stored(r#"{"scene":4}"#), Some("%%%garbage"));
    assert_eq!(store.origin(), InitSource::Storage);
    assert_eq!(store.current().scene, 4);
}

#[test]
fn empty_fragment_is_absent() {
    let store = StudioStore::open(stored(r#"{"scene":4}"#), Some("#"));
    assert_eq!(store.origin(), InitSource::Storage);
}

#[test]
fn malformed_storage_falls_back_to_defaults() {
    for raw in ["{not json", "42", "null", "[]"] {
        let store = StudioStore::open(stored(raw), None);
        assert_eq!(store.origin(), InitSource::Defaults, "{raw}");
        assert_eq!(store.current(), &StudioConfig::default());
    }
}

#[test]
fn one_odd_field_does_not_discard_the_stored_state() {
    let store = StudioStore::open(
        stored(r#"{"scene":2,"tickerText":"my show","intensity":50.5}"#),
        None,
    );
    assert_eq!(store.origin(), InitSource::Storage);
    assert_eq!(store.current().scene, 2);
    assert_eq!(store.current().ticker_text, "my show");
    assert_eq!(store.current().intensity, 51);
    // The write-back on open keeps the user's state.
    assert_eq!(persisted(&store).scene, 2);
    assert_eq!(persisted(&store).ticker_text, "my show");
}

#[test]
fn wrong_typed_stored_field_falls_back_to_its_default_only() {
    let store = StudioStore::open(stored(r#"{"scene":3,"intensity":"high"}"#), None);
    assert_eq!(store.origin(), InitSource::Storage);
    assert_eq!(store.current().scene, 3);
    assert_eq!(store.current().intensity, 65);
}

#[test]
fn fragment_with_float_and_huge_numbers_still_wins() {
    use base64::Engine as _;

    for json in [
        r##"{"scene":3,"accentColor":"#112233","intensity":1e3}"##,
        r##"{"scene":3,"accentColor":"#112233","intensity":99999999999999999999}"##,
    ] {
        let token = base64::engine::general_purpose::STANDARD.encode(json);
        let store = StudioStore::open(stored(r#"{"scene":2}"#), Some(&token));
        assert_eq!(store.origin(), InitSource::Fragment, "{json}");
        assert_eq!(store.current().scene, 3);
        assert_eq!(store.current().accent_color.as_str(), "#112233");
        assert_eq!(store.current().intensity, 100);
    }
}

#[test]
fn snapshot_with_both_color_spellings_is_kept() {
    let store = StudioStore::open(
        stored(r##"{"accent":"#FF2D55","accentColor":"#112233","scene":4}"##),
        None,
    );
    assert_eq!(store.origin(), InitSource::Storage);
    assert_eq!(store.current().scene, 4);
    assert_eq!(store.current().accent_color.as_str(), "#112233");
}

#[test]
fn decoded_fragment_keeps_local_default_resolution() {
    let mut shared = StudioConfig::default();
    shared.resolution = Resolution {
        width: 640,
        height: 480,
    };
    let token = codec::encode(&shared);
    let store = StudioStore::open(MemoryStorage::new(), Some(&token));
    assert_eq!(store.current().resolution, Resolution::default());
}

#[test]
fn storage_snapshot_values_are_clamped() {
    let store = StudioStore::open(stored(r#"{"intensity":900,"tickerSpeed":1}"#), None);
    assert_eq!(store.current().intensity, 100);
    assert_eq!(store.current().ticker_speed, 10);
}

#[test]
fn legacy_storage_snapshot_is_understood() {
    let store = StudioStore::open(
        stored(r##"{"accent":"#FF2D55","resolution":{"w":1280,"h":720}}"##),
        None,
    );
    assert_eq!(store.current().accent_color.as_str(), "#FF2D55");
    assert_eq!(store.current().resolution.width, 1280);
    // Written back in the current shape.
    let raw = store.storage().get(STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains("\"accentColor\""));
    assert!(raw.contains("\"width\":1280"));
}

#[test]
fn patch_is_a_shallow_merge_and_one_write() {
    let mut store = StudioStore::open(MemoryStorage::new(), None);
    let before = store.current().clone();
    let p = StudioPatch {
        show_ticker: Some(true),
        lower_third: Some(LowerThird::new("Only title", "")),
        ..StudioPatch::default()
    };
    store.patch(&p);

    assert_eq!(store.current(), &p.merged_over(&before));
    assert_eq!(store.current().lower_third.subtitle, "");
    assert_eq!(store.storage().writes(), 2);
    assert_eq!(&persisted(&store), store.current());
}

#[test]
fn every_patch_persists_even_when_nothing_changes() {
    let mut store = StudioStore::open(MemoryStorage::new(), None);
    store.patch(&StudioPatch::default());
    store.patch(&StudioPatch::default());
    assert_eq!(store.storage().writes(), 3);
}

#[test]
fn clamping_law() {
    let mut store = StudioStore::open(MemoryStorage::new(), None);
    store.patch(&StudioPatch {
        intensity: Some(500),
        ..StudioPatch::default()
    });
    assert_eq!(store.current().intensity, 100);
    store.patch(&StudioPatch {
        intensity: Some(-10),
        ..StudioPatch::default()
    });
    assert_eq!(store.current().intensity, 0);
    store.patch(&StudioPatch {
        ticker_speed: Some(9),
        teleprompter_speed: Some(250),
        ..StudioPatch::default()
    });
    assert_eq!(store.current().ticker_speed, 10);
    assert_eq!(store.current().teleprompter_speed, 200);
}

#[test]
fn update_sees_the_latest_state() {
    let mut store = StudioStore::open(MemoryStorage::new(), None);
    store.update(|c| StudioPatch {
        show_guides: Some(!c.show_guides),
        ..StudioPatch::default()
    });
    store.update(|c| StudioPatch {
        show_guides: Some(!c.show_guides),
        ..StudioPatch::default()
    });
    assert!(!store.current().show_guides);
}

#[test]
fn reset_restores_defaults() {
    let mut store = StudioStore::open(stored(r#"{"scene":2}"#), None);
    store.reset();
    assert_eq!(store.current(), &StudioConfig::default());
    assert_eq!(persisted(&store), StudioConfig::default());
}

#[test]
fn share_then_decode_end_to_end() {
    let mut store = StudioStore::open(MemoryStorage::new(), None);
    store.patch(&StudioPatch {
        scene: Some(3),
        accent_color: Some(HexColor::parse("#112233").unwrap()),
        ..StudioPatch::default()
    });
    let token = store.share_token();
    let decoded = codec::decode(&token).unwrap();
    assert_eq!(decoded.scene, Some(3));
    assert_eq!(decoded.accent_color.unwrap().as_str(), "#112233");
    assert!(decoded.resolution.is_none());

    let url = store.share_url("https://studio.test/#stale").unwrap();
    assert_eq!(url, format!("https://studio.test/#{token}"));
}

#[test]
fn custom_key_is_honored() {
    let store = StudioStore::open_with_key(MemoryStorage::with_entry("alt", r#"{"scene":2}"#), "alt", None);
    assert_eq!(store.key(), "alt");
    assert_eq!(store.current().scene, 2);
    assert!(store.storage().get(STORAGE_KEY).unwrap().is_none());
}
