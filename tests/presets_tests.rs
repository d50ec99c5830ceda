use serde_json::json;
use serptune::params::ParamSet;
use serptune::presets::{PRESETS_KEY, PresetError, PresetStore};
use serptune::storage::{KeyValueStore, MemoryStore};

fn advanced_params() -> ParamSet {
    ParamSet::new("en", "us", "-(lang_ko|lang_ja)", "countryUS|countryCA")
}

#[test]
fn test_create_then_apply_returns_params() {
    let mut store = MemoryStore::new();
    let mut presets = PresetStore::load(&store).unwrap();

    let preset = presets.create(&mut store, "X", advanced_params()).unwrap();
    assert_eq!(presets.apply(&preset.id), Some(advanced_params()));
}

#[test]
fn test_create_rejects_blank_name() {
    let mut store = MemoryStore::new();
    let mut presets = PresetStore::default();

    for name in ["", "   ", "\t\n"] {
        assert!(matches!(
            presets.create(&mut store, name, ParamSet::default()),
            Err(PresetError::EmptyName)
        ));
    }
    assert!(presets.is_empty());
    assert_eq!(store.get(PRESETS_KEY).unwrap(), None);
}

#[test]
fn test_create_trims_name() {
    let mut store = MemoryStore::new();
    let mut presets = PresetStore::default();
    let preset = presets
        .create(&mut store, "  Korean  ", ParamSet::default())
        .unwrap();
    assert_eq!(preset.name, "Korean");
}

#[test]
fn test_ids_are_unique_and_order_is_insertion() {
    let mut store = MemoryStore::new();
    let mut presets = PresetStore::default();

    let names = ["first", "second", "third"];
    for name in names {
        presets.create(&mut store, name, ParamSet::default()).unwrap();
    }

    let listed: Vec<&str> = presets.list().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(listed, names);

    let mut ids: Vec<&str> = presets.list().iter().map(|p| p.id.as_str()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| id.parse::<u128>().is_ok()));
}

#[test]
fn test_apply_unknown_id_is_none() {
    let presets = PresetStore::default();
    assert_eq!(presets.apply("nope"), None);
}

#[test]
fn test_delete_missing_id_leaves_collection_unchanged() {
    let mut store = MemoryStore::new();
    let mut presets = PresetStore::default();
    presets.create(&mut store, "A", advanced_params()).unwrap();
    let before = presets.list().to_vec();
    let persisted = store.get(PRESETS_KEY).unwrap();

    assert!(!presets.delete(&mut store, "missing").unwrap());
    assert_eq!(presets.list(), before.as_slice());
    assert_eq!(store.get(PRESETS_KEY).unwrap(), persisted);
}

#[test]
fn test_delete_removes_and_persists() {
    let mut store = MemoryStore::new();
    let mut presets = PresetStore::default();
    let a = presets.create(&mut store, "A", ParamSet::default()).unwrap();
    let b = presets.create(&mut store, "B", ParamSet::default()).unwrap();

    assert!(presets.delete(&mut store, &a.id).unwrap());
    let reloaded = PresetStore::load(&store).unwrap();
    assert_eq!(reloaded.list().len(), 1);
    assert_eq!(reloaded.list()[0].id, b.id);
}

#[test]
fn test_failed_persist_reverts() {
    let mut store = MemoryStore::new();
    let mut presets = PresetStore::default();
    let kept = presets.create(&mut store, "kept", ParamSet::default()).unwrap();

    store.set_reject_writes(true);
    assert!(matches!(
        presets.create(&mut store, "lost", ParamSet::default()),
        Err(PresetError::Storage(_))
    ));
    assert_eq!(presets.len(), 1);

    assert!(presets.delete(&mut store, &kept.id).is_err());
    assert_eq!(presets.find(&kept.id), Some(&kept));
}

#[test]
fn test_persisted_layout() {
    let mut store = MemoryStore::new();
    let mut presets = PresetStore::default();
    let preset = presets
        .create(&mut store, "Korea", ParamSet::new("ko", "kr", "", ""))
        .unwrap();

    let value = store.get(PRESETS_KEY).unwrap().unwrap();
    assert_eq!(
        value,
        json!({
            (preset.id.clone()): {
                "name": "Korea",
                "params": { "hl": "ko", "gl": "kr", "lr": "", "cr": "" }
            }
        })
    );
}

#[test]
fn test_load_keeps_document_order_and_skips_malformed() {
    let value = json!({
        "300": { "name": "later id first", "params": { "hl": "en" } },
        "bad": { "params": {} },
        "100": { "name": "earlier id second" }
    });
    let presets = PresetStore::from_value(&value);

    let names: Vec<&str> = presets.list().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["later id first", "earlier id second"]);
    assert_eq!(presets.list()[0].params.hl, "en");
    assert_eq!(presets.list()[1].params, ParamSet::default());
}
