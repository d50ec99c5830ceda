use serptune::catalog::Axis;
use serptune::cycler::DEFAULT_PRESET_ID;
use serptune::favorites::Favorites;
use serptune::params::ParamSet;
use serptune::session::Session;
use serptune::storage::{JsonFileStore, MemoryStore};

#[test]
fn test_cycle_through_saved_presets() {
    let mut session = Session::open(Box::new(MemoryStore::new()), &Favorites::builtin()).unwrap();
    let a = session
        .create_preset("A", ParamSet::new("en", "", "", ""))
        .unwrap();
    let b = session
        .create_preset("B", ParamSet::new("fr", "", "", ""))
        .unwrap();

    assert_eq!(session.cycle(&a.params).id, b.id);
    assert_eq!(session.cycle(&b.params).id, DEFAULT_PRESET_ID);
    assert_eq!(session.cycle(&ParamSet::new("de", "", "", "")).id, DEFAULT_PRESET_ID);
    assert_eq!(session.cycle(&ParamSet::default()).id, a.id);
}

#[test]
fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let id = {
        let store = JsonFileStore::open(&path).unwrap();
        let mut session = Session::open(Box::new(store), &Favorites::builtin()).unwrap();
        session.toggle_favorite(Axis::Lr, "lang_de").unwrap();
        session
            .create_preset("German", ParamSet::new("de", "de", "lang_de", ""))
            .unwrap()
            .id
    };

    let store = JsonFileStore::open(&path).unwrap();
    let session = Session::open(Box::new(store), &Favorites::default()).unwrap();
    assert!(session.is_favorite(Axis::Lr, "lang_de"));
    // Seeded builtins were persisted on first open
    assert!(session.is_favorite(Axis::Hl, "en"));
    assert_eq!(
        session.apply_preset(&id),
        Some(ParamSet::new("de", "de", "lang_de", ""))
    );
}

#[test]
fn test_delete_and_apply_unknown() {
    let mut session = Session::open(Box::new(MemoryStore::new()), &Favorites::default()).unwrap();
    assert!(session.apply_preset("missing").is_none());
    assert!(!session.delete_preset("missing").unwrap());

    let preset = session.create_preset("P", ParamSet::default()).unwrap();
    assert!(session.delete_preset(&preset.id).unwrap());
    assert!(session.list_presets().is_empty());
}

#[test]
fn test_derive_through_session() {
    let session = Session::open(Box::new(MemoryStore::new()), &Favorites::default()).unwrap();
    let state = session.derive_param_state(&ParamSet::new("", "", "", "-(countryUS|countryCA)"));
    assert!(state.advanced);
    assert_eq!(state.cr_parsed.values, vec!["countryUS", "countryCA"]);
}

#[test]
fn test_catalog_marks_favorites() {
    let session = Session::open(Box::new(MemoryStore::new()), &Favorites::builtin()).unwrap();
    let rows = session.catalog(Axis::Hl);
    assert_eq!(rows[0].code, "en");
    assert!(rows[0].favorite);
    assert!(rows.iter().any(|row| row.code == "de" && !row.favorite));
}

#[test]
fn test_open_survives_read_only_store() {
    let mut store = MemoryStore::new();
    store.set_reject_writes(true);

    let session = Session::open(Box::new(store), &Favorites::builtin()).unwrap();
    assert!(session.is_favorite(Axis::Hl, "en"));
    assert!(session.list_presets().is_empty());
    assert_eq!(session.cycle(&ParamSet::default()).id, DEFAULT_PRESET_ID);
}
