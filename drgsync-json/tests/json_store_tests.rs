use drgsync_core::{Config, ConfigStore, ErrorKind};
use drgsync_json::JsonConfigStore;
use std::fs;
use tempfile::tempdir;

#[test]
fn load_creates_empty_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".deepRockSyncConfig");
    let store = JsonConfigStore::open_with(&path);

    let c = store.load().unwrap();
    assert_eq!(c, Config::default());
    assert!(path.exists());

    let raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw["xbox_save_path"], "");
    assert_eq!(raw["steam_save_path"], "");

    assert_eq!(store.load().unwrap(), Config::default());
}

#[test]
fn load_creates_missing_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("cfg.json");
    let store = JsonConfigStore::open_with(&path);
    assert_eq!(store.load().unwrap(), Config::default());
    assert!(path.exists());
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let store = JsonConfigStore::open_with(dir.path().join("cfg.json"));
    let c = Config::new("/games/xbox.sav", "/games/steam.sav");

    store.save(&c).unwrap();
    assert_eq!(store.load().unwrap(), c);
}

#[test]
fn repeated_save_of_load_is_byte_identical() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    let store = JsonConfigStore::open_with(&path);
    store.save(&Config::new("/x", "/s")).unwrap();

    store.save(&store.load().unwrap()).unwrap();
    let first = fs::read(&path).unwrap();
    store.save(&store.load().unwrap()).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn legacy_keys_are_normalized_on_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    fs::write(&path, r#"{"xboxSavePath":"/x","steamSavePath":"/s","theme":"dark"}"#).unwrap();
    let store = JsonConfigStore::open_with(&path);

    let c = store.load().unwrap();
    assert_eq!(c, Config::new("/x", "/s"));

    store.save(&c).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"xbox_save_path\""));
    assert!(!text.contains("xboxSavePath"));
    assert!(!text.contains("theme"));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    let store = JsonConfigStore::open_with(&path);

    fs::write(&path, "not json").unwrap();
    assert_eq!(store.load().unwrap_err().kind(), ErrorKind::ParseError);

    fs::write(&path, "[]").unwrap();
    assert_eq!(store.load().unwrap_err().kind(), ErrorKind::ParseError);

    // left untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn unreadable_config_is_an_io_error() {
    let dir = tempdir().unwrap();
    // a directory cannot be read as a file
    let store = JsonConfigStore::open_with(dir.path());
    assert_eq!(store.load().unwrap_err().kind(), ErrorKind::IoError);
}

#[cfg(unix)]
#[test]
fn created_file_is_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    JsonConfigStore::open_with(&path).load().unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}

#[test]
fn mixed_spelling_file_loads_and_normalizes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    fs::write(
        &path,
        r#"{"xbox_save_path":"/a","steam_save_path":"/s","xboxSavePath":"/old"}"#,
    )
    .unwrap();
    let store = JsonConfigStore::open_with(&path);

    let c = store.load().unwrap();
    assert_eq!(c, Config::new("/a", "/s"));

    store.save(&c).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("xboxSavePath"));
    assert_eq!(store.load().unwrap(), c);
}

#[test]
fn null_path_loads_as_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    fs::write(&path, r#"{"xbox_save_path":null,"steam_save_path":"/s"}"#).unwrap();

    let c = JsonConfigStore::open_with(&path).load().unwrap();
    assert_eq!(c, Config::new("", "/s"));
}
