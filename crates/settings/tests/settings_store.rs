//! Integration tests for the SettingsStore:
//! - defaults when no file exists
//! - merging a partial file onto the defaults, recursively
//! - reloading after external file modification

use std::fs;

use serde::{Deserialize, Serialize};
use settings::{Settings, SettingsError, SettingsStore};
use tempfile::TempDir;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
struct Motion {
    enabled: bool,
    speed: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
struct Display {
    title: String,
    seed: Option<u64>,
    motion: Motion,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            title: "Will you be my Valentine?".to_string(),
            seed: None,
            motion: Motion::default(),
        }
    }
}

impl Settings for Display {
    const SECTION: &'static str = "display";
}

fn store_in(dir: &TempDir) -> SettingsStore {
    SettingsStore::builder()
        .with_settings_file(dir.path().join("nested").join("app.settings.ron"))
        .build()
        .expect("build store")
}

#[test]
fn defaults_without_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.register::<Display>().expect("register");

    assert_eq!(*store.get::<Display>().unwrap(), Display::default());
    assert!(
        !store.file_path().exists(),
        "registering must not create the file"
    );
    assert!(store.is_registered::<Display>());
}

#[test]
fn unregistered_sections_are_reported() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(matches!(
        store.get::<Display>(),
        Err(SettingsError::NotRegistered("display"))
    ));
    assert!(store.try_get::<Display>().unwrap().is_none());

    store.register::<Display>().unwrap();
    assert!(matches!(
        store.register::<Display>(),
        Err(SettingsError::AlreadyRegistered("display"))
    ));
}

#[test]
fn existing_file_is_merged_on_register() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.settings.ron");
    fs::write(&path, r#"{ "display": { "motion": { "speed": 0.5 } } }"#).unwrap();

    let store = SettingsStore::builder()
        .with_settings_file(&path)
        .build()
        .unwrap();
    store.register::<Display>().unwrap();

    let display = store.get::<Display>().unwrap();
    assert_eq!(display.motion.speed, 0.5);
    assert!(display.motion.enabled);
    assert_eq!(display.title, Display::default().title);
}

#[test]
fn reload_applies_external_changes() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.register::<Display>().unwrap();

    fs::write(
        store.file_path(),
        r#"{ "display": { "motion": { "speed": 3.0 } } }"#,
    )
    .unwrap();
    assert_eq!(store.reload().expect("reload"), vec!["display"]);
    assert_eq!(store.get::<Display>().unwrap().motion.speed, 3.0);

    fs::write(
        store.file_path(),
        r#"{ "display": { "title": "Hello", "motion": { "enabled": false } } }"#,
    )
    .unwrap();

    let changed = store.reload().expect("reload");
    assert_eq!(changed, vec!["display"]);

    let display = store.get::<Display>().unwrap();
    assert_eq!(display.title, "Hello");
    assert!(!display.motion.enabled);
    assert_eq!(display.motion.speed, 1.0, "speed is back to its default");

    assert!(store.reload().unwrap().is_empty(), "nothing changed the second time");
}

#[test]
fn broken_file_fails_to_build() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.settings.ron");
    fs::write(&path, "{ this is not ron").unwrap();

    let result = SettingsStore::builder().with_settings_file(&path).build();
    assert!(matches!(result, Err(SettingsError::Parse(_))));
}
