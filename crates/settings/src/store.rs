use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::SystemTime;

use crate::{Settings, SettingsError};

use ron::value::{Map as RonMap, Value as RonValue};
use serde::{Serialize, de::DeserializeOwned};

const LOG_SETTINGS: &str = "settings";

/// File content: section name -> delta against that section's defaults.
type Deltas = BTreeMap<String, RonValue>;

fn to_ron_value<T: Serialize>(value: &T) -> Result<RonValue, SettingsError> {
    let text = ron::to_string(value)?;
    Ok(ron::from_str(&text)?)
}

fn into_map(section: &'static str, value: RonValue) -> Result<RonMap, SettingsError> {
    match value {
        RonValue::Map(map) => Ok(map),
        _ => Err(SettingsError::NotAMap(section)),
    }
}

/// Defaults overlaid with the delta, recursing into nested maps.
fn merge_maps(defaults: &RonMap, delta: &RonMap) -> RonMap {
    let mut merged = defaults.clone();
    for (key, delta_value) in delta.iter() {
        let value = match (merged.get(key), delta_value) {
            (Some(RonValue::Map(default_sub)), RonValue::Map(delta_sub)) => {
                RonValue::Map(merge_maps(default_sub, delta_sub))
            }
            _ => delta_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}

fn effective_value(defaults: &RonMap, delta: Option<&RonValue>) -> RonValue {
    match delta {
        Some(RonValue::Map(delta)) => RonValue::Map(merge_maps(defaults, delta)),
        // A non-map delta cannot be reconciled with the struct; keep the defaults.
        Some(_) | None => RonValue::Map(defaults.clone()),
    }
}

fn modified_at(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

fn read_deltas(path: &Path) -> Result<Deltas, SettingsError> {
    if !path.exists() {
        return Ok(Deltas::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Deltas::new());
    }
    Ok(ron::from_str(&content)?)
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, SettingsError> {
    lock.read().map_err(|_| SettingsError::Poisoned)
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, SettingsError> {
    lock.write().map_err(|_| SettingsError::Poisoned)
}

/// Builder for [`SettingsStore`].
#[derive(Default)]
pub struct SettingsStoreBuilder {
    settings_file: Option<PathBuf>,
}

impl SettingsStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.settings_file = Some(path.into());
        self
    }

    /// Creates the parent directory and reads the existing delta file, if any.
    pub fn build(self) -> Result<SettingsStore, SettingsError> {
        let file_path = self.settings_file.ok_or(SettingsError::MissingFile)?;

        if let Some(dir) = file_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let deltas = read_deltas(&file_path)?;
        tracing::debug!(
            target: LOG_SETTINGS,
            "Loaded {} section delta(s) from {}",
            deltas.len(),
            file_path.display()
        );

        Ok(SettingsStore {
            last_modified: RwLock::new(modified_at(&file_path)),
            file_path,
            deltas: RwLock::new(deltas),
            defaults: RwLock::new(HashMap::new()),
            values: RwLock::new(HashMap::new()),
        })
    }
}

/// Thread-safe settings store.
///
/// - `register` seeds a section from `T::default()` merged with the delta
/// - `get` hands out `Arc` snapshots
/// - `reload` / `reload_if_changed` pick up external edits
pub struct SettingsStore {
    file_path: PathBuf,
    deltas: RwLock<Deltas>,
    defaults: RwLock<HashMap<&'static str, RonMap>>,
    values: RwLock<HashMap<&'static str, RonValue>>,
    last_modified: RwLock<Option<SystemTime>>,
}

impl SettingsStore {
    pub fn builder() -> SettingsStoreBuilder {
        SettingsStoreBuilder::new()
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn is_registered<T: Settings>(&self) -> bool {
        read(&self.values)
            .map(|values| values.contains_key(T::name()))
            .unwrap_or(false)
    }

    /// Registers a section: defaults come from `T::default()`, overlaid with
    /// whatever the file already holds for `T::SECTION`.
    pub fn register<T>(&self) -> Result<(), SettingsError>
    where
        T: Settings + Default + Serialize + DeserializeOwned,
    {
        let section = T::name();
        if read(&self.values)?.contains_key(section) {
            return Err(SettingsError::AlreadyRegistered(section));
        }

        let defaults = into_map(section, to_ron_value(&T::default())?)?;
        let value = effective_value(&defaults, read(&self.deltas)?.get(section));

        // Fail early if the stored delta no longer fits the type.
        if let Err(err) = value.clone().into_rust::<T>() {
            tracing::warn!(
                target: LOG_SETTINGS,
                "Stored values for `{section}` do not match the current schema ({err}); using defaults"
            );
            write(&self.values)?.insert(section, RonValue::Map(defaults.clone()));
        } else {
            write(&self.values)?.insert(section, value);
        }
        write(&self.defaults)?.insert(section, defaults);

        tracing::debug!(target: LOG_SETTINGS, "Registered settings section `{section}`");
        Ok(())
    }

    /// Snapshot of the effective value.
    pub fn get<T>(&self) -> Result<Arc<T>, SettingsError>
    where
        T: Settings + DeserializeOwned,
    {
        self.try_get::<T>()?
            .ok_or(SettingsError::NotRegistered(T::name()))
    }

    /// Like [`get`](Self::get) but `None` if the section is not registered.
    pub fn try_get<T>(&self) -> Result<Option<Arc<T>>, SettingsError>
    where
        T: Settings + DeserializeOwned,
    {
        let values = read(&self.values)?;
        let Some(value) = values.get(T::name()) else {
            return Ok(None);
        };
        Ok(Some(Arc::new(value.clone().into_rust::<T>()?)))
    }

    /// Re-reads the file and re-merges every registered section.
    /// Returns the sections whose effective value changed.
    pub fn reload(&self) -> Result<Vec<&'static str>, SettingsError> {
        let deltas = read_deltas(&self.file_path)?;
        let defaults = read(&self.defaults)?;
        let mut values = write(&self.values)?;

        let mut changed = Vec::new();
        for (&section, section_defaults) in defaults.iter() {
            let value = effective_value(section_defaults, deltas.get(section));
            if values.get(section) != Some(&value) {
                values.insert(section, value);
                changed.push(section);
            }
        }

        *write(&self.deltas)? = deltas;
        *write(&self.last_modified)? = modified_at(&self.file_path);

        if !changed.is_empty() {
            tracing::info!(target: LOG_SETTINGS, "Reloaded settings sections: {changed:?}");
        }
        Ok(changed)
    }

    /// Reloads only when the file's modification time moved since the last
    /// load. Cheap enough to call on a timer.
    pub fn reload_if_changed(&self) -> Result<Vec<&'static str>, SettingsError> {
        let current = modified_at(&self.file_path);
        if *read(&self.last_modified)? == current {
            return Ok(Vec::new());
        }
        self.reload()
    }
}
