#![cfg(feature = "bevy")]

use bevy::{
    app::App,
    ecs::resource::Resource,
    prelude::{Deref, World},
};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

use crate::{Settings, SettingsError, SettingsStore};

#[derive(Resource, Deref, Clone)]
pub struct SettingsStoreRef(pub Arc<SettingsStore>);

/// Current snapshot of one settings section, refreshed on reload.
#[derive(Resource, Deref, Clone)]
pub struct SettingsArc<T: Send + Sync + 'static>(pub Arc<T>);

type Updater = fn(&SettingsStore, &mut World);

#[derive(Resource, Default)]
struct SettingsRegistry {
    updaters: Vec<(&'static str, Updater)>,
}

pub trait AppSettingsExt {
    fn insert_settings_store(&mut self, store: SettingsStore) -> &mut Self;

    /// Registers `S` in the store and mirrors it as `SettingsArc<S>`.
    fn register_settings_section<S>(&mut self) -> Result<&mut Self, SettingsError>
    where
        S: Settings + Default + Serialize + DeserializeOwned;
}

fn refresh_section<S>(store: &SettingsStore, world: &mut World)
where
    S: Settings + DeserializeOwned,
{
    match store.get::<S>() {
        Ok(fresh) => {
            if let Some(mut current) = world.get_resource_mut::<SettingsArc<S>>() {
                current.0 = fresh;
            }
        }
        Err(err) => tracing::warn!(
            target: "settings",
            "Keeping previous `{}` settings: {err}",
            S::name()
        ),
    }
}

impl AppSettingsExt for App {
    fn insert_settings_store(&mut self, store: SettingsStore) -> &mut Self {
        self.insert_resource(SettingsStoreRef(Arc::new(store)))
            .init_resource::<SettingsRegistry>()
    }

    fn register_settings_section<S>(&mut self) -> Result<&mut Self, SettingsError>
    where
        S: Settings + Default + Serialize + DeserializeOwned,
    {
        let store = self.world().resource::<SettingsStoreRef>().0.clone();
        store.register::<S>()?;
        let seed = store.get::<S>()?;

        self.insert_resource(SettingsArc::<S>(seed));
        self.world_mut()
            .resource_mut::<SettingsRegistry>()
            .updaters
            .push((S::name(), refresh_section::<S>));
        Ok(self)
    }
}

/// Exclusive system: reloads the store when the file changed on disk and
/// refreshes the `SettingsArc` resources of the affected sections.
///
/// Schedule it behind a timer, e.g. `poll_settings_file.run_if(on_timer(..))`.
pub fn poll_settings_file(world: &mut World) {
    let Some(store) = world.get_resource::<SettingsStoreRef>().map(|s| s.0.clone()) else {
        return;
    };
    let changed = match store.reload_if_changed() {
        Ok(changed) => changed,
        Err(err) => {
            tracing::warn!(target: "settings", "Settings reload failed: {err}");
            return;
        }
    };
    if changed.is_empty() {
        return;
    }

    let updaters: Vec<(&'static str, Updater)> = world
        .get_resource::<SettingsRegistry>()
        .map(|registry| registry.updaters.clone())
        .unwrap_or_default();
    for (section, update) in updaters {
        if changed.contains(&section) {
            update(&store, world);
        }
    }
}
