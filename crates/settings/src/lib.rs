//! Sectioned settings backed by a single RON delta file.
//!
//! Each settings type owns one section of the file. The file only holds the
//! values that differ from `Default`, so a fresh install has no file at all
//! and new defaults reach users that never touched a value.

#[cfg(feature = "bevy")]
mod bevy_adapter;
mod errors;
mod store;

#[cfg(feature = "bevy")]
pub use bevy_adapter::*;
pub use errors::SettingsError;
pub use store::{SettingsStore, SettingsStoreBuilder};

/// A typed section of the settings file.
pub trait Settings: Send + Sync + 'static {
    /// Key of the section in the settings file.
    const SECTION: &'static str;

    fn name() -> &'static str {
        Self::SECTION
    }
}
