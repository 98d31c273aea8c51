//! Bevy client for the Valentine prompt.
//!
//! The widget logic lives in `valentine_core`; this crate measures the
//! window, routes input into the widget record and draws one of three views
//! depending on [`Screen`].

pub mod input;
pub mod presentation;
pub mod ui;
pub mod viewport;
pub mod widget_settings;
mod utils;

use bevy::prelude::*;

use input::InputPlugin;
use ui::UIPlugin;
use viewport::ViewportPlugin;
use widget_settings::WidgetSettingsPlugin;

pub use presentation::{
    Presentation, PresentationPlugin, Screen, WidgetRng, WidgetSet, WidgetTuning,
};
pub use viewport::Viewport;
pub use widget_settings::WidgetSettings;

/// Everything the windowed client needs on top of `DefaultPlugins`.
///
/// Register the `WidgetSettings` section before adding it so the tuning and
/// reload interval come from the settings file.
pub struct ValentinePlugin;

impl Plugin for ValentinePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            PresentationPlugin,
            WidgetSettingsPlugin,
            ViewportPlugin,
            InputPlugin,
            UIPlugin,
        ));
    }
}
