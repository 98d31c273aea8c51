//! The `widget` section of the settings file.

use std::time::Duration;

use app::LOG_SETTINGS;
use bevy::{prelude::*, time::common_conditions::on_timer};
use serde::{Deserialize, Serialize};
use settings::{Settings, SettingsArc, poll_settings_file};
use valentine_core::{
    EmphasisTuning, EvasionTuning, Tuning, TuningError, ViewportGate, ViewportTuning,
};

use crate::presentation::{Presentation, WidgetRng, WidgetSet, WidgetTuning};

/// Where the decorative images and the optional font live, relative to the
/// asset folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub question_image: String,
    pub success_image: String,
    /// Replaces Bevy's built-in font for every text node.
    pub font: Option<String>,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            question_image: "images/question.png".to_string(),
            success_image: "images/success.png".to_string(),
            font: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub evasion: EvasionTuning,
    pub emphasis: EmphasisTuning,
    pub viewport: ViewportTuning,
    /// `Some(true)` always shows the compact message, `Some(false)` never does.
    pub force_compact: Option<bool>,
    /// Fixed seed for reproducible sessions; fresh entropy when unset.
    pub seed: Option<u64>,
    pub floating_hearts: usize,
    pub assets: AssetPaths,
    /// How often the settings file is checked for edits.
    pub reload_interval_secs: f32,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            evasion: EvasionTuning::default(),
            emphasis: EmphasisTuning::default(),
            viewport: ViewportTuning::default(),
            force_compact: None,
            seed: None,
            floating_hearts: 20,
            assets: AssetPaths::default(),
            reload_interval_secs: 1.0,
        }
    }
}

impl Settings for WidgetSettings {
    const SECTION: &'static str = "widget";
}

impl WidgetSettings {
    pub fn tuning(&self) -> Tuning {
        Tuning {
            evasion: self.evasion,
            emphasis: self.emphasis,
            viewport: self.viewport,
        }
    }

    /// Tuning and gate to run with, or the first validation failure.
    pub fn resolve(&self) -> Result<WidgetTuning, TuningError> {
        let tuning = self.tuning();
        tuning.validate()?;
        Ok(WidgetTuning {
            tuning,
            gate: ViewportGate::new(tuning.viewport).with_override(self.force_compact),
        })
    }

    /// Falls back to one second for zero, negative, NaN or out-of-range values.
    fn reload_interval(&self) -> Duration {
        Duration::try_from_secs_f32(self.reload_interval_secs)
            .ok()
            .filter(|interval| !interval.is_zero())
            .unwrap_or(Duration::from_secs(1))
    }
}

/// Mirrors `SettingsArc<WidgetSettings>` into the resources the widget
/// systems read. Expects the section to be registered already.
pub struct WidgetSettingsPlugin;

impl Plugin for WidgetSettingsPlugin {
    fn build(&self, app: &mut App) {
        let interval = app
            .world()
            .get_resource::<SettingsArc<WidgetSettings>>()
            .map(|settings| settings.reload_interval())
            .unwrap_or_else(|| WidgetSettings::default().reload_interval());

        app.add_systems(PreStartup, seed_widget_rng)
            .add_systems(First, poll_settings_file.run_if(on_timer(interval)))
            .add_systems(
                Update,
                apply_widget_settings
                    .run_if(resource_exists_and_changed::<SettingsArc<WidgetSettings>>)
                    .in_set(WidgetSet::Sample)
                    .before(crate::viewport::classify_viewport),
            );
    }
}

fn seed_widget_rng(
    settings: Option<Res<SettingsArc<WidgetSettings>>>,
    mut rng: ResMut<WidgetRng>,
) {
    if let Some(seed) = settings.and_then(|settings| settings.seed) {
        info!(target: LOG_SETTINGS, "Using fixed random seed {seed}");
        *rng = WidgetRng::seeded(seed);
    }
}

pub(crate) fn apply_widget_settings(
    settings: Res<SettingsArc<WidgetSettings>>,
    mut active: ResMut<WidgetTuning>,
    mut presentation: ResMut<Presentation>,
) {
    match settings.resolve() {
        Ok(resolved) => {
            debug!(target: LOG_SETTINGS, "Widget tuning in effect: {:?}", resolved.tuning);
            *active = resolved;
        }
        Err(err) => {
            warn!(
                target: LOG_SETTINGS,
                "Invalid widget settings ({err}); falling back to the defaults"
            );
            *active = WidgetTuning::default();
        }
    }

    if presentation
        .bypass_change_detection()
        .cap_emphasis(&active.tuning.emphasis)
    {
        presentation.set_changed();
        info!(
            target: LOG_SETTINGS,
            "Emphasis capped to {:.2}",
            presentation.emphasis().value()
        );
    }
}
