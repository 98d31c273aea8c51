//! Widget state as Bevy resources and the screen it maps to.
//!
//! The [`Presentation`] resource owns the one [`Widget`] record for the whole
//! session. Views come and go with [`Screen`], the record stays, so a resize
//! to a compact viewport and back does not lose progress.

use app::{LOG_MAIN, LOG_WIDGET};
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use valentine_core::{Stage, Tuning, ViewportClass, ViewportGate, Widget};

use crate::viewport::{Viewport, classify_viewport};

/// Which view is on screen.
///
/// Derived every frame from the widget stage and the viewport class;
/// nothing else sets it.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// No viewport measurement yet, nothing is shown.
    #[default]
    Mounting,
    Asking,
    Accepted,
    Compact,
}

impl Screen {
    pub fn for_widget(stage: Stage, class: ViewportClass) -> Self {
        match (class, stage) {
            (ViewportClass::Compact, _) => Self::Compact,
            (ViewportClass::Wide, Stage::Asking) => Self::Asking,
            (ViewportClass::Wide, Stage::Accepted) => Self::Accepted,
        }
    }
}

/// Ordering inside `Update`: measure, react to input, then draw.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WidgetSet {
    Sample,
    Input,
    Present,
}

/// The session's widget record.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct Presentation(pub Widget);

/// Validated numbers in effect, refreshed when the settings change.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct WidgetTuning {
    pub tuning: Tuning,
    pub gate: ViewportGate,
}

/// Randomness for evasion and decorations.
#[derive(Resource, Deref, DerefMut)]
pub struct WidgetRng(pub ChaCha8Rng);

impl WidgetRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

/// Widget record, viewport gate and screen derivation.
///
/// Needs no window or renderer, so headless apps can run it.
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Screen>()
            .init_resource::<Presentation>()
            .init_resource::<Viewport>()
            .init_resource::<WidgetTuning>()
            .insert_resource(WidgetRng::from_entropy())
            .configure_sets(
                Update,
                (WidgetSet::Sample, WidgetSet::Input, WidgetSet::Present).chain(),
            )
            .add_systems(Update, classify_viewport.in_set(WidgetSet::Sample))
            .add_systems(Update, sync_screen.in_set(WidgetSet::Present))
            .add_systems(OnEnter(Screen::Accepted), log_acceptance);
    }
}

fn sync_screen(
    presentation: Res<Presentation>,
    viewport: Res<Viewport>,
    screen: Res<State<Screen>>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    let Some(class) = viewport.class() else {
        return;
    };
    let target = Screen::for_widget(presentation.stage(), class);
    if *screen.get() != target {
        info!(target: LOG_MAIN, "Screen {:?} -> {:?}", screen.get(), target);
        next_screen.set(target);
    }
}

fn log_acceptance(presentation: Res<Presentation>) {
    info!(
        target: LOG_WIDGET,
        "Accepted with emphasis {:.2}",
        presentation.emphasis().value()
    );
}
