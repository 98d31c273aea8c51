//! Viewport sampling and classification.

use app::LOG_VIEWPORT;
use bevy::{
    input::touch::TouchInput,
    prelude::*,
    window::{PrimaryWindow, WindowResized},
};
use valentine_core::{ViewportClass, ViewportProfile};

use crate::presentation::{WidgetSet, WidgetTuning};

/// Latest viewport measurement and the class derived from it.
///
/// `class` stays `None` until the first width arrives.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Viewport {
    profile: ViewportProfile,
    measured: bool,
    class: Option<ViewportClass>,
}

impl Viewport {
    pub fn profile(&self) -> ViewportProfile {
        self.profile
    }

    pub fn class(&self) -> Option<ViewportClass> {
        self.class
    }

    /// Records a logical width. Non-finite or negative widths are ignored.
    pub fn record_width(&mut self, width: f32) {
        if !width.is_finite() || width < 0.0 {
            return;
        }
        self.profile.width = width;
        self.measured = true;
    }

    /// Touch input was seen; the session counts as coarse-pointer from now on.
    pub fn mark_coarse_pointer(&mut self) {
        self.profile.coarse_pointer = true;
    }
}

/// Window resize and touch sampling for the primary window.
pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            sample_viewport
                .in_set(WidgetSet::Sample)
                .before(classify_viewport),
        );
    }
}

fn sample_viewport(
    mut resized: MessageReader<WindowResized>,
    mut touches: MessageReader<TouchInput>,
    windows: Query<(Entity, &Window), With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    let Ok((primary, window)) = windows.single() else {
        return;
    };

    if !viewport.measured {
        viewport.record_width(window.width());
    }

    for event in resized.read() {
        if event.window == primary && event.width != viewport.profile.width {
            viewport.record_width(event.width);
        }
    }

    if touches.read().count() > 0 && !viewport.profile.coarse_pointer {
        debug!(target: LOG_VIEWPORT, "Touch input seen, treating pointer as coarse");
        viewport.mark_coarse_pointer();
    }
}

/// Re-evaluates the gate. Writes only when the class actually flips.
pub(crate) fn classify_viewport(mut viewport: ResMut<Viewport>, tuning: Res<WidgetTuning>) {
    if !viewport.measured {
        return;
    }
    let class = tuning.gate.classify(&viewport.profile);
    if viewport.class != Some(class) {
        info!(
            target: LOG_VIEWPORT,
            "Viewport {:.0}px (coarse pointer: {}) is {:?}",
            viewport.profile.width,
            viewport.profile.coarse_pointer,
            class
        );
        viewport.class = Some(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_viewport_has_no_class() {
        let viewport = Viewport::default();
        assert_eq!(viewport.class(), None);
        assert!(!viewport.measured);
    }

    #[test]
    fn garbage_widths_are_ignored() {
        let mut viewport = Viewport::default();
        viewport.record_width(f32::NAN);
        viewport.record_width(-1.0);
        assert!(!viewport.measured);

        viewport.record_width(0.0);
        assert!(viewport.measured);
        assert_eq!(viewport.profile().width, 0.0);
    }

    #[test]
    fn coarse_pointer_is_sticky() {
        let mut viewport = Viewport::default();
        viewport.mark_coarse_pointer();
        viewport.record_width(1920.0);
        assert!(viewport.profile().coarse_pointer);
    }
}
