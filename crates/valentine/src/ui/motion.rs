//! Tweens for the views: the evasive control's hop and the zoom-in when a
//! view appears.

use std::time::Duration;

use bevy::{math::curve::EaseFunction, prelude::*};
use bevy_tweening::{AnimCompletedEvent, Tween, TweenAnim, TweeningPlugin, lens::Lens};

use crate::presentation::WidgetSet;

/// Seconds the evasive control takes to reach a new position.
pub const EVASION_DURATION: f32 = 0.15;
/// Seconds for a freshly spawned view to zoom in.
pub const INTRO_DURATION: f32 = 0.7;
const INTRO_SCALE: f32 = 0.9;

/// Where the evasive control is headed, in surface-relative logical pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct EvasiveTarget(pub Vec2);

/// Moves an absolutely positioned node between two insets.
struct InsetLens {
    start: Vec2,
    end: Vec2,
}

impl Lens<Node> for InsetLens {
    fn lerp(&mut self, mut target: Mut<Node>, ratio: f32) {
        let position = self.start.lerp(self.end, ratio);
        target.left = Val::Px(position.x);
        target.top = Val::Px(position.y);
    }
}

/// Scales a node up to its natural size.
struct ZoomLens {
    start: f32,
}

impl Lens<UiTransform> for ZoomLens {
    fn lerp(&mut self, mut target: Mut<UiTransform>, ratio: f32) {
        target.scale = Vec2::splat(self.start + (1.0 - self.start) * ratio);
    }
}

/// Hop from `from` to `to` with a slight overshoot (back-out).
pub fn evasive_hop(from: Vec2, to: Vec2) -> (EvasiveTarget, TweenAnim) {
    let tween = Tween::new(
        EaseFunction::BackOut,
        Duration::from_secs_f32(EVASION_DURATION),
        InsetLens {
            start: from,
            end: to,
        },
    );
    (EvasiveTarget(to), TweenAnim::new(tween))
}

/// Zoom-in for the content column of a freshly spawned view.
pub fn view_intro() -> (UiTransform, TweenAnim) {
    let tween = Tween::new(
        EaseFunction::CubicOut,
        Duration::from_secs_f32(INTRO_DURATION),
        ZoomLens { start: INTRO_SCALE },
    );
    (
        UiTransform {
            scale: Vec2::splat(INTRO_SCALE),
            ..default()
        },
        TweenAnim::new(tween),
    )
}

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(TweeningPlugin)
            .add_systems(Update, drop_finished_tweens.in_set(WidgetSet::Present));
    }
}

pub(crate) fn drop_finished_tweens(
    mut commands: Commands,
    mut completed: MessageReader<AnimCompletedEvent>,
) {
    for event in completed.read() {
        // The view may already be gone.
        commands.entity(event.anim_entity).try_remove::<TweenAnim>();
    }
}
