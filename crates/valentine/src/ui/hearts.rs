//! Hearts drifting up behind every view.

use bevy::prelude::*;
use rand::Rng;
use settings::SettingsArc;

use crate::presentation::{WidgetRng, WidgetSet};
use crate::ui::components::HEART_TINT;
use crate::ui::images::TextStyle;
use crate::widget_settings::WidgetSettings;

/// One heart. Positions are percentages of the window so resizes are free.
#[derive(Component, Debug, Clone, Copy)]
pub struct FloatingHeart {
    left: f32,
    top: f32,
    /// Percent of the window height per second.
    speed: f32,
}

impl FloatingHeart {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..110.0),
            speed: rng.gen_range(3.0..8.0),
        }
    }

    /// Moves up; leaving through the top re-enters from below.
    fn rise(&mut self, delta: f32) {
        self.top -= self.speed * delta;
        if self.top < -10.0 {
            self.top = 110.0;
        }
    }
}

#[derive(Component)]
struct HeartLayer;

pub struct HeartsPlugin;

impl Plugin for HeartsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hearts)
            .add_systems(Update, drift_hearts.in_set(WidgetSet::Present));
    }
}

fn spawn_hearts(
    mut commands: Commands,
    mut rng: ResMut<WidgetRng>,
    text_style: Res<TextStyle>,
    settings: Option<Res<SettingsArc<WidgetSettings>>>,
) {
    let count = settings
        .map(|settings| settings.floating_hearts)
        .unwrap_or_else(|| WidgetSettings::default().floating_hearts);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                overflow: Overflow::clip(),
                ..default()
            },
            GlobalZIndex(-1),
            HeartLayer,
            Name::new("Floating Hearts"),
        ))
        .with_children(|layer| {
            for _ in 0..count {
                let heart = FloatingHeart::random(&mut **rng);
                let size = rng.gen_range(16.0..40.0);
                layer.spawn((
                    Text::new("♥"),
                    text_style.font(size),
                    TextColor(HEART_TINT),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Percent(heart.left),
                        top: Val::Percent(heart.top),
                        ..default()
                    },
                    heart,
                ));
            }
        });
}

fn drift_hearts(time: Res<Time>, mut hearts: Query<(&mut FloatingHeart, &mut Node)>) {
    for (mut heart, mut node) in &mut hearts {
        heart.rise(time.delta_secs());
        node.top = Val::Percent(heart.top);
    }
}
