use bevy::prelude::*;

use super::components::ROSE_50;

/// Marker component for the single 2D camera all views render through.
#[derive(Component)]
pub struct UiCamera;

pub struct UiCameraPlugin;

impl Plugin for UiCameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(ROSE_50))
            .add_systems(Startup, spawn_ui_camera_once);
    }
}

fn spawn_ui_camera_once(mut commands: Commands, existing: Query<Entity, With<UiCamera>>) {
    if existing.is_empty() {
        commands.spawn((Camera2d, UiCamera, Name::new("UI Camera")));
    }
}
