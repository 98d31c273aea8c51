pub mod camera;
pub mod components;
pub mod hearts;
pub mod images;
pub mod motion;
pub mod scenes;

use bevy::prelude::*;
use camera::UiCameraPlugin;
use hearts::HeartsPlugin;
use images::ImagesPlugin;
use motion::MotionPlugin;
use scenes::ScenePlugin;
use valentine_core::{Bounds, Point, Size};

/// Main UI plugin that coordinates the camera, decorations and views
pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            UiCameraPlugin,
            ImagesPlugin,
            HeartsPlugin,
            MotionPlugin,
            ScenePlugin,
        ));
    }
}

/// A laid-out node's box in logical window pixels (top-left origin).
///
/// Layout reports physical pixels; before the first layout pass the size is
/// zero and the box is unmeasurable.
pub(crate) fn logical_bounds(node: &ComputedNode, transform: &UiGlobalTransform) -> Bounds {
    let scale = node.inverse_scale_factor();
    let size = node.size() * scale;
    let center = transform.translation * scale;
    Bounds::from_center(Point::new(center.x, center.y), Size::new(size.x, size.y))
}
