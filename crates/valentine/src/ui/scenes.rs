mod accepted;
mod asking;
mod compact;

use bevy::prelude::*;

pub use accepted::{AcceptedScenePlugin, AcceptedView};
pub use asking::{AskingScenePlugin, AskingView};
pub use compact::{CompactScenePlugin, CompactView};

/// Main scene plugin that coordinates all view sub-plugins
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((AskingScenePlugin, AcceptedScenePlugin, CompactScenePlugin));
    }
}
