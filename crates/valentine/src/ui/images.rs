//! Decorative assets: the two pictures and the optional font.
//!
//! A missing or broken file never blocks the widget. The image node simply
//! stays empty and the failure is logged once.

use app::LOG_ASSETS;
use bevy::{
    asset::{LoadState, UntypedAssetId},
    prelude::*,
};
use settings::SettingsArc;

use crate::widget_settings::{AssetPaths, WidgetSettings};

#[derive(Resource, Debug, Clone)]
pub struct DecorativeImages {
    pub question: Handle<Image>,
    pub success: Handle<Image>,
}

/// Font used by every text node; Bevy's default when none is configured.
#[derive(Resource, Debug, Clone, Default)]
pub struct TextStyle {
    font: Option<Handle<Font>>,
}

impl TextStyle {
    pub fn font(&self, font_size: f32) -> TextFont {
        TextFont {
            font: self.font.clone().unwrap_or_default(),
            font_size,
            ..default()
        }
    }
}

/// Handles whose failure was already reported.
#[derive(Resource, Default)]
struct ReportedFailures(Vec<UntypedAssetId>);

pub struct ImagesPlugin;

impl Plugin for ImagesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ReportedFailures>()
            .add_systems(PreStartup, load_decorations)
            .add_systems(Update, report_failed_loads);
    }
}

fn load_decorations(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Option<Res<SettingsArc<WidgetSettings>>>,
) {
    let paths = settings
        .map(|settings| settings.assets.clone())
        .unwrap_or_else(AssetPaths::default);

    debug!(
        target: LOG_ASSETS,
        "Loading decorations {} and {}",
        paths.question_image,
        paths.success_image
    );
    commands.insert_resource(DecorativeImages {
        question: asset_server.load(paths.question_image),
        success: asset_server.load(paths.success_image),
    });
    commands.insert_resource(TextStyle {
        font: paths.font.map(|path| asset_server.load(path)),
    });
}

fn report_failed_loads(
    asset_server: Res<AssetServer>,
    images: Option<Res<DecorativeImages>>,
    text_style: Option<Res<TextStyle>>,
    mut reported: ResMut<ReportedFailures>,
) {
    let mut watched: Vec<UntypedAssetId> = Vec::new();
    if let Some(images) = images {
        watched.push(images.question.id().untyped());
        watched.push(images.success.id().untyped());
    }
    if let Some(font) = text_style.and_then(|style| style.font.clone()) {
        watched.push(font.id().untyped());
    }

    for id in watched {
        if reported.0.contains(&id) {
            continue;
        }
        if let LoadState::Failed(err) = asset_server.load_state(id) {
            let path = asset_server
                .get_path(id)
                .map(|path| path.to_string())
                .unwrap_or_else(|| "<unknown>".to_string());
            warn!(target: LOG_ASSETS, "Could not load {path}: {err}");
            reported.0.push(id);
        }
    }
}
