use app::{AppBuilder, Application, BevyApp, BoxError, LOG_MAIN};
use bevy::{log::LogPlugin, prelude::*};
use settings::{AppSettingsExt, SettingsStore};
use valentine::{ValentinePlugin, WidgetSettings};

pub struct Valentine;

impl Application for Valentine {
    const APP_ID: &'static str = "valentine";
}

pub fn init() -> Result<BevyApp<Valentine>, BoxError> {
    AppBuilder::<Valentine>::new(env!("CARGO_PKG_VERSION"))?.build_with_bevy(|mut app, context| {
        app.add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Will you be my Valentine?".to_string(),
                        ..default()
                    }),
                    ..default()
                }),
        );

        let settings_file = context.path_context().settings_file();
        info!(target: LOG_MAIN, "Settings file: {}", settings_file.display());
        let store = SettingsStore::builder()
            .with_settings_file(settings_file)
            .build()?;

        app.insert_settings_store(store)
            .register_settings_section::<WidgetSettings>()?
            .add_plugins(ValentinePlugin);

        Ok(app)
    })
}
