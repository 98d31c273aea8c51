use paths::PathContext;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// Log targets
pub const LOG_MAIN: &str = "main";
pub const LOG_WIDGET: &str = "widget";
pub const LOG_VIEWPORT: &str = "viewport";
pub const LOG_SETTINGS: &str = "settings";
pub const LOG_ASSETS: &str = "assets";

/// Application infrastructure context.
///
/// Contains path management, version info, and logging infrastructure.
pub struct AppContext {
    pub path_context: PathContext,
    pub version: &'static str,
    /// Keeps the non-blocking log writer alive; dropping it flushes the file.
    _log_guard: tracing_appender::non_blocking::WorkerGuard,
}

impl AppContext {
    pub fn app_id(&self) -> &str {
        self.path_context.app_id()
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn path_context(&self) -> &PathContext {
        &self.path_context
    }
}

/// Application identity. Pure constants, no logic.
pub trait Application: Sized + 'static {
    const APP_ID: &'static str;
    const STUDIO: &'static str = "little_surprises";
    const PROJECT_ID: &'static str = "valentine";
}

/// Builder performing the common bootstrap: paths, directories, logging.
pub struct AppBuilder<A: Application> {
    context: AppContext,
    _marker: PhantomData<A>,
}

impl<A: Application> AppBuilder<A> {
    /// Debug builds keep their data in `.out/` next to the workspace,
    /// release builds use the platform data directory.
    pub fn new(version: &'static str) -> Result<Self, BoxError> {
        #[cfg(debug_assertions)]
        let path_context = PathContext::with_base_path(
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join(".out"),
            A::STUDIO,
            A::PROJECT_ID,
            A::APP_ID,
        );
        #[cfg(not(debug_assertions))]
        let path_context = PathContext::new(A::STUDIO, A::PROJECT_ID, A::APP_ID);

        Self::with_path_context(path_context, version)
    }

    pub fn with_base_path(base_path: PathBuf, version: &'static str) -> Result<Self, BoxError> {
        let path_context =
            PathContext::with_base_path(base_path, A::STUDIO, A::PROJECT_ID, A::APP_ID);
        Self::with_path_context(path_context, version)
    }

    fn with_path_context(
        path_context: PathContext,
        version: &'static str,
    ) -> Result<Self, BoxError> {
        path_context.ensure_directories()?;

        let log_file_path = path_context.log_file_now();
        let log_dir = log_file_path
            .parent()
            .ok_or("log file path has no parent directory")?;
        let log_filename = log_file_path
            .file_name()
            .ok_or("log file path has no file name")?;

        let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        #[cfg(debug_assertions)]
        let default_level = "info";
        #[cfg(not(debug_assertions))]
        let default_level = "warn";

        // RUST_LOG wins over the build-dependent default.
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},wgpu=error,naga=warn")));

        let file_layer = fmt::Layer::default()
            .with_target(true)
            .with_ansi(false)
            .with_writer(non_blocking);

        let console_layer = fmt::Layer::default().with_target(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .with(tracing_error::ErrorLayer::default())
            .try_init()?;

        tracing::info!(
            target: LOG_MAIN,
            "{} {} ({:?}) logging to {}",
            A::APP_ID,
            version,
            path_context.environment(),
            log_file_path.display()
        );

        Ok(Self {
            context: AppContext {
                path_context,
                version,
                _log_guard: guard,
            },
            _marker: PhantomData,
        })
    }

    /// Build an application without Bevy.
    pub fn build_simple(self) -> AppContext {
        self.context
    }

    /// Build a Bevy-based application.
    ///
    /// The `configure` callback receives the Bevy `App` by value and the
    /// `AppContext`, and must return the configured App. It may fail, e.g.
    /// when the settings file cannot be read.
    #[cfg(feature = "bevy")]
    pub fn build_with_bevy(
        self,
        configure: impl FnOnce(
            bevy::prelude::App,
            &AppContext,
        ) -> Result<bevy::prelude::App, BoxError>,
    ) -> Result<BevyApp<A>, BoxError> {
        let app = configure(bevy::prelude::App::new(), &self.context)?;
        Ok(BevyApp {
            context: self.context,
            app,
            _marker: PhantomData,
        })
    }
}

/// Bevy-based application wrapper.
///
/// Owns the context so logging stays alive for as long as the app runs.
#[cfg(feature = "bevy")]
pub struct BevyApp<A: Application> {
    pub context: AppContext,
    pub app: bevy::prelude::App,
    _marker: PhantomData<A>,
}

#[cfg(feature = "bevy")]
impl<A: Application> BevyApp<A> {
    pub fn run(&mut self) -> bevy::app::AppExit {
        self.app.run()
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn app_mut(&mut self) -> &mut bevy::prelude::App {
        &mut self.app
    }
}
