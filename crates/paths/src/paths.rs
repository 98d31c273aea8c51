//! Path context for runtime environment detection and project-aware paths.
//!
//! Layout below the base path:
//! ```text
//! <studio>/<project_id>/<app_id>.settings.ron
//! <studio>/<project_id>/logs/<app_id>.<timestamp>.log
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identifies the runtime environment where the application is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnvironment {
    /// Running via `cargo run`
    Development,
    /// Running as an installed binary
    Production,
}

/// Resolves where the application keeps its settings and logs.
#[derive(Debug, Clone)]
pub struct PathContext {
    environment: RuntimeEnvironment,
    base_path: Arc<Path>,
    studio: String,
    project_id: String,
    app_id: &'static str,
}

impl PathContext {
    /// Creates a new PathContext with automatic environment detection.
    pub fn new(
        studio: impl Into<String>,
        project_id: impl Into<String>,
        app_id: &'static str,
    ) -> Self {
        let environment = Self::detect_environment();
        let base_path = Self::determine_base_path(environment);
        Self::with_environment(environment, base_path, studio, project_id, app_id)
    }

    /// Creates a PathContext rooted at an explicit base path (tests, dev builds).
    pub fn with_base_path(
        base_path: PathBuf,
        studio: impl Into<String>,
        project_id: impl Into<String>,
        app_id: &'static str,
    ) -> Self {
        Self::with_environment(
            Self::detect_environment(),
            base_path,
            studio,
            project_id,
            app_id,
        )
    }

    fn with_environment(
        environment: RuntimeEnvironment,
        base_path: PathBuf,
        studio: impl Into<String>,
        project_id: impl Into<String>,
        app_id: &'static str,
    ) -> Self {
        Self {
            environment,
            base_path: base_path.into(),
            studio: studio.into(),
            project_id: project_id.into(),
            app_id,
        }
    }

    fn detect_environment() -> RuntimeEnvironment {
        let in_target_dir = std::env::current_exe()
            .map(|exe| exe.components().any(|c| c.as_os_str() == "target"))
            .unwrap_or(false);

        if in_target_dir || std::env::var_os("CARGO").is_some() {
            RuntimeEnvironment::Development
        } else {
            RuntimeEnvironment::Production
        }
    }

    fn determine_base_path(environment: RuntimeEnvironment) -> PathBuf {
        match environment {
            RuntimeEnvironment::Development => std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".out"),
            // Falls back to the working directory on platforms without a data dir.
            RuntimeEnvironment::Production => {
                dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."))
            }
        }
    }

    pub fn environment(&self) -> RuntimeEnvironment {
        self.environment
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn studio(&self) -> &str {
        &self.studio
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn app_id(&self) -> &'static str {
        self.app_id
    }

    /// `<base>/<studio>/<project_id>`
    pub fn project_root(&self) -> PathBuf {
        self.base_path.join(&self.studio).join(&self.project_id)
    }

    /// `<project_root>/<app_id>.settings.ron`
    pub fn settings_file(&self) -> PathBuf {
        self.project_root()
            .join(format!("{}.settings.ron", self.app_id))
    }

    /// `<project_root>/logs/`
    pub fn logs_dir(&self) -> PathBuf {
        self.project_root().join("logs")
    }

    /// `<project_root>/logs/<app_id>.<timestamp>.log`
    pub fn log_file(&self, timestamp: &str) -> PathBuf {
        self.logs_dir()
            .join(format!("{}.{}.log", self.app_id, timestamp))
    }

    pub fn log_file_now(&self) -> PathBuf {
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
        self.log_file(&timestamp)
    }

    /// Creates the project root and the log directory if missing.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.project_root())?;
        std::fs::create_dir_all(self.logs_dir())
    }
}
