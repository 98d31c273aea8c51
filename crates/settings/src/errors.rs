use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is not valid RON: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),

    #[error("section `{0}` is not registered")]
    NotRegistered(&'static str),

    #[error("section `{0}` is already registered")]
    AlreadyRegistered(&'static str),

    #[error("section `{0}` must serialize to a struct or map")]
    NotAMap(&'static str),

    #[error("settings file not specified")]
    MissingFile,

    #[error("settings lock poisoned")]
    Poisoned,
}
