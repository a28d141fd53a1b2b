use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum DriftError {
    #[error("required input is unreadable: {path}")]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to walk {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("invalid config {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl DriftError {
    pub fn missing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DriftError::MissingInput {
            path: path.into(),
            source,
        }
    }
}
