use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    FileParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unknown feature flag: {0}")]
    UnknownFlag(String),
}
