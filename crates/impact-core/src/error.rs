use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImpactError {
    #[error("task description is empty: pass it as an argument or on stdin")]
    EmptyInput,

    #[error("invalid dimension '{0}': expected risk, complexity, or scope")]
    InvalidDimension(String),

    #[error("invalid strategy '{0}'")]
    InvalidStrategy(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ImpactError>;
