use thiserror::Error;

#[derive(Debug, Error)]
pub enum PitchForgeError {
    #[error("not initialized: run 'pitchforge init'")]
    NotInitialized,

    #[error("brief not found: {0}")]
    BriefNotFound(String),

    #[error("case study not found: {0}")]
    CaseStudyNotFound(String),

    #[error("pitch not found: {0}")]
    PitchNotFound(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("invalid credentials for {0}")]
    InvalidCredentials(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("invalid {kind}: missing required field '{field}'")]
    MissingField { kind: &'static str, field: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PitchForgeError>;
