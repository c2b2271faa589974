use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown placeholder token: {0}")]
    UnknownToken(String),

    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}
