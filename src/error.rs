use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A raw record cannot be converted without producing `inf`/`NaN`.
    #[error("data integrity violation for `{name}`: {reason}")]
    DataIntegrity { name: String, reason: String },

    #[error("rendering failed: {0}")]
    Rendering(String),

    #[error("output target requires the `{0}` feature")]
    BackendUnavailable(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub(crate) fn data_integrity(name: &str, reason: impl Into<String>) -> Self {
        Self::DataIntegrity {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }
}
