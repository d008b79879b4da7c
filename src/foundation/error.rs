/// Convenience result type used across reelcharts.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Structurally malformed dataset (missing columns, broken rows).
    #[error("data error: {0}")]
    Data(String),

    /// The dataset resource could not be fetched at all.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// Invalid user-provided configuration or control input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A scene was driven in a state that cannot produce a chart.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// SVG parsing or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`ReelError::DataUnavailable`] value.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }

    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for errors that leave a scene without data (fetch or parse failures).
    pub fn is_data_failure(&self) -> bool {
        matches!(self, Self::Data(_) | Self::DataUnavailable(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
