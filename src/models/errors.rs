use thiserror::Error;

/// Errors raised while building engine structures or loading configuration.
///
/// Per-tick operations never return these; they degrade gracefully instead.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// Grid cells must have a positive, finite edge length
    #[error("invalid grid cell size: {0}")]
    InvalidCellSize(f64),
    /// Camera zoom must be positive and finite
    #[error("invalid camera zoom: {0}")]
    InvalidZoom(f64),
    /// Viewport dimensions must be positive and finite
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    /// A tunable or setting is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using SpatialError
pub type SpatialResult<T> = Result<T, SpatialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_bad_value() {
        assert_eq!(
            SpatialError::InvalidCellSize(-5.0).to_string(),
            "invalid grid cell size: -5"
        );
        assert_eq!(
            SpatialError::InvalidViewport {
                width: 0.0,
                height: 600.0
            }
            .to_string(),
            "invalid viewport 0x600"
        );
    }

    #[test]
    fn json_errors_convert() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: SpatialError = err.into();
        assert!(matches!(err, SpatialError::Json(_)));
    }
}
