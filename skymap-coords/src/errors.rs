use skymap_core::CoreError;
use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Error)]
pub enum CoordError {
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error("Core validation failed: {source}")]
    CoreError {
        #[from]
        source: CoreError,
    },
}

impl CoordError {
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_coordinate_message() {
        let err = CoordError::invalid_coordinate("azimuth 361\u{b0} outside [0\u{b0}, 360\u{b0})");
        assert!(err.to_string().contains("azimuth 361"));
    }

    #[test]
    fn test_wraps_core_error() {
        let core = CoreError::out_of_domain("latitude", 95.0, "[-90, 90]");
        let err: CoordError = core.into();
        assert!(err.to_string().contains("Core validation failed"));
    }
}
