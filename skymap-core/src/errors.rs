//! Error types for the core value types.
//!
//! Every failure in this crate is a contract violation caught eagerly at
//! construction time: inverted interval bounds, sexagesimal components
//! outside `[0, 60)`, a polynomial with no leading coefficient, or a value
//! outside a coordinate domain. Nothing here is recoverable by retrying —
//! the caller must fix its input.
//!
//! Use the constructor methods for consistent error creation:
//!
//! ```
//! use skymap_core::{CoreError, CoreResult};
//!
//! fn check_fraction(v: f64) -> CoreResult<f64> {
//!     if !(0.0..1.0).contains(&v) {
//!         return Err(CoreError::out_of_domain("fraction", v, "[0, 1)"));
//!     }
//!     Ok(v)
//! }
//! ```

use thiserror::Error;

/// Convenience alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Invalid-argument failures raised by the core value-type factories.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Interval bounds are inverted or equal.
    #[error("Invalid interval: low bound {low} must be strictly below high bound {high}")]
    InvalidInterval { low: f64, high: f64 },

    /// Symmetric interval size is zero, negative, or not finite.
    #[error("Invalid interval size {size}: must be finite and strictly positive")]
    InvalidIntervalSize { size: f64 },

    /// A degrees-minutes-seconds component is outside its range.
    #[error("Invalid sexagesimal component: {message}")]
    InvalidSexagesimal { message: String },

    /// Polynomial coefficient list is empty or has a zero leading coefficient.
    #[error("Invalid polynomial: {message}")]
    InvalidPolynomial { message: String },

    /// A value lies outside the domain of the quantity it was offered to.
    #[error("{quantity} value {value} outside valid domain {domain}")]
    OutOfDomain {
        quantity: String,
        value: f64,
        domain: String,
    },
}

impl CoreError {
    /// Creates an [`InvalidInterval`](Self::InvalidInterval) error.
    pub fn invalid_interval(low: f64, high: f64) -> Self {
        Self::InvalidInterval { low, high }
    }

    /// Creates an [`InvalidIntervalSize`](Self::InvalidIntervalSize) error.
    pub fn invalid_interval_size(size: f64) -> Self {
        Self::InvalidIntervalSize { size }
    }

    /// Creates an [`InvalidSexagesimal`](Self::InvalidSexagesimal) error.
    pub fn invalid_sexagesimal(message: impl Into<String>) -> Self {
        Self::InvalidSexagesimal {
            message: message.into(),
        }
    }

    /// Creates an [`InvalidPolynomial`](Self::InvalidPolynomial) error.
    pub fn invalid_polynomial(message: impl Into<String>) -> Self {
        Self::InvalidPolynomial {
            message: message.into(),
        }
    }

    /// Creates an [`OutOfDomain`](Self::OutOfDomain) error.
    pub fn out_of_domain(quantity: impl Into<String>, value: f64, domain: impl Into<String>) -> Self {
        Self::OutOfDomain {
            quantity: quantity.into(),
            value,
            domain: domain.into(),
        }
    }
}
