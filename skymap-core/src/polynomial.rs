//! Horner-evaluated polynomials for astronomical time-series models.
//!
//! The long-period models in this workspace (mean obliquity of the
//! ecliptic, the mean sidereal polynomial) are low-order polynomials in
//! Julian centuries. Horner's method evaluates them in `O(n)` with one
//! multiply-add per coefficient and better numerical behavior than naive
//! power summation.
//!
//! Coefficients are ordered **highest degree first** throughout:
//! `[a, b, c]` is `a x^2 + b x + c`.
//!
//! ```
//! use skymap_core::Polynomial;
//!
//! let p = Polynomial::new(vec![2.0, -3.0, 1.0])?; // 2x^2 - 3x + 1
//! assert_eq!(p.at(2.0), 3.0);
//! assert_eq!(p.degree(), 2);
//! # Ok::<(), skymap_core::CoreError>(())
//! ```
//!
//! Fixed built-in models are stored as `const` coefficient arrays and fed
//! to [`horner`] directly; [`Polynomial`] adds validation on top for
//! coefficients assembled at runtime.

use crate::errors::{CoreError, CoreResult};
use std::fmt;

/// Evaluates a polynomial with coefficients ordered highest degree first.
///
/// An empty slice evaluates to `0.0`.
#[inline]
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    let mut value = 0.0;
    for &c in coeffs {
        value = value * x + c;
    }
    value
}

/// A validated polynomial with coefficients ordered highest degree first.
///
/// The leading coefficient is guaranteed non-zero, so [`degree`](Self::degree)
/// is exact.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from its coefficients, highest degree first.
    ///
    /// # Errors
    ///
    /// Fails when the coefficient list is empty, when the leading
    /// coefficient is zero, or when any coefficient is not finite.
    pub fn new(coeffs: Vec<f64>) -> CoreResult<Self> {
        let leading = *coeffs
            .first()
            .ok_or_else(|| CoreError::invalid_polynomial("no coefficients"))?;
        if leading == 0.0 {
            return Err(CoreError::invalid_polynomial("leading coefficient is zero"));
        }
        if let Some(bad) = coeffs.iter().find(|c| !c.is_finite()) {
            return Err(CoreError::invalid_polynomial(format!(
                "non-finite coefficient {}",
                bad
            )));
        }
        Ok(Self { coeffs })
    }

    /// Evaluates the polynomial at `x` via Horner's method.
    #[inline]
    pub fn at(&self, x: f64) -> f64 {
        horner(&self.coeffs, x)
    }

    /// The polynomial's degree (0 for a constant).
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The coefficients, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 && degree > 0 {
                continue;
            }
            let power = degree - i;
            if i == 0 {
                write!(f, "{}", c)?;
            } else if c < 0.0 {
                write!(f, " - {}", -c)?;
            } else {
                write!(f, " + {}", c)?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", power)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horner_matches_expanded_form() {
        // 2x^3 - x^2 + 4x - 7 at x = 3: 54 - 9 + 12 - 7 = 50
        assert_eq!(horner(&[2.0, -1.0, 4.0, -7.0], 3.0), 50.0);
        assert_eq!(horner(&[5.0], 123.0), 5.0);
        assert_eq!(horner(&[], 1.0), 0.0);
    }

    #[test]
    fn test_construction_rejects_degenerate_input() {
        assert!(Polynomial::new(vec![]).is_err());
        assert!(Polynomial::new(vec![0.0, 1.0]).is_err());
        assert!(Polynomial::new(vec![1.0, f64::NAN]).is_err());
        assert!(Polynomial::new(vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_at_and_degree() {
        let p = Polynomial::new(vec![1.0, 0.0, -1.0]).unwrap(); // x^2 - 1
        assert_eq!(p.degree(), 2);
        assert_eq!(p.at(0.0), -1.0);
        assert_eq!(p.at(1.0), 0.0);
        assert_eq!(p.at(-2.0), 3.0);
    }

    #[test]
    fn test_constant_polynomial() {
        let p = Polynomial::new(vec![4.5]).unwrap();
        assert_eq!(p.degree(), 0);
        assert_eq!(p.at(1e9), 4.5);
    }

    #[test]
    fn test_display() {
        let p = Polynomial::new(vec![2.0, -3.0, 0.0, 1.0]).unwrap();
        assert_eq!(p.to_string(), "2x^3 - 3x^2 + 1");

        let constant = Polynomial::new(vec![-0.5]).unwrap();
        assert_eq!(constant.to_string(), "-0.5");
    }
}
