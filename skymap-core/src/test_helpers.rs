//! Float comparison helpers shared by the workspace test suites.

/// Maps an `f64` onto the integers so ULP distance is a subtraction.
#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

/// Distance between two floats in units of least precision.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    f64_to_ordered_u64(a).abs_diff(f64_to_ordered_u64(b))
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(a.is_finite() && b.is_finite(), "non-finite value in {}", ctx);
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP distance {} exceeds {} (a={}, b={})",
        ctx,
        d,
        max_ulp,
        a,
        b
    );
}

/// Asserts two floats differ by at most `max_ulp` units of least precision.
#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!("{} vs {}", stringify!($a), stringify!($b)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulp_diff_adjacent() {
        let a = 1.0f64;
        let b = f64::from_bits(a.to_bits() + 1);
        assert_eq!(ulp_diff(a, b), 1);
        assert_eq!(ulp_diff(a, a), 0);
    }

    #[test]
    fn test_ulp_diff_across_zero() {
        assert_eq!(ulp_diff(0.0, -0.0), 1);
    }

    #[test]
    fn test_macro_accepts_equal_values() {
        assert_ulp_lt!(1.5, 1.5, 0);
        assert_ulp_lt!(0.0, 0.0, 0);
    }
}
