use crate::PwError;

/// Scalar type used across the calculators
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparison
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Shorthand for [`nearly_equal`] with [`Tolerances::default`].
pub fn nearly_equal_default(a: Real, b: Real) -> bool {
    nearly_equal(a, b, Tolerances::default())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PwError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PwError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(19.48, 19.48 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(9.81, 9.81 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_finite_detects_infinity() {
        assert!(ensure_finite(Real::INFINITY, "test").is_err());
        assert!(ensure_finite(-1.5e3, "test").is_ok());
    }

    proptest! {
        #[test]
        fn nearly_equal_is_reflexive_and_symmetric(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assert!(nearly_equal_default(a, a));
            prop_assert_eq!(nearly_equal_default(a, b), nearly_equal_default(b, a));
        }
    }
}
