//! Scalar types for dispersion coefficients and polarization accumulators.
//!
//! Relaxation poles have real coefficients for Debye-like media and complex
//! coefficients for resonant (Lorentz/Drude pair) media. The update kernels
//! are generic over [`PoleScalar`] so both variants share one code path;
//! the field arrays always hold the associated real type, and only the real
//! part of the weighted accumulator ever reaches the field equation.

use num_complex::Complex;
use num_traits::{Float, Zero};
use std::ops::{Add, Mul, Sub};

/// Scalar type usable for pole coefficients and per-pole accumulators.
///
/// Implemented for `f32`, `f64`, and their `Complex` counterparts. `Real`
/// is the matching field scalar.
pub trait PoleScalar:
    Copy
    + Send
    + Sync
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + 'static
{
    /// Field scalar paired with this pole scalar.
    type Real: Float + Default + Send + Sync + 'static;

    /// Embed a real value.
    fn from_real(value: Self::Real) -> Self;

    /// Real part.
    fn real(self) -> Self::Real;

    /// Scale by a real value.
    fn mul_real(self, value: Self::Real) -> Self;
}

impl PoleScalar for f32 {
    type Real = f32;

    #[inline]
    fn from_real(value: f32) -> Self {
        value
    }

    #[inline]
    fn real(self) -> f32 {
        self
    }

    #[inline]
    fn mul_real(self, value: f32) -> Self {
        self * value
    }
}

impl PoleScalar for f64 {
    type Real = f64;

    #[inline]
    fn from_real(value: f64) -> Self {
        value
    }

    #[inline]
    fn real(self) -> f64 {
        self
    }

    #[inline]
    fn mul_real(self, value: f64) -> Self {
        self * value
    }
}

impl<R> PoleScalar for Complex<R>
where
    R: Float + Default + Send + Sync + 'static,
{
    type Real = R;

    #[inline]
    fn from_real(value: R) -> Self {
        Complex::new(value, R::zero())
    }

    #[inline]
    fn real(self) -> R {
        self.re
    }

    #[inline]
    fn mul_real(self, value: R) -> Self {
        self.scale(value)
    }
}
