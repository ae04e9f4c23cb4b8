//! Recursive polarization accumulators for dispersive materials.
//!
//! Each dispersive pole carries one grid-sized accumulator per
//! electric-field component. The accumulators advance in two stages per
//! time step: the electric pass folds in the pre-update field, the
//! polarization pass completes the recursion with the settled field.

use crate::arrays::Dimensions;
use crate::scalar::PoleScalar;

/// Per-pole accumulator grids for one field component.
///
/// Storage is pole-major: pole `p` occupies one contiguous grid-sized slab
/// starting at `p * pole_stride()`, so the offset of a cell inside a slab
/// equals the field array's linear index.
#[derive(Clone, Debug)]
pub struct PolarizationField<S> {
    dims: Dimensions,
    max_poles: usize,
    data: Vec<S>,
}

impl<S: PoleScalar> PolarizationField<S> {
    /// Create zero-initialized accumulators for `max_poles` poles.
    pub fn new(dims: Dimensions, max_poles: usize) -> Self {
        Self {
            dims,
            max_poles,
            data: vec![S::zero(); max_poles * dims.total()],
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn max_poles(&self) -> usize {
        self.max_poles
    }

    /// Distance between consecutive pole slabs.
    #[inline]
    pub fn pole_stride(&self) -> usize {
        self.dims.total()
    }

    /// Accumulator of pole `pole` at cell `(i, j, k)`.
    #[inline]
    pub fn get(&self, pole: usize, i: usize, j: usize, k: usize) -> S {
        self.data[pole * self.pole_stride() + self.dims.to_linear(i, j, k)]
    }

    /// Set the accumulator of pole `pole` at cell `(i, j, k)`.
    #[inline]
    pub fn set(&mut self, pole: usize, i: usize, j: usize, k: usize, value: S) {
        let idx = pole * self.pole_stride() + self.dims.to_linear(i, j, k);
        self.data[idx] = value;
    }

    /// Reset all accumulators to zero.
    pub fn clear(&mut self) {
        self.data.fill(S::zero());
    }

    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.data
    }

    pub fn as_ptr(&self) -> *const S {
        self.data.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut S {
        self.data.as_mut_ptr()
    }
}

/// Polarization accumulators for all three electric-field components.
#[derive(Clone, Debug)]
pub struct PolarizationState<S> {
    pub x: PolarizationField<S>,
    pub y: PolarizationField<S>,
    pub z: PolarizationField<S>,
}

impl<S: PoleScalar> PolarizationState<S> {
    /// Create zero-initialized state for `max_poles` poles per component.
    pub fn new(dims: Dimensions, max_poles: usize) -> Self {
        Self {
            x: PolarizationField::new(dims, max_poles),
            y: PolarizationField::new(dims, max_poles),
            z: PolarizationField::new(dims, max_poles),
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.x.dims()
    }

    pub fn max_poles(&self) -> usize {
        self.x.max_poles()
    }

    /// Reset all components to zero.
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.z.clear();
    }
}
