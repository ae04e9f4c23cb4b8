//! Dispersive electric-field update kernels.
//!
//! A time step touches the dispersive state twice. [`update_electric`]
//! advances `Ex`/`Ey`/`Ez` through the curl of `H` plus the recursive
//! per-pole loss term, folding the pre-update field into the polarization
//! accumulators in the same pass. After the driver has run its remaining
//! per-step stages (boundary updates, source injection) over the fields,
//! [`update_polarization`] completes the accumulator recursion with the
//! settled field values. For any component the two calls must alternate,
//! electric pass first.
//!
//! Both kernels are generic over the pole scalar and pick a pole-count
//! strategy once per call: a fixed-length loop over each material's pole
//! row, or an unrolled path for single-pole tables.

mod advance;
mod advance_state;

use crate::arrays::VectorField3D;
use crate::materials::{DispersionTable, MaterialMap, PoleCoefficients, UpdateCoefficients};
use crate::partition::WorkerPool;
use crate::polarization::PolarizationState;
use crate::scalar::PoleScalar;

/// Wrapper for raw pointer to make it Send + Sync for parallel iteration.
///
/// # Safety
/// The caller must ensure that concurrent access patterns are safe:
/// - Either only reading from the pointer
/// - Or writing to non-overlapping regions
#[derive(Copy, Clone)]
struct SendPtr<T>(*const T);

unsafe impl<T> Send for SendPtr<T> {}
unsafe impl<T> Sync for SendPtr<T> {}

impl<T> SendPtr<T> {
    #[inline]
    fn new(ptr: *const T) -> Self {
        Self(ptr)
    }

    #[inline]
    unsafe fn add(&self, offset: usize) -> *const T {
        self.0.add(offset)
    }
}

/// Mutable version of SendPtr.
#[derive(Copy, Clone)]
struct SendPtrMut<T>(*mut T);

unsafe impl<T> Send for SendPtrMut<T> {}
unsafe impl<T> Sync for SendPtrMut<T> {}

impl<T> SendPtrMut<T> {
    #[inline]
    fn new(ptr: *mut T) -> Self {
        Self(ptr)
    }

    #[inline]
    unsafe fn add(&self, offset: usize) -> *mut T {
        self.0.add(offset)
    }
}

/// Per-cell pole handling, selected once per kernel call.
trait PoleUpdate {
    /// Accumulate the real-projected loss sum for one cell and pre-advance
    /// the cell's accumulators with the pre-update field value.
    ///
    /// # Safety
    /// `cell + pole * stride` must be in bounds of `t` for every entry of
    /// `poles`.
    unsafe fn couple<S: PoleScalar>(
        poles: &[PoleCoefficients<S>],
        t: SendPtrMut<S>,
        cell: usize,
        stride: usize,
        e_old: S::Real,
    ) -> S::Real;

    /// Complete the accumulator recursion for one cell with the settled
    /// field value.
    ///
    /// # Safety
    /// Same bounds contract as [`PoleUpdate::couple`].
    unsafe fn settle<S: PoleScalar>(
        poles: &[PoleCoefficients<S>],
        t: SendPtrMut<S>,
        cell: usize,
        stride: usize,
        e_now: S::Real,
    );
}

/// General pole loop; also covers tables without any poles.
struct MultiPole;

/// Unrolled path for single-pole tables.
struct SinglePole;

impl PoleUpdate for MultiPole {
    #[inline]
    unsafe fn couple<S: PoleScalar>(
        poles: &[PoleCoefficients<S>],
        t: SendPtrMut<S>,
        cell: usize,
        stride: usize,
        e_old: S::Real,
    ) -> S::Real {
        let mut phi = S::zero().real();
        for (p, pole) in poles.iter().enumerate() {
            let slot = t.add(p * stride + cell);
            let t_old = *slot;
            phi = phi + pole.w.real() * t_old.real();
            *slot = pole.alpha * t_old + pole.beta.mul_real(e_old);
        }
        phi
    }

    #[inline]
    unsafe fn settle<S: PoleScalar>(
        poles: &[PoleCoefficients<S>],
        t: SendPtrMut<S>,
        cell: usize,
        stride: usize,
        e_now: S::Real,
    ) {
        for (p, pole) in poles.iter().enumerate() {
            let slot = t.add(p * stride + cell);
            *slot = *slot - pole.beta.mul_real(e_now);
        }
    }
}

impl PoleUpdate for SinglePole {
    #[inline]
    unsafe fn couple<S: PoleScalar>(
        poles: &[PoleCoefficients<S>],
        t: SendPtrMut<S>,
        cell: usize,
        _stride: usize,
        e_old: S::Real,
    ) -> S::Real {
        debug_assert_eq!(poles.len(), 1);
        let pole = poles[0];
        let slot = t.add(cell);
        let t_old = *slot;
        *slot = pole.alpha * t_old + pole.beta.mul_real(e_old);
        pole.w.real() * t_old.real()
    }

    #[inline]
    unsafe fn settle<S: PoleScalar>(
        poles: &[PoleCoefficients<S>],
        t: SendPtrMut<S>,
        cell: usize,
        _stride: usize,
        e_now: S::Real,
    ) {
        debug_assert_eq!(poles.len(), 1);
        let pole = poles[0];
        let slot = t.add(cell);
        *slot = *slot - pole.beta.mul_real(e_now);
    }
}

/// Advance all electric-field components one step through dispersive
/// materials.
///
/// Besides the field update this pre-advances the polarization
/// accumulators with the pre-update field values; for any component the
/// call order within a step is `update_electric` first, then
/// [`update_polarization`] once the driver has settled the fields.
///
/// Components whose transverse axes are both degenerate (extent 1) are
/// skipped entirely.
///
/// # Arguments
/// * `pool` - Worker pool the outer grid axis is partitioned over
/// * `coeffs` - Per-material field update weights
/// * `dispersion` - Per-material pole coefficients
/// * `materials` - Per-component material ID grids
/// * `state` - Polarization accumulators, pre-advanced in place
/// * `e` - Electric field components, updated in place
/// * `h` - Magnetic field components, read only
pub fn update_electric<S: PoleScalar>(
    pool: &WorkerPool,
    coeffs: &UpdateCoefficients<S::Real>,
    dispersion: &DispersionTable<S>,
    materials: &MaterialMap,
    state: &mut PolarizationState<S>,
    e: &mut VectorField3D<S::Real>,
    h: &VectorField3D<S::Real>,
) {
    assert_eq!(e.dims(), h.dims(), "field extents differ");
    assert_eq!(e.dims(), materials.dims(), "material map extent differs from fields");
    assert_eq!(e.dims(), state.dims(), "polarization extent differs from fields");
    assert_eq!(
        dispersion.max_poles(),
        state.max_poles(),
        "pole count mismatch between table and state"
    );
    assert_eq!(
        coeffs.num_materials(),
        dispersion.num_materials(),
        "coefficient tables disagree on material count"
    );

    if dispersion.max_poles() == 1 {
        advance::run::<S, SinglePole>(pool, coeffs, dispersion, materials, state, e, h);
    } else {
        advance::run::<S, MultiPole>(pool, coeffs, dispersion, materials, state, e, h);
    }
}

/// Complete the polarization accumulator recursion with the settled field
/// values.
///
/// Runs over the same cells as [`update_electric`] and subtracts the
/// excitation term computed from whatever the driver left in `e`.
///
/// # Arguments
/// * `pool` - Worker pool the outer grid axis is partitioned over
/// * `dispersion` - Per-material pole coefficients
/// * `materials` - Per-component material ID grids
/// * `state` - Polarization accumulators, completed in place
/// * `e` - Electric field components, read only
pub fn update_polarization<S: PoleScalar>(
    pool: &WorkerPool,
    dispersion: &DispersionTable<S>,
    materials: &MaterialMap,
    state: &mut PolarizationState<S>,
    e: &VectorField3D<S::Real>,
) {
    assert_eq!(e.dims(), materials.dims(), "material map extent differs from fields");
    assert_eq!(e.dims(), state.dims(), "polarization extent differs from fields");
    assert_eq!(
        dispersion.max_poles(),
        state.max_poles(),
        "pole count mismatch between table and state"
    );

    // Nothing accumulates without poles.
    if dispersion.max_poles() == 0 {
        return;
    }

    if dispersion.max_poles() == 1 {
        advance_state::run::<S, SinglePole>(pool, dispersion, materials, state, e);
    } else {
        advance_state::run::<S, MultiPole>(pool, dispersion, materials, state, e);
    }
}
