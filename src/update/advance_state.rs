//! Polarization pass: complete the accumulator recursion.
//!
//! Runs over exactly the cells the electric pass touched, with the same
//! degenerate-axis guards, and subtracts the excitation term computed from
//! the settled field. All three components share one loop body because no
//! curl stencil is involved.

use super::{PoleUpdate, SendPtr, SendPtrMut};
use crate::arrays::{Dimensions, Field3D, VectorField3D};
use crate::materials::{DispersionTable, MaterialId, MaterialMap};
use crate::partition::WorkerPool;
use crate::polarization::{PolarizationField, PolarizationState};
use crate::scalar::PoleScalar;
use std::ops::Range;

pub(super) fn run<S, P>(
    pool: &WorkerPool,
    dispersion: &DispersionTable<S>,
    materials: &MaterialMap,
    state: &mut PolarizationState<S>,
    e: &VectorField3D<S::Real>,
) where
    S: PoleScalar,
    P: PoleUpdate,
{
    let dims = e.dims();
    let Dimensions { nx, ny, nz } = dims;

    if !(ny == 1 && nz == 1) {
        update_component::<S, P>(
            pool,
            dims,
            dispersion,
            materials.component(0),
            &mut state.x,
            &e.x,
            0..nx,
            1..ny,
            1..nz,
        );
    }
    if !(nx == 1 && nz == 1) {
        update_component::<S, P>(
            pool,
            dims,
            dispersion,
            materials.component(1),
            &mut state.y,
            &e.y,
            1..nx,
            0..ny,
            1..nz,
        );
    }
    if !(nx == 1 && ny == 1) {
        update_component::<S, P>(
            pool,
            dims,
            dispersion,
            materials.component(2),
            &mut state.z,
            &e.z,
            1..nx,
            1..ny,
            0..nz,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn update_component<S, P>(
    pool: &WorkerPool,
    dims: Dimensions,
    dispersion: &DispersionTable<S>,
    ids: &[MaterialId],
    t: &mut PolarizationField<S>,
    e: &Field3D<S::Real>,
    i_span: Range<usize>,
    j_span: Range<usize>,
    k_span: Range<usize>,
) where
    S: PoleScalar,
    P: PoleUpdate,
{
    let stride = t.pole_stride();
    let t_ptr = SendPtrMut::new(t.as_mut_ptr());
    let e_ptr = SendPtr::new(e.as_ptr());

    pool.run(i_span, |i_block| {
        for i in i_block {
            for j in j_span.clone() {
                for k in k_span.clone() {
                    let idx = dims.to_linear(i, j, k);
                    let m = ids[idx];
                    let poles = dispersion.poles(m);

                    unsafe {
                        let e_now = *e_ptr.add(idx);
                        P::settle(poles, t_ptr, idx, stride, e_now);
                    }
                }
            }
        }
    });
}
