//! Electric pass: field update plus polarization pre-advance.
//!
//! Each component reads its two transverse H differences against the
//! backward staggered neighbors, so the transverse loop axes start at 1
//! while the component's own axis covers its full extent. The outer `i`
//! axis is partitioned into contiguous blocks; a worker writes only its
//! blocks of the component field and its polarization slabs, all other
//! accesses are reads.

use super::{PoleUpdate, SendPtr, SendPtrMut};
use crate::arrays::{Dimensions, Field3D, VectorField3D};
use crate::materials::{DispersionTable, MaterialId, MaterialMap, UpdateCoefficients};
use crate::partition::WorkerPool;
use crate::polarization::{PolarizationField, PolarizationState};
use crate::scalar::PoleScalar;

pub(super) fn run<S, P>(
    pool: &WorkerPool,
    coeffs: &UpdateCoefficients<S::Real>,
    dispersion: &DispersionTable<S>,
    materials: &MaterialMap,
    state: &mut PolarizationState<S>,
    e: &mut VectorField3D<S::Real>,
    h: &VectorField3D<S::Real>,
) where
    S: PoleScalar,
    P: PoleUpdate,
{
    let dims = e.dims();
    update_ex::<S, P>(
        pool,
        dims,
        coeffs,
        dispersion,
        materials.component(0),
        &mut state.x,
        &mut e.x,
        &h.y,
        &h.z,
    );
    update_ey::<S, P>(
        pool,
        dims,
        coeffs,
        dispersion,
        materials.component(1),
        &mut state.y,
        &mut e.y,
        &h.x,
        &h.z,
    );
    update_ez::<S, P>(
        pool,
        dims,
        coeffs,
        dispersion,
        materials.component(2),
        &mut state.z,
        &mut e.z,
        &h.x,
        &h.y,
    );
}

/// Ex update with transverse stencils along y and z.
#[allow(clippy::too_many_arguments)]
fn update_ex<S, P>(
    pool: &WorkerPool,
    dims: Dimensions,
    coeffs: &UpdateCoefficients<S::Real>,
    dispersion: &DispersionTable<S>,
    ids: &[MaterialId],
    tx: &mut PolarizationField<S>,
    ex: &mut Field3D<S::Real>,
    hy: &Field3D<S::Real>,
    hz: &Field3D<S::Real>,
) where
    S: PoleScalar,
    P: PoleUpdate,
{
    if dims.ny == 1 && dims.nz == 1 {
        return;
    }
    let rows = coeffs.as_rows();
    let stride = tx.pole_stride();
    let ex_ptr = SendPtrMut::new(ex.as_mut_ptr());
    let tx_ptr = SendPtrMut::new(tx.as_mut_ptr());
    let hy_ptr = SendPtr::new(hy.as_ptr());
    let hz_ptr = SendPtr::new(hz.as_ptr());

    pool.run(0..dims.nx, |i_block| {
        for i in i_block {
            for j in 1..dims.ny {
                for k in 1..dims.nz {
                    let idx = dims.to_linear(i, j, k);
                    let m = ids[idx];
                    let c = rows[m as usize];
                    let poles = dispersion.poles(m);

                    unsafe {
                        let e_old = *ex_ptr.add(idx);
                        let phi = P::couple(poles, tx_ptr, idx, stride, e_old);

                        let dhz_dy = *hz_ptr.add(idx) - *hz_ptr.add(dims.to_linear(i, j - 1, k));
                        let dhy_dz = *hy_ptr.add(idx) - *hy_ptr.add(dims.to_linear(i, j, k - 1));

                        *ex_ptr.add(idx) =
                            c.ca * e_old + c.cb_y * dhz_dy - c.cb_z * dhy_dz - c.ce * phi;
                    }
                }
            }
        }
    });
}

/// Ey update with transverse stencils along z and x.
#[allow(clippy::too_many_arguments)]
fn update_ey<S, P>(
    pool: &WorkerPool,
    dims: Dimensions,
    coeffs: &UpdateCoefficients<S::Real>,
    dispersion: &DispersionTable<S>,
    ids: &[MaterialId],
    ty: &mut PolarizationField<S>,
    ey: &mut Field3D<S::Real>,
    hx: &Field3D<S::Real>,
    hz: &Field3D<S::Real>,
) where
    S: PoleScalar,
    P: PoleUpdate,
{
    if dims.nx == 1 && dims.nz == 1 {
        return;
    }
    let rows = coeffs.as_rows();
    let stride = ty.pole_stride();
    let ey_ptr = SendPtrMut::new(ey.as_mut_ptr());
    let ty_ptr = SendPtrMut::new(ty.as_mut_ptr());
    let hx_ptr = SendPtr::new(hx.as_ptr());
    let hz_ptr = SendPtr::new(hz.as_ptr());

    pool.run(1..dims.nx, |i_block| {
        for i in i_block {
            for j in 0..dims.ny {
                for k in 1..dims.nz {
                    let idx = dims.to_linear(i, j, k);
                    let m = ids[idx];
                    let c = rows[m as usize];
                    let poles = dispersion.poles(m);

                    unsafe {
                        let e_old = *ey_ptr.add(idx);
                        let phi = P::couple(poles, ty_ptr, idx, stride, e_old);

                        let dhx_dz = *hx_ptr.add(idx) - *hx_ptr.add(dims.to_linear(i, j, k - 1));
                        let dhz_dx = *hz_ptr.add(idx) - *hz_ptr.add(dims.to_linear(i - 1, j, k));

                        *ey_ptr.add(idx) =
                            c.ca * e_old + c.cb_z * dhx_dz - c.cb_x * dhz_dx - c.ce * phi;
                    }
                }
            }
        }
    });
}

/// Ez update with transverse stencils along x and y.
#[allow(clippy::too_many_arguments)]
fn update_ez<S, P>(
    pool: &WorkerPool,
    dims: Dimensions,
    coeffs: &UpdateCoefficients<S::Real>,
    dispersion: &DispersionTable<S>,
    ids: &[MaterialId],
    tz: &mut PolarizationField<S>,
    ez: &mut Field3D<S::Real>,
    hx: &Field3D<S::Real>,
    hy: &Field3D<S::Real>,
) where
    S: PoleScalar,
    P: PoleUpdate,
{
    if dims.nx == 1 && dims.ny == 1 {
        return;
    }
    let rows = coeffs.as_rows();
    let stride = tz.pole_stride();
    let ez_ptr = SendPtrMut::new(ez.as_mut_ptr());
    let tz_ptr = SendPtrMut::new(tz.as_mut_ptr());
    let hx_ptr = SendPtr::new(hx.as_ptr());
    let hy_ptr = SendPtr::new(hy.as_ptr());

    pool.run(1..dims.nx, |i_block| {
        for i in i_block {
            for j in 1..dims.ny {
                for k in 0..dims.nz {
                    let idx = dims.to_linear(i, j, k);
                    let m = ids[idx];
                    let c = rows[m as usize];
                    let poles = dispersion.poles(m);

                    unsafe {
                        let e_old = *ez_ptr.add(idx);
                        let phi = P::couple(poles, tz_ptr, idx, stride, e_old);

                        let dhy_dx = *hy_ptr.add(idx) - *hy_ptr.add(dims.to_linear(i - 1, j, k));
                        let dhx_dy = *hx_ptr.add(idx) - *hx_ptr.add(dims.to_linear(i, j - 1, k));

                        *ez_ptr.add(idx) =
                            c.ca * e_old + c.cb_x * dhy_dx - c.cb_y * dhx_dy - c.ce * phi;
                    }
                }
            }
        }
    });
}
