//! Dispersive-material electric-field updates for FDTD grids.
//!
//! This crate implements the two per-step passes of the
//! auxiliary-differential-equation (ADE) treatment of frequency-dispersive
//! media: an electric pass that advances `Ex`/`Ey`/`Ez` through the curl of
//! `H` plus a recursive per-pole loss term, and a polarization pass that
//! completes the pole accumulator recursion once the driver has settled the
//! fields. Grid construction, coefficient derivation, boundary conditions,
//! and sources all live in the host solver; the kernels here only consume
//! precomputed tables.
//!
//! Real (`f32`/`f64`) and complex pole coefficients share one generic code
//! path through [`scalar::PoleScalar`], and the same kernels run serially
//! or on a fixed worker pool with bit-identical results.

pub mod arrays;
pub mod constants;
pub mod materials;
pub mod partition;
pub mod polarization;
pub mod scalar;
pub mod update;

pub use arrays::{Dimensions, Field3D, VectorField3D};
pub use materials::{
    DispersionTable, MaterialCoefficients, MaterialId, MaterialMap, PoleCoefficients,
    UpdateCoefficients,
};
pub use partition::WorkerPool;
pub use polarization::{PolarizationField, PolarizationState};
pub use scalar::PoleScalar;
pub use update::{update_electric, update_polarization};

/// Crate error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration request.
    #[error("configuration error: {0}")]
    Config(String),
    /// Worker pool construction failed.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;
