//! Material indexing and per-material update coefficients.
//!
//! The host solver precomputes two tables per simulation: the five
//! electric-field update weights of every material and, for dispersive
//! materials, the per-pole recursion coefficients. Cells reference table
//! rows through per-component ID grids, one grid per electric-field
//! component because the staggered component locations of one cell can sit
//! in different materials.

use crate::arrays::Dimensions;
use crate::scalar::PoleScalar;
use std::ops::Range;

/// Index into the per-material coefficient tables.
pub type MaterialId = u32;

/// The five electric-field update weights of one material.
///
/// `ca` weighs the previous field value, `cb_x`/`cb_y`/`cb_z` weigh the
/// H-field difference along the named axis in the curl term, and `ce`
/// weighs the dispersive loss term.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MaterialCoefficients<R> {
    pub ca: R,
    pub cb_x: R,
    pub cb_y: R,
    pub cb_z: R,
    pub ce: R,
}

/// Per-material table of electric-field update weights.
#[derive(Clone, Debug)]
pub struct UpdateCoefficients<R> {
    rows: Vec<MaterialCoefficients<R>>,
}

impl<R: Copy> UpdateCoefficients<R> {
    /// Build the table from one row per material.
    pub fn from_rows(rows: Vec<MaterialCoefficients<R>>) -> Self {
        log::debug!("coefficient table: {} materials", rows.len());
        Self { rows }
    }

    pub fn num_materials(&self) -> usize {
        self.rows.len()
    }

    /// Coefficients of one material.
    #[inline]
    pub fn row(&self, id: MaterialId) -> MaterialCoefficients<R> {
        self.rows[id as usize]
    }

    pub(crate) fn as_rows(&self) -> &[MaterialCoefficients<R>] {
        &self.rows
    }
}

/// One relaxation pole: loss weight, state decay, and field excitation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoleCoefficients<S> {
    pub w: S,
    pub alpha: S,
    pub beta: S,
}

impl<S: PoleScalar> PoleCoefficients<S> {
    /// Inert pole: contributes nothing and accumulates nothing.
    pub fn zero() -> Self {
        Self {
            w: S::zero(),
            alpha: S::zero(),
            beta: S::zero(),
        }
    }
}

/// Per-material dispersion poles, stored as a dense row-major table.
///
/// Every material row holds exactly `max_poles` triples; materials with
/// fewer physical poles are padded with inert triples so the kernels can
/// run a fixed-length inner loop over any row.
#[derive(Clone, Debug)]
pub struct DispersionTable<S> {
    max_poles: usize,
    num_materials: usize,
    poles: Vec<PoleCoefficients<S>>,
}

impl<S: PoleScalar> DispersionTable<S> {
    /// Build the table from ragged per-material pole lists.
    ///
    /// The table-wide pole count becomes the longest row length; shorter
    /// rows are padded with inert poles.
    pub fn from_rows(rows: Vec<Vec<PoleCoefficients<S>>>) -> Self {
        let num_materials = rows.len();
        let max_poles = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut poles = Vec::with_capacity(num_materials * max_poles);
        for row in &rows {
            poles.extend_from_slice(row);
            poles.resize(poles.len() + (max_poles - row.len()), PoleCoefficients::zero());
        }
        log::debug!(
            "dispersion table: {} materials, {} poles each",
            num_materials,
            max_poles
        );
        Self {
            max_poles,
            num_materials,
            poles,
        }
    }

    /// Table for materials without any dispersive poles.
    pub fn empty(num_materials: usize) -> Self {
        Self {
            max_poles: 0,
            num_materials,
            poles: Vec::new(),
        }
    }

    pub fn max_poles(&self) -> usize {
        self.max_poles
    }

    pub fn num_materials(&self) -> usize {
        self.num_materials
    }

    /// Pole row of one material (`max_poles` entries).
    #[inline]
    pub fn poles(&self, id: MaterialId) -> &[PoleCoefficients<S>] {
        let start = id as usize * self.max_poles;
        &self.poles[start..start + self.max_poles]
    }
}

/// Per-component material ID grids (component axis 0 = x, 1 = y, 2 = z).
#[derive(Clone, Debug)]
pub struct MaterialMap {
    dims: Dimensions,
    ids: [Vec<MaterialId>; 3],
}

impl MaterialMap {
    /// Map with every component cell assigned material 0.
    pub fn new(dims: Dimensions) -> Self {
        let total = dims.total();
        Self {
            dims,
            ids: [vec![0; total], vec![0; total], vec![0; total]],
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Assign one material to every component cell.
    pub fn fill(&mut self, id: MaterialId) {
        for component in &mut self.ids {
            component.fill(id);
        }
    }

    /// Assign `id` to all three component grids over an index region.
    pub fn set_region(
        &mut self,
        id: MaterialId,
        x: Range<usize>,
        y: Range<usize>,
        z: Range<usize>,
    ) {
        for component in &mut self.ids {
            for i in x.clone() {
                for j in y.clone() {
                    for k in z.clone() {
                        component[self.dims.to_linear(i, j, k)] = id;
                    }
                }
            }
        }
    }

    /// Material ID at one component cell.
    #[inline]
    pub fn get(&self, component: usize, i: usize, j: usize, k: usize) -> MaterialId {
        self.ids[component][self.dims.to_linear(i, j, k)]
    }

    /// Set the material ID at one component cell.
    #[inline]
    pub fn set(&mut self, component: usize, i: usize, j: usize, k: usize, id: MaterialId) {
        let idx = self.dims.to_linear(i, j, k);
        self.ids[component][idx] = id;
    }

    pub(crate) fn component(&self, component: usize) -> &[MaterialId] {
        &self.ids[component]
    }
}
