//! Three-dimensional field storage.
//!
//! Every grid-sized array in the crate shares one memory layout: row-major
//! with `i` outermost and `k` contiguous. A run of consecutive `i` values
//! therefore covers disjoint contiguous slabs of memory, which is what the
//! parallel update kernels partition across workers.

/// Grid dimensions in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl Dimensions {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Total number of cells.
    pub fn total(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Linear index of cell `(i, j, k)`.
    #[inline]
    pub fn to_linear(&self, i: usize, j: usize, k: usize) -> usize {
        (i * self.ny + j) * self.nz + k
    }
}

/// A 3D scalar field over the grid.
#[derive(Clone, Debug)]
pub struct Field3D<T> {
    dims: Dimensions,
    data: Vec<T>,
}

impl<T: Copy + Default> Field3D<T> {
    /// Create a zero-initialized field.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            data: vec![T::default(); dims.total()],
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Get the value at `(i, j, k)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> T {
        self.data[self.dims.to_linear(i, j, k)]
    }

    /// Set the value at `(i, j, k)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: T) {
        let idx = self.dims.to_linear(i, j, k);
        self.data[idx] = value;
    }

    /// Fill the whole field with one value.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Reset the field to zero.
    pub fn clear(&mut self) {
        self.data.fill(T::default());
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }
}

/// Three field components sharing one grid.
#[derive(Clone, Debug)]
pub struct VectorField3D<T> {
    pub x: Field3D<T>,
    pub y: Field3D<T>,
    pub z: Field3D<T>,
}

impl<T: Copy + Default> VectorField3D<T> {
    /// Create zero-initialized x/y/z components.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            x: Field3D::new(dims),
            y: Field3D::new(dims),
            z: Field3D::new(dims),
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.x.dims()
    }

    /// Reset all components to zero.
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.z.clear();
    }

    /// Component by direction index (0 = x, 1 = y, 2 = z).
    pub fn component(&self, direction: usize) -> &Field3D<T> {
        match direction {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("invalid direction: {}", direction),
        }
    }

    /// Mutable component by direction index (0 = x, 1 = y, 2 = z).
    pub fn component_mut(&mut self, direction: usize) -> &mut Field3D<T> {
        match direction {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("invalid direction: {}", direction),
        }
    }
}
