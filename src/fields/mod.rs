//! Layered field storage.
//!
//! All fields are stored as flat `Vec<f64>` with column-major layout: one
//! vertical column per mesh location (cell or edge), layers contiguous
//! within the column. Layer index `k = 0` is the sea surface; `k` increases
//! downward.
//!
//! `EdgeField` keeps one contiguous chunk per edge so that a tendency pass
//! can hand out disjoint per-edge columns (`chunks_mut` /
//! `par_chunks_mut`) without synchronization.

/// A field with one value per (layer, cell).
///
/// Layout: `data[cell * n_levels + k]`.
#[derive(Clone, Debug, PartialEq)]
pub struct CellField {
    /// Flat storage, cell-major
    pub data: Vec<f64>,
    /// Number of vertical layers
    pub n_levels: usize,
    /// Number of cells
    pub n_cells: usize,
}

impl CellField {
    /// Create a zero-filled field.
    pub fn zeros(n_levels: usize, n_cells: usize) -> Self {
        Self {
            data: vec![0.0; n_levels * n_cells],
            n_levels,
            n_cells,
        }
    }

    /// Create a field filled with a constant value.
    pub fn constant(n_levels: usize, n_cells: usize, value: f64) -> Self {
        Self {
            data: vec![value; n_levels * n_cells],
            n_levels,
            n_cells,
        }
    }

    /// Create a field from a function of (layer, cell).
    pub fn from_fn(n_levels: usize, n_cells: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(n_levels * n_cells);
        for cell in 0..n_cells {
            for k in 0..n_levels {
                data.push(f(k, cell));
            }
        }
        Self {
            data,
            n_levels,
            n_cells,
        }
    }

    /// Get the value at (layer, cell).
    #[inline(always)]
    pub fn get(&self, k: usize, cell: usize) -> f64 {
        debug_assert!(k < self.n_levels && cell < self.n_cells);
        self.data[cell * self.n_levels + k]
    }

    /// Set the value at (layer, cell).
    #[inline(always)]
    pub fn set(&mut self, k: usize, cell: usize, value: f64) {
        debug_assert!(k < self.n_levels && cell < self.n_cells);
        self.data[cell * self.n_levels + k] = value;
    }

    /// The full vertical column of one cell.
    #[inline]
    pub fn column(&self, cell: usize) -> &[f64] {
        &self.data[cell * self.n_levels..(cell + 1) * self.n_levels]
    }
}

/// A field with one value per (layer, edge).
///
/// Layout: `data[edge * n_levels + k]`, so each edge's column is one
/// contiguous chunk.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeField {
    /// Flat storage, edge-major
    pub data: Vec<f64>,
    /// Number of vertical layers
    pub n_levels: usize,
    /// Number of edges
    pub n_edges: usize,
}

impl EdgeField {
    /// Create a zero-filled field.
    pub fn zeros(n_levels: usize, n_edges: usize) -> Self {
        Self {
            data: vec![0.0; n_levels * n_edges],
            n_levels,
            n_edges,
        }
    }

    /// Create a field filled with a constant value.
    pub fn constant(n_levels: usize, n_edges: usize, value: f64) -> Self {
        Self {
            data: vec![value; n_levels * n_edges],
            n_levels,
            n_edges,
        }
    }

    /// Create a field from a function of (layer, edge).
    pub fn from_fn(n_levels: usize, n_edges: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(n_levels * n_edges);
        for edge in 0..n_edges {
            for k in 0..n_levels {
                data.push(f(k, edge));
            }
        }
        Self {
            data,
            n_levels,
            n_edges,
        }
    }

    /// Get the value at (layer, edge).
    #[inline(always)]
    pub fn get(&self, k: usize, edge: usize) -> f64 {
        debug_assert!(k < self.n_levels && edge < self.n_edges);
        self.data[edge * self.n_levels + k]
    }

    /// Set the value at (layer, edge).
    #[inline(always)]
    pub fn set(&mut self, k: usize, edge: usize, value: f64) {
        debug_assert!(k < self.n_levels && edge < self.n_edges);
        self.data[edge * self.n_levels + k] = value;
    }

    /// The full vertical column of one edge.
    #[inline]
    pub fn column(&self, edge: usize) -> &[f64] {
        &self.data[edge * self.n_levels..(edge + 1) * self.n_levels]
    }

    /// Mutable columns of the first `n_edges` edges, one chunk per edge.
    pub fn columns_mut(&mut self, n_edges: usize) -> impl Iterator<Item = (usize, &mut [f64])> {
        self.data[..n_edges * self.n_levels]
            .chunks_mut(self.n_levels)
            .enumerate()
    }
}

/// A stack of tracer fields indexed by (tracer, layer, cell).
///
/// Layout: `data[(tracer * n_cells + cell) * n_levels + k]`. Temperature
/// and salinity are selected out of this stack by configured tracer
/// indices.
#[derive(Clone, Debug, PartialEq)]
pub struct TracerFields {
    /// Flat storage, tracer-major then cell-major
    pub data: Vec<f64>,
    /// Number of tracers
    pub n_tracers: usize,
    /// Number of vertical layers
    pub n_levels: usize,
    /// Number of cells
    pub n_cells: usize,
}

impl TracerFields {
    /// Create a zero-filled tracer stack.
    pub fn zeros(n_tracers: usize, n_levels: usize, n_cells: usize) -> Self {
        Self {
            data: vec![0.0; n_tracers * n_levels * n_cells],
            n_tracers,
            n_levels,
            n_cells,
        }
    }

    /// Create a tracer stack from a function of (tracer, layer, cell).
    pub fn from_fn(
        n_tracers: usize,
        n_levels: usize,
        n_cells: usize,
        mut f: impl FnMut(usize, usize, usize) -> f64,
    ) -> Self {
        let mut data = Vec::with_capacity(n_tracers * n_levels * n_cells);
        for tracer in 0..n_tracers {
            for cell in 0..n_cells {
                for k in 0..n_levels {
                    data.push(f(tracer, k, cell));
                }
            }
        }
        Self {
            data,
            n_tracers,
            n_levels,
            n_cells,
        }
    }

    /// Get the value of one tracer at (layer, cell).
    #[inline(always)]
    pub fn get(&self, tracer: usize, k: usize, cell: usize) -> f64 {
        debug_assert!(tracer < self.n_tracers && k < self.n_levels && cell < self.n_cells);
        self.data[(tracer * self.n_cells + cell) * self.n_levels + k]
    }

    /// Set the value of one tracer at (layer, cell).
    #[inline(always)]
    pub fn set(&mut self, tracer: usize, k: usize, cell: usize, value: f64) {
        debug_assert!(tracer < self.n_tracers && k < self.n_levels && cell < self.n_cells);
        self.data[(tracer * self.n_cells + cell) * self.n_levels + k] = value;
    }
}
