//! Edge/cell mesh connectivity for the tendency pass.
//!
//! The horizontal mesh is unstructured: cells are polygons, and every
//! interior edge separates exactly two cells (`cells_on_edge[edge] =
//! [cell1, cell2]`). The vertical direction is layered, with layer 0 at
//! the sea surface. Each cell and each edge carries an active-layer range;
//! at an edge the range `[min_level_edge_bot, max_level_edge_top]` covers
//! only layers where both neighboring cells are wet, and every per-layer
//! contribution is additionally scaled by `edge_mask` so inactive layers
//! contribute exactly zero.
//!
//! Edges beyond `n_edges_owned` are halo copies maintained by the domain
//! decomposition (out of scope here); the tendency pass never writes them.

use thiserror::Error;

use crate::fields::EdgeField;

/// Error type for mesh construction.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A connectivity or geometry array has the wrong length
    #[error("array '{name}' has length {got}, expected {expected}")]
    ArrayLength {
        name: &'static str,
        got: usize,
        expected: usize,
    },

    /// An edge references a cell outside the mesh
    #[error("edge {edge} references cell {cell}, but the mesh has {n_cells} cells")]
    CellOutOfRange {
        edge: usize,
        cell: usize,
        n_cells: usize,
    },

    /// An active-layer range is inverted or exceeds the vertical extent
    #[error("edge {edge} has invalid active-layer range [{min}, {max}] with {n_levels} levels")]
    InvalidLayerRange {
        edge: usize,
        min: usize,
        max: usize,
        n_levels: usize,
    },

    /// A cell-center distance is not positive
    #[error("edge {edge} has non-positive dc_edge {dc}")]
    NonPositiveDcEdge { edge: usize, dc: f64 },

    /// More owned edges than edges
    #[error("n_edges_owned {owned} exceeds n_edges {total}")]
    OwnedExceedsTotal { owned: usize, total: usize },
}

/// Unstructured edge/cell mesh with vertical-layer bookkeeping.
#[derive(Clone, Debug)]
pub struct EdgeMesh {
    /// Number of cells
    pub n_cells: usize,
    /// Number of edges (owned + halo)
    pub n_edges: usize,
    /// Number of owned edges; the tendency pass touches edges `0..n_edges_owned`
    pub n_edges_owned: usize,
    /// Number of vertical layers
    pub n_levels: usize,
    /// The two cells sharing each edge
    pub cells_on_edge: Vec<[usize; 2]>,
    /// Cell-center separation across each edge (m)
    pub dc_edge: Vec<f64>,
    /// Edge normal orientation angle, measured from east (rad)
    pub angle_edge: Vec<f64>,
    /// Shallowest active layer at each edge
    pub min_level_edge_bot: Vec<usize>,
    /// Deepest active layer at each edge (inclusive)
    pub max_level_edge_top: Vec<usize>,
    /// Shallowest active layer in each cell column
    pub min_level_cell: Vec<usize>,
    /// Deepest active layer in each cell column (inclusive)
    pub max_level_cell: Vec<usize>,
    /// Per-(layer, edge) activity mask, 1.0 where active and 0.0 elsewhere
    pub edge_mask: EdgeField,
}

impl EdgeMesh {
    /// Build a mesh from raw connectivity arrays, validating their shapes.
    ///
    /// Validation happens once at construction; the tendency pass itself
    /// performs no bounds or sanity checks beyond debug assertions.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n_cells: usize,
        n_levels: usize,
        n_edges_owned: usize,
        cells_on_edge: Vec<[usize; 2]>,
        dc_edge: Vec<f64>,
        angle_edge: Vec<f64>,
        min_level_edge_bot: Vec<usize>,
        max_level_edge_top: Vec<usize>,
        min_level_cell: Vec<usize>,
        max_level_cell: Vec<usize>,
        edge_mask: EdgeField,
    ) -> Result<Self, MeshError> {
        let n_edges = cells_on_edge.len();

        if n_edges_owned > n_edges {
            return Err(MeshError::OwnedExceedsTotal {
                owned: n_edges_owned,
                total: n_edges,
            });
        }

        check_len("dc_edge", dc_edge.len(), n_edges)?;
        check_len("angle_edge", angle_edge.len(), n_edges)?;
        check_len("min_level_edge_bot", min_level_edge_bot.len(), n_edges)?;
        check_len("max_level_edge_top", max_level_edge_top.len(), n_edges)?;
        check_len("min_level_cell", min_level_cell.len(), n_cells)?;
        check_len("max_level_cell", max_level_cell.len(), n_cells)?;
        check_len(
            "edge_mask",
            edge_mask.data.len(),
            n_edges * n_levels,
        )?;

        for (edge, cells) in cells_on_edge.iter().enumerate() {
            for &cell in cells {
                if cell >= n_cells {
                    return Err(MeshError::CellOutOfRange {
                        edge,
                        cell,
                        n_cells,
                    });
                }
            }
        }

        for edge in 0..n_edges {
            let (min, max) = (min_level_edge_bot[edge], max_level_edge_top[edge]);
            if min > max || max >= n_levels {
                return Err(MeshError::InvalidLayerRange {
                    edge,
                    min,
                    max,
                    n_levels,
                });
            }
            if dc_edge[edge] <= 0.0 {
                return Err(MeshError::NonPositiveDcEdge {
                    edge,
                    dc: dc_edge[edge],
                });
            }
        }

        Ok(Self {
            n_cells,
            n_edges,
            n_edges_owned,
            n_levels,
            cells_on_edge,
            dc_edge,
            angle_edge,
            min_level_edge_bot,
            max_level_edge_top,
            min_level_cell,
            max_level_cell,
            edge_mask,
        })
    }

    /// Build a chain of `n_cells` cells in a row with an edge between each
    /// consecutive pair, all layers active everywhere.
    ///
    /// Convenience constructor for tests and benchmarks; every edge has the
    /// same cell-center separation `dc` and orientation `angle`, and all
    /// edges are owned.
    pub fn chain(n_cells: usize, n_levels: usize, dc: f64, angle: f64) -> Result<Self, MeshError> {
        let n_edges = n_cells.saturating_sub(1);
        let cells_on_edge: Vec<[usize; 2]> = (0..n_edges).map(|e| [e, e + 1]).collect();
        Self::new(
            n_cells,
            n_levels,
            n_edges,
            cells_on_edge,
            vec![dc; n_edges],
            vec![angle; n_edges],
            vec![0; n_edges],
            vec![n_levels - 1; n_edges],
            vec![0; n_cells],
            vec![n_levels - 1; n_cells],
            EdgeField::constant(n_levels, n_edges, 1.0),
        )
    }

    /// Active layer range of an edge as an inclusive (min, max) pair.
    #[inline(always)]
    pub fn active_range(&self, edge: usize) -> (usize, usize) {
        (self.min_level_edge_bot[edge], self.max_level_edge_top[edge])
    }
}

fn check_len(name: &'static str, got: usize, expected: usize) -> Result<(), MeshError> {
    if got != expected {
        Err(MeshError::ArrayLength {
            name,
            got,
            expected,
        })
    } else {
        Ok(())
    }
}
