//! The mesh-side view the signaling core needs.
//!
//! A vertex-based population exposes its cells by location index, their edges
//! in stable perimeter order, and which edges of other cells share each
//! physical boundary. Everything is looked up by index on demand; no
//! references to mesh entities are stored.

/// Index-based edge topology of a vertex-based cell population
pub trait EdgeTopology {
    /// Number of cells (location indices `0..num_cells()`)
    fn num_cells(&self) -> usize;

    /// Number of edges of `cell`, in perimeter order
    fn num_edges(&self, cell: usize) -> usize;

    /// Physical length of edge `edge` of `cell`
    fn edge_length(&self, cell: usize, edge: usize) -> f64;

    /// `(cell, local edge index)` pairs of other cells sharing this edge's boundary.
    ///
    /// Usually zero or one entry; more are possible at degenerate junctions.
    fn neighbouring_edge_indices(&self, cell: usize, edge: usize) -> Vec<(usize, usize)>;

    /// Total perimeter of `cell`
    fn perimeter(&self, cell: usize) -> f64 {
        (0..self.num_edges(cell)).map(|e| self.edge_length(cell, e)).sum()
    }
}
