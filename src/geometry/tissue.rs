//! In-memory polygonal tissue.
//!
//! A minimal vertex mesh: shared vertex positions plus, for each cell, its
//! vertex indices in counter-clockwise order. Edge `i` of a cell joins its
//! vertices `i` and `i + 1` (cyclically). Two cells are neighbours across an
//! edge when they use the same vertex pair.

use std::collections::HashMap;

use glam::DVec2;

use super::EdgeTopology;

/// Vertex tissue with fixed topology
#[derive(Debug, Clone)]
pub struct VertexTissue {
    /// Vertex positions
    pub vertices: Vec<DVec2>,
    /// Vertex indices of each cell, counter-clockwise
    cells: Vec<Vec<usize>>,
    /// Neighbouring `(cell, edge)` pairs for each cell edge
    edge_neighbours: Vec<Vec<Vec<(usize, usize)>>>,
}

impl VertexTissue {
    /// Build a tissue from vertex positions and per-cell vertex lists.
    ///
    /// # Panics
    /// If a cell has fewer than three vertices or refers to a missing vertex.
    pub fn from_polygons(vertices: Vec<DVec2>, cells: Vec<Vec<usize>>) -> Self {
        for (c, cell) in cells.iter().enumerate() {
            assert!(cell.len() >= 3, "cell {c} has only {} vertices", cell.len());
            for &v in cell {
                assert!(v < vertices.len(), "cell {c} refers to missing vertex {v}");
            }
        }

        let mut shared: HashMap<(usize, usize), Vec<(usize, usize)>> = HashMap::new();
        for (c, cell) in cells.iter().enumerate() {
            for e in 0..cell.len() {
                shared.entry(edge_key(cell, e)).or_default().push((c, e));
            }
        }

        let edge_neighbours = cells
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                (0..cell.len())
                    .map(|e| {
                        shared[&edge_key(cell, e)]
                            .iter()
                            .copied()
                            .filter(|&(other, _)| other != c)
                            .collect()
                    })
                    .collect()
            })
            .collect();

        Self {
            vertices,
            cells,
            edge_neighbours,
        }
    }

    /// A single regular polygon with `n` edges centred at the origin
    pub fn regular_polygon(n: usize, radius: f64) -> Self {
        let vertices = (0..n)
            .map(|k| {
                let theta = k as f64 / n as f64 * std::f64::consts::TAU;
                DVec2::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect();
        Self::from_polygons(vertices, vec![(0..n).collect()])
    }

    /// Honeycomb of `cols × rows` unit-side hexagons; odd rows are shifted right.
    ///
    /// Cells are numbered row by row. Edge 0 of each hexagon faces its
    /// right-hand (east) neighbour.
    pub fn honeycomb(cols: usize, rows: usize) -> Self {
        let side = 1.0;
        let dx = 3f64.sqrt() * side;
        let dy = 1.5 * side;

        let mut vertices: Vec<DVec2> = Vec::new();
        let mut lookup: HashMap<(i64, i64), usize> = HashMap::new();
        let mut cells = Vec::with_capacity(cols * rows);

        for row in 0..rows {
            for col in 0..cols {
                let shift = if row % 2 == 1 { 0.5 * dx } else { 0.0 };
                let centre = DVec2::new(col as f64 * dx + shift, row as f64 * dy);

                let cell = (0..6)
                    .map(|k| {
                        let theta = (-30.0 + 60.0 * k as f64).to_radians();
                        let p = centre + side * DVec2::new(theta.cos(), theta.sin());
                        let key = ((p.x * 1e6).round() as i64, (p.y * 1e6).round() as i64);
                        *lookup.entry(key).or_insert_with(|| {
                            vertices.push(p);
                            vertices.len() - 1
                        })
                    })
                    .collect();
                cells.push(cell);
            }
        }

        log::debug!("Generated {}x{} honeycomb with {} vertices", cols, rows, vertices.len());
        Self::from_polygons(vertices, cells)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// End points of edge `edge` of `cell`
    pub fn edge_endpoints(&self, cell: usize, edge: usize) -> (DVec2, DVec2) {
        let vs = &self.cells[cell];
        (self.vertices[vs[edge]], self.vertices[vs[(edge + 1) % vs.len()]])
    }

}

fn edge_key(cell: &[usize], edge: usize) -> (usize, usize) {
    let a = cell[edge];
    let b = cell[(edge + 1) % cell.len()];
    (a.min(b), a.max(b))
}

impl EdgeTopology for VertexTissue {
    fn num_cells(&self) -> usize {
        self.cells.len()
    }

    fn num_edges(&self, cell: usize) -> usize {
        self.cells[cell].len()
    }

    fn edge_length(&self, cell: usize, edge: usize) -> f64 {
        let (p, q) = self.edge_endpoints(cell, edge);
        p.distance(q)
    }

    fn neighbouring_edge_indices(&self, cell: usize, edge: usize) -> Vec<(usize, usize)> {
        self.edge_neighbours[cell][edge].clone()
    }
}
