//! Integration tests for edge coupling across a tissue.
//!
//! Tests verify:
//! - Setup call leaves every edge untouched
//! - Diffusion moves only free A, B and C
//! - Neighbour averaging across shared boundaries
//! - Multi-step runs on a honeycomb stay finite and conserve A

use edge_polarity_sim::geometry::EdgeTopology;
use edge_polarity_sim::{
    CellEdgeSrn, EdgeSignalingSolver, EdgeTrackingModifier, Parameters, SignalingCell, Species, StepClock,
    VertexTissue, SPECIES_COUNT,
};

/// Topology with a fixed neighbour list, for junctions a polygon mesh cannot express
struct ListTopology {
    edges: Vec<usize>,
    neighbours: Vec<((usize, usize), (usize, usize))>,
}

impl EdgeTopology for ListTopology {
    fn num_cells(&self) -> usize {
        self.edges.len()
    }

    fn num_edges(&self, cell: usize) -> usize {
        self.edges[cell]
    }

    fn edge_length(&self, _cell: usize, _edge: usize) -> f64 {
        1.0
    }

    fn neighbouring_edge_indices(&self, cell: usize, edge: usize) -> Vec<(usize, usize)> {
        self.neighbours
            .iter()
            .filter(|(from, _)| *from == (cell, edge))
            .map(|&(_, to)| to)
            .collect()
    }
}

fn hexagon_of_ones() -> (VertexTissue, Vec<SignalingCell>) {
    let tissue = VertexTissue::regular_polygon(6, 1.0);
    let mut cells = vec![SignalingCell::uniform(6, [1.0; SPECIES_COUNT])];
    for edge in cells[0].srn.edges_mut() {
        *edge.parameters_mut() = [0.0; 9];
    }
    (tissue, cells)
}

// ============================================================================
// Hexagon scenario
// ============================================================================

#[test]
fn test_hexagon_setup_leaves_values_at_one() {
    let (tissue, mut cells) = hexagon_of_ones();
    let modifier = EdgeTrackingModifier::default();
    modifier.update_cell_data(&tissue, &mut cells, StepClock::new(0.1, 0));

    for edge in cells[0].srn.edges() {
        assert_eq!(edge.state(), &[1.0; SPECIES_COUNT]);
    }
}

#[test]
fn test_hexagon_elapsed_step_touches_only_free_species() {
    let (tissue, mut cells) = hexagon_of_ones();
    let modifier = EdgeTrackingModifier::default();
    modifier.setup_solve(&tissue, &mut cells, 0.1);

    // Break the symmetry so diffusion has something to do
    for (i, edge) in cells[0].srn.edges_mut().iter_mut().enumerate() {
        for species in Species::ALL {
            edge.set(species, 1.0 + 0.1 * i as f64);
        }
    }
    let before = cells[0].srn.clone();
    modifier.update_cell_data(&tissue, &mut cells, StepClock::new(0.1, 1));

    let mut moved = false;
    for (old, new) in before.edges().iter().zip(cells[0].srn.edges()) {
        for species in Species::ALL {
            if species.is_diffusible() {
                moved |= old.get(species) != new.get(species);
            } else {
                assert_eq!(old.get(species).to_bits(), new.get(species).to_bits());
            }
        }
    }
    assert!(moved);

    let total_a = |srn: &CellEdgeSrn| srn.totals()[Species::A.index()];
    assert!((total_a(&before) - total_a(&cells[0].srn)).abs() < 1e-12);
}

#[test]
fn test_in_keys_mirror_edge_keys() {
    let (tissue, mut cells) = hexagon_of_ones();
    cells[0].srn.edge_mut(4).set(Species::C, 3.0);
    EdgeTrackingModifier::default().update_cell_data(&tissue, &mut cells, StepClock::new(0.1, 7));

    let data = &cells[0].edge_data;
    for species in Species::ALL {
        assert_eq!(data.get_item(species.in_key()), data.get_item(species.edge_key()));
    }
}

// ============================================================================
// Neighbour averaging
// ============================================================================

#[test]
fn test_single_neighbour_is_copied() {
    let tissue = VertexTissue::honeycomb(2, 1);
    let mut cells = vec![
        SignalingCell::uniform(6, [0.0; SPECIES_COUNT]),
        SignalingCell::uniform(6, [0.0; SPECIES_COUNT]),
    ];
    let published = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
    for species in Species::ALL {
        cells[1].srn.edge_mut(3).set(species, published[species.index()]);
    }

    EdgeTrackingModifier::default().setup_solve(&tissue, &mut cells, 0.1);

    for species in Species::ALL {
        let means = cells[0].edge_data.get_item(species.neighbour_key());
        assert_eq!(means[0], published[species.index()]);
        assert!(means[1..].iter().all(|&m| m == 0.0));
    }
}

#[test]
fn test_mean_over_several_neighbours() {
    // Edge 0 of cell 0 touches one edge in each of three other cells
    let topology = ListTopology {
        edges: vec![3, 3, 3, 3],
        neighbours: vec![((0, 0), (1, 2)), ((0, 0), (2, 1)), ((0, 0), (3, 0))],
    };
    let mut cells: Vec<SignalingCell> = (0..4).map(|_| SignalingCell::uniform(3, [0.0; SPECIES_COUNT])).collect();
    cells[1].srn.edge_mut(2).set(Species::BA, 0.3);
    cells[2].srn.edge_mut(1).set(Species::BA, 0.6);
    cells[3].srn.edge_mut(0).set(Species::BA, 1.2);

    EdgeTrackingModifier::default().setup_solve(&topology, &mut cells, 0.1);

    let means = cells[0].edge_data.get_item("neighbour BA");
    assert!((means[0] - 0.7).abs() < 1e-12);
    assert_eq!(means[1], 0.0);
}

#[test]
#[should_panic(expected = "neighbouring edge 5 out of range")]
fn test_bad_neighbour_index_is_fatal() {
    let topology = ListTopology {
        edges: vec![3, 3],
        neighbours: vec![((0, 1), (1, 5))],
    };
    let mut cells = vec![SignalingCell::uniform(3, [1.0; SPECIES_COUNT]); 2];
    EdgeTrackingModifier::default().setup_solve(&topology, &mut cells, 0.1);
}

// ============================================================================
// Tissue runs
// ============================================================================

#[test]
fn test_honeycomb_run_stays_finite_and_conserves_a() {
    let params = Parameters::default();
    let tissue = VertexTissue::honeycomb(4, 4);
    let mut solver = EdgeSignalingSolver::from_parameters(tissue, &params, 1);
    let before = solver.metrics();

    solver.run(2.0);

    let after = solver.metrics();
    assert_eq!(after.steps_elapsed, 20);
    assert_eq!(after.edge_count, 16 * 6);
    for cell in &solver.cells {
        for edge in cell.srn.edges() {
            assert!(edge.state().iter().all(|v| v.is_finite()));
        }
    }
    assert!((after.total_a_all_forms() - before.total_a_all_forms()).abs() < 1e-8);
    assert!(after.total_ba + after.total_ab > 0.0);
}

#[test]
fn test_parameters_follow_published_neighbour_means() {
    let tissue = VertexTissue::honeycomb(2, 1);
    let mut solver = EdgeSignalingSolver::from_parameters(tissue, &Parameters::default(), 0);
    solver.step();
    let published = solver.cells[0].edge_data.get_item("neighbour A").to_vec();
    solver.step();

    // The second step refreshed edge 0 from what the first step published
    let edge = solver.cells[0].edge(0);
    assert_eq!(edge.parameter(edge_polarity_sim::NeighbourParameter::A), published[0]);
    assert!(published[0] > 0.0);
    assert_eq!(published[1], 0.0);
}
