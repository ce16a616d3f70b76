//! Edge-partitioned signaling model of a single cell.
//!
//! A [`CellEdgeSrn`] holds one [`EdgeSignalingState`] per polygon edge, in
//! perimeter order. Mesh remodelling code reports topology changes as
//! [`EdgeRemodelEvent`]s so that edge content is carried over consistently.

use serde::{Deserialize, Serialize};

use super::edge_srn::EdgeSignalingState;
use super::species::SPECIES_COUNT;

/// A change to a cell's edge list caused by mesh remodelling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EdgeRemodelEvent {
    /// A brand-new edge appears at `index` with no signaling history
    NewEdge { index: usize },
    /// Edge `index` is split; it keeps `relative_position` of its content and a
    /// new edge holding the rest is inserted right after it
    Split { index: usize, relative_position: f64 },
    /// Edge `removed` merges into `survivor`
    Merge { survivor: usize, removed: usize },
    /// Edge `removed` shrinks away; `absorbed_by` takes its content
    Shrink { removed: usize, absorbed_by: usize },
    /// Edge `index` disappears together with its content
    Remove { index: usize },
}

/// Per-cell collection of edge signaling states
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellEdgeSrn {
    edges: Vec<EdgeSignalingState>,
}

impl CellEdgeSrn {
    pub fn new(edges: Vec<EdgeSignalingState>) -> Self {
        Self { edges }
    }

    /// Build a cell whose edges start from `initial(edge_index)`
    pub fn from_initial_conditions<F>(num_edges: usize, mut initial: F) -> Self
    where
        F: FnMut(usize) -> [f64; SPECIES_COUNT],
    {
        Self {
            edges: (0..num_edges).map(|i| EdgeSignalingState::new(initial(i))).collect(),
        }
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn add_edge(&mut self, edge: EdgeSignalingState) {
        self.edges.push(edge);
    }

    /// # Panics
    /// If `index` is out of range.
    pub fn edge(&self, index: usize) -> &EdgeSignalingState {
        self.check_index(index);
        &self.edges[index]
    }

    /// # Panics
    /// If `index` is out of range.
    pub fn edge_mut(&mut self, index: usize) -> &mut EdgeSignalingState {
        self.check_index(index);
        &mut self.edges[index]
    }

    pub fn edges(&self) -> &[EdgeSignalingState] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut [EdgeSignalingState] {
        &mut self.edges
    }

    /// Deep copy of every edge for a newly created daughter cell
    pub fn create_daughter(&self) -> Self {
        Self {
            edges: self.edges.iter().map(EdgeSignalingState::duplicate).collect(),
        }
    }

    /// Total amount of each species over all edges
    pub fn totals(&self) -> [f64; SPECIES_COUNT] {
        let mut totals = [0.0; SPECIES_COUNT];
        for edge in &self.edges {
            for (total, value) in totals.iter_mut().zip(edge.state()) {
                *total += value;
            }
        }
        totals
    }

    /// Apply a remodelling event to the edge list.
    ///
    /// # Panics
    /// On out-of-range indices, `Merge`/`Shrink` naming the same edge twice, or a
    /// split position outside `[0, 1]`.
    pub fn apply(&mut self, event: EdgeRemodelEvent) {
        match event {
            EdgeRemodelEvent::NewEdge { index } => {
                assert!(index <= self.edges.len(), "new edge index {index} beyond {} edges", self.edges.len());
                // Keep the cell's kinetic constants
                let mut edge = self.edges.first().cloned().unwrap_or_default();
                edge.initialise_new_edge();
                self.edges.insert(index, edge);
            }
            EdgeRemodelEvent::Split { index, relative_position } => {
                assert!(
                    (0.0..=1.0).contains(&relative_position),
                    "split position {relative_position} outside [0, 1]"
                );
                let mut complement = self.edge(index).duplicate();
                complement.split(1.0 - relative_position);
                self.edges[index].split(relative_position);
                self.edges.insert(index + 1, complement);
            }
            EdgeRemodelEvent::Merge { survivor, removed } => {
                let donor = self.take_donor(survivor, removed);
                let survivor = if removed < survivor { survivor - 1 } else { survivor };
                self.edges[survivor].add_merged_edge(&donor);
            }
            EdgeRemodelEvent::Shrink { removed, absorbed_by } => {
                let donor = self.take_donor(absorbed_by, removed);
                let absorbed_by = if removed < absorbed_by { absorbed_by - 1 } else { absorbed_by };
                self.edges[absorbed_by].add_shrunk_edge(&donor);
            }
            EdgeRemodelEvent::Remove { index } => {
                self.check_index(index);
                self.edges.remove(index);
            }
        }
    }

    fn take_donor(&mut self, receiver: usize, removed: usize) -> EdgeSignalingState {
        self.check_index(receiver);
        self.check_index(removed);
        assert_ne!(receiver, removed, "an edge cannot absorb itself");
        self.edges.remove(removed)
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.edges.len(),
            "edge index {index} out of range for a cell with {} edges",
            self.edges.len()
        );
    }
}
