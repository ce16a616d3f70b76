//! Signaling state of one cell.

use serde::{Deserialize, Serialize};

use super::CellEdgeData;
use crate::biochemistry::{CellEdgeSrn, EdgeSignalingState, SPECIES_COUNT};

/// A cell's edge signaling models together with the data it publishes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalingCell {
    /// One signaling state per edge, in perimeter order
    pub srn: CellEdgeSrn,
    /// Published `"edge …"`, `"neighbour …"` and `"in …"` items
    pub edge_data: CellEdgeData,
}

impl SignalingCell {
    pub fn new(srn: CellEdgeSrn) -> Self {
        Self {
            srn,
            edge_data: CellEdgeData::default(),
        }
    }

    /// Cell with `num_edges` edges starting from the given concentrations
    pub fn uniform(num_edges: usize, initial: [f64; SPECIES_COUNT]) -> Self {
        Self::new(CellEdgeSrn::from_initial_conditions(num_edges, |_| initial))
    }

    pub fn num_edges(&self) -> usize {
        self.srn.num_edges()
    }

    pub fn edge(&self, index: usize) -> &EdgeSignalingState {
        self.srn.edge(index)
    }

    /// Daughter cell carrying a deep copy of every edge; published data starts empty
    pub fn create_daughter(&self) -> Self {
        Self::new(self.srn.create_daughter())
    }
}
