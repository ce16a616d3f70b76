//! Tissue-wide signaling metrics for logging and export.

use serde::{Deserialize, Serialize};

use super::SignalingCell;
use crate::biochemistry::{Species, SPECIES_COUNT};

/// Snapshot of tissue signaling totals
///
/// Flat fields so that a row maps directly onto a CSV record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalingMetrics {
    /// Current simulation time
    pub simulation_time: f64,
    /// Completed time steps
    pub steps_elapsed: u64,
    pub cell_count: usize,
    pub edge_count: usize,
    pub total_bound_a: f64,
    pub total_a: f64,
    pub total_b: f64,
    pub total_c: f64,
    pub total_ba: f64,
    pub total_ab: f64,
    pub total_ca: f64,
    pub total_ac: f64,
    /// Largest per-cell spread (max − min over edges) of BA
    pub max_ba_asymmetry: f64,
}

impl SignalingMetrics {
    /// Gather totals over every edge of every cell
    pub fn collect(cells: &[SignalingCell], simulation_time: f64, steps_elapsed: u64) -> Self {
        let mut totals = [0.0; SPECIES_COUNT];
        let mut edge_count = 0;
        let mut max_ba_asymmetry: f64 = 0.0;

        for cell in cells {
            for (total, value) in totals.iter_mut().zip(cell.srn.totals()) {
                *total += value;
            }
            edge_count += cell.num_edges();

            let ba = cell.srn.edges().iter().map(|e| e.ba());
            let (lo, hi) = ba.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
            if hi >= lo {
                max_ba_asymmetry = max_ba_asymmetry.max(hi - lo);
            }
        }

        Self {
            simulation_time,
            steps_elapsed,
            cell_count: cells.len(),
            edge_count,
            total_bound_a: totals[Species::BoundA.index()],
            total_a: totals[Species::A.index()],
            total_b: totals[Species::B.index()],
            total_c: totals[Species::C.index()],
            total_ba: totals[Species::BA.index()],
            total_ab: totals[Species::AB.index()],
            total_ca: totals[Species::CA.index()],
            total_ac: totals[Species::AC.index()],
            max_ba_asymmetry,
        }
    }

    /// Total of one species
    pub fn total(&self, species: Species) -> f64 {
        match species {
            Species::BoundA => self.total_bound_a,
            Species::A => self.total_a,
            Species::B => self.total_b,
            Species::C => self.total_c,
            Species::BA => self.total_ba,
            Species::AB => self.total_ab,
            Species::CA => self.total_ca,
            Species::AC => self.total_ac,
        }
    }

    /// Sum of free, bound and complexed A
    pub fn total_a_all_forms(&self) -> f64 {
        self.total_a + self.total_bound_a + self.total_ba + self.total_ab + self.total_ca + self.total_ac
    }

    /// Print a one-line row header for time series
    pub fn print_row_header() {
        println!(
            "{:>9} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            "Time", "Step", "A", "BoundA", "B", "C", "BA", "BA asym."
        );
        println!("{}", "-".repeat(82));
    }

    /// Print a one-line row
    pub fn print_row(&self) {
        println!(
            "{:9.2} {:7} {:10.4} {:10.4} {:10.4} {:10.4} {:10.4} {:10.6}",
            self.simulation_time,
            self.steps_elapsed,
            self.total_a,
            self.total_bound_a,
            self.total_b,
            self.total_c,
            self.total_ba,
            self.max_ba_asymmetry
        );
    }
}
