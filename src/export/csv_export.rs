//! CSV time-series export for signaling metrics.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::state::SignalingMetrics;

/// Record for CSV time-series export
#[derive(Debug, Clone, Serialize)]
pub struct TimeSeriesRecord {
    pub time: f64,
    pub step: u64,
    pub edges: usize,
    pub bound_a: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub ba: f64,
    pub ab: f64,
    pub ca: f64,
    pub ac: f64,
    /// Largest within-cell BA spread
    pub ba_asymmetry: f64,
}

impl From<&SignalingMetrics> for TimeSeriesRecord {
    fn from(m: &SignalingMetrics) -> Self {
        Self {
            time: m.simulation_time,
            step: m.steps_elapsed,
            edges: m.edge_count,
            bound_a: m.total_bound_a,
            a: m.total_a,
            b: m.total_b,
            c: m.total_c,
            ba: m.total_ba,
            ab: m.total_ab,
            ca: m.total_ca,
            ac: m.total_ac,
            ba_asymmetry: m.max_ba_asymmetry,
        }
    }
}

/// CSV exporter for time-series data
pub struct CsvExporter {
    writer: csv::Writer<File>,
    /// Path to output file
    path: PathBuf,
}

impl CsvExporter {
    /// Create a new CSV exporter in `dir`
    ///
    /// Creates the directory if it doesn't exist.
    /// Filename is auto-generated with timestamp.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = dir.join(format!("edge_signaling_{}.csv", timestamp));
        Self::create(path)
    }

    /// Create an exporter writing to exactly `path`
    pub fn create<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path)?;
        let writer = csv::Writer::from_writer(file);

        log::info!("CSV export started: {}", path.display());

        Ok(Self { writer, path })
    }

    /// Append one row
    pub fn record(&mut self, metrics: &SignalingMetrics) -> Result<()> {
        self.writer.serialize(TimeSeriesRecord::from(metrics))?;
        Ok(())
    }

    /// Finish writing and return the output path
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        log::info!("CSV export completed: {}", self.path.display());
        Ok(self.path)
    }

    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics_at(time: f64, step: u64) -> SignalingMetrics {
        SignalingMetrics {
            simulation_time: time,
            steps_elapsed: step,
            total_a: 1.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_follow_header() {
        let path = std::env::temp_dir().join(format!("edge_signaling_test_{}.csv", std::process::id()));
        let mut exporter = CsvExporter::create(&path).unwrap();
        assert_eq!(exporter.path(), path.as_path());

        exporter.record(&metrics_at(0.0, 0)).unwrap();
        exporter.record(&metrics_at(0.5, 5)).unwrap();
        let written = exporter.finish().unwrap();

        let contents = std::fs::read_to_string(&written).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("time,step,edges,bound_a,a,"));
        assert!(lines[1].starts_with("0.0,0,"));
        assert!(lines[2].starts_with("0.5,5,"));
        std::fs::remove_file(written).unwrap();
    }
}
