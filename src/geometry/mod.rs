//! Geometry module for the polygonal tissue the signaling core runs on.
//!
//! The core only sees the index-based [`EdgeTopology`] view. [`VertexTissue`]
//! is a small fixed-topology implementation used by the driver, tests and
//! benchmarks.

mod tissue;
mod topology;

pub use tissue::VertexTissue;
pub use topology::EdgeTopology;
