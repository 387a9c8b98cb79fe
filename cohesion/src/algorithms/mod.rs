//! Graph algorithms.
//!
//! - [`metrics::clustering_coefficient`] - local, global and average clustering coefficients
//! - [`motifs::triangle_count`] - the number of triangles of a graph

pub mod metrics;
pub mod motifs;
