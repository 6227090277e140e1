//! Data structures for distance matrix filtering.

mod dist_matrix;

pub use dist_matrix::DistMatrix;
