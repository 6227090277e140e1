//! Data profiling primitives for distance matrices.

mod missingness;

pub use missingness::{profile_missingness, MissingnessProfile};
