pub mod grid;
pub mod stats;
