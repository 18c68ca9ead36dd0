pub mod file;
pub mod traits;

// Re-export
pub use file::FileActivitySource;
pub use traits::ActivitySource;
