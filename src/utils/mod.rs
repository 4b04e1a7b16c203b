pub mod random;
pub mod tracing;
pub mod upload;
