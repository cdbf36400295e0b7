//! Core domain models - resolved dataset locations and their replicas
//!
//! These are pure value types: built once by the store-query layer, read
//! concurrently by presentation code, never mutated. Nothing in here does
//! I/O or consults external state.

pub mod content_copy;
pub mod location;

// Re-export commonly used types
pub use content_copy::ContentCopy;
pub use location::{DatasetLocation, DatasetLocationNode};
