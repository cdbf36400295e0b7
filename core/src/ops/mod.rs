//! Operations that produce domain values from already-resolved store facts
//!
//! Everything here is synchronous and pure: the store-query and replication
//! layers fetch, these functions only assemble and validate.

pub mod copies;
pub mod locate;

pub use copies::{translate_copies, CopyRecord, ExternalStore, ExternalStoreKind, TranslateCopyError};
pub use locate::{resolve_location_tree, LocateError, LocationRecord};
