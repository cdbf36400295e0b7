//! ds-core - the dataset location and content copy model
//!
//! Models where a stored dataset physically lives. A dataset may be a
//! container composed of other datasets; its resolved location is a finite
//! acyclic tree of `DatasetLocationNode`s. Replicated content is described
//! by `ContentCopy`, a closed set of display-ready variants.
//!
//! The crate is pure: no I/O, no resolution, no authorization. The store
//! query and replication layers resolve the raw facts; `ops` assembles and
//! validates them; `domain` carries immutable values that are safe to read
//! from any thread.

pub mod domain;
pub mod ops;

pub use domain::{ContentCopy, DatasetLocation, DatasetLocationNode};
pub use ops::{resolve_location_tree, translate_copies, LocationRecord};
