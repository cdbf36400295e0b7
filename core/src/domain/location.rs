//! Dataset location model - where a dataset's bytes physically live
//!
//! A dataset is hosted by exactly one data store. Container datasets group
//! other datasets as named components, so a resolved location is a finite
//! tree: one `DatasetLocation` fact per node, with component nodes owned
//! exclusively by their parent. The tree is built once from already-resolved
//! store metadata and is read-only afterwards.

use serde::{Deserialize, Serialize};
use specta::Type;
use std::collections::HashMap;

/// The resolved physical location of a single dataset within its data store.
///
/// All four identifying fields are established by the store-query layer and
/// are always present and non-empty. Only the ordering positions and the
/// size may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct DatasetLocation {
	/// Store-relative path to the dataset's content
	pub path: String,

	/// Code uniquely identifying the dataset within its store
	pub dataset_code: String,

	/// URL of the data-store service hosting the dataset
	pub store_url: String,

	/// Code identifying the data-store service
	pub store_code: String,

	/// Position of this dataset inside each container that lists it as a
	/// component, keyed by the container's dataset code. A dataset may hold
	/// different positions under different containers, or none at all.
	pub order_in_containers: HashMap<String, i32>,

	/// Size in bytes. `None` means the store has not recorded one, which is
	/// not the same thing as a size of zero.
	pub size: Option<u64>,
}

impl DatasetLocation {
	/// Create a location fact with no ordering positions and unknown size.
	pub fn new(
		path: impl Into<String>,
		dataset_code: impl Into<String>,
		store_url: impl Into<String>,
		store_code: impl Into<String>,
	) -> Self {
		Self {
			path: path.into(),
			dataset_code: dataset_code.into(),
			store_url: store_url.into(),
			store_code: store_code.into(),
			order_in_containers: HashMap::new(),
			size: None,
		}
	}

	pub fn with_size(mut self, size: u64) -> Self {
		self.size = Some(size);
		self
	}

	/// Record this dataset's position under the given container.
	pub fn with_order_in(mut self, container_code: impl Into<String>, position: i32) -> Self {
		self.order_in_containers
			.insert(container_code.into(), position);
		self
	}

	/// The ordering position of this dataset under a specific container, if
	/// one was declared there.
	pub fn order_in(&self, container_code: &str) -> Option<i32> {
		self.order_in_containers.get(container_code).copied()
	}
}

/// A node in the resolved location tree of a dataset.
///
/// Every node carries its own `DatasetLocation`. Container nodes own their
/// component nodes by value; there are no parent back-pointers, so the
/// structure cannot express a cycle once built. A non-container node always
/// reports an empty component list, never an absent one, so consumers can
/// recurse into `components()` unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct DatasetLocationNode {
	location: DatasetLocation,
	container: bool,
	components: Vec<DatasetLocationNode>,
}

impl DatasetLocationNode {
	/// Create a leaf node. Leaves have no components, by construction.
	pub fn leaf(location: DatasetLocation) -> Self {
		Self {
			location,
			container: false,
			components: Vec::new(),
		}
	}

	/// Create a container node grouping the given components.
	///
	/// The component order given here is the order `components()` reports;
	/// callers that care about declared ordering positions sort before
	/// constructing (see `ops::locate`).
	pub fn container(location: DatasetLocation, components: Vec<DatasetLocationNode>) -> Self {
		Self {
			location,
			container: true,
			components,
		}
	}

	/// This node's own location fact.
	pub fn location(&self) -> &DatasetLocation {
		&self.location
	}

	/// Whether this node logically groups other datasets.
	pub fn is_container(&self) -> bool {
		self.container
	}

	/// This node's components, in resolved order. Empty for non-containers
	/// and for containers that currently have none.
	pub fn components(&self) -> &[DatasetLocationNode] {
		&self.components
	}

	/// Depth-first walk over this node and every node below it.
	///
	/// Visits each node exactly once, parents before their components,
	/// siblings in `components()` order. Uses an explicit stack so deep
	/// container nesting cannot overflow the call stack.
	pub fn iter(&self) -> impl Iterator<Item = &DatasetLocationNode> {
		let mut stack = vec![self];
		std::iter::from_fn(move || {
			let node = stack.pop()?;
			stack.extend(node.components.iter().rev());
			Some(node)
		})
	}

	/// Flatten the locations of all non-container datasets under this node.
	///
	/// A leaf node yields its own location.
	pub fn leaf_locations(&self) -> Vec<&DatasetLocation> {
		self.iter()
			.filter(|node| !node.is_container())
			.map(|node| node.location())
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn location(code: &str) -> DatasetLocation {
		DatasetLocation::new(
			format!("store/{}", code),
			code,
			"http://dss.example.org:8444",
			"DSS1",
		)
	}

	#[test]
	fn test_leaf_has_no_components() {
		let node = DatasetLocationNode::leaf(location("DS-1"));

		assert!(!node.is_container());
		assert!(node.components().is_empty());
	}

	#[test]
	fn test_empty_container_reports_empty_components() {
		let node = DatasetLocationNode::container(location("CT-1"), vec![]);

		assert!(node.is_container());
		assert!(node.components().is_empty());
	}

	#[test]
	fn test_location_accessor_returns_own_fact() {
		let node = DatasetLocationNode::leaf(location("DS-1"));

		assert_eq!(node.location().dataset_code, "DS-1");
		assert_eq!(node.location().store_code, "DSS1");
	}

	#[test]
	fn test_absent_size_is_not_zero() {
		let without = location("DS-1");
		let with = location("DS-2").with_size(0);

		assert_eq!(without.size, None);
		assert_eq!(with.size, Some(0));
		assert_ne!(without.size, with.size);
	}

	#[test]
	fn test_order_is_scoped_per_container() {
		let loc = location("DS-1")
			.with_order_in("CT-A", 3)
			.with_order_in("CT-B", 1);

		assert_eq!(loc.order_in("CT-A"), Some(3));
		assert_eq!(loc.order_in("CT-B"), Some(1));
		assert_eq!(loc.order_in("CT-C"), None);
	}

	#[test]
	fn test_iter_visits_every_node_once() {
		let tree = DatasetLocationNode::container(
			location("CT-1"),
			vec![
				DatasetLocationNode::container(
					location("CT-2"),
					vec![
						DatasetLocationNode::leaf(location("DS-1")),
						DatasetLocationNode::leaf(location("DS-2")),
					],
				),
				DatasetLocationNode::leaf(location("DS-3")),
			],
		);

		let visited: Vec<&str> = tree
			.iter()
			.map(|node| node.location().dataset_code.as_str())
			.collect();

		assert_eq!(visited, vec!["CT-1", "CT-2", "DS-1", "DS-2", "DS-3"]);
	}

	#[test]
	fn test_leaf_locations_flattens_nested_containers() {
		let tree = DatasetLocationNode::container(
			location("CT-1"),
			vec![
				DatasetLocationNode::container(
					location("CT-2"),
					vec![DatasetLocationNode::leaf(location("DS-1"))],
				),
				DatasetLocationNode::leaf(location("DS-2")),
			],
		);

		let codes: Vec<&str> = tree
			.leaf_locations()
			.iter()
			.map(|loc| loc.dataset_code.as_str())
			.collect();

		assert_eq!(codes, vec!["DS-1", "DS-2"]);
	}

	#[test]
	fn test_leaf_locations_of_leaf_is_itself() {
		let node = DatasetLocationNode::leaf(location("DS-1"));

		let leaves = node.leaf_locations();
		assert_eq!(leaves.len(), 1);
		assert_eq!(leaves[0].dataset_code, "DS-1");
	}
}
