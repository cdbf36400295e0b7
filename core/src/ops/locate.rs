//! Location tree assembly from already-resolved store metadata
//!
//! The store-query layer hands us one flat `LocationRecord` per dataset,
//! with containment expressed as lists of component codes. Assembly turns
//! that into the owned `DatasetLocationNode` tree, validating the record
//! set before any node is built.

use crate::domain::{DatasetLocation, DatasetLocationNode};
use serde::{Deserialize, Serialize};
use specta::Type;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Error type for location tree assembly
#[derive(Error, Debug)]
pub enum LocateError {
	#[error("Dataset not found among the resolved records (code: {0})")]
	UnknownDataset(String),
	#[error("Component is not among the resolved records (container: {container}, component: {component})")]
	UnknownComponent {
		container: String,
		component: String,
	},
	#[error("Containment cycle detected (code: {0})")]
	ContainmentCycle(String),
	#[error("Components attached to a dataset that is not a container (code: {0})")]
	NotAContainer(String),
	#[error("Required location field is blank (code: {code}, field: {field})")]
	BlankField { code: String, field: &'static str },
}

/// One dataset's already-resolved store facts, before tree assembly.
///
/// `component_codes` lists the container's components in the order the
/// store reported them; datasets without a declared ordering position keep
/// exactly that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct LocationRecord {
	pub location: DatasetLocation,
	pub container: bool,
	pub component_codes: Vec<String>,
}

impl LocationRecord {
	/// Record for a plain dataset.
	pub fn dataset(location: DatasetLocation) -> Self {
		Self {
			location,
			container: false,
			component_codes: Vec::new(),
		}
	}

	/// Record for a container dataset and its components, in source order.
	pub fn container(location: DatasetLocation, component_codes: Vec<String>) -> Self {
		Self {
			location,
			container: true,
			component_codes,
		}
	}
}

/// Assemble the location tree rooted at `root_code` from flat records.
///
/// Fails if the root or any referenced component is missing from the
/// record set, if a non-container record carries components, if any record
/// leaves a required location field blank, or if the containment edges form
/// a cycle. A dataset listed under several containers is expanded under
/// each of them; only an ancestor repeating on its own path is a cycle.
pub fn resolve_location_tree(
	root_code: &str,
	records: &[LocationRecord],
) -> Result<DatasetLocationNode, LocateError> {
	for record in records {
		check_required_fields(&record.location)?;
		if !record.container && !record.component_codes.is_empty() {
			return Err(LocateError::NotAContainer(
				record.location.dataset_code.clone(),
			));
		}
	}

	let by_code: HashMap<&str, &LocationRecord> = records
		.iter()
		.map(|record| (record.location.dataset_code.as_str(), record))
		.collect();

	let root = by_code
		.get(root_code)
		.ok_or_else(|| LocateError::UnknownDataset(root_code.to_string()))?;

	let mut trail = Vec::new();
	let tree = build_node(root, &by_code, &mut trail)?;

	debug!(
		"Resolved location tree (root: {}, nodes: {})",
		root_code,
		tree.iter().count()
	);

	Ok(tree)
}

fn build_node<'r>(
	record: &'r LocationRecord,
	by_code: &HashMap<&str, &'r LocationRecord>,
	trail: &mut Vec<&'r str>,
) -> Result<DatasetLocationNode, LocateError> {
	let code = record.location.dataset_code.as_str();
	if trail.contains(&code) {
		return Err(LocateError::ContainmentCycle(code.to_string()));
	}

	if !record.container {
		return Ok(DatasetLocationNode::leaf(record.location.clone()));
	}

	trail.push(code);
	let mut components = Vec::with_capacity(record.component_codes.len());
	for component_code in &record.component_codes {
		let component = by_code.get(component_code.as_str()).ok_or_else(|| {
			LocateError::UnknownComponent {
				container: code.to_string(),
				component: component_code.clone(),
			}
		})?;
		components.push(build_node(component, by_code, trail)?);
	}
	trail.pop();

	Ok(DatasetLocationNode::container(
		record.location.clone(),
		order_components(code, components),
	))
}

/// Fix the component order under one container: components carrying a
/// declared position under this container's code come first, stable-sorted
/// ascending by that position; the rest follow in source order.
fn order_components(
	container_code: &str,
	components: Vec<DatasetLocationNode>,
) -> Vec<DatasetLocationNode> {
	let (mut ordered, unordered): (Vec<_>, Vec<_>) = components
		.into_iter()
		.partition(|node| node.location().order_in(container_code).is_some());
	ordered.sort_by_key(|node| node.location().order_in(container_code));
	ordered.extend(unordered);
	ordered
}

fn check_required_fields(location: &DatasetLocation) -> Result<(), LocateError> {
	let blank = |field: &'static str, value: &str| {
		if value.is_empty() {
			Err(LocateError::BlankField {
				code: location.dataset_code.clone(),
				field,
			})
		} else {
			Ok(())
		}
	};

	blank("dataset_code", &location.dataset_code)?;
	blank("path", &location.path)?;
	blank("store_url", &location.store_url)?;
	blank("store_code", &location.store_code)?;

	Ok(())
}
