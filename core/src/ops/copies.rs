//! Content copy translation from external store registrations
//!
//! Replicated dataset content lives in an external data management system:
//! a coded registration carrying an address, plus one copy record per
//! replica. Translation turns those raw attributes into display-ready
//! `ContentCopy` values. A filesystem address is a `host:directory` pair;
//! a URL address may embed a `${...}` placeholder that is filled with the
//! copy's external code.

use crate::domain::ContentCopy;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use specta::Type;
use thiserror::Error;
use tracing::debug;

/// Placeholder section of a templated URL address, e.g. `${code}`.
/// Deliberately greedy: `${a}/x/${b}` is one placeholder, matching the
/// behavior the store's clients already rely on.
static URL_TEMPLATE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\$\{.*\}").expect("valid placeholder pattern"));

/// How an external data management system addresses its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
pub enum ExternalStoreKind {
	/// The address is a `host:directory` pair on a mounted share.
	FileSystem,
	/// The address is a URL, possibly templated.
	Url,
}

/// Registration of an external data management system that holds copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct ExternalStore {
	pub code: String,
	pub label: Option<String>,
	pub address: String,
	pub kind: ExternalStoreKind,
}

/// Raw attributes of one registered copy, as recorded at replication time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct CopyRecord {
	/// Code of the content inside the external system; substituted into
	/// templated URL addresses
	pub external_code: Option<String>,

	/// Path of the copy below the share directory
	pub path: Option<String>,

	/// Commit hash, for copies tracked in a versioned repository
	pub commit_hash: Option<String>,
}

/// Error type for content copy translation
#[derive(Error, Debug)]
pub enum TranslateCopyError {
	#[error("File system store address is not a host:directory pair (store: {store}, address: {address})")]
	MalformedAddress { store: String, address: String },
}

/// Translate every registered copy of one external store into its
/// display-ready form, preserving registration order.
pub fn translate_copies(
	store: &ExternalStore,
	copies: &[CopyRecord],
) -> Result<Vec<ContentCopy>, TranslateCopyError> {
	let translated = copies
		.iter()
		.map(|copy| translate_copy(store, copy))
		.collect::<Result<Vec<_>, _>>()?;

	debug!(
		"Translated content copies (store: {}, copies: {})",
		store.code,
		translated.len()
	);

	Ok(translated)
}

fn translate_copy(
	store: &ExternalStore,
	copy: &CopyRecord,
) -> Result<ContentCopy, TranslateCopyError> {
	// The registration label is optional; the code always exists.
	let label = store.label.clone().unwrap_or_else(|| store.code.clone());

	match store.kind {
		ExternalStoreKind::FileSystem => {
			let mut segments = store.address.splitn(3, ':');
			let host = segments.next().unwrap_or("");
			let directory =
				segments
					.next()
					.ok_or_else(|| TranslateCopyError::MalformedAddress {
						store: store.code.clone(),
						address: store.address.clone(),
					})?;

			Ok(ContentCopy::FileSystem {
				label,
				host: host.to_string(),
				directory: directory.to_string(),
				path: copy.path.clone().unwrap_or_default(),
				commit_hash: copy.commit_hash.clone(),
			})
		}
		ExternalStoreKind::Url => {
			let external_code = copy.external_code.as_deref().unwrap_or("");
			let url = URL_TEMPLATE
				.replace_all(&store.address, NoExpand(external_code))
				.into_owned();

			Ok(ContentCopy::Url { label, url })
		}
	}
}
