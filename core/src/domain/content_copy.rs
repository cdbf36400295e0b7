//! Content copy model - a described replica of a dataset's stored content
//!
//! A copy either sits on a filesystem share reachable by host and directory,
//! or behind a plain URL. Consumers display the rendered location verbatim,
//! including the embedded line-break markup, so the rendering here must not
//! change shape.

use serde::{Deserialize, Serialize};
use specta::Type;
use std::fmt;

/// A replica of a dataset's content, rendered for human display.
///
/// A closed set of variants: adding a backend means extending this enum and
/// every `match` below, checked at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub enum ContentCopy {
	/// Replica on a filesystem share, optionally pinned to a commit hash.
	FileSystem {
		label: String,
		host: String,
		directory: String,
		path: String,
		commit_hash: Option<String>,
	},
	/// Replica reachable through a URL.
	Url { label: String, url: String },
}

impl ContentCopy {
	/// Whether the rendered location is safe to present as a clickable link.
	///
	/// A filesystem path is never assumed browsable without additional
	/// context; a URL always is.
	pub fn is_hyper_linkable(&self) -> bool {
		match self {
			Self::FileSystem { .. } => false,
			Self::Url { .. } => true,
		}
	}

	/// Display name for the copy. May be empty if none was assigned upstream.
	pub fn label(&self) -> &str {
		match self {
			Self::FileSystem { label, .. } => label,
			Self::Url { label, .. } => label,
		}
	}

	/// Fully rendered, human-facing description of where the copy resides.
	///
	/// Filesystem copies render as `Host: {host}<br/>Directory: {directory}{path}`,
	/// with `<br>Commit hash:{hash}` appended when a commit hash is present.
	/// Directory and path concatenate with no separator; the producer owns
	/// the on-disk path convention. URL copies render the URL unmodified.
	pub fn location(&self) -> String {
		match self {
			Self::FileSystem {
				host,
				directory,
				path,
				commit_hash,
				..
			} => {
				let mut location =
					format!("Host: {}<br/>Directory: {}{}", host, directory, path);
				if let Some(hash) = commit_hash {
					location.push_str(&format!("<br>Commit hash:{}", hash));
				}
				location
			}
			Self::Url { url, .. } => url.clone(),
		}
	}
}

impl fmt::Display for ContentCopy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.location())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn file_system_copy(commit_hash: Option<&str>) -> ContentCopy {
		ContentCopy::FileSystem {
			label: "L".to_string(),
			host: "H".to_string(),
			directory: "/dir/".to_string(),
			path: "/p".to_string(),
			commit_hash: commit_hash.map(str::to_string),
		}
	}

	#[test]
	fn test_file_system_location_without_commit_hash() {
		let copy = file_system_copy(None);

		assert_eq!(copy.location(), "Host: H<br/>Directory: /dir//p");
	}

	#[test]
	fn test_file_system_location_with_commit_hash() {
		let copy = file_system_copy(Some("abc123"));

		assert_eq!(
			copy.location(),
			"Host: H<br/>Directory: /dir//p<br>Commit hash:abc123"
		);
	}

	#[test]
	fn test_file_system_is_never_hyper_linkable() {
		assert!(!file_system_copy(None).is_hyper_linkable());
		assert!(!file_system_copy(Some("abc123")).is_hyper_linkable());
	}

	#[test]
	fn test_url_location_is_verbatim() {
		let copy = ContentCopy::Url {
			label: "L".to_string(),
			url: "http://x/y".to_string(),
		};

		assert_eq!(copy.location(), "http://x/y");
		assert!(copy.is_hyper_linkable());
	}

	#[test]
	fn test_malformed_url_is_rendered_as_is() {
		let copy = ContentCopy::Url {
			label: String::new(),
			url: "not a url at all".to_string(),
		};

		assert_eq!(copy.location(), "not a url at all");
		assert!(copy.is_hyper_linkable());
	}

	#[test]
	fn test_label_may_be_empty() {
		let copy = ContentCopy::Url {
			label: String::new(),
			url: "http://x".to_string(),
		};

		assert_eq!(copy.label(), "");
	}

	#[test]
	fn test_accessors_derive_from_constructor_args_only() {
		let copy = file_system_copy(Some("deadbeef"));

		match &copy {
			ContentCopy::FileSystem {
				label,
				host,
				directory,
				path,
				commit_hash,
			} => {
				assert_eq!(label, "L");
				assert_eq!(host, "H");
				assert_eq!(directory, "/dir/");
				assert_eq!(path, "/p");
				assert_eq!(commit_hash.as_deref(), Some("deadbeef"));
			}
			_ => panic!("Expected FileSystem variant"),
		}
		assert_eq!(copy.label(), "L");
		assert_eq!(
			copy.location(),
			"Host: H<br/>Directory: /dir//p<br>Commit hash:deadbeef"
		);
	}
}
