//! Corpus discovery: text files under a root become `(topic/name, text)` pairs

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};
use walkdir::WalkDir;

use crate::cli::Encoding;
use crate::config::DOCUMENT_EXTENSION;
use crate::ui;

#[derive(Debug, Default)]
pub struct Discovery {
	/// `(identifier, text)` in file name order
	pub documents: Vec<(String, String)>,
	pub errors: Vec<String>,
}

/// Walk `root` for `.txt` files. Identifiers are root-relative paths with `/`
/// separators, so `root/tech/001.txt` becomes `tech/001.txt`.
pub fn discover(root: &Path, encoding: Encoding) -> Result<Discovery> {
	if !root.is_dir() {
		bail!("Corpus directory does not exist: {}", root.display());
	}

	let mut discovery = Discovery::default();

	for entry in WalkDir::new(root).sort_by_file_name() {
		let entry = match entry {
			Ok(entry) => entry,
			Err(e) => {
				discovery.errors.push(e.to_string());
				continue;
			}
		};

		let path = entry.path();
		if !entry.file_type().is_file() || !has_document_extension(path) {
			continue;
		}

		let Some(identifier) = identifier_for(root, path) else {
			discovery.errors.push(format!("Not under corpus root: {}", path.display()));
			continue;
		};

		match fs::read(path) {
			Ok(bytes) => match decode(bytes, encoding) {
				Ok(text) => {
					ui::debug(&format!("Read {} ({} bytes)", identifier, text.len()));
					discovery.documents.push((identifier, text));
				}
				Err(e) => discovery.errors.push(format!("{}: {}", identifier, e)),
			},
			Err(e) => discovery.errors.push(format!("{}: {}", path.display(), e)),
		}
	}

	Ok(discovery)
}

fn has_document_extension(path: &Path) -> bool {
	path.extension()
		.and_then(|e| e.to_str())
		.is_some_and(|e| e.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
}

fn identifier_for(root: &Path, path: &Path) -> Option<String> {
	let relative = path.strip_prefix(root).ok()?;
	let segments: Vec<String> = relative
		.components()
		.map(|c| c.as_os_str().to_string_lossy().into_owned())
		.collect();
	Some(segments.join("/"))
}

/// Decode file bytes. Latin-1 maps every byte to the code point of the same value.
pub fn decode(bytes: Vec<u8>, encoding: Encoding) -> Result<String> {
	match encoding {
		Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
		Encoding::Utf8 => Ok(String::from_utf8(bytes)?),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn latin1_maps_bytes_to_code_points() {
		let text = decode(vec![b'c', b'a', b'f', 0xe9], Encoding::Latin1).unwrap();
		assert_eq!(text, "café");
	}

	#[test]
	fn utf8_rejects_invalid_bytes() {
		assert!(decode(vec![0xe9, b'x'], Encoding::Utf8).is_err());
		assert_eq!(decode("café".as_bytes().to_vec(), Encoding::Utf8).unwrap(), "café");
	}

	#[test]
	fn walks_topics_in_name_order() {
		let root = tempfile::tempdir().unwrap();
		fs::create_dir(root.path().join("tech")).unwrap();
		fs::create_dir(root.path().join("business")).unwrap();
		fs::write(root.path().join("tech/002.txt"), "B\n\nbody").unwrap();
		fs::write(root.path().join("tech/001.TXT"), "A\n\nbody").unwrap();
		fs::write(root.path().join("business/001.txt"), "C\n\nbody").unwrap();
		fs::write(root.path().join("business/notes.md"), "ignored").unwrap();
		fs::write(root.path().join("README.txt"), "top level").unwrap();

		let discovery = discover(root.path(), Encoding::Latin1).unwrap();
		let ids: Vec<&str> = discovery.documents.iter().map(|(id, _)| id.as_str()).collect();
		assert_eq!(ids, vec!["README.txt", "business/001.txt", "tech/001.TXT", "tech/002.txt"]);
		assert!(discovery.errors.is_empty());
	}

	#[test]
	fn missing_root_fails() {
		assert!(discover(Path::new("/definitely/not/here"), Encoding::Utf8).is_err());
	}
}
