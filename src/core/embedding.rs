//! Pretrained word embedding table
//!
//! Lines look like `word 0.418 0.24968 -0.41242 ...`. Any dimension is
//! accepted as long as every line agrees with the first one.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::{Error, Result};
use super::stopwords::is_stop_word;

/// Immutable token to vector mapping. Never contains stop words.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
	vectors: HashMap<String, Vec<f32>>,
	dim: usize,
}

impl EmbeddingTable {
	/// Stream an embedding file from disk
	pub fn load(path: &Path) -> Result<Self> {
		let file = File::open(path)?;
		Self::from_reader(BufReader::new(file))
	}

	/// Parse embedding lines one at a time from any buffered source
	pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
		let mut vectors = HashMap::new();
		let mut dim = 0;

		for (idx, line) in reader.lines().enumerate() {
			let line = line?;
			let line = line.strip_suffix('\r').unwrap_or(&line);
			if line.is_empty() {
				continue;
			}

			let mut fields = line.split(' ');
			let token = fields.next().unwrap_or_default();
			if is_stop_word(token) {
				continue;
			}

			let vector = fields
				.map(|field| {
					field.parse::<f32>().map_err(|_| Error::MalformedEmbeddingLine {
						line: idx + 1,
						reason: format!("'{}' is not a number", field),
					})
				})
				.collect::<Result<Vec<f32>>>()?;

			if vector.is_empty() {
				return Err(Error::MalformedEmbeddingLine {
					line: idx + 1,
					reason: format!("no components for '{}'", token),
				});
			}

			if dim == 0 {
				dim = vector.len();
			} else if vector.len() != dim {
				return Err(Error::MalformedEmbeddingLine {
					line: idx + 1,
					reason: format!("expected {} components, found {}", dim, vector.len()),
				});
			}

			vectors.insert(token.to_string(), vector);
		}

		if vectors.is_empty() {
			return Err(Error::EmptySource);
		}

		Ok(Self { vectors, dim })
	}

	pub fn get(&self, token: &str) -> Option<&[f32]> {
		self.vectors.get(token).map(Vec::as_slice)
	}

	pub fn contains(&self, token: &str) -> bool {
		self.vectors.contains_key(token)
	}

	/// Vector dimension shared by every entry
	pub fn dim(&self) -> usize {
		self.dim
	}

	pub fn len(&self) -> usize {
		self.vectors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vectors.is_empty()
	}
}
