//! Error kinds raised by the recommendation pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
	/// Input handed to the normalizer was not decodable text
	#[error("Invalid input: {0}")]
	InvalidInput(String),

	/// A line of the embedding source could not be turned into a vector
	#[error("Malformed embedding line {line}: {reason}")]
	MalformedEmbeddingLine { line: usize, reason: String },

	/// The embedding source produced no usable entries
	#[error("Embedding source contains no usable lines")]
	EmptySource,

	/// Document identifier lacks a `topic/name` separator
	#[error("Malformed identifier '{0}': expected topic/name")]
	MalformedIdentifier(String),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}
