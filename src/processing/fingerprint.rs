//! Centroid of word embeddings

use crate::core::{EmbeddingTable, Fingerprint};

use super::normalize::normalize;

/// Element-wise mean of the vectors of every token found in the table.
/// Unknown tokens are ignored; if none are known the result is degenerate.
pub fn fingerprint<S: AsRef<str>>(tokens: &[S], table: &EmbeddingTable) -> Fingerprint {
	let dim = table.dim();
	let mut centroid = vec![0.0f32; dim];
	let mut count = 0usize;

	for vector in tokens.iter().filter_map(|t| table.get(t.as_ref())) {
		for (acc, &val) in centroid.iter_mut().zip(vector) {
			*acc += val;
		}
		count += 1;
	}

	if count == 0 {
		return Fingerprint::degenerate(dim);
	}

	let n = count as f32;
	for val in &mut centroid {
		*val /= n;
	}

	Fingerprint::new(centroid)
}

/// Fingerprint of arbitrary text
pub fn doc2vec(text: &str, table: &EmbeddingTable) -> Fingerprint {
	fingerprint(&normalize(text), table)
}
