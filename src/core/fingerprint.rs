//! Document fingerprints (word vector centroids)

/// Mean embedding of a document body
///
/// A body without a single embeddable token yields a vector of NaN components.
/// That sentinel is kept on purpose so rankings can detect it and sink it.
#[derive(Debug, Clone, PartialEq)]
pub struct Fingerprint(Vec<f32>);

impl Fingerprint {
	pub fn new(data: Vec<f32>) -> Self {
		Self(data)
	}

	/// All-NaN fingerprint of the given dimension
	pub fn degenerate(dim: usize) -> Self {
		Self(vec![f32::NAN; dim])
	}

	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn dim(&self) -> usize {
		self.0.len()
	}

	/// True when there are no components or any component is NaN
	pub fn is_degenerate(&self) -> bool {
		self.0.is_empty() || self.0.iter().any(|v| v.is_nan())
	}

	/// Euclidean distance; NaN if either side is degenerate
	pub fn distance(&self, other: &Self) -> f32 {
		if self.0.is_empty() || self.0.len() != other.0.len() {
			return f32::NAN;
		}
		self.0
			.iter()
			.zip(other.0.iter())
			.map(|(a, b)| (a - b) * (a - b))
			.sum::<f32>()
			.sqrt()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn euclidean_distance() {
		let a = Fingerprint::new(vec![0.0, 0.0]);
		let b = Fingerprint::new(vec![3.0, 4.0]);
		assert_eq!(a.distance(&b), 5.0);
		assert_eq!(a.distance(&a), 0.0);
	}

	#[test]
	fn degenerate_distance_is_nan() {
		let a = Fingerprint::new(vec![0.0, 0.0]);
		let d = Fingerprint::degenerate(2);
		assert!(d.is_degenerate());
		assert!(!a.is_degenerate());
		assert!(a.distance(&d).is_nan());
		assert!(d.distance(&d).is_nan());
	}

	#[test]
	fn zero_length_is_degenerate() {
		let empty = Fingerprint::new(Vec::new());
		assert!(empty.is_degenerate());
		assert!(Fingerprint::degenerate(0).is_degenerate());
		assert!(empty.distance(&empty).is_nan());
		assert!(Fingerprint::new(vec![1.0]).distance(&empty).is_nan());
	}
}
