//! Text normalization into embedding lookup tokens

use crate::config::MIN_TOKEN_LEN;
use crate::core::{Error, Result};

pub use crate::core::stopwords::{is_stop_word, STOP_WORDS};

fn is_separator(c: char) -> bool {
	c.is_ascii_punctuation() || c.is_ascii_digit() || matches!(c, '\r' | '\t' | '\n')
}

/// Lowercase, strip punctuation and digits, split on spaces, then drop
/// short words and stop words. Order and duplicates are preserved.
pub fn normalize(text: &str) -> Vec<String> {
	let cleaned: String = text
		.to_lowercase()
		.chars()
		.map(|c| if is_separator(c) { ' ' } else { c })
		.collect();

	cleaned
		.split(' ')
		.filter(|word| word.chars().count() >= MIN_TOKEN_LEN && !is_stop_word(word))
		.map(str::to_string)
		.collect()
}

/// Normalize raw bytes, which must be UTF-8 text
pub fn normalize_bytes(bytes: &[u8]) -> Result<Vec<String>> {
	let text = std::str::from_utf8(bytes)
		.map_err(|e| Error::InvalidInput(format!("not UTF-8 text: {}", e)))?;
	Ok(normalize(text))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lowercases_and_strips_punctuation() {
		let tokens = normalize("Ad sales boost Time Warner's profit!\n\nQuarterly profits at US media giant");
		assert_eq!(
			tokens,
			vec!["sales", "boost", "time", "warner", "profit", "quarterly", "profits", "media", "giant"]
		);
	}

	#[test]
	fn digits_and_control_characters_split_words() {
		assert_eq!(normalize("rose2004fell\tdollar\r\neuro"), vec!["rose", "fell", "dollar", "euro"]);
	}

	#[test]
	fn keeps_non_ascii_characters() {
		assert_eq!(normalize("Café Zürich\u{a0}naïve"), vec!["café", "zürich\u{a0}naïve"]);
	}

	#[test]
	fn drops_short_words() {
		let tokens = normalize("ox ax yak gnu it's ok");
		assert_eq!(tokens, vec!["yak", "gnu"]);
		assert!(tokens.iter().all(|t| t.chars().count() >= 3));
	}

	#[test]
	fn drops_stop_words() {
		let text = STOP_WORDS.join(" ");
		assert!(normalize(&text).is_empty());
		assert!(normalize("THE Therefore Whereupon").is_empty());
	}

	#[test]
	fn keeps_duplicates_in_order() {
		assert_eq!(normalize("market, market; bank"), vec!["market", "market", "bank"]);
	}

	#[test]
	fn normalization_is_idempotent() {
		let inputs = [
			"Shares in UK drinks and food firm Allied Domecq have risen on speculation \
			 that it could be the target of a takeover by France's Pernod Ricard (2005).",
			"Profits rose 76% to $1.13bn (£600m) in 2004-05",
			"column\tseparated\tvalues\r\nnext\rline\nend",
			"Élan vital, naïve CAFÉ in Zürich\u{a0}and Straße",
			"the and of which whereupon themselves",
			"",
			"   multiple   spaces   between   words   ",
		];

		for text in inputs {
			let once = normalize(text);
			let twice = normalize(&once.join(" "));
			assert_eq!(once, twice, "not idempotent for {:?}", text);
		}
	}

	#[test]
	fn rejects_non_utf8_bytes() {
		assert!(matches!(normalize_bytes(&[0x66, 0xff, 0x6f]), Err(Error::InvalidInput(_))));
		assert_eq!(normalize_bytes(b"dollar gains").unwrap(), vec!["dollar", "gains"]);
	}
}
