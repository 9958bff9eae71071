//! Unified logging system

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	println!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}

/// Clickable file path (OSC 8 terminal hyperlink)
pub fn path_link(path: &std::path::Path, max_len: usize) -> String {
	let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

	let uri = if cfg!(windows) {
		let path_str = absolute.to_string_lossy();
		let cleaned = path_str.strip_prefix(r"\\?\").unwrap_or(&path_str);
		format!("file:///{}", cleaned.replace('\\', "/"))
	} else {
		format!("file://{}", absolute.display())
	};

	let display = path.display().to_string();
	let display = if display.chars().count() > max_len {
		let tail: String = display.chars().rev().take(max_len.saturating_sub(3)).collect();
		format!("...{}", tail.chars().rev().collect::<String>())
	} else {
		display
	};

	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", uri, display)
}

/// One ranked line: `#1 business/001.txt  Title  (0.42)`
pub fn ranked_entry(rank: usize, key: &str, title: &str, distance: Option<f32>) -> String {
	let rank = format!("#{}", rank).bright_blue().bold();
	let distance = distance
		.map(|d| format!("({:.3})", d).dimmed().to_string())
		.unwrap_or_default();
	format!("  {} {} {} {}", rank, key.yellow(), title.bright_white(), distance)
		.trim_end()
		.to_string()
}

/// Shorten long text to at most `max_chars` characters
pub fn excerpt(text: &str, max_chars: usize) -> String {
	if text.chars().count() <= max_chars {
		return text.to_string();
	}
	let cut: String = text.chars().take(max_chars).collect();
	format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn excerpt_keeps_short_text() {
		assert_eq!(excerpt("short", 10), "short");
	}

	#[test]
	fn excerpt_cuts_on_characters() {
		assert_eq!(excerpt("héllo wörld", 6), "héllo…");
	}

	#[test]
	fn verbose_flag_toggles() {
		Log::set_verbose(true);
		assert!(Log::is_verbose());
		Log::set_verbose(false);
		assert!(!Log::is_verbose());
	}
}
