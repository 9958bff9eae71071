use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_QUERY_LIMIT, DEFAULT_RECOMMENDATIONS};

/// Character encoding of corpus text files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
	/// ISO-8859-1, every byte is one character (BBC corpus)
	#[default]
	Latin1,
	/// UTF-8, files with invalid bytes are skipped
	Utf8,
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "centroid",
	author,
	version,
	about = "Article recommendations from word embedding centroids",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {build}  {build_args}   {build_desc}
  {bin} {list}   {list_args}                                {list_desc}
  {bin} {show}   {show_args}                        {show_desc}
  {bin} {query}  {query_args}  {query_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "centroid".bright_blue(),
		build = "build".yellow(),
		build_args = "-e glove.6B.300d.txt -c ~/data/bbc",
		build_desc = "Fingerprint and rank a corpus".dimmed(),
		list = "list".yellow(),
		list_args = "-t tech",
		list_desc = "List article titles".dimmed(),
		show = "show".yellow(),
		show_args = "tech 001.txt",
		show_desc = "Article with recommendations".dimmed(),
		query = "query".yellow(),
		query_args = "\"oil prices\" -e glove.txt -c bbc",
		query_desc = "Rank articles against text".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Directory holding the article and recommendation tables
	#[arg(long = "data-dir", global = true, value_name = "DIR")]
	pub data_dir: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Fingerprint every article and precompute recommendations
	Build {
		/// Word embedding file (GloVe text format)
		#[arg(short = 'e', long = "embeddings", value_name = "FILE")]
		embeddings: PathBuf,

		/// Corpus root; articles live in <root>/<topic>/<name>.txt
		#[arg(short = 'c', long = "corpus", value_name = "DIR")]
		corpus: PathBuf,

		/// Recommendations kept per article
		#[arg(short = 'n', long = "count", default_value_t = DEFAULT_RECOMMENDATIONS)]
		count: usize,

		/// Text encoding of corpus files
		#[arg(long = "encoding", value_enum, default_value_t = Encoding::Latin1)]
		encoding: Encoding,

		/// Also export both tables as JSON ("-" for stdout)
		#[arg(long = "export", value_name = "FILE")]
		export: Option<PathBuf>,
	},

	/// List article titles from the stored table
	List {
		/// Only show this topic
		#[arg(short = 't', long = "topic")]
		topic: Option<String>,
	},

	/// Show one article and its recommendations
	Show {
		/// Article topic (first path segment)
		topic: String,

		/// Article name within the topic
		name: String,

		/// Print the full body instead of an excerpt
		#[arg(short = 'f', long = "full")]
		full: bool,
	},

	/// Rank corpus articles by closeness to free text
	Query {
		/// Text to fingerprint
		#[arg(value_name = "TEXT")]
		text: String,

		/// Word embedding file (GloVe text format)
		#[arg(short = 'e', long = "embeddings", value_name = "FILE")]
		embeddings: PathBuf,

		/// Corpus root
		#[arg(short = 'c', long = "corpus", value_name = "DIR")]
		corpus: PathBuf,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_QUERY_LIMIT)]
		limit: usize,

		/// Text encoding of corpus files
		#[arg(long = "encoding", value_enum, default_value_t = Encoding::Latin1)]
		encoding: Encoding,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
