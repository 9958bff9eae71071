//! Centroid - article recommendations from word embedding centroids

use anyhow::Result;
use clap::{CommandFactory, Parser};

use centroid::cli::{Cli, Command};
use centroid::{commands, config, ui};

fn main() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);
	if let Some(dir) = cli.data_dir {
		config::set_data_dir(dir);
	}

	match cli.command {
		Command::Build {
			embeddings,
			corpus,
			count,
			encoding,
			export,
		} => commands::build::run(&embeddings, &corpus, count, encoding, export.as_deref()),
		Command::List { topic } => commands::list::run(topic.as_deref()),
		Command::Show { topic, name, full } => commands::show::run(&topic, &name, full),
		Command::Query {
			text,
			embeddings,
			corpus,
			limit,
			encoding,
		} => commands::query::run(&text, &embeddings, &corpus, limit, encoding),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					ui::error(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}
