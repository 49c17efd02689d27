use std::{
	io::{stdin, Read},
	path::PathBuf,
	process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use mcpack::definition::PackDefinition;
use tracing::Level;

fn main() -> ExitCode {
	let cli = Cli::parse();
	tracing_subscriber::fmt()
		.with_max_level(log_level(cli.verbose))
		.with_writer(std::io::stderr)
		.init();

	let res = run(cli);
	if let Err(e) = res {
		eprintln!("{e:#?}");
		return ExitCode::FAILURE;
	}

	ExitCode::SUCCESS
}

fn run(cli: Cli) -> anyhow::Result<()> {
	let contents = if cli.stdin {
		let mut stdin = stdin();
		let mut text = String::new();
		stdin
			.read_to_string(&mut text)
			.context("Failed to read from stdin")?;
		text
	} else {
		let file = cli.file.context("No file specified")?;
		std::fs::read_to_string(PathBuf::from(file)).context("Failed to read input file")?
	};

	let definition = PackDefinition::parse(&contents)?;
	let datapack = definition.build().context("Failed to build datapack")?;
	datapack
		.compile(&PathBuf::from(cli.out))
		.context("Failed to output datapack")?;

	Ok(())
}

fn log_level(verbose: u8) -> Level {
	match verbose {
		0 => Level::WARN,
		1 => Level::INFO,
		2 => Level::DEBUG,
		_ => Level::TRACE,
	}
}

#[derive(Parser)]
pub struct Cli {
	/// Whether to take input from stdin
	#[arg(short, long)]
	stdin: bool,
	/// The output directory
	#[arg(short, long)]
	out: String,
	/// Print more logs. Can be repeated
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
	/// The pack definition file to read from
	file: Option<String>,
}
