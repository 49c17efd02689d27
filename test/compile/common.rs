use std::fmt::Write;
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use mcpack::definition::PackDefinition;
use mcpack::fs::MemoryFs;

/// The directory that test packs are compiled into
pub static OUTPUT_ROOT: &str = "out";

/// Compiles a pack definition into memory
pub fn compile_definition(text: &str) -> anyhow::Result<MemoryFs> {
	let definition = PackDefinition::parse(text)?;
	let pack = definition.build().context("Failed to build pack")?;
	let fs = MemoryFs::new();
	pack.compile_with(Path::new(OUTPUT_ROOT), &fs)
		.context("Failed to compile pack")?;
	Ok(fs)
}

/// Dumps every written file, sorted by path
pub fn create_output(fs: &MemoryFs) -> anyhow::Result<String> {
	let mut out = String::new();
	for path in fs.files() {
		let relative = path
			.strip_prefix(OUTPUT_ROOT)
			.context("File was written outside of the output directory")?;
		let name = relative
			.components()
			.map(|x| x.as_os_str().to_string_lossy())
			.join("/");
		let contents = fs.read(&path).context("Listed file does not exist")?;
		writeln!(&mut out, "# === {name} === #")?;
		writeln!(&mut out, "{contents}")?;
		out.push('\n');
	}

	// Remove the final newline
	out.pop();

	Ok(out)
}
