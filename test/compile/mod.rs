mod common;

use std::panic::catch_unwind;

use anyhow::{bail, Context};
use color_print::cprintln;
use common::{compile_definition, create_output};
use include_dir::{include_dir, Dir};
use mcpack::entity::function::{Command, Function, Value};
use mcpack::entity::{DataCategory, TagKind};
use mcpack::{Datapack, PackOptions};

static TESTS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/test/compile/tests");

fn main() {
	let mut test_names = Vec::new();
	for file in TESTS.files() {
		let path = file.path();
		let file_name = path
			.file_name()
			.expect("Failed to get filename of file")
			.to_string_lossy();
		let file_stem = path
			.file_stem()
			.expect("Failed to get file stem of file")
			.to_string_lossy();
		if file_name.ends_with(".json") {
			test_names.push(file_stem.to_string());
		}
	}
	test_names.sort();
	for test in test_names {
		cprintln!("     - Running compile test <cyan>'{}'</>", test);
		run_test(&test).unwrap_or_else(|e| panic!("Test {test} failed: {e:?}"));
	}

	let disk_tests: [(&str, fn() -> anyhow::Result<()>); 2] = [
		("disk_concurrent", disk_concurrent),
		("copy_isolation", copy_isolation),
	];
	for (name, test) in disk_tests {
		catch_unwind(|| {
			cprintln!("     - Running disk test <cyan>'{}'</>", name);
			test().expect("Test failed");
		})
		.unwrap_or_else(|_| panic!("Test {name} failed"));
	}
}

fn run_test(test_name: &str) -> anyhow::Result<()> {
	let input_contents = TESTS
		.get_file(format!("{test_name}.json"))
		.expect("Input file does not exist")
		.contents_utf8()
		.context("Input file is not UTF-8")?;
	let output_contents = TESTS
		.get_file(format!("{test_name}.expected"))
		.expect("Output file does not exist")
		.contents_utf8()
		.context("Output file is not UTF-8")?;

	let fs = compile_definition(input_contents)?;
	let actual = create_output(&fs)?;

	let expected: Vec<_> = output_contents.trim_end().lines().collect();
	let actual: Vec<_> = actual.trim_end().lines().collect();
	for (i, (l, r)) in expected.iter().zip(actual.iter()).enumerate() {
		assert_eq!(l, r, "Output mismatch at line {i}");
	}
	assert_eq!(expected.len(), actual.len(), "Outputs are of different lengths");

	Ok(())
}

/// Two namespaces compiled at once to a real directory must both be complete
fn disk_concurrent() -> anyhow::Result<()> {
	let dir = tempfile::tempdir()?;
	let mut pack = Datapack::new("concurrent", PackOptions::default());
	for name in ["alpha", "beta"] {
		let ns = pack.create_namespace(name)?;
		for i in 0..50 {
			let cmd = Command::new("scoreboard players set", Vec::new())
				.arg("@s")
				.arg("x")
				.arg(Value::int(i));
			let mut func = Function::new(format!("gen/f{i}"));
			func.add_command(cmd);
			ns.add_function(&func)?;
			ns.create_tag(
				format!("gen/t{i}"),
				TagKind::Item,
				vec![format!("{name}:item{i}")],
			)?;
		}
	}
	pack.compile(dir.path())?;

	let root = dir.path().join("concurrent");
	if !root.join("pack.mcmeta").exists() {
		bail!("Pack meta is missing");
	}
	for name in ["alpha", "beta"] {
		let ns_root = root.join("data").join(name);
		for category in DataCategory::ALL.map(|x| x.dir()) {
			if !ns_root.join(category).is_dir() {
				bail!("Category directory {category} is missing in {name}");
			}
		}
		for i in 0..50 {
			let func =
				std::fs::read_to_string(ns_root.join(format!("functions/gen/f{i}.mcfunction")))?;
			assert_eq!(func, format!("scoreboard players set @s x {i}"));
			let tag = std::fs::read_to_string(ns_root.join(format!("tags/items/gen/t{i}.json")))?;
			assert_eq!(tag, format!("{{\"values\":[\"{name}:item{i}\"]}}"));
		}
	}
	// The default namespace is always created
	if !root.join("data/minecraft/loot_tables").is_dir() {
		bail!("Minecraft namespace is missing");
	}

	Ok(())
}

/// Changing a created tag afterwards must not change the compiled file
fn copy_isolation() -> anyhow::Result<()> {
	let dir = tempfile::tempdir()?;
	let mut pack = Datapack::new("iso", PackOptions::default());
	let ns = pack.create_namespace("a")?;
	let mut tag = ns.create_tag("t", TagKind::Block, vec!["x".into()])?;
	tag.values.push("y".into());
	// Recompiling overwrites existing files
	pack.compile(dir.path())?;
	pack.compile(dir.path())?;

	let contents = std::fs::read_to_string(dir.path().join("iso/data/a/tags/blocks/t.json"))?;
	assert_eq!(contents, r#"{"values":["x"]}"#);
	Ok(())
}
