mod common;

use std::{fs::File, io::Write, path::PathBuf};

use common::{compile_definition, create_output};

fn main() {
	let test_dir = PathBuf::from("./test/compile/tests");
	let test_name = std::env::args().nth(1).expect("Test name argument missing");
	let input = std::fs::read_to_string(test_dir.join(format!("{test_name}.json")))
		.expect("Failed to open test file");

	let fs = compile_definition(&input).expect("Failed to compile test input");

	let mut out_file = File::create(test_dir.join(format!("{test_name}.expected")))
		.expect("Failed to create output file");
	let output = create_output(&fs).expect("Failed to output generated test");
	write!(&mut out_file, "{output}").expect("Failed to write");
}
