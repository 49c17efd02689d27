use std::path::{Path, PathBuf};

use crate::entity::DataCategory;

/// The name of the pack manifest file
pub const META_FILE: &str = "pack.mcmeta";

/// Gets the root directory of a pack inside of the output directory
pub fn get_pack_root(dest: &Path, pack_name: &str) -> PathBuf {
	dest.join(pack_name)
}

/// Gets the directory of a namespace inside of the pack root
pub fn get_namespace_root(pack_root: &Path, namespace: &str) -> PathBuf {
	pack_root.join("data").join(namespace)
}

/// Gets the directory of a category inside of a namespace directory
pub fn get_category_root(namespace_root: &Path, category: DataCategory) -> PathBuf {
	join_segments(namespace_root, category.dir())
}

/// Gets the file path of an entity from the directory of its category.
/// Paths with slashes are placed in nested directories
pub fn get_entity_path(category_root: &Path, path: &str, extension: &str) -> PathBuf {
	join_segments(category_root, &format!("{path}.{extension}"))
}

fn join_segments(base: &Path, path: &str) -> PathBuf {
	let mut out = base.to_path_buf();
	for segment in path.split('/').filter(|x| !x.is_empty()) {
		out.push(segment);
	}
	out
}
