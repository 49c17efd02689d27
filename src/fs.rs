use std::path::{Path, PathBuf};

use anyhow::Context;
use dashmap::{DashMap, DashSet};
use itertools::Itertools;

/// The file operations that compiling a pack needs. Implementations must be
/// safe to call from multiple threads at once, since namespaces are compiled in parallel
pub trait FileSystem: Sync {
	/// Creates a directory and all of its parents. Must succeed if the directory already exists
	fn ensure_dir(&self, path: &Path) -> anyhow::Result<()>;

	/// Writes a file, replacing it if it already exists
	fn write_file(&self, path: &Path, contents: &str) -> anyhow::Result<()>;
}

/// Filesystem that writes to the real disk
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl FileSystem for DiskFs {
	fn ensure_dir(&self, path: &Path) -> anyhow::Result<()> {
		std::fs::create_dir_all(path)
			.with_context(|| format!("Failed to create directory {}", path.display()))
	}

	fn write_file(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
		std::fs::write(path, contents)
			.with_context(|| format!("Failed to write file {}", path.display()))
	}
}

/// Filesystem that keeps everything in memory. Useful for tests and for
/// inspecting what a pack would output without touching the disk
#[derive(Debug, Default)]
pub struct MemoryFs {
	dirs: DashSet<PathBuf>,
	files: DashMap<PathBuf, String>,
}

impl MemoryFs {
	pub fn new() -> Self {
		Self::default()
	}

	/// Gets the contents of a written file
	pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
		self.files.get(path.as_ref()).map(|x| x.value().clone())
	}

	pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
		self.dirs.contains(path.as_ref())
	}

	/// All written file paths, sorted
	pub fn files(&self) -> Vec<PathBuf> {
		self.files.iter().map(|x| x.key().clone()).sorted().collect()
	}
}

impl FileSystem for MemoryFs {
	fn ensure_dir(&self, path: &Path) -> anyhow::Result<()> {
		for dir in path.ancestors() {
			if dir.as_os_str().is_empty() {
				break;
			}
			self.dirs.insert(dir.to_path_buf());
		}
		Ok(())
	}

	fn write_file(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
		if let Some(parent) = path.parent() {
			if !parent.as_os_str().is_empty() && !self.dirs.contains(parent) {
				anyhow::bail!(
					"Failed to write file {}: parent directory does not exist",
					path.display()
				);
			}
		}
		self.files.insert(path.to_path_buf(), contents.to_string());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_memory_fs_dirs() {
		let fs = MemoryFs::new();
		fs.ensure_dir(Path::new("out/a/b")).unwrap();
		// Creating it again is fine
		fs.ensure_dir(Path::new("out/a/b")).unwrap();
		assert!(fs.has_dir("out"));
		assert!(fs.has_dir("out/a"));
		assert!(fs.has_dir("out/a/b"));
	}

	#[test]
	fn test_memory_fs_write_needs_parent() {
		let fs = MemoryFs::new();
		assert!(fs.write_file(Path::new("out/file.txt"), "x").is_err());
		fs.ensure_dir(Path::new("out")).unwrap();
		fs.write_file(Path::new("out/file.txt"), "x").unwrap();
		fs.write_file(Path::new("out/file.txt"), "y").unwrap();
		assert_eq!(fs.read("out/file.txt").as_deref(), Some("y"));
		assert_eq!(fs.files(), vec![PathBuf::from("out/file.txt")]);
	}
}
