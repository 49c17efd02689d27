pub mod files;
pub mod meta;

use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::common::MINECRAFT_NAMESPACE;
use crate::error::DatapackError;
use crate::fs::{DiskFs, FileSystem};
use crate::namespace::Namespace;
use crate::project::PackOptions;

use self::files::{get_pack_root, META_FILE};
use self::meta::McMeta;

/// A datapack, made of the minecraft namespace and any number of other namespaces
#[derive(Debug, Clone, PartialEq)]
pub struct Datapack {
	name: String,
	format: u32,
	description: String,
	minecraft: Namespace,
	namespaces: FxHashMap<String, Namespace>,
}

impl Datapack {
	/// Creates an empty datapack. The name is used as the output folder name
	pub fn new(name: impl Into<String>, options: PackOptions) -> Self {
		let name = name.into();
		let description = options.description.unwrap_or_else(|| name.clone());
		Self {
			name,
			format: options.format,
			description,
			minecraft: Namespace::minecraft(),
			namespaces: FxHashMap::default(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn format(&self) -> u32 {
		self.format
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn meta(&self) -> McMeta {
		McMeta::new(self.format, self.description.clone())
	}

	pub fn minecraft(&self) -> &Namespace {
		&self.minecraft
	}

	pub fn minecraft_mut(&mut self) -> &mut Namespace {
		&mut self.minecraft
	}

	/// Gets a namespace that was added to this pack. The minecraft namespace
	/// is not in here, use [`Self::minecraft`] for it instead
	pub fn namespace(&self, name: &str) -> Option<&Namespace> {
		self.namespaces.get(name)
	}

	pub fn namespace_mut(&mut self, name: &str) -> Option<&mut Namespace> {
		self.namespaces.get_mut(name)
	}

	pub fn namespaces(&self) -> &FxHashMap<String, Namespace> {
		&self.namespaces
	}

	/// Adds a copy of a namespace to the pack and returns the stored copy
	pub fn add_namespace(
		&mut self,
		namespace: &Namespace,
	) -> Result<&mut Namespace, DatapackError> {
		self.insert_namespace(namespace.clone())
	}

	/// Creates an empty namespace in the pack
	pub fn create_namespace(
		&mut self,
		name: impl Into<String>,
	) -> Result<&mut Namespace, DatapackError> {
		let namespace = Namespace::new(name)?;
		self.insert_namespace(namespace)
	}

	/// Removes a namespace. Does nothing if it does not exist
	pub fn delete_namespace(&mut self, name: &str) {
		self.namespaces.remove(name);
	}

	fn insert_namespace(&mut self, namespace: Namespace) -> Result<&mut Namespace, DatapackError> {
		let name = namespace.name().to_string();
		if name == MINECRAFT_NAMESPACE {
			return Err(DatapackError::ReservedName(name));
		}
		if self.namespaces.contains_key(&name) {
			return Err(DatapackError::DuplicateName(name));
		}
		debug!("Added namespace {name} to pack {}", self.name);

		Ok(self.namespaces.entry(name).or_insert(namespace))
	}

	/// Outputs the datapack to a folder with the name of the pack inside of `dest`
	pub fn compile(&self, dest: &Path) -> anyhow::Result<()> {
		self.compile_with(dest, &DiskFs)
	}

	/// Outputs the datapack using a custom filesystem. The manifest and every
	/// namespace are written in parallel. If one of them fails, whatever was
	/// already written is left in place
	pub fn compile_with(&self, dest: &Path, fs: &dyn FileSystem) -> anyhow::Result<()> {
		let root = get_pack_root(dest, &self.name);
		info!("Compiling datapack {} to {}", self.name, root.display());

		fs.ensure_dir(&root.join("data"))
			.context("Failed to create data directory")?;

		let namespaces: Vec<_> = std::iter::once(&self.minecraft)
			.chain(
				self.namespaces
					.values()
					.sorted_by(|l, r| l.name().cmp(r.name())),
			)
			.collect();

		let (meta_result, ns_result) = rayon::join(
			|| self.write_meta(&root, fs),
			|| {
				namespaces.par_iter().try_for_each(|namespace| {
					namespace.compile(&root, fs).with_context(|| {
						format!("Failed to compile namespace {}", namespace.name())
					})
				})
			},
		);
		meta_result?;
		ns_result?;

		info!("Finished compiling datapack {}", self.name);
		Ok(())
	}

	fn write_meta(&self, root: &Path, fs: &dyn FileSystem) -> anyhow::Result<()> {
		let contents = self.meta().to_json().context("Failed to serialize pack meta")?;
		fs.write_file(&root.join(META_FILE), &contents)
			.context("Failed to write pack meta")
	}
}
