pub mod function;
pub mod loot;
pub mod predicate;
pub mod recipe;
pub mod tag;

use std::fmt::Display;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::datapack::files::get_entity_path;
use crate::fs::FileSystem;

/// The different kinds of files that a namespace can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataCategory {
	Functions,
	BlockTags,
	ItemTags,
	FunctionTags,
	Recipes,
	LootTables,
	Predicates,
}

impl DataCategory {
	/// Every category, in the order that their directories are created
	pub const ALL: [DataCategory; 7] = [
		Self::Functions,
		Self::BlockTags,
		Self::ItemTags,
		Self::FunctionTags,
		Self::Recipes,
		Self::LootTables,
		Self::Predicates,
	];

	/// The directory of this category relative to the namespace directory
	pub fn dir(&self) -> &'static str {
		match self {
			Self::Functions => "functions",
			Self::BlockTags => "tags/blocks",
			Self::ItemTags => "tags/items",
			Self::FunctionTags => "tags/functions",
			Self::Recipes => "recipes",
			Self::LootTables => "loot_tables",
			Self::Predicates => "predicates",
		}
	}

	/// The file extension of this category, without the dot
	pub fn extension(&self) -> &'static str {
		match self {
			Self::Functions => "mcfunction",
			_ => "json",
		}
	}
}

impl Display for DataCategory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let text = match self {
			Self::Functions => "function",
			Self::BlockTags => "block tag",
			Self::ItemTags => "item tag",
			Self::FunctionTags => "function tag",
			Self::Recipes => "recipe",
			Self::LootTables => "loot table",
			Self::Predicates => "predicate",
		};
		write!(f, "{text}")
	}
}

/// The type of thing that a tag groups together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
	Block,
	Item,
	Function,
}

impl TagKind {
	pub const ALL: [TagKind; 3] = [Self::Block, Self::Item, Self::Function];

	pub fn category(&self) -> DataCategory {
		match self {
			Self::Block => DataCategory::BlockTags,
			Self::Item => DataCategory::ItemTags,
			Self::Function => DataCategory::FunctionTags,
		}
	}
}

/// A single file inside of a namespace. Cloning an entity makes a deep copy,
/// which is what namespaces store when an entity is added to them
pub trait Entity: Clone {
	/// The path of the file relative to its category directory, without an extension
	fn path(&self) -> &str;

	fn category(&self) -> DataCategory;

	/// Serializes this entity to the body of its file
	fn contents(&self) -> anyhow::Result<String>;

	/// Writes this entity into the directory of its category
	fn compile(&self, category_root: &Path, fs: &dyn FileSystem) -> anyhow::Result<()> {
		let path = get_entity_path(category_root, self.path(), self.category().extension());
		if let Some(parent) = path.parent() {
			fs.ensure_dir(parent)?;
		}
		let contents = self
			.contents()
			.with_context(|| format!("Failed to serialize {} {}", self.category(), self.path()))?;
		fs.write_file(&path, &contents)?;
		tracing::trace!("Wrote {}", path.display());

		Ok(())
	}
}

/// Serializes a JSON entity body
pub(crate) fn json_contents<T: Serialize>(value: &T) -> anyhow::Result<String> {
	serde_json::to_string(value).context("Failed to serialize JSON contents")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_category_dirs() {
		let dirs: Vec<_> = DataCategory::ALL.iter().map(|x| x.dir()).collect();
		assert_eq!(
			dirs,
			[
				"functions",
				"tags/blocks",
				"tags/items",
				"tags/functions",
				"recipes",
				"loot_tables",
				"predicates"
			]
		);
		assert_eq!(DataCategory::Functions.extension(), "mcfunction");
		assert_eq!(DataCategory::LootTables.extension(), "json");
	}

	#[test]
	fn test_tag_kind_category() {
		assert_eq!(TagKind::Item.category(), DataCategory::ItemTags);
		assert_eq!(TagKind::Function.category().dir(), "tags/functions");
	}
}
