use std::collections::hash_map::Entry;
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::common::{validate_entity_path, validate_namespace_name, MINECRAFT_NAMESPACE};
use crate::datapack::files::{get_category_root, get_namespace_root};
use crate::entity::function::Function;
use crate::entity::loot::LootTable;
use crate::entity::predicate::Predicate;
use crate::entity::recipe::{Recipe, RecipeKind};
use crate::entity::tag::Tag;
use crate::entity::{DataCategory, Entity, TagKind};
use crate::error::DatapackError;
use crate::fs::FileSystem;

/// Entities of one category, keyed by their path
pub type EntityMap<T> = FxHashMap<String, T>;

/// A named group of functions, tags, recipes, loot tables and predicates.
///
/// Everything that is added to a namespace is copied, so changing the
/// original afterwards does not change what gets compiled. Cloning a
/// namespace copies all of its entities as well
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
	name: String,
	functions: EntityMap<Function>,
	block_tags: EntityMap<Tag>,
	item_tags: EntityMap<Tag>,
	function_tags: EntityMap<Tag>,
	recipes: EntityMap<Recipe>,
	loot_tables: EntityMap<LootTable>,
	predicates: EntityMap<Predicate>,
}

impl Namespace {
	/// Creates an empty namespace. The minecraft namespace cannot be created
	/// this way since every datapack already has one
	pub fn new(name: impl Into<String>) -> Result<Self, DatapackError> {
		let name = name.into();
		validate_namespace_name(&name)?;
		Ok(Self::new_unchecked(name))
	}

	/// The namespace that is owned by every datapack
	pub(crate) fn minecraft() -> Self {
		Self::new_unchecked(MINECRAFT_NAMESPACE.into())
	}

	fn new_unchecked(name: String) -> Self {
		Self {
			name,
			functions: EntityMap::default(),
			block_tags: EntityMap::default(),
			item_tags: EntityMap::default(),
			function_tags: EntityMap::default(),
			recipes: EntityMap::default(),
			loot_tables: EntityMap::default(),
			predicates: EntityMap::default(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Checks whether this namespace has no entities at all
	pub fn is_empty(&self) -> bool {
		self.functions.is_empty()
			&& self.block_tags.is_empty()
			&& self.item_tags.is_empty()
			&& self.function_tags.is_empty()
			&& self.recipes.is_empty()
			&& self.loot_tables.is_empty()
			&& self.predicates.is_empty()
	}

	/// Outputs the files of this namespace into the data directory of a pack.
	/// Every category directory is created, even if it has nothing in it
	pub fn compile(&self, pack_root: &Path, fs: &dyn FileSystem) -> anyhow::Result<()> {
		let ns_root = get_namespace_root(pack_root, &self.name);
		debug!("Compiling namespace {} to {}", self.name, ns_root.display());

		fs.ensure_dir(&ns_root)?;
		for category in DataCategory::ALL {
			fs.ensure_dir(&get_category_root(&ns_root, category))?;
		}

		compile_collection(&self.functions, &ns_root, fs)?;
		for kind in TagKind::ALL {
			compile_collection(self.tags(kind), &ns_root, fs)?;
		}
		compile_collection(&self.recipes, &ns_root, fs)?;
		compile_collection(&self.loot_tables, &ns_root, fs)?;
		compile_collection(&self.predicates, &ns_root, fs)?;

		Ok(())
	}

	pub fn tags(&self, kind: TagKind) -> &EntityMap<Tag> {
		match kind {
			TagKind::Block => &self.block_tags,
			TagKind::Item => &self.item_tags,
			TagKind::Function => &self.function_tags,
		}
	}

	fn tags_mut(&mut self, kind: TagKind) -> &mut EntityMap<Tag> {
		match kind {
			TagKind::Block => &mut self.block_tags,
			TagKind::Item => &mut self.item_tags,
			TagKind::Function => &mut self.function_tags,
		}
	}

	/// Adds a copy of a tag and returns the stored copy
	pub fn add_tag(&mut self, tag: &Tag) -> Result<&mut Tag, DatapackError> {
		insert_entity(self.tags_mut(tag.kind()), tag)
	}

	/// Creates a tag and adds a copy of it. The returned tag is not the stored
	/// one, so changing it does not change the namespace. Use [`Self::get_tag_mut`] for that
	pub fn create_tag(
		&mut self,
		path: impl Into<String>,
		kind: TagKind,
		values: Vec<String>,
	) -> Result<Tag, DatapackError> {
		let tag = Tag::new(path, kind, values);
		self.add_tag(&tag)?;
		Ok(tag)
	}

	pub fn get_tag(&self, path: &str, kind: TagKind) -> Option<&Tag> {
		self.tags(kind).get(path)
	}

	pub fn get_tag_mut(&mut self, path: &str, kind: TagKind) -> Option<&mut Tag> {
		self.tags_mut(kind).get_mut(path)
	}

	/// Removes a tag. Does nothing if it does not exist
	pub fn delete_tag(&mut self, path: &str, kind: TagKind) {
		self.tags_mut(kind).remove(path);
	}

	pub fn functions(&self) -> &EntityMap<Function> {
		&self.functions
	}

	pub fn add_function(&mut self, function: &Function) -> Result<&mut Function, DatapackError> {
		insert_entity(&mut self.functions, function)
	}

	pub fn create_function(&mut self, path: impl Into<String>) -> Result<Function, DatapackError> {
		let function = Function::new(path);
		self.add_function(&function)?;
		Ok(function)
	}

	pub fn get_function(&self, path: &str) -> Option<&Function> {
		self.functions.get(path)
	}

	pub fn get_function_mut(&mut self, path: &str) -> Option<&mut Function> {
		self.functions.get_mut(path)
	}

	pub fn delete_function(&mut self, path: &str) {
		self.functions.remove(path);
	}

	pub fn recipes(&self) -> &EntityMap<Recipe> {
		&self.recipes
	}

	pub fn add_recipe(&mut self, recipe: &Recipe) -> Result<&mut Recipe, DatapackError> {
		insert_entity(&mut self.recipes, recipe)
	}

	pub fn create_recipe(
		&mut self,
		path: impl Into<String>,
		kind: RecipeKind,
	) -> Result<Recipe, DatapackError> {
		let recipe = Recipe::new(path, kind);
		self.add_recipe(&recipe)?;
		Ok(recipe)
	}

	pub fn get_recipe(&self, path: &str) -> Option<&Recipe> {
		self.recipes.get(path)
	}

	pub fn get_recipe_mut(&mut self, path: &str) -> Option<&mut Recipe> {
		self.recipes.get_mut(path)
	}

	pub fn delete_recipe(&mut self, path: &str) {
		self.recipes.remove(path);
	}

	pub fn loot_tables(&self) -> &EntityMap<LootTable> {
		&self.loot_tables
	}

	pub fn add_loot_table(&mut self, table: &LootTable) -> Result<&mut LootTable, DatapackError> {
		insert_entity(&mut self.loot_tables, table)
	}

	pub fn create_loot_table(
		&mut self,
		path: impl Into<String>,
	) -> Result<LootTable, DatapackError> {
		let table = LootTable::new(path);
		self.add_loot_table(&table)?;
		Ok(table)
	}

	pub fn get_loot_table(&self, path: &str) -> Option<&LootTable> {
		self.loot_tables.get(path)
	}

	pub fn get_loot_table_mut(&mut self, path: &str) -> Option<&mut LootTable> {
		self.loot_tables.get_mut(path)
	}

	pub fn delete_loot_table(&mut self, path: &str) {
		self.loot_tables.remove(path);
	}

	pub fn predicates(&self) -> &EntityMap<Predicate> {
		&self.predicates
	}

	pub fn add_predicate(
		&mut self,
		predicate: &Predicate,
	) -> Result<&mut Predicate, DatapackError> {
		insert_entity(&mut self.predicates, predicate)
	}

	pub fn create_predicate(
		&mut self,
		path: impl Into<String>,
	) -> Result<Predicate, DatapackError> {
		let predicate = Predicate::new(path);
		self.add_predicate(&predicate)?;
		Ok(predicate)
	}

	pub fn get_predicate(&self, path: &str) -> Option<&Predicate> {
		self.predicates.get(path)
	}

	pub fn get_predicate_mut(&mut self, path: &str) -> Option<&mut Predicate> {
		self.predicates.get_mut(path)
	}

	pub fn delete_predicate(&mut self, path: &str) {
		self.predicates.remove(path);
	}
}

/// Stores a copy of an entity under its path, failing if the path is
/// malformed or already taken
fn insert_entity<'a, T: Entity>(
	collection: &'a mut EntityMap<T>,
	entity: &T,
) -> Result<&'a mut T, DatapackError> {
	validate_entity_path(entity.path())?;
	match collection.entry(entity.path().to_string()) {
		Entry::Occupied(..) => Err(DatapackError::DuplicateEntity {
			category: entity.category(),
			path: entity.path().to_string(),
		}),
		Entry::Vacant(vacant) => {
			trace!("Added {} {}", entity.category(), entity.path());
			Ok(vacant.insert(entity.clone()))
		}
	}
}

fn compile_collection<T: Entity>(
	collection: &EntityMap<T>,
	ns_root: &Path,
	fs: &dyn FileSystem,
) -> anyhow::Result<()> {
	// Sorted so that the output and any errors are stable
	for entity in collection.values().sorted_by(|l, r| l.path().cmp(r.path())) {
		let category_root = get_category_root(ns_root, entity.category());
		entity
			.compile(&category_root, fs)
			.with_context(|| format!("Failed to compile {} {}", entity.category(), entity.path()))?;
	}

	Ok(())
}
