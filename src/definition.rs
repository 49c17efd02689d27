//! JSON documents that describe a whole datapack, used by the command line tool

use std::collections::BTreeMap;

use anyhow::Context;
use serde::Deserialize;

use crate::common::MINECRAFT_NAMESPACE;
use crate::datapack::Datapack;
use crate::entity::function::Function;
use crate::entity::loot::LootTable;
use crate::entity::predicate::Predicate;
use crate::entity::recipe::Recipe;
use crate::entity::tag::Tag;
use crate::error::DatapackError;
use crate::namespace::Namespace;
use crate::project::PackOptionsBuilder;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackDefinition {
	pub name: String,
	#[serde(default)]
	pub format: Option<u32>,
	#[serde(default)]
	pub description: Option<String>,
	/// Namespaces by name. The `minecraft` entry fills the pack's default namespace
	#[serde(default)]
	pub namespaces: BTreeMap<String, NamespaceDefinition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceDefinition {
	#[serde(default)]
	pub functions: Vec<Function>,
	#[serde(default)]
	pub tags: Vec<Tag>,
	#[serde(default)]
	pub recipes: Vec<Recipe>,
	#[serde(default)]
	pub loot_tables: Vec<LootTable>,
	#[serde(default)]
	pub predicates: Vec<Predicate>,
}

impl PackDefinition {
	pub fn parse(text: &str) -> anyhow::Result<Self> {
		serde_json::from_str(text).context("Failed to parse pack definition")
	}

	/// Creates the datapack that this definition describes
	pub fn build(&self) -> anyhow::Result<Datapack> {
		let mut options = PackOptionsBuilder::new();
		if let Some(format) = self.format {
			options = options.format(format);
		}
		if let Some(description) = &self.description {
			options = options.description(description.clone());
		}

		let mut pack = Datapack::new(self.name.clone(), options.build());
		for (name, def) in &self.namespaces {
			let namespace = if name == MINECRAFT_NAMESPACE {
				pack.minecraft_mut()
			} else {
				pack.create_namespace(name.clone())
					.with_context(|| format!("Failed to create namespace {name}"))?
			};
			def.populate(namespace)
				.with_context(|| format!("Failed to fill namespace {name}"))?;
		}

		Ok(pack)
	}
}

impl NamespaceDefinition {
	pub fn populate(&self, namespace: &mut Namespace) -> Result<(), DatapackError> {
		for function in &self.functions {
			namespace.add_function(function)?;
		}
		for tag in &self.tags {
			namespace.add_tag(tag)?;
		}
		for recipe in &self.recipes {
			namespace.add_recipe(recipe)?;
		}
		for table in &self.loot_tables {
			namespace.add_loot_table(table)?;
		}
		for predicate in &self.predicates {
			namespace.add_predicate(predicate)?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::entity::{Entity, TagKind};

	const DEFINITION: &str = r#"{
		"name": "demo",
		"description": "A demo pack",
		"namespaces": {
			"minecraft": {
				"tags": [{"path": "load", "type": "function", "values": ["mymod:main"]}]
			},
			"mymod": {
				"functions": [{"path": "main", "commands": ["say hello", "reload"]}],
				"predicates": [{"path": "rain", "conditions": [{"condition": "minecraft:weather_check", "raining": true}]}]
			}
		}
	}"#;

	#[test]
	fn test_build_definition() {
		let pack = PackDefinition::parse(DEFINITION).unwrap().build().unwrap();
		assert_eq!(pack.name(), "demo");
		assert_eq!(pack.format(), 5);
		assert_eq!(pack.description(), "A demo pack");

		let load = pack.minecraft().get_tag("load", TagKind::Function).unwrap();
		assert_eq!(load.values, vec!["mymod:main".to_string()]);

		let mymod = pack.namespace("mymod").unwrap();
		let main = mymod.get_function("main").unwrap();
		assert_eq!(main.contents().unwrap(), "say hello\nreload");
		assert!(mymod.get_predicate("rain").is_some());
	}

	#[test]
	fn test_duplicate_in_definition() {
		let def = PackDefinition::parse(
			r#"{"name": "p", "namespaces": {"a": {"loot_tables": [{"path": "x"}, {"path": "x"}]}}}"#,
		)
		.unwrap();
		let err = def.build().unwrap_err();
		assert_eq!(
			err.root_cause().to_string(),
			"The loot table entry 'x' has already been added to this namespace"
		);
	}

	#[test]
	fn test_invalid_namespace_in_definition() {
		let def = PackDefinition::parse(r#"{"name": "p", "namespaces": {"Nope": {}}}"#).unwrap();
		assert!(def.build().is_err());
	}
}
