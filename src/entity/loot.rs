use serde::{Deserialize, Serialize};

use super::predicate::Condition;
use super::{json_contents, DataCategory, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootTable {
	#[serde(skip_serializing)]
	path: String,
	/// The context type of the table, like `minecraft:block` or `minecraft:entity`
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub ty: Option<String>,
	#[serde(default)]
	pub pools: Vec<Pool>,
}

impl LootTable {
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			ty: None,
			pools: Vec::new(),
		}
	}

	pub fn add_pool(&mut self, pool: Pool) -> &mut Self {
		self.pools.push(pool);
		self
	}
}

impl Entity for LootTable {
	fn path(&self) -> &str {
		&self.path
	}

	fn category(&self) -> DataCategory {
		DataCategory::LootTables
	}

	fn contents(&self) -> anyhow::Result<String> {
		json_contents(self)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
	pub rolls: NumberProvider,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bonus_rolls: Option<NumberProvider>,
	#[serde(default)]
	pub entries: Vec<LootEntry>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub conditions: Vec<Condition>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub functions: Vec<LootFunction>,
}

impl Pool {
	pub fn new(rolls: NumberProvider) -> Self {
		Self {
			rolls,
			bonus_rolls: None,
			entries: Vec::new(),
			conditions: Vec::new(),
			functions: Vec::new(),
		}
	}

	pub fn add_entry(&mut self, entry: LootEntry) -> &mut Self {
		self.entries.push(entry);
		self
	}

	pub fn add_condition(&mut self, condition: Condition) -> &mut Self {
		self.conditions.push(condition);
		self
	}
}

/// A number of rolls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberProvider {
	Constant(i32),
	Uniform { min: f32, max: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootEntry {
	#[serde(flatten)]
	pub kind: EntryKind,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub weight: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quality: Option<i32>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub conditions: Vec<Condition>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub functions: Vec<LootFunction>,
}

impl LootEntry {
	pub fn new(kind: EntryKind) -> Self {
		Self {
			kind,
			weight: None,
			quality: None,
			conditions: Vec::new(),
			functions: Vec::new(),
		}
	}

	pub fn item(name: impl Into<String>) -> Self {
		Self::new(EntryKind::Item { name: name.into() })
	}

	#[must_use]
	pub fn weight(mut self, weight: u32) -> Self {
		self.weight = Some(weight);
		self
	}

	#[must_use]
	pub fn function(mut self, function: LootFunction) -> Self {
		self.functions.push(function);
		self
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EntryKind {
	#[serde(rename = "minecraft:item")]
	Item { name: String },
	/// Drops the items in an item tag. With expand, picks one of them instead of all
	#[serde(rename = "minecraft:tag")]
	Tag {
		name: String,
		#[serde(default)]
		expand: bool,
	},
	#[serde(rename = "minecraft:loot_table")]
	LootTable { name: String },
	#[serde(rename = "minecraft:empty")]
	Empty,
}

/// A function that modifies the dropped items, like `minecraft:set_count`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootFunction {
	pub function: String,
	#[serde(flatten)]
	pub params: serde_json::Map<String, serde_json::Value>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub conditions: Vec<Condition>,
}

impl LootFunction {
	pub fn new(function: impl Into<String>) -> Self {
		Self {
			function: function.into(),
			params: serde_json::Map::new(),
			conditions: Vec::new(),
		}
	}

	#[must_use]
	pub fn param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
		self.params.insert(key.into(), value.into());
		self
	}

	pub fn set_count(count: i32) -> Self {
		Self::new("minecraft:set_count").param("count", count)
	}
}
