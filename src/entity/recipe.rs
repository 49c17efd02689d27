use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{json_contents, DataCategory, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
	#[serde(skip_serializing)]
	path: String,
	#[serde(flatten)]
	pub kind: RecipeKind,
}

impl Recipe {
	pub fn new(path: impl Into<String>, kind: RecipeKind) -> Self {
		Self {
			path: path.into(),
			kind,
		}
	}

	pub fn shaped(
		path: impl Into<String>,
		pattern: Vec<String>,
		key: BTreeMap<String, Ingredient>,
		result: CraftingResult,
	) -> Self {
		Self::new(
			path,
			RecipeKind::Shaped {
				group: None,
				pattern,
				key,
				result,
			},
		)
	}

	pub fn shapeless(
		path: impl Into<String>,
		ingredients: Vec<Ingredient>,
		result: CraftingResult,
	) -> Self {
		Self::new(
			path,
			RecipeKind::Shapeless {
				group: None,
				ingredients,
				result,
			},
		)
	}

	pub fn smelting(path: impl Into<String>, recipe: CookingRecipe) -> Self {
		Self::new(path, RecipeKind::Smelting(recipe))
	}

	pub fn stonecutting(
		path: impl Into<String>,
		ingredient: Ingredient,
		result: impl Into<String>,
		count: u32,
	) -> Self {
		Self::new(
			path,
			RecipeKind::Stonecutting {
				ingredient,
				result: result.into(),
				count,
			},
		)
	}
}

impl Entity for Recipe {
	fn path(&self) -> &str {
		&self.path
	}

	fn category(&self) -> DataCategory {
		DataCategory::Recipes
	}

	fn contents(&self) -> anyhow::Result<String> {
		json_contents(self)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RecipeKind {
	#[serde(rename = "minecraft:crafting_shaped")]
	Shaped {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		group: Option<String>,
		pattern: Vec<String>,
		key: BTreeMap<String, Ingredient>,
		result: CraftingResult,
	},
	#[serde(rename = "minecraft:crafting_shapeless")]
	Shapeless {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		group: Option<String>,
		ingredients: Vec<Ingredient>,
		result: CraftingResult,
	},
	#[serde(rename = "minecraft:smelting")]
	Smelting(CookingRecipe),
	#[serde(rename = "minecraft:blasting")]
	Blasting(CookingRecipe),
	#[serde(rename = "minecraft:smoking")]
	Smoking(CookingRecipe),
	#[serde(rename = "minecraft:campfire_cooking")]
	CampfireCooking(CookingRecipe),
	#[serde(rename = "minecraft:stonecutting")]
	Stonecutting {
		ingredient: Ingredient,
		result: String,
		count: u32,
	},
}

/// Body shared by the furnace-like recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookingRecipe {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub group: Option<String>,
	pub ingredient: Ingredient,
	pub result: String,
	pub experience: f32,
	#[serde(rename = "cookingtime")]
	pub cooking_time: u32,
}

impl CookingRecipe {
	pub fn new(
		ingredient: Ingredient,
		result: impl Into<String>,
		experience: f32,
		cooking_time: u32,
	) -> Self {
		Self {
			group: None,
			ingredient,
			result: result.into(),
			experience,
			cooking_time,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
	Item { item: String },
	Tag { tag: String },
	/// Any one of the contained ingredients
	Choice(Vec<Ingredient>),
}

impl Ingredient {
	pub fn item(id: impl Into<String>) -> Self {
		Self::Item { item: id.into() }
	}

	pub fn tag(id: impl Into<String>) -> Self {
		Self::Tag { tag: id.into() }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftingResult {
	pub item: String,
	#[serde(default = "default_count", skip_serializing_if = "is_default_count")]
	pub count: u32,
}

impl CraftingResult {
	pub fn new(item: impl Into<String>, count: u32) -> Self {
		Self {
			item: item.into(),
			count,
		}
	}
}

fn default_count() -> u32 {
	1
}

fn is_default_count(count: &u32) -> bool {
	*count == 1
}
