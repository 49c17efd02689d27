use serde::{Deserialize, Serialize};

use super::{json_contents, DataCategory, Entity};

/// A predicate file. A single condition is written as an object, while
/// multiple conditions are written as an array that must all pass
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Predicate {
	path: String,
	#[serde(default)]
	pub conditions: Vec<Condition>,
}

impl Predicate {
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			conditions: Vec::new(),
		}
	}

	pub fn with_condition(path: impl Into<String>, condition: Condition) -> Self {
		Self {
			path: path.into(),
			conditions: vec![condition],
		}
	}

	pub fn add_condition(&mut self, condition: Condition) -> &mut Self {
		self.conditions.push(condition);
		self
	}
}

impl Entity for Predicate {
	fn path(&self) -> &str {
		&self.path
	}

	fn category(&self) -> DataCategory {
		DataCategory::Predicates
	}

	fn contents(&self) -> anyhow::Result<String> {
		match self.conditions.as_slice() {
			[single] => json_contents(single),
			all => json_contents(&all),
		}
	}
}

/// A condition that is used by predicates, loot pools and loot entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "condition")]
pub enum Condition {
	#[serde(rename = "minecraft:inverted")]
	Inverted { term: Box<Condition> },
	/// Passes if any of the terms pass
	#[serde(rename = "minecraft:alternative")]
	Alternative { terms: Vec<Condition> },
	#[serde(rename = "minecraft:random_chance")]
	RandomChance { chance: f32 },
	#[serde(rename = "minecraft:random_chance_with_looting")]
	RandomChanceWithLooting { chance: f32, looting_multiplier: f32 },
	#[serde(rename = "minecraft:killed_by_player")]
	KilledByPlayer {
		#[serde(default, skip_serializing_if = "std::ops::Not::not")]
		inverse: bool,
	},
	#[serde(rename = "minecraft:survives_explosion")]
	SurvivesExplosion,
	#[serde(rename = "minecraft:entity_properties")]
	EntityProperties {
		entity: EntitySource,
		predicate: serde_json::Value,
	},
	#[serde(rename = "minecraft:match_tool")]
	MatchTool { predicate: serde_json::Value },
	#[serde(rename = "minecraft:weather_check")]
	WeatherCheck {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		raining: Option<bool>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		thundering: Option<bool>,
	},
	#[serde(rename = "minecraft:time_check")]
	TimeCheck {
		value: IntRange,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		period: Option<u32>,
	},
	#[serde(rename = "minecraft:table_bonus")]
	TableBonus { enchantment: String, chances: Vec<f32> },
	/// Refers to another predicate file
	#[serde(rename = "minecraft:reference")]
	Reference { name: String },
}

impl Condition {
	#[must_use]
	pub fn invert(self) -> Self {
		Self::Inverted {
			term: Box::new(self),
		}
	}
}

/// The entity that an entity condition checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitySource {
	This,
	Killer,
	DirectKiller,
	KillerPlayer,
}

/// An integer that is either exact or within inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntRange {
	Exact(i32),
	Bounds {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		min: Option<i32>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		max: Option<i32>,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_single_condition() {
		let pred = Predicate::with_condition("chance", Condition::RandomChance { chance: 0.25 });
		assert_eq!(
			pred.contents().unwrap(),
			r#"{"condition":"minecraft:random_chance","chance":0.25}"#
		);
	}

	#[test]
	fn test_multiple_conditions() {
		let mut pred = Predicate::new("night_rain");
		pred.add_condition(Condition::WeatherCheck {
			raining: Some(true),
			thundering: None,
		})
		.add_condition(
			Condition::TimeCheck {
				value: IntRange::Bounds {
					min: Some(13000),
					max: None,
				},
				period: Some(24000),
			}
			.invert(),
		);
		assert_eq!(
			pred.contents().unwrap(),
			r#"[{"condition":"minecraft:weather_check","raining":true},{"condition":"minecraft:inverted","term":{"condition":"minecraft:time_check","value":{"min":13000},"period":24000}}]"#
		);
	}

	#[test]
	fn test_unit_and_nested() {
		let cond = Condition::Alternative {
			terms: vec![
				Condition::SurvivesExplosion,
				Condition::KilledByPlayer { inverse: false },
				Condition::Reference {
					name: "mymod:other".into(),
				},
			],
		};
		let pred = Predicate::with_condition("alt", cond);
		assert_eq!(
			pred.contents().unwrap(),
			r#"{"condition":"minecraft:alternative","terms":[{"condition":"minecraft:survives_explosion"},{"condition":"minecraft:killed_by_player"},{"condition":"minecraft:reference","name":"mymod:other"}]}"#
		);
	}

	#[test]
	fn test_empty_predicate() {
		assert_eq!(Predicate::new("empty").contents().unwrap(), "[]");
	}
}
