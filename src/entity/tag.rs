use serde::{Deserialize, Serialize};

use super::{json_contents, DataCategory, Entity, TagKind};

/// A tag that groups blocks, items, or functions under one identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
	#[serde(skip_serializing)]
	path: String,
	#[serde(skip_serializing, rename = "type")]
	kind: TagKind,
	/// Whether this tag replaces the contents of tags with the same id in other packs
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub replace: bool,
	#[serde(default)]
	pub values: Vec<String>,
}

impl Tag {
	pub fn new(path: impl Into<String>, kind: TagKind, values: Vec<String>) -> Self {
		Self {
			path: path.into(),
			kind,
			replace: false,
			values,
		}
	}

	pub fn kind(&self) -> TagKind {
		self.kind
	}

	pub fn add_value(&mut self, value: impl Into<String>) -> &mut Self {
		self.values.push(value.into());
		self
	}
}

impl Entity for Tag {
	fn path(&self) -> &str {
		&self.path
	}

	fn category(&self) -> DataCategory {
		self.kind.category()
	}

	fn contents(&self) -> anyhow::Result<String> {
		json_contents(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tag_contents() {
		let tag = Tag::new("load", TagKind::Function, vec!["mymod:main".into()]);
		assert_eq!(tag.contents().unwrap(), r#"{"values":["mymod:main"]}"#);
		assert_eq!(tag.category(), DataCategory::FunctionTags);
	}

	#[test]
	fn test_tag_replace() {
		let mut tag = Tag::new("logs", TagKind::Block, Vec::new());
		tag.replace = true;
		tag.add_value("minecraft:oak_log");
		assert_eq!(
			tag.contents().unwrap(),
			r#"{"replace":true,"values":["minecraft:oak_log"]}"#
		);
	}

	#[test]
	fn test_tag_deserialize() {
		let tag: Tag =
			serde_json::from_str(r#"{"path": "a/b", "type": "item", "values": ["minecraft:stick"]}"#)
				.unwrap();
		assert_eq!(tag.path(), "a/b");
		assert_eq!(tag.kind(), TagKind::Item);
		assert!(!tag.replace);
	}
}
