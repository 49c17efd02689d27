use serde::{Deserialize, Serialize};

/// Contents of the pack.mcmeta file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McMeta {
	pub pack: PackMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackMeta {
	pub pack_format: u32,
	pub description: String,
}

impl McMeta {
	pub fn new(pack_format: u32, description: impl Into<String>) -> Self {
		Self {
			pack: PackMeta {
				pack_format,
				description: description.into(),
			},
		}
	}

	pub fn to_json(&self) -> anyhow::Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_meta_json() {
		let meta = McMeta::new(5, "My \"pack\"");
		assert_eq!(
			meta.to_json().unwrap(),
			"{\n  \"pack\": {\n    \"pack_format\": 5,\n    \"description\": \"My \\\"pack\\\"\"\n  }\n}"
		);
	}
}
