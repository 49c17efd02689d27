use derivative::Derivative;

/// The pack format that packs are generated with when none is given
pub const DEFAULT_PACK_FORMAT: u32 = 5;

/// Settings for a generated datapack
#[derive(Derivative, Debug, Clone, PartialEq, Eq)]
#[derivative(Default)]
pub struct PackOptions {
	/// The pack_format version written to the pack.mcmeta
	#[derivative(Default(value = "DEFAULT_PACK_FORMAT"))]
	pub format: u32,
	/// The description of the pack. Defaults to the name of the pack
	pub description: Option<String>,
}

impl PackOptions {
	pub fn new() -> Self {
		Self::default()
	}
}

pub struct PackOptionsBuilder {
	options: PackOptions,
}

impl PackOptionsBuilder {
	pub fn new() -> Self {
		Self {
			options: PackOptions::new(),
		}
	}

	pub fn build(self) -> PackOptions {
		self.options
	}

	pub fn format(mut self, format: u32) -> Self {
		self.options.format = format;
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.options.description = Some(description.into());
		self
	}
}

impl Default for PackOptionsBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let options = PackOptions::default();
		assert_eq!(options.format, 5);
		assert_eq!(options.description, None);
	}

	#[test]
	fn test_builder() {
		let options = PackOptionsBuilder::new()
			.format(6)
			.description("Hello")
			.build();
		assert_eq!(options.format, 6);
		assert_eq!(options.description.as_deref(), Some("Hello"));
	}
}
