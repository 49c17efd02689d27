use crate::error::DatapackError;

/// The namespace that every datapack has by default
pub const MINECRAFT_NAMESPACE: &str = "minecraft";

/// Checks whether a character is allowed in a namespace name
pub fn is_name_char(c: char) -> bool {
	matches!(c, '0'..='9' | 'a'..='z' | '_' | '.' | '-')
}

/// Validates a namespace name that a user wants to create.
/// The name must be made of `[0-9a-z_.-]` and must not be the reserved minecraft name
pub fn validate_namespace_name(name: &str) -> Result<(), DatapackError> {
	if name.is_empty() || !name.chars().all(is_name_char) {
		return Err(DatapackError::InvalidName(name.to_string()));
	}
	if name == MINECRAFT_NAMESPACE {
		return Err(DatapackError::ReservedName(name.to_string()));
	}

	Ok(())
}

/// Validates the path of an entity inside its category, such as `util/tick`.
/// Every `/` separated segment must be non-empty and must not be `.` or `..`,
/// so that each path maps to exactly one file inside the category directory
pub fn validate_entity_path(path: &str) -> Result<(), DatapackError> {
	let valid = path
		.split('/')
		.all(|segment| !matches!(segment, "" | "." | ".."));
	if !valid {
		return Err(DatapackError::InvalidPath(path.to_string()));
	}

	Ok(())
}
