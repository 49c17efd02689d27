use crate::entity::DataCategory;
use crate::entity::function::ValueType;

/// Errors raised by mutating a datapack, a namespace, or a typed value
/// collection. These are always raised by the call that caused them and
/// never deferred to compile time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatapackError {
	/// The name contains characters outside of `[0-9a-z_.-]`, or is empty
	#[error("Invalid name '{0}': names can only contain the characters 0-9, a-z, _, - and .")]
	InvalidName(String),
	/// The name is reserved for the namespace that every datapack creates by default
	#[error("The namespace name '{0}' is reserved, use the datapack's default namespace instead")]
	ReservedName(String),
	/// The entity path is empty, starts with a slash, or has an empty, `.` or `..` segment
	#[error("Invalid entity path '{0}': paths are made of non-empty segments separated by /")]
	InvalidPath(String),
	#[error("The namespace '{0}' has already been added to this datapack")]
	DuplicateName(String),
	#[error("The {category} entry '{path}' has already been added to this namespace")]
	DuplicateEntity { category: DataCategory, path: String },
	#[error("Cannot put a value of type {found} into a value array of type {expected}")]
	ValueTypeMismatch { expected: ValueType, found: ValueType },
	#[error("Cannot create a {ty} value from the non-finite number {value}")]
	NonFiniteNumber { ty: ValueType, value: String },
}
