use std::fmt::{Debug, Display};

use num_traits::{Float, Num};
use serde::Deserialize;

use crate::error::DatapackError;

use super::{DataCategory, Entity};

/// A function file, made of commands that are run in order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Function {
	path: String,
	#[serde(default)]
	commands: Vec<Command>,
}

impl Function {
	/// Creates an empty function. The path is relative to the functions directory
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			commands: Vec::new(),
		}
	}

	pub fn add_command(&mut self, command: Command) -> &mut Self {
		self.commands.push(command);
		self
	}

	pub fn commands(&self) -> &[Command] {
		&self.commands
	}

	pub fn commands_mut(&mut self) -> &mut Vec<Command> {
		&mut self.commands
	}
}

impl Entity for Function {
	fn path(&self) -> &str {
		&self.path
	}

	fn category(&self) -> DataCategory {
		DataCategory::Functions
	}

	fn contents(&self) -> anyhow::Result<String> {
		let lines: Vec<_> = self.commands.iter().map(Command::compile).collect();
		Ok(lines.join("\n"))
	}
}

/// A single command inside of a function
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "String")]
pub struct Command {
	pub method: String,
	pub params: Vec<Param>,
}

impl Command {
	pub fn new(method: impl Into<String>, params: Vec<Param>) -> Self {
		Self {
			method: method.into(),
			params,
		}
	}

	/// Appends a parameter to this command
	#[must_use]
	pub fn arg(mut self, param: impl Into<Param>) -> Self {
		self.params.push(param.into());
		self
	}

	/// Outputs the command as a line of text
	pub fn compile(&self) -> String {
		let mut out = self.method.clone();
		for param in &self.params {
			out.push(' ');
			out.push_str(&param.compile());
		}
		out
	}
}

impl From<String> for Command {
	/// Treats a whole line as a command, with the first word as the method
	fn from(value: String) -> Self {
		match value.split_once(' ') {
			Some((method, rest)) => Self::new(method, vec![Param::Raw(rest.to_string())]),
			None => Self::new(value, Vec::new()),
		}
	}
}

impl From<&str> for Command {
	fn from(value: &str) -> Self {
		Self::from(value.to_string())
	}
}

/// A parameter to a command
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
	/// Text that is output as is
	Raw(String),
	Value(Value),
	Array(ValueArray),
}

impl Param {
	pub fn compile(&self) -> String {
		match self {
			Self::Raw(text) => text.clone(),
			Self::Value(val) => val.compile(),
			Self::Array(arr) => arr.compile(),
		}
	}
}

impl From<&str> for Param {
	fn from(value: &str) -> Self {
		Self::Raw(value.to_string())
	}
}

impl From<String> for Param {
	fn from(value: String) -> Self {
		Self::Raw(value)
	}
}

impl From<Value> for Param {
	fn from(value: Value) -> Self {
		Self::Value(value)
	}
}

impl From<ValueArray> for Param {
	fn from(value: ValueArray) -> Self {
		Self::Array(value)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	Byte,
	Short,
	Int,
	Long,
	Float,
	Double,
	String,
}

impl ValueType {
	/// The NBT suffix that is put after numbers of this type
	pub fn suffix(&self) -> &'static str {
		match self {
			Self::Byte => "b",
			Self::Short => "s",
			Self::Long => "l",
			Self::Float => "f",
			Self::Double => "d",
			Self::Int | Self::String => "",
		}
	}
}

impl Display for ValueType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let text = match self {
			Self::Byte => "byte",
			Self::Short => "short",
			Self::Int => "int",
			Self::Long => "long",
			Self::Float => "float",
			Self::Double => "double",
			Self::String => "string",
		};
		write!(f, "{text}")
	}
}

/// A typed NBT value
#[derive(Clone, PartialEq)]
pub struct Value {
	ty: ValueType,
	text: String,
}

impl Value {
	/// Creates a number of the given type. A string type will quote the number.
	/// Callers must pass a number that fits the type
	pub(crate) fn number<N: Num + Display>(ty: ValueType, value: N) -> Self {
		if ty == ValueType::String {
			return Self::string(value.to_string());
		}
		Self {
			ty,
			text: value.to_string(),
		}
	}

	pub fn string(value: impl Into<String>) -> Self {
		Self {
			ty: ValueType::String,
			text: value.into(),
		}
	}

	pub fn byte(value: i8) -> Self {
		Self::number(ValueType::Byte, value)
	}

	pub fn short(value: i16) -> Self {
		Self::number(ValueType::Short, value)
	}

	pub fn int(value: i32) -> Self {
		Self::number(ValueType::Int, value)
	}

	pub fn long(value: i64) -> Self {
		Self::number(ValueType::Long, value)
	}

	/// Creates a float value. NaN and infinities have no NBT form and are rejected
	pub fn float(value: f32) -> Result<Self, DatapackError> {
		Self::finite(ValueType::Float, value)
	}

	/// Creates a double value. NaN and infinities have no NBT form and are rejected
	pub fn double(value: f64) -> Result<Self, DatapackError> {
		Self::finite(ValueType::Double, value)
	}

	fn finite<F: Float + Display>(ty: ValueType, value: F) -> Result<Self, DatapackError> {
		if !value.is_finite() {
			return Err(DatapackError::NonFiniteNumber {
				ty,
				value: value.to_string(),
			});
		}
		Ok(Self::number(ty, value))
	}

	pub fn ty(&self) -> ValueType {
		self.ty
	}

	/// Outputs the value as NBT text
	pub fn compile(&self) -> String {
		match self.ty {
			ValueType::String => serde_json::Value::String(self.text.clone()).to_string(),
			ty => format!("{}{}", self.text, ty.suffix()),
		}
	}
}

impl Debug for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.compile())
	}
}

/// A list of values that all have the same type
#[derive(Debug, Clone, PartialEq)]
pub struct ValueArray {
	ty: ValueType,
	values: Vec<Value>,
}

impl ValueArray {
	/// Creates an array, failing if any of the values is not of the array type
	pub fn new(ty: ValueType, values: Vec<Value>) -> Result<Self, DatapackError> {
		let mut out = Self::empty(ty);
		for value in values {
			out.push(value)?;
		}
		Ok(out)
	}

	pub fn empty(ty: ValueType) -> Self {
		Self {
			ty,
			values: Vec::new(),
		}
	}

	pub fn push(&mut self, value: Value) -> Result<(), DatapackError> {
		if value.ty != self.ty {
			return Err(DatapackError::ValueTypeMismatch {
				expected: self.ty,
				found: value.ty,
			});
		}
		self.values.push(value);
		Ok(())
	}

	pub fn ty(&self) -> ValueType {
		self.ty
	}

	pub fn values(&self) -> &[Value] {
		&self.values
	}

	pub fn compile(&self) -> String {
		let values: Vec<_> = self.values.iter().map(Value::compile).collect();
		format!("[{}]", values.join(", "))
	}
}
