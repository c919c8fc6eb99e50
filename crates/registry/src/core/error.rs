/// Configuration errors for enum types.
///
/// Lookups of absent constants are not errors; they return `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// No enum type is registered under this name.
	#[error("unknown enum type: {0}")]
	UnknownType(String),

	/// Two distinct enum types share a display name.
	#[error("duplicate enum type name: {name}")]
	DuplicateType { name: &'static str },

	/// An enum type declares the same constant name twice.
	#[error("duplicate constant {ty}::{name}")]
	DuplicateConstant { ty: &'static str, name: &'static str },
}
