use richenum_registry::RegistryError;

/// Errors raised at the [`EnumMap`](crate::EnumMap) boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumMapError {
	/// The key belongs to a different enum type than the map.
	#[error("key {found}::{key} does not belong to enum type {expected}")]
	TypeMismatch {
		expected: &'static str,
		found: &'static str,
		key: &'static str,
	},

	#[error(transparent)]
	Registry(#[from] RegistryError),
}
