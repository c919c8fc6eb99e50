//! By-name catalog of enum types declared through [`enum_type!`](crate::enum_type).
//!
//! Types are collected at link time with `inventory`. Collecting a type does
//! not populate it.

use std::sync::LazyLock;

use rustc_hash::FxHashMap as HashMap;

use crate::core::{EnumRef, EnumType, RegistryError};

/// Registry wrapper for enum type descriptors.
pub struct EnumTypeReg(pub fn() -> EnumType);
inventory::collect!(EnumTypeReg);

/// Name index over every collected type. On a name clash the first collected wins.
static CATALOG: LazyLock<HashMap<&'static str, EnumType>> = LazyLock::new(|| {
	let mut map = HashMap::default();
	for reg in inventory::iter::<EnumTypeReg> {
		let ty = (reg.0)();
		if let Some(existing) = map.get(ty.name()) {
			if *existing != ty {
				tracing::warn!("Enum type name {} registered twice, keeping the first", ty.name());
			}
			continue;
		}
		map.insert(ty.name(), ty);
	}
	map
});

/// Lazy reference to all collected types, sorted by name.
static ALL_TYPES: LazyLock<Vec<EnumType>> = LazyLock::new(|| {
	let mut types: Vec<_> = CATALOG.values().copied().collect();
	types.sort_by_key(|ty| ty.name());
	types
});

/// Finds an enum type by its display name.
pub fn find_type(name: &str) -> Option<EnumType> {
	CATALOG.get(name).copied()
}

/// Returns an iterator over all collected enum types, sorted by name.
pub fn all_types() -> impl Iterator<Item = EnumType> {
	ALL_TYPES.iter().copied()
}

/// Looks up a constant of the type named `type_name`.
///
/// An unknown type is an error; an unknown constant is `Ok(None)`.
pub fn value_of(type_name: &str, const_name: &str) -> Result<Option<EnumRef>, RegistryError> {
	let ty = find_type(type_name).ok_or_else(|| RegistryError::UnknownType(type_name.to_string()))?;
	Ok(ty.value_of(const_name))
}

/// Checks every collected type: display names must be unique and no type may
/// repeat a constant name.
///
/// Runs no initializers.
pub fn validate() -> Result<(), RegistryError> {
	let mut seen: HashMap<&'static str, EnumType> = HashMap::default();
	for reg in inventory::iter::<EnumTypeReg> {
		let ty = (reg.0)();
		match seen.get(ty.name()) {
			Some(existing) if *existing != ty => {
				return Err(RegistryError::DuplicateType { name: ty.name() });
			}
			Some(_) => continue,
			None => {
				seen.insert(ty.name(), ty);
			}
		}
		ty.validate()?;
	}
	Ok(())
}
