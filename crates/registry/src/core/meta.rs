use core::any::TypeId;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::error::RegistryError;
use super::key::EnumRef;
use super::traits::Enum;
use crate::db;

/// Descriptor of one enum type.
///
/// Cheap to copy and to build: creating a descriptor never populates the
/// type. Two descriptors are equal iff they describe the same Rust type.
#[derive(Clone, Copy)]
pub struct EnumType {
	name: &'static str,
	type_id: TypeId,
	values: fn() -> &'static [EnumRef],
	lookup: fn(&str) -> Option<EnumRef>,
	validate: fn() -> Result<(), RegistryError>,
}

impl EnumType {
	/// Returns the descriptor of `E`.
	pub fn of<E: Enum>() -> Self {
		Self {
			name: E::TYPE_NAME,
			type_id: TypeId::of::<E>(),
			values: db::refs::<E>,
			lookup: db::erased_value_of::<E>,
			validate: db::validate::<E>,
		}
	}

	/// Returns the display name of the type.
	pub fn name(self) -> &'static str {
		self.name
	}

	/// Returns the Rust type id.
	pub fn type_id(self) -> TypeId {
		self.type_id
	}

	/// Returns true if this descriptor belongs to `E`.
	pub fn is<E: Enum>(self) -> bool {
		self.type_id == TypeId::of::<E>()
	}

	/// Returns every singleton of the type in declaration order.
	pub fn values(self) -> &'static [EnumRef] {
		(self.values)()
	}

	/// Looks up a singleton by constant name.
	pub fn value_of(self, name: &str) -> Option<EnumRef> {
		(self.lookup)(name)
	}

	/// Checks the declaration without populating the type.
	pub fn validate(self) -> Result<(), RegistryError> {
		(self.validate)()
	}
}

impl PartialEq for EnumType {
	fn eq(&self, other: &Self) -> bool {
		self.type_id == other.type_id
	}
}

impl Eq for EnumType {}

impl Hash for EnumType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.type_id.hash(state)
	}
}

impl fmt::Debug for EnumType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("EnumType").field(&self.name).finish()
	}
}

impl fmt::Display for EnumType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}
