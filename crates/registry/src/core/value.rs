//! Cached singleton values.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

use super::key::EnumRef;
use super::meta::EnumType;
use super::traits::{Constant, Enum};

/// The singleton representing one constant of `E`.
///
/// Instances only exist inside the registry and are handed out as
/// `&'static EnumValue<E>`. Equality and hashing use the address, so two
/// values compare equal iff they are the same singleton.
///
/// User state is reachable through [`Deref`]. State that changes after
/// initialization needs interior mutability, since every caller shares the
/// same instance.
pub struct EnumValue<E: Enum> {
	name: &'static str,
	ordinal: usize,
	value: E::Value,
	state: E,
}

impl<E: Enum> EnumValue<E> {
	pub(crate) fn new(constant: Constant<E>, ordinal: usize, state: E) -> Self {
		let (name, value) = constant.into_parts();
		Self {
			name,
			ordinal,
			value,
			state,
		}
	}

	/// Returns the name of the constant this value represents.
	pub fn const_name(&self) -> &'static str {
		self.name
	}

	/// Returns the underlying scalar of the constant.
	pub fn const_value(&self) -> &E::Value {
		&self.value
	}

	/// Returns the declaration index of the constant.
	pub fn ordinal(&self) -> usize {
		self.ordinal
	}

	/// Returns the descriptor of `E`.
	pub fn enum_type(&self) -> EnumType {
		EnumType::of::<E>()
	}

	/// Returns the user state.
	pub fn state(&self) -> &E {
		&self.state
	}

	/// Returns true if `other` is this exact singleton.
	pub fn equals(&self, other: impl Into<EnumRef>) -> bool {
		other.into().is(self)
	}

	/// Returns the type-erased handle to this singleton.
	pub fn erased(&'static self) -> EnumRef {
		EnumRef::from(self)
	}
}

impl<E: Enum> Deref for EnumValue<E> {
	type Target = E;

	fn deref(&self) -> &E {
		&self.state
	}
}

impl<E: Enum> PartialEq for EnumValue<E> {
	fn eq(&self, other: &Self) -> bool {
		core::ptr::eq(self, other)
	}
}

impl<E: Enum> Eq for EnumValue<E> {}

impl<E: Enum> PartialEq<EnumRef> for EnumValue<E> {
	fn eq(&self, other: &EnumRef) -> bool {
		other.is(self)
	}
}

impl<E: Enum> Hash for EnumValue<E> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		core::ptr::hash(self, state)
	}
}

impl<E: Enum> fmt::Debug for EnumValue<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}::{}", E::TYPE_NAME, self.name)
	}
}

impl<E: Enum> fmt::Display for EnumValue<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}
