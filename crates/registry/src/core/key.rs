use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::meta::EnumType;
use super::traits::Enum;
use super::value::EnumValue;

// Object-safe view over `EnumValue<E>` for any `E`.
trait ErasedValue: Any + Send + Sync {
	fn enum_type(&self) -> EnumType;
	fn const_name(&self) -> &'static str;
	fn ordinal(&self) -> usize;
	fn as_any(&self) -> &dyn Any;
}

impl<E: Enum> ErasedValue for EnumValue<E> {
	fn enum_type(&self) -> EnumType {
		EnumType::of::<E>()
	}

	fn const_name(&self) -> &'static str {
		EnumValue::const_name(self)
	}

	fn ordinal(&self) -> usize {
		EnumValue::ordinal(self)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Type-erased handle to a singleton of any enum type.
///
/// Copies are cheap. Equality and hashing use the singleton's address, so
/// handles to constants of different types never compare equal even when
/// names and underlying values coincide.
#[derive(Clone, Copy)]
pub struct EnumRef(&'static dyn ErasedValue);

impl EnumRef {
	/// Returns the descriptor of the type this value belongs to.
	pub fn enum_type(self) -> EnumType {
		self.0.enum_type()
	}

	/// Returns the constant name.
	pub fn const_name(self) -> &'static str {
		self.0.const_name()
	}

	/// Returns the declaration index of the constant.
	pub fn ordinal(self) -> usize {
		self.0.ordinal()
	}

	/// Returns true if this handle belongs to `E`.
	pub fn is_type<E: Enum>(self) -> bool {
		self.0.as_any().is::<EnumValue<E>>()
	}

	/// Recovers the typed singleton, or `None` if this handle belongs to another type.
	pub fn downcast<E: Enum>(self) -> Option<&'static EnumValue<E>> {
		self.0.as_any().downcast_ref::<EnumValue<E>>()
	}

	/// Returns true if `other` refers to the same singleton.
	pub fn equals(self, other: impl Into<EnumRef>) -> bool {
		self == other.into()
	}

	pub(crate) fn is<E: Enum>(self, value: &EnumValue<E>) -> bool {
		core::ptr::addr_eq(self.addr(), value as *const EnumValue<E>)
	}

	fn addr(self) -> *const () {
		self.0 as *const dyn ErasedValue as *const ()
	}
}

impl<E: Enum> From<&'static EnumValue<E>> for EnumRef {
	fn from(value: &'static EnumValue<E>) -> Self {
		Self(value)
	}
}

impl PartialEq for EnumRef {
	fn eq(&self, other: &Self) -> bool {
		core::ptr::eq(self.addr(), other.addr())
	}
}

impl Eq for EnumRef {}

impl<E: Enum> PartialEq<EnumValue<E>> for EnumRef {
	fn eq(&self, other: &EnumValue<E>) -> bool {
		self.is(other)
	}
}

impl Hash for EnumRef {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.addr().hash(state)
	}
}

impl fmt::Debug for EnumRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}::{}", self.enum_type().name(), self.const_name())
	}
}

impl fmt::Display for EnumRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.const_name())
	}
}
