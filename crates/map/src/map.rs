use core::fmt;

use indexmap::IndexMap;
use richenum_registry::{Enum, EnumRef, EnumType};
use rustc_hash::FxBuildHasher;

use crate::error::EnumMapError;
use crate::iter::{IntoIter, Iter, Keys, Values};

/// Insertion-ordered map whose keys are singletons of one enum type.
///
/// The map is bound to its [`EnumType`] at construction. Every operation that
/// takes a key rejects keys of any other type with
/// [`EnumMapError::TypeMismatch`].
///
/// Re-mapping a present key replaces its value in place; removing a key keeps
/// the relative order of the remaining entries.
#[derive(Clone)]
pub struct EnumMap<V> {
	ty: EnumType,
	entries: IndexMap<EnumRef, V, FxBuildHasher>,
}

impl<V> EnumMap<V> {
	/// Creates an empty map bound to `ty`.
	pub fn new(ty: EnumType) -> Self {
		Self {
			ty,
			entries: IndexMap::default(),
		}
	}

	/// Creates an empty map bound to `E`.
	pub fn of<E: Enum>() -> Self {
		Self::new(EnumType::of::<E>())
	}

	/// Creates an empty map bound to the enum type registered as `type_name`.
	#[cfg(feature = "catalog")]
	pub fn create(type_name: &str) -> Result<Self, EnumMapError> {
		let ty = richenum_registry::catalog::find_type(type_name)
			.ok_or_else(|| richenum_registry::RegistryError::UnknownType(type_name.to_string()))?;
		Ok(Self::new(ty))
	}

	/// Returns the enum type this map is bound to.
	pub fn enum_type(&self) -> EnumType {
		self.ty
	}

	fn check(&self, key: impl Into<EnumRef>) -> Result<EnumRef, EnumMapError> {
		let key = key.into();
		let found = key.enum_type();
		if found == self.ty {
			return Ok(key);
		}

		tracing::trace!("Rejected key {:?} for enum map over {}", key, self.ty);
		Err(EnumMapError::TypeMismatch {
			expected: self.ty.name(),
			found: found.name(),
			key: key.const_name(),
		})
	}

	/// Maps `key` to `value` and returns the map for chaining.
	pub fn map(&mut self, key: impl Into<EnumRef>, value: V) -> Result<&mut Self, EnumMapError> {
		self.set(key, value)?;
		Ok(self)
	}

	/// Maps `key` to `value`, returning the value it replaces.
	///
	/// A new key goes to the end of the iteration order; a present key keeps
	/// its position.
	pub fn set(&mut self, key: impl Into<EnumRef>, value: V) -> Result<Option<V>, EnumMapError> {
		let key = self.check(key)?;
		Ok(self.entries.insert(key, value))
	}

	/// Returns the value mapped to `key`.
	pub fn get(&self, key: impl Into<EnumRef>) -> Result<Option<&V>, EnumMapError> {
		let key = self.check(key)?;
		Ok(self.entries.get(&key))
	}

	/// Returns the value mapped to `key`, or `default` when absent.
	pub fn get_or<'a>(&'a self, key: impl Into<EnumRef>, default: &'a V) -> Result<&'a V, EnumMapError> {
		Ok(self.get(key)?.unwrap_or(default))
	}

	/// Returns a mutable reference to the value mapped to `key`.
	pub fn get_mut(&mut self, key: impl Into<EnumRef>) -> Result<Option<&mut V>, EnumMapError> {
		let key = self.check(key)?;
		Ok(self.entries.get_mut(&key))
	}

	/// Returns true if `key` is mapped.
	pub fn has(&self, key: impl Into<EnumRef>) -> Result<bool, EnumMapError> {
		let key = self.check(key)?;
		Ok(self.entries.contains_key(&key))
	}

	/// Unmaps `key`, returning its value.
	pub fn remove(&mut self, key: impl Into<EnumRef>) -> Result<Option<V>, EnumMapError> {
		let key = self.check(key)?;
		Ok(self.entries.shift_remove(&key))
	}

	/// Returns the number of mapped keys.
	pub fn size(&self) -> usize {
		self.entries.len()
	}

	/// Alias of [`EnumMap::size`].
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no key is mapped.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Unmaps every key.
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Iterates `(key, value)` pairs in insertion order.
	pub fn iter(&self) -> Iter<'_, V> {
		Iter::new(self.entries.iter())
	}

	/// Iterates keys in insertion order.
	pub fn keys(&self) -> Keys<'_, V> {
		Keys::new(self.entries.keys())
	}

	/// Iterates values in insertion order.
	pub fn values(&self) -> Values<'_, V> {
		Values::new(self.entries.values())
	}

	/// Maps every pair in order, stopping at the first key of the wrong type.
	///
	/// Pairs before the offending key stay mapped.
	pub fn try_extend<K, I>(&mut self, pairs: I) -> Result<(), EnumMapError>
	where
		K: Into<EnumRef>,
		I: IntoIterator<Item = (K, V)>,
	{
		for (key, value) in pairs {
			self.set(key, value)?;
		}
		Ok(())
	}
}

impl<V: fmt::Debug> fmt::Debug for EnumMap<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EnumMap")
			.field("type", &self.ty)
			.field("entries", &self.entries)
			.finish()
	}
}

impl<'a, V> IntoIterator for &'a EnumMap<V> {
	type Item = (EnumRef, &'a V);
	type IntoIter = Iter<'a, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<V> IntoIterator for EnumMap<V> {
	type Item = (EnumRef, V);
	type IntoIter = IntoIter<V>;

	fn into_iter(self) -> Self::IntoIter {
		IntoIter::new(self.entries.into_iter())
	}
}
