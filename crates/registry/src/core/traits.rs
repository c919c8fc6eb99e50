use core::fmt;

use super::key::EnumRef;
use super::meta::EnumType;
use super::value::EnumValue;
use crate::db;

/// Initializer hook run against a freshly constructed enum value.
///
/// Used both for the type-global initializer and for per-constant initializers.
pub type InitFn<E> = fn(&mut E, &Constant<E>);

/// No-op initializer for constants that declare no hook of their own.
pub fn noop_init<E: Enum>(_state: &mut E, _constant: &Constant<E>) {}

/// One declared constant of an enum type.
pub struct Constant<E: Enum> {
	name: &'static str,
	value: E::Value,
	init: InitFn<E>,
}

impl<E: Enum> Constant<E> {
	/// Declares a constant with no per-value initializer.
	pub fn new(name: &'static str, value: E::Value) -> Self {
		Self {
			name,
			value,
			init: noop_init::<E>,
		}
	}

	/// Attaches the per-value initializer.
	pub fn with_init(mut self, init: InitFn<E>) -> Self {
		self.init = init;
		self
	}

	/// Returns the constant name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the underlying scalar.
	pub fn value(&self) -> &E::Value {
		&self.value
	}

	pub(crate) fn run_init(&self, state: &mut E) {
		(self.init)(state, self)
	}

	pub(crate) fn into_parts(self) -> (&'static str, E::Value) {
		(self.name, self.value)
	}
}

impl<E: Enum> fmt::Debug for Constant<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Constant")
			.field("name", &self.name)
			.field("value", &self.value)
			.finish_non_exhaustive()
	}
}

/// A closed set of named constants, each materialized once as a cached singleton.
///
/// Usually implemented through [`enum_type!`](crate::enum_type). The registry
/// calls [`Enum::constants`] once, on first access to any value of the type,
/// and for every constant runs [`Enum::construct`], then [`Enum::init`], then
/// the constant's own initializer.
pub trait Enum: Sized + Send + Sync + 'static {
	/// Underlying scalar attached to every constant.
	type Value: PartialEq + fmt::Debug + Send + Sync + 'static;

	/// Display name, also the key in the by-name catalog.
	const TYPE_NAME: &'static str;

	/// Declared constants, in declaration order.
	fn constants() -> Vec<Constant<Self>>;

	/// Builds the bare state for one constant.
	fn construct(constant: &Constant<Self>) -> Self;

	/// Type-global initializer, run before the per-value initializer.
	fn init(&mut self, _constant: &Constant<Self>) {}

	/// Returns the singleton for `name`, populating the type on first use.
	fn value_of(name: &str) -> Option<&'static EnumValue<Self>> {
		db::value_of::<Self>(name)
	}

	/// Alias of [`Enum::value_of`].
	fn by_name(name: &str) -> Option<&'static EnumValue<Self>> {
		db::by_name::<Self>(name)
	}

	/// Returns the first declared singleton whose underlying scalar equals `value`.
	fn by_value(value: &Self::Value) -> Option<&'static EnumValue<Self>> {
		db::by_value::<Self>(value)
	}

	/// Returns every singleton in declaration order.
	fn values() -> &'static [EnumValue<Self>] {
		db::values::<Self>()
	}

	/// Returns the erased handles of every singleton in declaration order.
	fn refs() -> &'static [EnumRef] {
		db::refs::<Self>()
	}

	/// Returns the descriptor of this type.
	fn enum_type() -> EnumType {
		EnumType::of::<Self>()
	}
}

/// Names of the associated functions of [`Enum`].
///
/// An accessor generated under one of these names would shadow the trait
/// function on path calls such as `Planet::values()`.
pub const RESERVED_ACCESSORS: &[&str] = &[
	"constants",
	"construct",
	"init",
	"value_of",
	"by_name",
	"by_value",
	"values",
	"refs",
	"enum_type",
];

/// Returns true if `name`, compared case-insensitively, is in [`RESERVED_ACCESSORS`].
pub const fn is_reserved_accessor(name: &str) -> bool {
	let mut i = 0;
	while i < RESERVED_ACCESSORS.len() {
		if eq_ignore_case(name.as_bytes(), RESERVED_ACCESSORS[i].as_bytes()) {
			return true;
		}
		i += 1;
	}
	false
}

const fn eq_ignore_case(a: &[u8], b: &[u8]) -> bool {
	if a.len() != b.len() {
		return false;
	}
	let mut i = 0;
	while i < a.len() {
		if a[i].to_ascii_lowercase() != b[i].to_ascii_lowercase() {
			return false;
		}
		i += 1;
	}
	true
}

/// Selects a provided value or falls back to a default.
#[doc(hidden)]
#[macro_export]
macro_rules! __enum_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}
