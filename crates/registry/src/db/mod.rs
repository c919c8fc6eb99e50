//! Process-wide singleton store and lookup surfaces.
//!
//! # Role
//!
//! Every enum type gets one table, built on first access to any of its values
//! and kept for the rest of the process. Tables are never rebuilt, evicted or
//! torn down.
//!
//! # Invariants
//!
//! - A type is populated all-or-nothing, exactly once, even under concurrent
//!   first access (per-type [`OnceLock`] gate).
//! - Population runs outside the global type lock, so initializers may look up
//!   other enum types.
//! - An initializer that looks up a type still being populated on the same
//!   thread (its own type, or any type earlier in a lookup cycle) panics.
//!
//! A lookup cycle between types populated concurrently from different threads
//! is not detected: each thread waits on the other's gate and both block.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::sync::{LazyLock, OnceLock};

use parking_lot::RwLock;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use crate::core::{Enum, EnumRef, EnumValue, RegistryError};

#[cfg(feature = "catalog")]
pub mod catalog;

struct EnumTable<E: Enum> {
	values: &'static [EnumValue<E>],
	refs: Vec<EnumRef>,
	by_name: HashMap<&'static str, usize>,
}

type Gate = &'static (dyn Any + Send + Sync);

static TABLES: LazyLock<RwLock<HashMap<TypeId, Gate>>> = LazyLock::new(Default::default);

thread_local! {
	static POPULATING: RefCell<Vec<TypeId>> = const { RefCell::new(Vec::new()) };
}

/// Pops the populating marker even if an initializer panics.
struct PopulatingGuard;

impl Drop for PopulatingGuard {
	fn drop(&mut self) {
		POPULATING.with_borrow_mut(|stack| {
			stack.pop();
		});
	}
}

fn gate<E: Enum>() -> &'static OnceLock<EnumTable<E>> {
	let key = TypeId::of::<E>();
	let existing = TABLES.read().get(&key).copied();
	let gate = match existing {
		Some(gate) => gate,
		None => *TABLES.write().entry(key).or_insert_with(|| {
			let gate: Gate = Box::leak(Box::new(OnceLock::<EnumTable<E>>::new()));
			gate
		}),
	};

	match gate.downcast_ref::<OnceLock<EnumTable<E>>>() {
		Some(gate) => gate,
		None => unreachable!("gate for {} is keyed by its own TypeId", E::TYPE_NAME),
	}
}

fn table<E: Enum>() -> &'static EnumTable<E> {
	let gate = gate::<E>();
	if let Some(table) = gate.get() {
		return table;
	}

	let key = TypeId::of::<E>();
	let reentrant = POPULATING.with_borrow(|stack| stack.contains(&key));
	if reentrant {
		panic!(
			"re-entrant population of enum type {}: looked up by an initializer while its population is in progress",
			E::TYPE_NAME
		);
	}

	POPULATING.with_borrow_mut(|stack| stack.push(key));
	let _guard = PopulatingGuard;
	gate.get_or_init(populate::<E>)
}

fn populate<E: Enum>() -> EnumTable<E> {
	let mut values = Vec::new();
	let mut by_name = HashMap::default();

	for constant in E::constants() {
		if by_name.contains_key(constant.name()) {
			tracing::warn!(
				"Duplicate constant {}::{} ignored, first definition wins",
				E::TYPE_NAME,
				constant.name()
			);
			continue;
		}

		let ordinal = values.len();
		let mut state = E::construct(&constant);
		Enum::init(&mut state, &constant);
		constant.run_init(&mut state);

		by_name.insert(constant.name(), ordinal);
		values.push(EnumValue::new(constant, ordinal, state));
	}

	let values: &'static [EnumValue<E>] = Box::leak(values.into_boxed_slice());
	let refs = values.iter().map(EnumRef::from).collect();

	tracing::debug!("Populated enum type {} with {} values", E::TYPE_NAME, values.len());

	EnumTable {
		values,
		refs,
		by_name,
	}
}

/// Returns the singleton for `name`, or `None` if `E` declares no such constant.
pub fn value_of<E: Enum>(name: &str) -> Option<&'static EnumValue<E>> {
	let table = table::<E>();
	table.by_name.get(name).map(|&idx| &table.values[idx])
}

/// Explicit-function form of [`value_of`].
pub fn by_name<E: Enum>(name: &str) -> Option<&'static EnumValue<E>> {
	value_of::<E>(name)
}

/// Returns the first declared singleton whose underlying scalar equals `value`.
pub fn by_value<E: Enum>(value: &E::Value) -> Option<&'static EnumValue<E>> {
	values::<E>().iter().find(|v| v.const_value() == value)
}

/// Returns every singleton of `E` in declaration order.
pub fn values<E: Enum>() -> &'static [EnumValue<E>] {
	table::<E>().values
}

/// Returns the erased handles of every singleton of `E` in declaration order.
pub fn refs<E: Enum>() -> &'static [EnumRef] {
	&table::<E>().refs
}

/// Erased form of [`value_of`].
pub fn erased_value_of<E: Enum>(name: &str) -> Option<EnumRef> {
	value_of::<E>(name).map(EnumRef::from)
}

/// Returns true iff `a` and `b` are the same singleton.
pub fn equals(a: impl Into<EnumRef>, b: impl Into<EnumRef>) -> bool {
	a.into() == b.into()
}

/// Returns true once `E` has been populated.
pub fn is_populated<E: Enum>() -> bool {
	gate::<E>().get().is_some()
}

/// Checks the declaration of `E` for repeated constant names.
///
/// Does not populate the type and runs no initializers.
pub fn validate<E: Enum>() -> Result<(), RegistryError> {
	let mut seen = HashSet::default();
	for constant in E::constants() {
		if !seen.insert(constant.name()) {
			return Err(RegistryError::DuplicateConstant {
				ty: E::TYPE_NAME,
				name: constant.name(),
			});
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests;
