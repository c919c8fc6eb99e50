use std::collections::HashSet;

use pretty_assertions::assert_eq;

use super::fixtures::{Alias, Foobar, Vegetable};
use crate::{Enum, EnumRef, EnumType, db};

#[test]
fn handles_compare_by_identity() {
	let foo: EnumRef = Foobar::foo().into();
	assert_eq!(foo, Foobar::foo().erased());
	assert_ne!(foo, Foobar::bar().erased());
	assert!(foo.equals(Foobar::foo()));
	assert!(db::equals(Foobar::bar(), Foobar::bar()));
	assert!(!db::equals(Foobar::foo(), Foobar::bar()));
}

#[test]
fn different_types_never_equal() {
	assert!(!Foobar::foo().equals(Alias::first()));
	assert!(!db::equals(Alias::first(), Vegetable::broccoli()));
	assert_ne!(EnumType::of::<Foobar>(), EnumType::of::<Alias>());
}

#[test]
fn downcast_round_trip() {
	let bar = Foobar::bar().erased();
	assert!(bar.is_type::<Foobar>());
	assert!(!bar.is_type::<Alias>());

	let typed = bar.downcast::<Foobar>().expect("bar is a Foobar");
	assert!(std::ptr::eq(typed, Foobar::bar()));
	assert!(bar.downcast::<Alias>().is_none());
}

#[test]
fn handle_metadata() {
	let third = Alias::third().erased();
	assert_eq!(third.const_name(), "THIRD");
	assert_eq!(third.ordinal(), 2);
	assert_eq!(third.enum_type(), EnumType::of::<Alias>());
	assert_eq!(third.to_string(), "THIRD");
	assert_eq!(format!("{third:?}"), "Alias::THIRD");
}

#[test]
fn handles_hash_by_identity() {
	let set: HashSet<EnumRef> = Alias::refs().iter().copied().chain(Alias::refs().iter().copied()).collect();
	assert_eq!(set.len(), 3, "SECOND shares FIRST's value but is a distinct singleton");
}

#[test]
fn enum_type_lookups() {
	let ty = Foobar::enum_type();
	assert_eq!(ty.name(), "Foobar");
	assert!(ty.is::<Foobar>());
	assert!(!ty.is::<Alias>());

	let names: Vec<_> = ty.values().iter().map(|v| v.const_name()).collect();
	assert_eq!(names, vec!["FOO", "BAR"]);

	assert_eq!(ty.value_of("BAR"), Some(Foobar::bar().erased()));
	assert_eq!(ty.value_of("BAZ"), None);
	assert_eq!(ty.validate(), Ok(()));
}

#[test]
fn refs_mirror_values() {
	let values = Foobar::values();
	let refs = Foobar::refs();
	assert_eq!(values.len(), refs.len());
	for (value, handle) in values.iter().zip(refs) {
		assert!(*handle == *value);
		assert!(*value == *handle);
	}
}
