use super::*;
use crate::tests::fixtures::{Alias, Foobar};

#[test]
fn gate_is_stable_per_type() {
	assert!(std::ptr::eq(gate::<Foobar>(), gate::<Foobar>()));
	assert!(!std::ptr::addr_eq(gate::<Foobar>(), gate::<Alias>()));
}

#[test]
fn table_index_matches_declaration() {
	let table = table::<Alias>();
	assert_eq!(table.values.len(), 3);
	assert_eq!(table.by_name.get("SECOND"), Some(&1));
	assert_eq!(table.refs.len(), table.values.len());
}
