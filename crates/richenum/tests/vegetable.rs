use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use richenum::{Constant, Enum, enum_type};

#[derive(Debug, Default)]
struct Vegetable {
	counter: AtomicUsize,
	initialized: bool,
}

impl Vegetable {
	fn reset(&mut self, _constant: &Constant<Self>) {
		self.counter = AtomicUsize::new(0);
		self.initialized = true;
	}

	fn increment(&self) {
		self.counter.fetch_add(1, Ordering::SeqCst);
	}

	fn counter(&self) -> usize {
		self.counter.load(Ordering::SeqCst)
	}
}

enum_type! {
	Vegetable: &'static str, init = Vegetable::reset {
		BROCCOLI = "broccoli",
		CABBAGE = "cabbage",
	}
}

#[test]
fn accessors_share_one_counter() {
	let broccoli = Vegetable::broccoli();
	let another_broccoli = Vegetable::broccoli();
	let cabbage = Vegetable::cabbage();

	broccoli.increment();
	another_broccoli.increment();
	cabbage.increment();

	assert_eq!(cabbage.counter(), 1);
	assert_eq!(broccoli.counter(), 2);
	assert_eq!(another_broccoli.counter(), 2);
}

#[test]
fn global_initializer_ran() {
	assert!(Vegetable::values().iter().all(|v| v.initialized));
}
