//! Enumerated types with per-value state.
//!
//! This crate aggregates the registry and map crates. Depend on it to get the
//! whole surface, rather than depending on the individual crates.
//!
//! - [`richenum_registry`] - [`Enum`], [`EnumValue`], [`enum_type!`] and the singleton store
//! - [`richenum_map`] - [`EnumMap`]
//!
//! ```ignore
//! use richenum::{Constant, Enum, EnumMap, enum_type};
//!
//! #[derive(Default)]
//! pub struct Planet {
//!     radius: u64,
//! }
//!
//! impl Planet {
//!     fn init_earth(&mut self, _: &Constant<Self>) {
//!         self.radius = 6_371_000;
//!     }
//! }
//!
//! enum_type! {
//!     Planet: &'static str {
//!         EARTH = "Earth" => Planet::init_earth,
//!         MARS = "Mars",
//!     }
//! }
//!
//! assert_eq!(Planet::earth().radius, 6_371_000);
//! assert!(Planet::by_name("EARTH").unwrap().equals(Planet::earth()));
//! ```

pub use richenum_map::{self as map, EnumMap, EnumMapError};
#[cfg(feature = "catalog")]
pub use richenum_registry::catalog;
pub use richenum_registry::{
	self as registry, Constant, Enum, EnumRef, EnumType, EnumValue, InitFn, RegistryError, db, enum_type,
	noop_init,
};
