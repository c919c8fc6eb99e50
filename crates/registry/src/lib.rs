//! Lazily populated singleton registry for rich enum types.
//!
//! An enum type is a state struct plus a closed list of named constants, each
//! carrying an underlying scalar. The first lookup of any constant populates
//! the whole type: one [`EnumValue`] per constant, built once, initialized by
//! the type-global hook and then by the constant's own hook, and cached for the
//! rest of the process.
//!
//! # Modules
//!
//! - [`core`](self::core) - [`Enum`] contract, [`Constant`], [`EnumValue`], [`EnumRef`], [`EnumType`]
//! - [`db`] - process-wide store and typed lookups
//! - [`catalog`] - by-name type lookup (feature `catalog`)
//!
//! Declare types with [`enum_type!`].

pub mod core;
pub mod db;
mod macros;

pub use self::core::{Constant, Enum, EnumRef, EnumType, EnumValue, InitFn, RegistryError, noop_init};

#[cfg(feature = "catalog")]
pub use db::catalog;

#[doc(hidden)]
pub mod __private {
	#[cfg(feature = "catalog")]
	pub use inventory;
	pub use paste::paste;
}

#[cfg(test)]
mod tests;
