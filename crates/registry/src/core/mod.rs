//! Shared enum infrastructure.

pub mod error;
pub mod key;
pub mod meta;
pub mod traits;
pub mod value;

pub use error::RegistryError;
pub use key::EnumRef;
pub use meta::EnumType;
pub use traits::{Constant, Enum, InitFn, RESERVED_ACCESSORS, is_reserved_accessor, noop_init};
pub use value::EnumValue;
