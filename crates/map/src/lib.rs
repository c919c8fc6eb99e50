//! Insertion-ordered map keyed by rich enum singletons.
//!
//! An [`EnumMap`] is bound to one enum type for its whole life. Keys are the
//! registry's singletons, compared by identity; values are arbitrary.
//!
//! ```ignore
//! let mut stock = EnumMap::of::<CarBrand>();
//! stock
//!     .map(CarBrand::volvo(), vec!["C30", "V40"])?
//!     .map(CarBrand::audi(), vec!["A3", "A4"])?;
//!
//! assert!(stock.has(CarBrand::volvo())?);
//! assert_eq!(stock.remove(CarBrand::audi())?, Some(vec!["A3", "A4"]));
//! ```

mod error;
pub mod iter;
mod map;

pub use error::EnumMapError;
pub use iter::{IntoIter, Iter, Keys, Values};
pub use map::EnumMap;
