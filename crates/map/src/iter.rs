//! Ordered iterators over [`EnumMap`](crate::EnumMap).

use core::iter::FusedIterator;

use richenum_registry::EnumRef;

macro_rules! wrap_iter {
	(
		$(#[$attr:meta])*
		$name:ident<$($lt:lifetime,)? V> => $inner:ty, $item:ty, |$arg:ident| $map:expr
	) => {
		$(#[$attr])*
		pub struct $name<$($lt,)? V> {
			inner: $inner,
		}

		impl<$($lt,)? V> $name<$($lt,)? V> {
			pub(crate) fn new(inner: $inner) -> Self {
				Self { inner }
			}
		}

		impl<$($lt,)? V> Iterator for $name<$($lt,)? V> {
			type Item = $item;

			fn next(&mut self) -> Option<Self::Item> {
				self.inner.next().map(|$arg| $map)
			}

			fn size_hint(&self) -> (usize, Option<usize>) {
				self.inner.size_hint()
			}
		}

		impl<$($lt,)? V> DoubleEndedIterator for $name<$($lt,)? V> {
			fn next_back(&mut self) -> Option<Self::Item> {
				self.inner.next_back().map(|$arg| $map)
			}
		}

		impl<$($lt,)? V> ExactSizeIterator for $name<$($lt,)? V> {}

		impl<$($lt,)? V> FusedIterator for $name<$($lt,)? V> {}
	};
}

wrap_iter! {
	/// Borrowing iterator over `(key, value)` pairs in insertion order.
	Iter<'a, V> => indexmap::map::Iter<'a, EnumRef, V>, (EnumRef, &'a V), |entry| (*entry.0, entry.1)
}

wrap_iter! {
	/// Keys in insertion order.
	Keys<'a, V> => indexmap::map::Keys<'a, EnumRef, V>, EnumRef, |key| *key
}

wrap_iter! {
	/// Values in insertion order.
	Values<'a, V> => indexmap::map::Values<'a, EnumRef, V>, &'a V, |value| value
}

wrap_iter! {
	/// Owning iterator over `(key, value)` pairs in insertion order.
	IntoIter<V> => indexmap::map::IntoIter<EnumRef, V>, (EnumRef, V), |entry| entry
}
