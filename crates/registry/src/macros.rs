//! Enum declaration macros.
//!
//! See [`enum_type!`] for declaring an enum type over a state struct.

/// Declares an enum type over an existing state struct.
///
/// The struct must implement `Default + Send + Sync + 'static`. The macro
/// implements [`Enum`](crate::Enum), generates one lowercase accessor per
/// constant and, with the `catalog` feature, collects the type for by-name
/// lookup.
///
/// ```ignore
/// #[derive(Default)]
/// pub struct Planet {
///     radius: u64,
/// }
///
/// impl Planet {
///     fn init_earth(&mut self, _: &Constant<Self>) {
///         self.radius = 6_371_000;
///     }
/// }
///
/// enum_type! {
///     Planet: &'static str {
///         EARTH = "Earth" => Planet::init_earth,
///         PLUTO = "Pluto",
///     }
/// }
///
/// assert_eq!(Planet::earth().radius, 6_371_000);
/// ```
///
/// A type-global initializer runs on every value before its per-value
/// initializer:
///
/// ```ignore
/// enum_type! {
///     Counter: u8, init = Counter::reset {
///         ONE = 1,
///         TWO = 2,
///     }
/// }
/// ```
///
/// # Accessor names
///
/// The accessor is the constant name in lowercase. `NAME as accessor` picks
/// another name, which is required when the lowercase name is a Rust keyword
/// (`TYPE`, `IF`, `MOD`, ...) or one of [`RESERVED_ACCESSORS`]
/// (`VALUES`, `BY_NAME`, ...). A reserved accessor name fails to compile.
///
/// ```ignore
/// enum_type! {
///     Token: u8 {
///         IF as r#if = 1,
///         TYPE as kind = 2,
///         VALUES as values_column = 3,
///     }
/// }
///
/// assert_eq!(Token::kind().const_name(), "TYPE");
/// ```
///
/// [`RESERVED_ACCESSORS`]: crate::core::RESERVED_ACCESSORS
#[macro_export]
macro_rules! enum_type {
	(
		$ty:ident : $value_ty:ty $(, init = $init:path)? {
			$(
				$(#[$const_attr:meta])*
				$name:ident $(as $accessor:ident)? = $value:expr $(=> $hook:expr)?
			),+ $(,)?
		}
	) => {
		impl $crate::Enum for $ty {
			type Value = $value_ty;

			const TYPE_NAME: &'static str = stringify!($ty);

			fn constants() -> ::std::vec::Vec<$crate::Constant<Self>> {
				::std::vec![
					$(
						$crate::Constant::new(stringify!($name), $value)
							.with_init($crate::__enum_opt!($({$hook})?, $crate::noop_init::<Self>)),
					)+
				]
			}

			fn construct(_constant: &$crate::Constant<Self>) -> Self {
				<Self as ::core::default::Default>::default()
			}

			#[allow(unused_variables)]
			fn init(&mut self, constant: &$crate::Constant<Self>) {
				$( ($init)(self, constant); )?
			}
		}

		$(
			$crate::__enum_accessor! {
				$ty $(#[$const_attr])* $name $(as $accessor)?
			}
		)+

		$crate::__enum_submit!($ty);
	};
}

/// Generates the accessor of one constant.
#[doc(hidden)]
#[macro_export]
macro_rules! __enum_accessor {
	($ty:ident $(#[$attr:meta])* $name:ident as $accessor:ident) => {
		const _: () = ::core::assert!(
			!$crate::core::is_reserved_accessor(stringify!($accessor)),
			concat!(
				"accessor ", stringify!($accessor), " of ", stringify!($ty), "::", stringify!($name),
				" shadows an Enum function, pick another name with `", stringify!($name), " as ...`"
			)
		);

		impl $ty {
			$(#[$attr])*
			#[doc = concat!("Returns the `", stringify!($name), "` singleton.")]
			pub fn $accessor() -> &'static $crate::EnumValue<$ty> {
				match <$ty as $crate::Enum>::value_of(stringify!($name)) {
					Some(value) => value,
					None => unreachable!(concat!(
						stringify!($ty), "::", stringify!($name), " is declared by enum_type!"
					)),
				}
			}
		}
	};
	($ty:ident $(#[$attr:meta])* $name:ident) => {
		$crate::__private::paste! {
			$crate::__enum_accessor! { $ty $(#[$attr])* $name as [<$name:lower>] }
		}
	};
}

/// Collects an enum type into the by-name catalog.
#[cfg(feature = "catalog")]
#[doc(hidden)]
#[macro_export]
macro_rules! __enum_submit {
	($ty:ident) => {
		$crate::__private::inventory::submit! {
			$crate::catalog::EnumTypeReg(<$crate::EnumType>::of::<$ty>)
		}
	};
}

#[cfg(not(feature = "catalog"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __enum_submit {
	($ty:ident) => {};
}
