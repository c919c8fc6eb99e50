use pretty_assertions::assert_eq;
use richenum::{EnumMap, EnumMapError, enum_type};

#[derive(Debug, Default)]
struct CarBrand;

impl CarBrand {
	fn brand_name(value: &richenum::EnumValue<Self>) -> &'static str {
		*value.const_value()
	}
}

enum_type! {
	CarBrand: &'static str {
		VOLVO = "Volvo",
		AUDI = "Audi",
		DACIA = "Dacia",
	}
}

#[derive(Debug, Default)]
struct Fruit;

enum_type! {
	Fruit: &'static str {
		APPLE = "apple",
	}
}

#[test]
fn stock_by_brand() -> Result<(), EnumMapError> {
	let mut stock = EnumMap::of::<CarBrand>();
	stock
		.map(CarBrand::volvo(), vec!["C30", "V40"])?
		.map(CarBrand::audi(), vec!["A3", "A4"])?;

	assert!(stock.has(CarBrand::volvo())?);
	assert!(!stock.has(CarBrand::dacia())?);
	assert_eq!(stock.get(CarBrand::volvo())?, Some(&vec!["C30", "V40"]));

	assert_eq!(stock.remove(CarBrand::audi())?, Some(vec!["A3", "A4"]));

	let remaining: Vec<_> = stock.iter().map(|(brand, models)| (brand, models.clone())).collect();
	assert_eq!(remaining, vec![(CarBrand::volvo().erased(), vec!["C30", "V40"])]);
	Ok(())
}

#[cfg(feature = "catalog")]
#[test]
fn keys_downcast_to_brand() -> Result<(), EnumMapError> {
	let mut stock = EnumMap::create("CarBrand")?;
	stock.map(CarBrand::dacia(), 1)?.map(CarBrand::volvo(), 2)?;

	let names: Vec<_> = stock
		.keys()
		.filter_map(|key| key.downcast::<CarBrand>())
		.map(CarBrand::brand_name)
		.collect();
	assert_eq!(names, vec!["Dacia", "Volvo"]);
	Ok(())
}

#[test]
fn fruit_is_not_a_car_brand() {
	let mut stock: EnumMap<u32> = EnumMap::of::<CarBrand>();
	let err = stock.map(Fruit::apple(), 3).unwrap_err();
	assert_eq!(
		err,
		EnumMapError::TypeMismatch {
			expected: "CarBrand",
			found: "Fruit",
			key: "APPLE",
		}
	);
	assert!(stock.is_empty());
}
