use indexmap::IndexMap;
use tracing::debug;

use crate::core::{CheeseRecord, VehicleRecord};
use crate::error::{ChartError, ChartResult};

/// Multiplier turning a per-pound rate into a per-kilogram rate (1 kg = 2.20462 lb).
pub const POUNDS_TO_KG: f64 = 2.20462;

/// Converts vehicle sticker prices into USD per kilogram.
///
/// Records are validated before any division happens: `mass` must be finite
/// and > 0 and `sticker_price` finite and >= 0. Output keeps input order; a
/// repeated name overwrites the earlier value in place.
pub fn normalize_vehicles(records: &[VehicleRecord]) -> ChartResult<IndexMap<String, f64>> {
    let mut prices = IndexMap::with_capacity(records.len());
    for record in records {
        validate_price(&record.name, record.sticker_price)?;
        if !record.mass.is_finite() || record.mass <= 0.0 {
            return Err(ChartError::data_integrity(
                &record.name,
                format!("mass must be finite and > 0, got {}", record.mass),
            ));
        }

        let price_per_kg = record.sticker_price / record.mass * POUNDS_TO_KG;
        insert_price(&mut prices, &record.name, price_per_kg);
    }

    debug!(
        input_count = records.len(),
        output_count = prices.len(),
        "normalized vehicle prices"
    );
    Ok(prices)
}

/// Converts cheese per-pound prices into USD per kilogram.
pub fn normalize_cheeses(records: &[CheeseRecord]) -> ChartResult<IndexMap<String, f64>> {
    let mut prices = IndexMap::with_capacity(records.len());
    for record in records {
        validate_price(&record.name, record.price_per_mass)?;
        insert_price(&mut prices, &record.name, record.price_per_mass * POUNDS_TO_KG);
    }

    debug!(
        input_count = records.len(),
        output_count = prices.len(),
        "normalized cheese prices"
    );
    Ok(prices)
}

fn validate_price(name: &str, price: f64) -> ChartResult<()> {
    if !price.is_finite() || price.is_sign_negative() {
        return Err(ChartError::data_integrity(
            name,
            format!("price must be finite and non-negative, got {price}"),
        ));
    }
    Ok(())
}

fn insert_price(prices: &mut IndexMap<String, f64>, name: &str, price_per_kg: f64) {
    if let Some(previous) = prices.insert(name.to_owned(), price_per_kg) {
        debug!(name, previous, price_per_kg, "duplicate item name overwrote earlier entry");
    }
}

#[cfg(test)]
mod tests {
    use super::{POUNDS_TO_KG, normalize_cheeses, normalize_vehicles};
    use crate::core::{CheeseRecord, VehicleRecord};
    use crate::error::ChartError;

    #[test]
    fn duplicate_vehicle_name_keeps_first_position_and_last_value() {
        let prices = normalize_vehicles(&[
            VehicleRecord::new("A", 100.0, 10.0),
            VehicleRecord::new("B", 10.0, 1.0),
            VehicleRecord::new("A", 300.0, 10.0),
        ])
        .expect("valid records");

        let names: Vec<&str> = prices.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!((prices["A"] - 30.0 * POUNDS_TO_KG).abs() <= 1e-9);
    }

    #[test]
    fn nan_cheese_price_is_rejected() {
        let err = normalize_cheeses(&[CheeseRecord::new("Brie", f64::NAN)])
            .expect_err("nan must be rejected");
        assert!(matches!(err, ChartError::DataIntegrity { ref name, .. } if name == "Brie"));
    }

    #[test]
    fn negative_zero_price_is_rejected() {
        let err = normalize_cheeses(&[
            CheeseRecord::new("first", -0.0),
            CheeseRecord::new("second", 0.0),
        ])
        .expect_err("sign-negative zero must be rejected");
        assert!(matches!(err, ChartError::DataIntegrity { ref name, .. } if name == "first"));

        let err = normalize_vehicles(&[VehicleRecord::new("Lease", -0.0, 3000.0)])
            .expect_err("sign-negative sticker price must be rejected");
        assert!(matches!(err, ChartError::DataIntegrity { .. }));
    }

    #[test]
    fn zero_price_is_accepted() {
        let prices = normalize_cheeses(&[CheeseRecord::new("Free", 0.0)]).expect("zero ok");
        assert_eq!(prices["Free"], 0.0);
    }
}
