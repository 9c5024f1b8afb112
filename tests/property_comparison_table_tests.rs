use approx::relative_eq;
use mass_price_chart::core::{CheeseRecord, POUNDS_TO_KG, VehicleRecord};
use mass_price_chart::{PipelineInput, build_comparison_table};
use proptest::prelude::*;

fn vehicle_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.0f64..1_000_000.0, 100.0f64..10_000.0), 0..24)
}

fn cheese_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..400.0, 0..24)
}

fn input_from(vehicles: &[(f64, f64)], cheeses: &[f64]) -> PipelineInput {
    PipelineInput::new(
        vehicles
            .iter()
            .enumerate()
            .map(|(i, &(price, mass))| VehicleRecord::new(format!("vehicle-{i}"), price, mass))
            .collect(),
        cheeses
            .iter()
            .enumerate()
            .map(|(i, &price)| CheeseRecord::new(format!("cheese-{i}"), price))
            .collect(),
    )
}

proptest! {
    #[test]
    fn table_rows_respect_ceiling_and_descend(
        vehicles in vehicle_strategy(),
        cheeses in cheese_strategy(),
        ceiling in 1.0f64..1_000.0
    ) {
        let table = build_comparison_table(&input_from(&vehicles, &cheeses), ceiling)
            .expect("generated records are valid");

        let under_ceiling = table
            .items()
            .iter()
            .all(|item| item.price_per_unit_mass() <= ceiling);
        let descending = table
            .items()
            .windows(2)
            .all(|pair| pair[0].price_per_unit_mass() >= pair[1].price_per_unit_mass());
        prop_assert!(under_ceiling);
        prop_assert!(descending);
    }

    #[test]
    fn row_count_is_conserved_across_filter(
        vehicles in vehicle_strategy(),
        cheeses in cheese_strategy()
    ) {
        let ceiling = 400.0;
        let table = build_comparison_table(&input_from(&vehicles, &cheeses), ceiling)
            .expect("generated records are valid");

        let vehicles_kept = vehicles
            .iter()
            .filter(|(price, mass)| price / mass * POUNDS_TO_KG <= ceiling)
            .count();
        let cheeses_kept = cheeses
            .iter()
            .filter(|price| *price * POUNDS_TO_KG <= ceiling)
            .count();

        prop_assert_eq!(table.len(), vehicles_kept + cheeses_kept);
        prop_assert_eq!(table.len() + table.dropped_count(), vehicles.len() + cheeses.len());
    }

    #[test]
    fn cheese_rows_carry_converted_price(price in 0.01f64..150.0) {
        let table = build_comparison_table(&input_from(&[], &[price]), 400.0)
            .expect("valid record");
        prop_assert_eq!(table.len(), 1);
        let converted = relative_eq!(
            table.items()[0].price_per_unit_mass(),
            price * 2.20462,
            max_relative = 1e-6
        );
        prop_assert!(converted, "expected {} * 2.20462", price);
    }
}
