use approx::assert_relative_eq;
use mass_price_chart::ChartError;
use mass_price_chart::core::{
    CheeseRecord, POUNDS_TO_KG, VehicleRecord, normalize_cheeses, normalize_vehicles,
};
use mass_price_chart::dataset::{reference_cheeses, reference_vehicles};

#[test]
fn conversion_constant_matches_pounds_per_kilogram() {
    assert_eq!(POUNDS_TO_KG, 2.20462);
    assert_relative_eq!(1.0 / 0.453_592_37, POUNDS_TO_KG, max_relative = 1e-5);
}

#[test]
fn vehicle_price_per_kg_is_price_over_mass_times_factor() {
    let vehicles = reference_vehicles();
    let prices = normalize_vehicles(&vehicles).expect("reference vehicles are valid");

    assert_eq!(prices.len(), vehicles.len());
    for record in &vehicles {
        let expected = (record.sticker_price / record.mass) * 2.20462;
        assert_relative_eq!(prices[&record.name], expected, max_relative = 1e-6);
    }
}

#[test]
fn cheese_price_per_kg_is_price_per_pound_times_factor() {
    let cheeses = reference_cheeses();
    let prices = normalize_cheeses(&cheeses).expect("reference cheeses are valid");

    assert_eq!(prices.len(), cheeses.len());
    for record in &cheeses {
        assert_relative_eq!(
            prices[&record.name],
            record.price_per_mass * 2.20462,
            max_relative = 1e-6
        );
    }
}

#[test]
fn normalized_mappings_keep_insertion_order() {
    let prices = normalize_vehicles(&[
        VehicleRecord::new("Zeta", 10.0, 1.0),
        VehicleRecord::new("Alpha", 20.0, 1.0),
        VehicleRecord::new("Mid", 30.0, 1.0),
    ])
    .expect("valid records");

    let names: Vec<&str> = prices.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn zero_mass_is_a_data_integrity_error() {
    let err = normalize_vehicles(&[
        VehicleRecord::new("Ok", 100.0, 10.0),
        VehicleRecord::new("Weightless", 100.0, 0.0),
    ])
    .expect_err("zero mass must fail");

    match err {
        ChartError::DataIntegrity { name, reason } => {
            assert_eq!(name, "Weightless");
            assert!(reason.contains("mass"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_mass_is_rejected() {
    let err = normalize_vehicles(&[VehicleRecord::new("Antimatter", 100.0, -5.0)])
        .expect_err("negative mass must fail");
    assert!(matches!(err, ChartError::DataIntegrity { .. }));
}

#[test]
fn negative_prices_are_rejected_for_both_categories() {
    let vehicle_err = normalize_vehicles(&[VehicleRecord::new("Rebate", -1.0, 1000.0)])
        .expect_err("negative sticker price must fail");
    assert!(matches!(vehicle_err, ChartError::DataIntegrity { .. }));

    let cheese_err = normalize_cheeses(&[CheeseRecord::new("Refund", -0.01)])
        .expect_err("negative cheese price must fail");
    assert!(matches!(cheese_err, ChartError::DataIntegrity { .. }));
}

#[test]
fn infinite_mass_is_rejected() {
    let err = normalize_vehicles(&[VehicleRecord::new("Star", 1.0, f64::INFINITY)])
        .expect_err("infinite mass must fail");
    assert!(matches!(err, ChartError::DataIntegrity { .. }));
}

#[test]
fn empty_inputs_produce_empty_mappings() {
    assert!(normalize_vehicles(&[]).expect("empty ok").is_empty());
    assert!(normalize_cheeses(&[]).expect("empty ok").is_empty());
}
