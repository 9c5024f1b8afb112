use approx::assert_relative_eq;
use indexmap::IndexMap;
use mass_price_chart::core::{
    Category, CheeseRecord, ComparisonTable, DEFAULT_PRICE_CEILING, PricedItem, VehicleRecord,
    assemble_items, concat_items,
};
use mass_price_chart::{ChartError, PipelineInput, build_comparison_table};

fn scenario_input() -> PipelineInput {
    PipelineInput::new(
        vec![
            VehicleRecord::new("A", 100.0, 10.0),
            VehicleRecord::new("B", 50.0, 5.0),
        ],
        vec![CheeseRecord::new("X", 5.0), CheeseRecord::new("Y", 500.0)],
    )
}

#[test]
fn scenario_drops_above_ceiling_and_keeps_tie_order() {
    let table = build_comparison_table(&scenario_input(), DEFAULT_PRICE_CEILING)
        .expect("scenario builds");

    let names: Vec<&str> = table.items().iter().map(PricedItem::name).collect();
    assert_eq!(names, vec!["A", "B", "X"]);
    assert_relative_eq!(table.items()[0].price_per_unit_mass(), 22.0462, max_relative = 1e-6);
    assert_relative_eq!(table.items()[1].price_per_unit_mass(), 22.0462, max_relative = 1e-6);
    assert_relative_eq!(table.items()[2].price_per_unit_mass(), 11.0231, max_relative = 1e-6);
    assert_eq!(table.dropped_count(), 1);
    assert_eq!(table.ceiling(), 400.0);
}

#[test]
fn tie_order_follows_assembled_order_not_name() {
    let input = PipelineInput::new(
        vec![
            VehicleRecord::new("Second", 50.0, 5.0),
            VehicleRecord::new("First", 100.0, 10.0),
        ],
        Vec::new(),
    );
    let table = build_comparison_table(&input, DEFAULT_PRICE_CEILING).expect("builds");
    let names: Vec<&str> = table.items().iter().map(PricedItem::name).collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[test]
fn vehicles_precede_cheeses_on_cross_category_ties() {
    let input = PipelineInput::new(
        vec![VehicleRecord::new("Car", 10.0, 1.0)],
        vec![CheeseRecord::new("Cheese", 10.0)],
    );
    let table = build_comparison_table(&input, DEFAULT_PRICE_CEILING).expect("builds");
    let categories: Vec<Category> = table.items().iter().map(PricedItem::category).collect();
    assert_eq!(categories, vec![Category::Vehicle, Category::Cheese]);
}

#[test]
fn signed_zero_prices_tie_and_keep_assembled_order() {
    let table = ComparisonTable::from_items(
        vec![
            PricedItem::new("first", -0.0, Category::Cheese),
            PricedItem::new("second", 0.0, Category::Cheese),
            PricedItem::new("top", 1.0, Category::Vehicle),
        ],
        400.0,
    )
    .expect("builds");
    let names: Vec<&str> = table.items().iter().map(PricedItem::name).collect();
    assert_eq!(names, vec!["top", "first", "second"]);
}

#[test]
fn negative_zero_cheese_price_fails_the_pipeline() {
    let input = PipelineInput::new(
        Vec::new(),
        vec![CheeseRecord::new("first", -0.0), CheeseRecord::new("second", 0.0)],
    );
    let err = build_comparison_table(&input, DEFAULT_PRICE_CEILING).expect_err("must fail");
    assert!(matches!(err, ChartError::DataIntegrity { ref name, .. } if name == "first"));
}

#[test]
fn item_exactly_at_ceiling_is_kept() {
    let table = ComparisonTable::from_items(
        vec![
            PricedItem::new("edge", 400.0, Category::Cheese),
            PricedItem::new("over", 400.000_1, Category::Cheese),
        ],
        400.0,
    )
    .expect("builds");
    assert_eq!(table.len(), 1);
    assert_eq!(table.items()[0].name(), "edge");
}

#[test]
fn empty_input_produces_empty_table() {
    let table = build_comparison_table(&PipelineInput::default(), DEFAULT_PRICE_CEILING)
        .expect("empty input is not an error");
    assert!(table.is_empty());
    assert_eq!(table.dropped_count(), 0);
}

#[test]
fn everything_above_ceiling_yields_empty_table() {
    let input = PipelineInput::new(Vec::new(), vec![CheeseRecord::new("Gold Leaf", 10_000.0)]);
    let table = build_comparison_table(&input, DEFAULT_PRICE_CEILING).expect("builds");
    assert!(table.is_empty());
    assert_eq!(table.dropped_count(), 1);
}

#[test]
fn invalid_ceiling_is_rejected() {
    for ceiling in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = ComparisonTable::from_items(Vec::new(), ceiling).expect_err("bad ceiling");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}

#[test]
fn data_integrity_errors_abort_the_pipeline() {
    let input = PipelineInput::new(vec![VehicleRecord::new("Bad", 10.0, 0.0)], Vec::new());
    let err = build_comparison_table(&input, DEFAULT_PRICE_CEILING).expect_err("must fail");
    assert!(matches!(err, ChartError::DataIntegrity { .. }));
}

#[test]
fn assembler_attaches_category_and_keeps_order() {
    let mut prices = IndexMap::new();
    prices.insert("b".to_owned(), 2.0);
    prices.insert("a".to_owned(), 1.0);

    let items = assemble_items(Category::Cheese, &prices);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name(), "b");
    assert_eq!(items[1].name(), "a");
    assert!(items.iter().all(|item| item.category() == Category::Cheese));
}

#[test]
fn concat_keeps_namesakes_from_both_categories() {
    let vehicles = vec![PricedItem::new("Fiesta", 10.0, Category::Vehicle)];
    let cheeses = vec![PricedItem::new("Fiesta", 20.0, Category::Cheese)];

    let combined = concat_items(vehicles, cheeses);
    assert_eq!(combined.len(), 2);
    assert_eq!(combined[0].category(), Category::Vehicle);
    assert_eq!(combined[1].category(), Category::Cheese);

    let table = ComparisonTable::from_items(combined, 400.0).expect("builds");
    assert_eq!(table.count_by_category(Category::Vehicle), 1);
    assert_eq!(table.count_by_category(Category::Cheese), 1);
}

#[test]
fn json_contract_round_trips() {
    let table = build_comparison_table(&scenario_input(), DEFAULT_PRICE_CEILING).expect("builds");
    let json = table.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = ComparisonTable::from_json_str(&json).expect("parse contract");
    assert_eq!(parsed, table);
}

#[test]
fn json_with_unknown_schema_version_is_rejected() {
    let table = build_comparison_table(&scenario_input(), DEFAULT_PRICE_CEILING).expect("builds");
    let json = table
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 99");
    assert!(ComparisonTable::from_json_str(&json).is_err());
}
