use mass_price_chart::chart::{ComparisonChartConfig, OutputTarget};
use mass_price_chart::core::{Category, DEFAULT_PRICE_CEILING, PricedItem};
use mass_price_chart::dataset::{reference_cheeses, reference_vehicles};
use mass_price_chart::{ChartError, PipelineInput, build_comparison_table, run};

#[test]
fn reference_sets_have_expected_sizes() {
    assert_eq!(reference_vehicles().len(), 29);
    assert_eq!(reference_cheeses().len(), 40);
}

#[test]
fn reference_records_are_well_formed() {
    assert!(
        reference_vehicles()
            .iter()
            .all(|vehicle| vehicle.mass > 0.0 && vehicle.sticker_price > 0.0)
    );
    assert!(
        reference_cheeses()
            .iter()
            .all(|cheese| cheese.price_per_mass > 0.0)
    );
}

#[test]
fn reference_table_keeps_every_row_under_ceiling() {
    let table = build_comparison_table(&PipelineInput::reference(), DEFAULT_PRICE_CEILING)
        .expect("reference data is valid");

    assert_eq!(table.len(), 69);
    assert_eq!(table.dropped_count(), 0);
    assert_eq!(table.count_by_category(Category::Vehicle), 29);
    assert_eq!(table.count_by_category(Category::Cheese), 40);
}

#[test]
fn reference_table_interleaves_categories() {
    let table = build_comparison_table(&PipelineInput::reference(), DEFAULT_PRICE_CEILING)
        .expect("reference data is valid");
    let names: Vec<&str> = table.items().iter().map(PricedItem::name).collect();

    assert_eq!(names.first(), Some(&"Ferrari SF90 Stradale"));
    assert_eq!(names.get(1), Some(&"Lamborghini Revuelto"));
    assert_eq!(names.last(), Some(&"Mozzarella"));

    let category_switches = table
        .items()
        .windows(2)
        .filter(|pair| pair[0].category() != pair[1].category())
        .count();
    assert!(category_switches > 2);
}

#[test]
fn lower_ceiling_drops_exotic_vehicles() {
    let table = build_comparison_table(&PipelineInput::reference(), 100.0)
        .expect("reference data is valid");

    assert!(table.dropped_count() > 0);
    assert!(
        table
            .items()
            .iter()
            .all(|item| item.name() != "Ferrari SF90 Stradale")
    );
    assert_eq!(table.count_by_category(Category::Cheese), 40);
}

#[cfg(not(feature = "cairo-backend"))]
#[test]
fn run_surfaces_backend_errors_unchanged() {
    let err = run(
        &PipelineInput::reference(),
        DEFAULT_PRICE_CEILING,
        ComparisonChartConfig::default(),
        &OutputTarget::FilePath("reference.png".into()),
    )
    .expect_err("png export needs cairo");
    assert!(matches!(err, ChartError::BackendUnavailable(_)));
}

#[cfg(feature = "cairo-backend")]
#[test]
fn run_exports_reference_chart_png() {
    let path = std::env::temp_dir().join("mass_price_chart_reference.png");
    let table = run(
        &PipelineInput::reference(),
        DEFAULT_PRICE_CEILING,
        ComparisonChartConfig::default(),
        &OutputTarget::FilePath(path.clone()),
    )
    .expect("png export succeeds");

    assert_eq!(table.len(), 69);
    let bytes = std::fs::read(&path).map_err(ChartError::from).expect("png written");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    let _ = std::fs::remove_file(&path);
}
