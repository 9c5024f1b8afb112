pub mod normalize;
pub mod scale;
pub mod table;
pub mod types;

pub use normalize::{POUNDS_TO_KG, normalize_cheeses, normalize_vehicles};
pub use scale::LogScale;
pub use table::{
    COMPARISON_TABLE_JSON_SCHEMA_V1, ComparisonTable, ComparisonTableJsonContractV1,
    DEFAULT_PRICE_CEILING, assemble_items, concat_items,
};
pub use types::{Category, CheeseRecord, PricedItem, VehicleRecord, Viewport};
