use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Category, PricedItem};
use crate::error::{ChartError, ChartResult};

/// Display ceiling in USD per kilogram.
pub const DEFAULT_PRICE_CEILING: f64 = 400.0;

pub const COMPARISON_TABLE_JSON_SCHEMA_V1: u32 = 1;

/// Builds one category's rows in the mapping's insertion order.
#[must_use]
pub fn assemble_items(category: Category, prices: &IndexMap<String, f64>) -> Vec<PricedItem> {
    prices
        .iter()
        .map(|(name, price)| PricedItem::new(name.clone(), *price, category))
        .collect()
}

/// Concatenates two row sequences without dropping or merging namesakes.
#[must_use]
pub fn concat_items(first: Vec<PricedItem>, second: Vec<PricedItem>) -> Vec<PricedItem> {
    let mut combined = first;
    combined.extend(second);
    combined
}

/// Filtered, descending-sorted rows handed to the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    items: Vec<PricedItem>,
    ceiling: f64,
    dropped_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTableJsonContractV1 {
    pub schema_version: u32,
    pub table: ComparisonTable,
}

impl ComparisonTable {
    /// Keeps rows with `price <= ceiling` and orders them by descending price.
    ///
    /// The sort is stable: equal prices keep their assembled order.
    pub fn from_items(items: Vec<PricedItem>, ceiling: f64) -> ChartResult<Self> {
        if !ceiling.is_finite() || ceiling <= 0.0 {
            return Err(ChartError::InvalidData(
                "price ceiling must be finite and > 0".to_owned(),
            ));
        }

        let input_count = items.len();
        let mut kept = Vec::with_capacity(input_count);
        for item in items {
            if item.price_per_unit_mass() <= ceiling {
                kept.push(item);
            } else {
                debug!(
                    name = item.name(),
                    category = %item.category(),
                    price = item.price_per_unit_mass(),
                    ceiling,
                    "item above price ceiling dropped"
                );
            }
        }
        kept.sort_by(|lhs, rhs| sort_key(rhs).total_cmp(&sort_key(lhs)));

        let dropped_count = input_count - kept.len();
        if dropped_count > 0 {
            info!(
                dropped_count,
                kept_count = kept.len(),
                ceiling,
                "filtered items above price ceiling"
            );
        }

        Ok(Self {
            items: kept,
            ceiling,
            dropped_count,
        })
    }

    #[must_use]
    pub fn items(&self) -> &[PricedItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// Number of rows removed by the ceiling filter.
    #[must_use]
    pub fn dropped_count(&self) -> usize {
        self.dropped_count
    }

    #[must_use]
    pub fn count_by_category(&self, category: Category) -> usize {
        self.items
            .iter()
            .filter(|item| item.category() == category)
            .count()
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ComparisonTableJsonContractV1 {
            schema_version: COMPARISON_TABLE_JSON_SCHEMA_V1,
            table: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize comparison table v1: {e}"))
        })
    }

    /// Parses either a bare table or a versioned v1 contract payload.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        if let Ok(table) = serde_json::from_str::<ComparisonTable>(input) {
            return Ok(table);
        }
        let payload: ComparisonTableJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse comparison table json: {e}"))
        })?;
        if payload.schema_version != COMPARISON_TABLE_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported comparison table schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.table)
    }
}

/// Price used for ordering; folds `-0.0` into `0.0` so signed zeros tie.
fn sort_key(item: &PricedItem) -> f64 {
    let price = item.price_per_unit_mass();
    if price == 0.0 { 0.0 } else { price }
}
