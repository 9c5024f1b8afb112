use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Class of compared goods. Drives bar color and legend grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Vehicle,
    Cheese,
}

impl Category {
    /// Legend order.
    pub const ALL: [Category; 2] = [Category::Vehicle, Category::Cheese];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vehicle => "Vehicle",
            Self::Cheese => "Cheese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Raw vehicle entry: sticker price in USD and curb mass in pounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub name: String,
    pub sticker_price: f64,
    pub mass: f64,
}

impl VehicleRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, sticker_price: f64, mass: f64) -> Self {
        Self {
            name: name.into(),
            sticker_price,
            mass,
        }
    }
}

/// Raw cheese entry, already a unit price (USD per pound).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheeseRecord {
    pub name: String,
    pub price_per_mass: f64,
}

impl CheeseRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, price_per_mass: f64) -> Self {
        Self {
            name: name.into(),
            price_per_mass,
        }
    }
}

/// One chart row: item name, USD per kilogram and its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedItem {
    name: String,
    price_per_unit_mass: f64,
    category: Category,
}

impl PricedItem {
    #[must_use]
    pub fn new(name: impl Into<String>, price_per_unit_mass: f64, category: Category) -> Self {
        Self {
            name: name.into(),
            price_per_unit_mass,
            category,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn price_per_unit_mass(&self) -> f64 {
        self.price_per_unit_mass
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}
