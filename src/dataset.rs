//! Reference datasets: 2024-2025 model-year vehicles and retail cheese prices.
//!
//! Vehicle prices are USD sticker prices with curb mass in pounds; cheese
//! prices are USD per pound.

use crate::core::{CheeseRecord, VehicleRecord};

const REFERENCE_VEHICLES: &[(&str, f64, f64)] = &[
    ("Mitsubishi Mirage", 16_695.0, 2084.0),
    ("Nissan Versa", 16_130.0, 2598.0),
    ("Toyota Corolla", 22_050.0, 2955.0),
    ("Honda Civic", 23_950.0, 2935.0),
    ("Toyota Camry", 28_915.0, 3310.0),
    ("Honda Accord", 29_045.0, 3239.0),
    ("Toyota RAV4", 30_025.0, 3370.0),
    ("Jeep Wrangler", 31_895.0, 4012.0),
    ("Ford Maverick", 25_515.0, 3563.0),
    ("Ford F-150", 39_060.0, 4391.0),
    ("Ram 1500", 41_415.0, 4765.0),
    ("Chevrolet Silverado 1500", 37_845.0, 4410.0),
    ("Tesla Model 3", 40_630.0, 3862.0),
    ("Tesla Model S", 81_630.0, 4560.0),
    ("Rolls-Royce Phantom", 503_000.0, 5644.0),
    ("Mercedes-Benz S-Class", 118_450.0, 4740.0),
    ("BMW 330i", 45_495.0, 3536.0),
    ("Range Rover SE", 109_025.0, 5240.0),
    ("Cadillac Escalade", 86_890.0, 5823.0),
    ("Porsche 911 Carrera", 116_050.0, 3354.0),
    ("Lamborghini Revuelto", 608_358.0, 4188.0),
    ("Ferrari SF90 Stradale", 520_000.0, 3461.0),
    ("Chevrolet Corvette Stingray", 69_995.0, 3366.0),
    ("Ford Mustang GT", 42_500.0, 3832.0),
    ("Lucid Air Pure", 78_900.0, 4564.0),
    ("Nissan Leaf", 29_255.0, 3509.0),
    ("Toyota GR86", 30_395.0, 2811.0),
    ("Rolls-Royce Spectre", 397_750.0, 6537.0),
    ("Ford F-150 Lightning", 49_995.0, 6361.0),
];

const REFERENCE_CHEESES: &[(&str, f64)] = &[
    ("Cheddar", 5.62),
    ("Mozzarella", 5.58),
    ("Swiss", 7.00),
    ("Brie", 14.99),
    ("Gouda", 11.50),
    ("Parmigiano Reggiano", 20.00),
    ("Roquefort Blue", 26.00),
    ("Goat Cheese", 12.00),
    ("Époisses", 30.00),
    ("Manchego", 18.50),
    ("Gruyère", 22.00),
    ("Camembert", 16.75),
    ("Stilton", 28.50),
    ("Feta", 9.99),
    ("Pecorino Romano", 17.25),
    ("Burrata", 24.00),
    ("Comté", 25.50),
    ("Halloumi", 15.75),
    ("Taleggio", 19.50),
    ("Gorgonzola", 21.00),
    ("Emmental", 13.75),
    ("Ricotta", 8.50),
    ("Mascarpone", 10.25),
    ("Provolone", 12.50),
    ("Asiago", 16.00),
    ("Fontina", 18.75),
    ("Havarti", 14.25),
    ("Morbier", 23.50),
    ("Raclette", 19.75),
    ("Mimolette", 27.50),
    ("Reblochon", 24.75),
    ("Munster", 17.50),
    ("Pont-l'Évêque", 29.00),
    ("Cabrales", 22.50),
    ("Ossau-Iraty", 26.75),
    ("Queso Fresco", 7.99),
    ("Cotija", 11.25),
    ("Paneer", 8.75),
    ("Wensleydale", 20.50),
    ("Roquefort", 31.00),
];

/// Vehicle reference set in its canonical order.
#[must_use]
pub fn reference_vehicles() -> Vec<VehicleRecord> {
    REFERENCE_VEHICLES
        .iter()
        .map(|&(name, price, mass)| VehicleRecord::new(name, price, mass))
        .collect()
}

/// Cheese reference set in its canonical order.
#[must_use]
pub fn reference_cheeses() -> Vec<CheeseRecord> {
    REFERENCE_CHEESES
        .iter()
        .map(|&(name, price)| CheeseRecord::new(name, price))
        .collect()
}
