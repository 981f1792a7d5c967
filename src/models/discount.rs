use serde::{Deserialize, Serialize};

/// Pricing rule applied when a line item is added to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountStrategy {
    /// Percentage off the line total. Not clamped to 0..=100.
    Percentage { percentage: f64 },
    /// Every second unit is free; an odd leftover unit is charged in full.
    BuyOneGetOneFree,
}

impl DiscountStrategy {
    pub fn percentage(percentage: f64) -> Self {
        DiscountStrategy::Percentage { percentage }
    }

    pub fn apply_discount(&self, price: f64, quantity: i64) -> f64 {
        match self {
            DiscountStrategy::Percentage { percentage } => {
                price * quantity as f64 * (1.0 - percentage / 100.0)
            }
            DiscountStrategy::BuyOneGetOneFree => {
                let paid = quantity.div_euclid(2) + quantity.rem_euclid(2);
                paid as f64 * price
            }
        }
    }
}

impl std::fmt::Display for DiscountStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountStrategy::Percentage { percentage } => write!(f, "{}% off", percentage),
            DiscountStrategy::BuyOneGetOneFree => write!(f, "buy one get one free"),
        }
    }
}

/// Charged total for a line, falling back to full price when no strategy is given.
pub fn charge(discount: Option<&DiscountStrategy>, price: f64, quantity: i64) -> f64 {
    match discount {
        Some(strategy) => strategy.apply_discount(price, quantity),
        None => price * quantity as f64,
    }
}
