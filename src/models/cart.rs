use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::discount::{charge, DiscountStrategy};
use super::product::{Catalog, Product};

/// How much stock a removed line item gives back to its catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestockPolicy {
    /// Restore exactly one unit regardless of the line's quantity.
    #[default]
    SingleUnit,
    /// Restore the full quantity of the removed line.
    LineQuantity,
}

impl RestockPolicy {
    pub fn restock_amount(&self, item: &CartLineItem) -> i64 {
        match self {
            RestockPolicy::SingleUnit => 1,
            RestockPolicy::LineQuantity => item.quantity,
        }
    }
}

impl std::str::FromStr for RestockPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single_unit" | "single-unit" => Ok(RestockPolicy::SingleUnit),
            "line_quantity" | "line-quantity" => Ok(RestockPolicy::LineQuantity),
            other => Err(format!("unknown restock policy '{}'", other)),
        }
    }
}

impl std::fmt::Display for RestockPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestockPolicy::SingleUnit => write!(f, "single_unit"),
            RestockPolicy::LineQuantity => write!(f, "line_quantity"),
        }
    }
}

/// One successful add: a snapshot of the product and the price charged at that moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// 0-based catalog index of the product this line was taken from.
    pub product_id: usize,
    pub product: Product,
    pub quantity: i64,
    pub price: f64,
    pub discount: Option<DiscountStrategy>,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: Vec<CartLineItem>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a line item and takes `quantity` out of the product's stock.
    ///
    /// Returns false without touching anything when the product does not have
    /// `quantity` units available. Quantity itself is not validated.
    pub fn add_to_cart(
        &mut self,
        product_id: usize,
        product: &mut Product,
        quantity: i64,
        discount: Option<&DiscountStrategy>,
    ) -> bool {
        self.add_line(product_id, product, quantity, discount).is_some()
    }

    /// Same as [`ShoppingCart::add_to_cart`] but hands back the new line item.
    pub fn add_line(
        &mut self,
        product_id: usize,
        product: &mut Product,
        quantity: i64,
        discount: Option<&DiscountStrategy>,
    ) -> Option<&CartLineItem> {
        if !product.is_available(quantity) {
            return None;
        }
        // stock that cannot be represented counts as unavailable
        let remaining = product.availability.checked_sub(quantity)?;

        let price = charge(discount, product.price, quantity);
        self.items.push(CartLineItem {
            product_id,
            product: product.clone(),
            quantity,
            price,
            discount: discount.copied(),
            added_at: Utc::now(),
        });
        product.availability = remaining;
        self.items.last()
    }

    /// Removes the first line item named `product_name` and restocks its catalog product
    /// according to `policy`.
    pub fn remove_from_cart(
        &mut self,
        product_name: &str,
        catalog: &mut Catalog,
        policy: RestockPolicy,
    ) -> bool {
        let Some(position) = self
            .items
            .iter()
            .position(|item| item.product.name == product_name)
        else {
            return false;
        };

        let item = self.items.remove(position);
        if let Some(product) = catalog.get_by_index_mut(item.product_id) {
            product.availability = product
                .availability
                .saturating_add(policy.restock_amount(&item));
        }
        true
    }

    pub fn calculate_total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn view_cart(&self) -> String {
        if self.items.is_empty() {
            return "Your cart is empty.".to_string();
        }

        let summary = self
            .items
            .iter()
            .map(|item| format!("{} {}", item.quantity, item.product.name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("You have {} in your cart.", summary)
    }
}
