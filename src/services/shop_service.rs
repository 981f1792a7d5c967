use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{
    CartLineItem, Catalog, DiscountStrategy, Product, RestockPolicy, ShoppingCart,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShopServiceError {
    #[error("Product number {number} does not exist.")]
    ProductNotFound { number: usize },
    #[error("{name} is not available in the desired quantity.")]
    Unavailable { name: String },
    #[error("{name} is not in your cart.")]
    NotInCart { name: String },
}

/// Everything the driver can ask of a shopping session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CartCommand {
    DisplayProducts,
    AddItem {
        /// 1-based catalog number
        product: usize,
        quantity: i64,
        #[serde(default)]
        discount: Option<DiscountStrategy>,
    },
    ViewCart,
    RemoveItem {
        name: String,
    },
    CalculateTotal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Products(Vec<Product>),
    Added(CartLineItem),
    Cart(String),
    Removed { name: String },
    Total(f64),
}

/// One user's session: the catalog, the cart and the restock rule for removals.
pub struct ShopService {
    catalog: Catalog,
    cart: ShoppingCart,
    restock_policy: RestockPolicy,
}

impl ShopService {
    pub fn new(catalog: Catalog, restock_policy: RestockPolicy) -> Self {
        Self {
            catalog,
            cart: ShoppingCart::new(),
            restock_policy,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    pub fn execute(&mut self, command: CartCommand) -> Result<CommandOutcome, ShopServiceError> {
        debug!("Executing command: {:?}", command);

        match command {
            CartCommand::DisplayProducts => {
                Ok(CommandOutcome::Products(self.catalog.products().to_vec()))
            }
            CartCommand::AddItem {
                product,
                quantity,
                discount,
            } => self
                .add_item(product, quantity, discount)
                .map(CommandOutcome::Added),
            CartCommand::ViewCart => Ok(CommandOutcome::Cart(self.cart.view_cart())),
            CartCommand::RemoveItem { name } => {
                self.remove_item(&name)?;
                Ok(CommandOutcome::Removed { name })
            }
            CartCommand::CalculateTotal => Ok(CommandOutcome::Total(self.total())),
        }
    }

    /// Add `quantity` units of the product numbered `number` (1-based).
    pub fn add_item(
        &mut self,
        number: usize,
        quantity: i64,
        discount: Option<DiscountStrategy>,
    ) -> Result<CartLineItem, ShopServiceError> {
        let index = self
            .catalog
            .index_of(number)
            .ok_or(ShopServiceError::ProductNotFound { number })?;
        let product = self
            .catalog
            .get_by_index_mut(index)
            .ok_or(ShopServiceError::ProductNotFound { number })?;

        let Some(item) = self
            .cart
            .add_line(index, product, quantity, discount.as_ref())
            .cloned()
        else {
            warn!(
                "Not enough {} in stock: requested {}, available {}",
                product.name, quantity, product.availability
            );
            return Err(ShopServiceError::Unavailable {
                name: product.name.clone(),
            });
        };

        info!(
            "Added {} {} to cart for ${} ({} left in stock)",
            item.quantity, item.product.name, item.price, product.availability
        );
        Ok(item)
    }

    pub fn remove_item(&mut self, name: &str) -> Result<(), ShopServiceError> {
        if self
            .cart
            .remove_from_cart(name, &mut self.catalog, self.restock_policy)
        {
            info!("Removed {} from cart (restock: {})", name, self.restock_policy);
            Ok(())
        } else {
            warn!("Tried to remove {} which is not in the cart", name);
            Err(ShopServiceError::NotInCart {
                name: name.to_string(),
            })
        }
    }

    pub fn total(&self) -> f64 {
        let total = self.cart.calculate_total();
        debug!("Cart total over {} line items: {}", self.cart.len(), total);
        total
    }
}

impl Default for ShopService {
    fn default() -> Self {
        Self::new(Catalog::default(), RestockPolicy::default())
    }
}
