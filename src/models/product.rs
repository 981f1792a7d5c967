use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    /// Remaining stock. Signed because the cart does not reject zero or negative quantities.
    pub availability: i64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, availability: i64) -> Self {
        Self {
            name: name.into(),
            price,
            availability,
        }
    }

    pub fn is_available(&self, quantity: i64) -> bool {
        self.availability >= quantity
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - Price: ${} - Availability: {} units",
            self.name, self.price, self.availability
        )
    }
}

// catalog file entry
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CatalogEntry {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom = "validate_name")]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[serde(default)]
    pub availability: i64,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("Name is required"));
    }
    Ok(())
}

impl From<CatalogEntry> for Product {
    fn from(entry: CatalogEntry) -> Self {
        Product::new(entry.name.trim(), entry.price, entry.availability)
    }
}

/// Ordered product list. Numbers shown to the user are 1-based, indexes are 0-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Maps a 1-based product number to its index.
    pub fn index_of(&self, number: usize) -> Option<usize> {
        if number == 0 || number > self.products.len() {
            None
        } else {
            Some(number - 1)
        }
    }

    pub fn get(&self, number: usize) -> Option<&Product> {
        self.index_of(number).and_then(|index| self.products.get(index))
    }

    pub fn get_mut(&mut self, number: usize) -> Option<&mut Product> {
        let index = self.index_of(number)?;
        self.products.get_mut(index)
    }

    pub fn get_by_index_mut(&mut self, index: usize) -> Option<&mut Product> {
        self.products.get_mut(index)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            Product::new("Laptop", 1000.0, 5),
            Product::new("Headphones", 50.0, 10),
        ])
    }
}
