use chrono::{DateTime, Local, Utc};
use console::style;
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::models::{CartLineItem, Product};

#[derive(Tabled)]
struct ProductTableRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Availability")]
    availability: String,
}

#[derive(Tabled)]
struct CartTableRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: i64,
    #[tabled(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Charged")]
    price: String,
    #[tabled(rename = "Added")]
    added: String,
}

pub fn format_product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let rows: Vec<ProductTableRow> = products
        .iter()
        .enumerate()
        .map(|(index, product)| ProductTableRow {
            number: index + 1,
            name: product.name.clone(),
            price: format_price(product.price),
            availability: format!("{} units", product.availability),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

/// Plain numbered listing, one product per line.
pub fn format_product_list(products: &[Product]) -> String {
    let mut output = String::from("Available Products:");
    for (index, product) in products.iter().enumerate() {
        output.push_str(&format!("\n{}. {}", index + 1, product));
    }
    output
}

pub fn format_cart_table(items: &[CartLineItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let rows: Vec<CartTableRow> = items
        .iter()
        .map(|item| CartTableRow {
            name: item.product.name.clone(),
            quantity: item.quantity,
            discount: item
                .discount
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            price: format_price(item.price),
            added: format_time(&item.added_at),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

pub fn format_price(amount: f64) -> String {
    format!("${}", amount)
}

pub fn format_total(total: f64) -> String {
    format!("Your total bill is {}.", format_price(total))
}

pub fn format_total_styled(total: f64) -> String {
    format!(
        "Your total bill is {}.",
        style(format_price(total)).green().bold()
    )
}

pub fn format_time(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%H:%M:%S").to_string()
}
