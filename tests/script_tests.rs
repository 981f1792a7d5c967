use std::fs;
use std::path::Path;

use shopping_cart_cli::cli::run_script;
use shopping_cart_cli::models::RestockPolicy;
use shopping_cart_cli::services::{CartCommand, ShopService};
use shopping_cart_cli::utils::load_catalog_file;

fn parse(script: &str) -> Vec<CartCommand> {
    serde_json::from_str(script).expect("Invalid script")
}

#[test]
fn test_script_reports_each_command() {
    let mut service = ShopService::default();
    let commands = parse(
        r#"[
            {"command": "add_item", "product": 1, "quantity": 2},
            {"command": "add_item", "product": 2, "quantity": 3,
             "discount": {"type": "buy_one_get_one_free"}},
            {"command": "view_cart"},
            {"command": "calculate_total"},
            {"command": "remove_item", "name": "Laptop"},
            {"command": "calculate_total"}
        ]"#,
    );

    let lines = run_script(&mut service, commands);

    assert_eq!(
        lines,
        vec![
            "Added 2 Laptop for $2000.".to_string(),
            "Added 3 Headphones for $100.".to_string(),
            "You have 2 Laptop, 3 Headphones in your cart.".to_string(),
            "Your total bill is $2100.".to_string(),
            "Removed Laptop from your cart.".to_string(),
            "Your total bill is $100.".to_string(),
        ]
    );
    assert_eq!(service.catalog().get(1).unwrap().availability, 4);
}

#[test]
fn test_script_continues_after_failures() {
    let mut service = ShopService::default();
    let commands = parse(
        r#"[
            {"command": "add_item", "product": 1, "quantity": 6},
            {"command": "add_item", "product": 9, "quantity": 1},
            {"command": "remove_item", "name": "Tablet"},
            {"command": "add_item", "product": 2, "quantity": 2,
             "discount": {"type": "percentage", "percentage": 20}},
            {"command": "view_cart"}
        ]"#,
    );

    let lines = run_script(&mut service, commands);

    assert_eq!(lines[0], "Laptop is not available in the desired quantity.");
    assert_eq!(lines[1], "Product number 9 does not exist.");
    assert_eq!(lines[2], "Tablet is not in your cart.");
    assert_eq!(lines[3], "Added 2 Headphones for $80.");
    assert_eq!(lines[4], "You have 2 Headphones in your cart.");
}

#[test]
fn test_script_display_products() {
    let mut service = ShopService::default();
    let lines = run_script(&mut service, parse(r#"[{"command": "display_products"}]"#));

    assert_eq!(
        lines[0],
        "Available Products:\n\
         1. Laptop - Price: $1000 - Availability: 5 units\n\
         2. Headphones - Price: $50 - Availability: 10 units"
    );
}

#[test]
fn test_demo_scenario_with_demo_catalog() {
    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let catalog = load_catalog_file(&demos.join("catalog.json")).expect("Invalid demo catalog");
    let script = fs::read_to_string(demos.join("scenario.json")).expect("Missing demo script");
    let mut service = ShopService::new(catalog, RestockPolicy::SingleUnit);

    let lines = run_script(&mut service, parse(&script));

    assert_eq!(
        lines,
        vec![
            "Available Products:\n\
             1. Laptop - Price: $1000 - Availability: 5 units\n\
             2. Headphones - Price: $50 - Availability: 10 units\n\
             3. Keyboard - Price: $80 - Availability: 4 units"
                .to_string(),
            "Added 2 Laptop for $2000.".to_string(),
            "Added 3 Headphones for $100.".to_string(),
            "Added 1 Keyboard for $60.".to_string(),
            "You have 2 Laptop, 3 Headphones, 1 Keyboard in your cart.".to_string(),
            "Your total bill is $2160.".to_string(),
            "Removed Laptop from your cart.".to_string(),
            "NonExistent is not in your cart.".to_string(),
            "Available Products:\n\
             1. Laptop - Price: $1000 - Availability: 4 units\n\
             2. Headphones - Price: $50 - Availability: 7 units\n\
             3. Keyboard - Price: $80 - Availability: 3 units"
                .to_string(),
        ]
    );
    assert_eq!(service.total(), 160.0);
}
