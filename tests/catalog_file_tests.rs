use std::io::Write;

use tempfile::NamedTempFile;

use shopping_cart_cli::models::{Product, RestockPolicy};
use shopping_cart_cli::utils::{load_catalog_file, Config, ConfigError};

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

fn base_config() -> Config {
    Config {
        catalog_file: None,
        restock_policy: RestockPolicy::SingleUnit,
        log_level: "info".to_string(),
        environment: "test".to_string(),
    }
}

#[test]
fn test_load_catalog_from_file() {
    let file = write_catalog(
        r#"{
            "products": [
                {"name": "Keyboard", "price": 80.0, "availability": 4},
                {"name": " Mouse ", "price": 25.5, "availability": 12},
                {"name": "Gift Card", "price": 0}
            ]
        }"#,
    );

    let catalog = base_config()
        .with_catalog_file(file.path())
        .load_catalog()
        .unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get(1), Some(&Product::new("Keyboard", 80.0, 4)));
    assert_eq!(catalog.get(2), Some(&Product::new("Mouse", 25.5, 12)));
    assert_eq!(catalog.get(3).unwrap().availability, 0);
}

#[test]
fn test_negative_price_is_rejected() {
    let file = write_catalog(r#"{"products": [{"name": "Refund", "price": -5.0, "availability": 1}]}"#);

    let err = load_catalog_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEntry { ref name, .. } if name == "Refund"));
}

#[test]
fn test_blank_name_is_rejected() {
    let file = write_catalog(r#"{"products": [{"name": "  ", "price": 5.0, "availability": 1}]}"#);

    assert!(matches!(
        load_catalog_file(file.path()),
        Err(ConfigError::InvalidEntry { .. })
    ));
}

#[test]
fn test_empty_and_malformed_files() {
    let empty = write_catalog(r#"{"products": []}"#);
    assert!(matches!(
        load_catalog_file(empty.path()),
        Err(ConfigError::EmptyCatalog { .. })
    ));

    let malformed = write_catalog("not json");
    assert!(matches!(
        load_catalog_file(malformed.path()),
        Err(ConfigError::Parse { .. })
    ));
}
