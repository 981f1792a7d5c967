use std::fs;

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use tracing::{debug, info, warn};

use crate::{
    cli::args::Commands,
    models::DiscountStrategy,
    services::{CartCommand, CommandOutcome, ShopService, ShopServiceError},
    utils::{
        Config,
        formatting::{
            format_cart_table, format_product_list, format_product_table, format_total,
            format_total_styled,
        },
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static CART: Emoji<'_, '_> = Emoji("🛒 ", "");

const MENU_ITEMS: [&str; 6] = [
    "Display Products",
    "Add Product to Cart",
    "View Cart",
    "Remove Product from Cart",
    "Calculate Total Bill",
    "Exit",
];

const DISCOUNT_ITEMS: [&str; 2] = ["Percentage off", "Buy one get one free"];

pub struct CliApp {
    service: ShopService,
}

impl CliApp {
    pub fn new(config: &Config) -> Result<Self> {
        let catalog = config
            .load_catalog()
            .context("Failed to load product catalog")?;
        info!(
            "Catalog ready with {} products (restock policy: {})",
            catalog.len(),
            config.restock_policy
        );

        Ok(Self {
            service: ShopService::new(catalog, config.restock_policy),
        })
    }

    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Shop => self.handle_shop(),
            Commands::Catalog { plain } => self.handle_catalog(plain),
            Commands::Run { file } => self.handle_run(&file),
        }
    }

    fn handle_catalog(&self, plain: bool) -> Result<()> {
        let products = self.service.catalog().products();
        if plain {
            println!("{}", format_product_list(products));
        } else {
            println!("{} {}", INFO, style("Available Products").bold().cyan());
            println!("{}", format_product_table(products));
        }
        Ok(())
    }

    fn handle_run(&mut self, file: &str) -> Result<()> {
        let content = fs::read_to_string(file)
            .with_context(|| format!("Failed to read script file {}", file))?;
        let commands: Vec<CartCommand> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse script file {}", file))?;
        info!("Replaying {} commands from {}", commands.len(), file);

        for line in run_script(&mut self.service, commands) {
            println!("{}", line);
        }
        println!("{}", format_total(self.service.total()));
        Ok(())
    }

    // Interactive menu
    fn handle_shop(&mut self) -> Result<()> {
        println!("{} {}", CART, style("Shopping Cart").bold().cyan());

        let theme = ColorfulTheme::default();

        loop {
            println!();
            let choice = Select::with_theme(&theme)
                .with_prompt("Menu")
                .items(&MENU_ITEMS)
                .default(0)
                .interact()?;
            debug!("Menu choice: {}", MENU_ITEMS[choice]);

            match choice {
                0 => self.handle_catalog(false)?,
                1 => self.handle_add(&theme)?,
                2 => self.handle_view(),
                3 => self.handle_remove(&theme)?,
                4 => println!("{}", format_total_styled(self.service.total())),
                _ => break,
            }
        }

        info!("Shopping session ended with {} line items", self.service.cart().len());
        Ok(())
    }

    fn handle_add(&mut self, theme: &ColorfulTheme) -> Result<()> {
        let products = self.service.catalog().products();
        if products.is_empty() {
            println!("{} No products available", INFO);
            return Ok(());
        }

        let labels: Vec<String> = products.iter().map(|p| p.to_string()).collect();
        let index = Select::with_theme(theme)
            .with_prompt("Select a product to add to cart")
            .items(&labels)
            .default(0)
            .interact()?;

        let quantity: i64 = Input::with_theme(theme)
            .with_prompt("Quantity")
            .interact_text()?;

        let discount = prompt_discount(theme)?;

        match self.service.add_item(index + 1, quantity, discount) {
            Ok(item) => {
                println!(
                    "{} Added {} {} for {}",
                    CHECKMARK,
                    item.quantity,
                    style(&item.product.name).green(),
                    style(format!("${}", item.price)).yellow()
                );
            }
            Err(e) => report_error(&e),
        }

        Ok(())
    }

    fn handle_view(&self) {
        let cart = self.service.cart();
        println!("{}", cart.view_cart());
        if !cart.is_empty() {
            println!("{}", format_cart_table(cart.items()));
        }
    }

    fn handle_remove(&mut self, theme: &ColorfulTheme) -> Result<()> {
        self.handle_view();
        if self.service.cart().is_empty() {
            return Ok(());
        }

        let name: String = Input::with_theme(theme)
            .with_prompt("Product name to remove from cart")
            .interact_text()?;

        match self.service.remove_item(name.trim()) {
            Ok(()) => println!(
                "{} Removed {} from cart",
                CHECKMARK,
                style(name.trim()).green()
            ),
            Err(e) => report_error(&e),
        }

        Ok(())
    }
}

fn prompt_discount(theme: &ColorfulTheme) -> Result<Option<DiscountStrategy>> {
    let apply = Confirm::with_theme(theme)
        .with_prompt("Apply discount strategy?")
        .default(false)
        .interact()?;
    if !apply {
        return Ok(None);
    }

    let choice = Select::with_theme(theme)
        .with_prompt("Select a discount strategy")
        .items(&DISCOUNT_ITEMS)
        .default(0)
        .interact()?;

    let strategy = match choice {
        0 => {
            let percentage: f64 = Input::with_theme(theme)
                .with_prompt("Discount percentage")
                .interact_text()?;
            DiscountStrategy::percentage(percentage)
        }
        _ => DiscountStrategy::BuyOneGetOneFree,
    };
    Ok(Some(strategy))
}

fn report_error(error: &ShopServiceError) {
    println!("{} {}", CROSS, style(error).red());
}

/// Runs `commands` in order and renders one line per command.
///
/// Failed commands are reported inline and do not stop the script.
pub fn run_script(service: &mut ShopService, commands: Vec<CartCommand>) -> Vec<String> {
    commands
        .into_iter()
        .map(|command| match service.execute(command) {
            Ok(outcome) => describe_outcome(&outcome),
            Err(e) => {
                warn!("Script command failed: {}", e);
                e.to_string()
            }
        })
        .collect()
}

pub fn describe_outcome(outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Products(products) => format_product_list(products),
        CommandOutcome::Added(item) => format!(
            "Added {} {} for ${}.",
            item.quantity, item.product.name, item.price
        ),
        CommandOutcome::Cart(summary) => summary.clone(),
        CommandOutcome::Removed { name } => format!("Removed {} from your cart.", name),
        CommandOutcome::Total(total) => format_total(*total),
    }
}
