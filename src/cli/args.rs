use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shopping-cart")]
#[command(about = "An in-memory shopping cart simulator with discount strategies")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog file path (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Default)]
pub enum Commands {
    /// Start the interactive shopping menu (default)
    #[default]
    Shop,
    /// Print the product catalog
    Catalog {
        /// Print a plain numbered list instead of a table
        #[arg(long)]
        plain: bool,
    },
    /// Replay a JSON file of cart commands against a fresh cart
    Run {
        /// Script file path
        file: String,
    },
}
