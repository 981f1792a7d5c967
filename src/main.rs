use anyhow::Result;
use clap::Parser;
use shopping_cart_cli::{
    cli::{Args, CliApp},
    utils::Config,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = &args.config {
        config = config.with_catalog_file(path);
    }

    let filter = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("🛒 Shopping cart starting...");
    tracing::info!(
        "Configuration loaded for {} environment",
        config.environment
    );

    let mut app = CliApp::new(&config).map_err(|e| {
        tracing::error!("Failed to start: {}", e);
        e
    })?;
    app.run(args.command.unwrap_or_default())?;

    tracing::info!("🛒 Shopping cart stopped");
    Ok(())
}
