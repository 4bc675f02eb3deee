use clap::Parser;
use pricelist::domain::services;
use pricelist::utils::{logger, validation::Validate};
use pricelist::{CatalogEngine, CliConfig, Multicast, Product};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pricelist CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let catalog = vec![
        Product::new("Tv", 900.00),
        Product::new("Mouse", 50.00),
        Product::new("Tablet", 350.50),
        Product::new("HD Case", 80.90),
    ];

    let json_output = config.json;
    let engine = CatalogEngine::new(config);
    let report = engine.run(catalog)?;

    if json_output {
        println!("{}", report.render_json()?);
    } else {
        println!("{}", report.render_text());
    }

    // Multicast demo: both operations see the same pair of arguments.
    let mut op: Multicast<(f64, f64)> = Multicast::new();
    op.add(|&(a, b)| services::show_sum(a, b));
    op.add(|&(a, b)| services::show_max(a, b));
    op.invoke(&(10.0, 12.0));

    Ok(())
}
