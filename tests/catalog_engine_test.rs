use anyhow::Result;
use pricelist::core::transform::remove_where;
use pricelist::{CatalogEngine, CliConfig, Product};

fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("Tv", 900.00),
        Product::new("Mouse", 50.00),
        Product::new("Tablet", 350.50),
        Product::new("HD Case", 80.90),
    ]
}

#[test]
fn test_engine_runs_both_operations() -> Result<()> {
    let config = CliConfig {
        cutoff: 100.0,
        rate: 1.10,
        json: false,
        verbose: false,
    };

    let engine = CatalogEngine::new(config);
    let report = engine.run(sample_catalog())?;

    assert_eq!(
        report.below_cutoff,
        vec![Product::new("Mouse", 50.00), Product::new("HD Case", 80.90)]
    );

    assert_eq!(report.repriced.len(), 4);
    let expected = [990.00, 55.00, 385.55, 88.99];
    for (product, want) in report.repriced.iter().zip(expected) {
        assert!(
            (product.price - want).abs() < 1e-9,
            "{} repriced to {}, expected {}",
            product.name,
            product.price,
            want
        );
    }

    Ok(())
}

#[test]
fn test_filter_length_matches_predicate_count() {
    let catalog = sample_catalog();
    let predicate = |p: &Product| p.price >= 100.0;

    let expected = catalog.iter().filter(|p| !predicate(p)).count();
    let kept = remove_where(catalog, predicate);

    assert_eq!(kept.len(), expected);
}

#[test]
fn test_report_renders_json() -> Result<()> {
    let config = CliConfig {
        cutoff: 100.0,
        rate: 1.10,
        json: true,
        verbose: false,
    };

    let engine = CatalogEngine::new(config);
    let report = engine.run(sample_catalog())?;

    let json: serde_json::Value = serde_json::from_str(&report.render_json()?)?;
    assert_eq!(json["below_cutoff"][0]["name"], "Mouse");
    let mouse_price = json["repriced"][1]["price"].as_f64().unwrap();
    assert!((mouse_price - 55.00).abs() < 1e-9);

    Ok(())
}
