use checkout_engine::application::checkout::Checkout;
use checkout_engine::application::config::{build_rules, load_catalog, load_rule_configs};
use checkout_engine::domain::money::Price;
use checkout_engine::domain::ports::ProductSourceBox;
use checkout_engine::domain::product::Sku;
use checkout_engine::domain::rules::RuleConfig;
use checkout_engine::infrastructure::csv_file::CsvFileProductSource;
use checkout_engine::infrastructure::in_memory::StaticProductSource;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SKUs to scan, in order
    items: Vec<String>,

    /// CSV catalog file (sku, name, price). Uses the built-in catalog if omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// JSON file describing pricing rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Apply a three-for-two offer to SKU
    #[arg(long = "three-for-two", value_name = "SKU", value_parser = parse_sku)]
    three_for_two: Vec<Sku>,

    /// Apply a bulk price to SKU when more than MIN are bought
    #[arg(long, value_name = "SKU:MIN:PRICE", value_parser = parse_bulk)]
    bulk: Vec<RuleConfig>,

    /// Print the price breakdown as JSON
    #[arg(long)]
    json: bool,
}

fn parse_sku(value: &str) -> std::result::Result<Sku, String> {
    value.parse().map_err(|e| format!("{e}"))
}

fn parse_bulk(value: &str) -> std::result::Result<RuleConfig, String> {
    let mut parts = value.splitn(3, ':');
    let (Some(sku), Some(min), Some(price)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected SKU:MIN:PRICE, got '{value}'"));
    };
    Ok(RuleConfig::BulkDiscount {
        sku: parse_sku(sku)?,
        min_quantity: min
            .parse()
            .map_err(|e| format!("invalid minimum quantity '{min}': {e}"))?,
        discounted_price: Price::new(
            price
                .parse::<Decimal>()
                .map_err(|e| format!("invalid price '{price}': {e}"))?,
        ),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source: ProductSourceBox = match cli.catalog {
        Some(path) => Box::new(CsvFileProductSource::new(path)),
        None => Box::new(StaticProductSource::default()),
    };
    let catalog = load_catalog(&*source).await.into_diagnostic()?;

    let mut configs = match cli.rules {
        Some(path) => load_rule_configs(path).await.into_diagnostic()?,
        None => Vec::new(),
    };
    configs.extend(
        cli.three_for_two
            .into_iter()
            .map(|sku| RuleConfig::ThreeForTwo { sku }),
    );
    configs.extend(cli.bulk);

    let rules = build_rules(configs).into_diagnostic()?;
    let mut checkout = Checkout::with_catalog(catalog, rules);
    for item in cli.items {
        let scanned = item.parse::<Sku>().and_then(|sku| checkout.scan(sku));
        if let Err(e) = scanned {
            eprintln!("Error scanning item: {}", e);
        }
    }

    if cli.json {
        let summary = checkout.summary();
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).into_diagnostic()?
        );
    } else {
        println!("Total: {}", checkout.total());
    }

    Ok(())
}
