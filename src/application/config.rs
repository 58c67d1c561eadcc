use crate::domain::catalog::Catalog;
use crate::domain::ports::ProductSource;
use crate::domain::rules::{PricingRuleBox, RuleConfig};
use crate::error::Result;
use crate::interfaces::json::rule_reader::read_rules;
use std::path::Path;
use tracing::info;

/// Builds a rule set, keeping the configured order.
///
/// Fails on the first rule whose parameters are invalid.
pub fn build_rules(configs: impl IntoIterator<Item = RuleConfig>) -> Result<Vec<PricingRuleBox>> {
    configs.into_iter().map(RuleConfig::into_rule).collect()
}

/// Loads and validates a catalog from a product source.
pub async fn load_catalog(source: &dyn ProductSource) -> Result<Catalog> {
    let catalog = Catalog::new(source.load().await?)?;
    info!(products = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Reads a JSON rule configuration file.
pub async fn load_rule_configs(path: impl AsRef<Path>) -> Result<Vec<RuleConfig>> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let configs = read_rules(bytes.as_slice())?;
    info!(rules = configs.len(), path = %path.as_ref().display(), "loaded rule configuration");
    Ok(configs)
}
