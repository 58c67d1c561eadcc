use crate::domain::rules::RuleConfig;
use crate::error::Result;
use std::io::Read;

/// Decodes a JSON array of rule configurations.
pub fn read_rules<R: Read>(source: R) -> Result<Vec<RuleConfig>> {
    Ok(serde_json::from_reader(source)?)
}
