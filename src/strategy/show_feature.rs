use serde_json::Value;

use super::FlattenStrategy;
use super::errors::StrategyError;
use crate::record::Record;
use crate::table::Table;

const NAME: &str = "show-feature";

/// NX-OS `show feature`:
/// `{"feature": {<name>: {"instance": {<index>: {"state": <state>}}}}}`.
/// One row per feature instance.
pub struct ShowFeatureStrategy;

fn shape_error(expected: &str) -> StrategyError {
    StrategyError::UnexpectedShape {
        strategy: NAME,
        expected: expected.to_string(),
    }
}

impl FlattenStrategy for ShowFeatureStrategy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "FEATURE/STATE, one row per feature instance"
    }

    fn flatten(&self, record: &Record) -> Result<Table, StrategyError> {
        let features = record
            .get("feature")
            .and_then(Value::as_object)
            .ok_or_else(|| shape_error("a top-level 'feature' mapping"))?;

        let mut table = Table::new(vec!["FEATURE".to_string(), "STATE".to_string()]);

        for (feature, subtree) in features {
            let instances = subtree
                .get("instance")
                .and_then(Value::as_object)
                .ok_or_else(|| shape_error(&format!("an 'instance' mapping under '{feature}'")))?;

            for instance in instances.values() {
                let state = instance
                    .get("state")
                    .cloned()
                    .ok_or_else(|| shape_error(&format!("a 'state' in every '{feature}' instance")))?;
                table.push_row(vec![Value::String(feature.clone()), state])?;
            }
        }

        Ok(table)
    }
}
