use super::FlattenStrategy;
use super::errors::StrategyError;
use crate::record::Record;
use crate::table::Table;
use crate::table::flatten::{FlattenMode, flatten};

pub struct GenericStrategy {
    mode: FlattenMode,
}

impl GenericStrategy {
    pub fn new(mode: FlattenMode) -> Self {
        Self { mode }
    }
}

impl FlattenStrategy for GenericStrategy {
    fn name(&self) -> &'static str {
        "default"
    }

    fn description(&self) -> &'static str {
        match self.mode {
            FlattenMode::FirstBranch => "all leaf keys, first branch of each level",
            FlattenMode::AllBranches => "all leaf keys, every branch",
        }
    }

    fn flatten(&self, record: &Record) -> Result<Table, StrategyError> {
        Ok(flatten(record, self.mode))
    }
}
