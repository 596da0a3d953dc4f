//! Registry of Record to Table strategies keyed by (os, parser).

pub mod errors;
mod generic;
mod show_feature;

pub use generic::GenericStrategy;
pub use show_feature::ShowFeatureStrategy;

use indexmap::IndexMap;

use crate::record::Record;
use crate::table::Table;
use crate::table::flatten::FlattenMode;
use errors::StrategyError;

pub trait FlattenStrategy {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn flatten(&self, record: &Record) -> Result<Table, StrategyError>;
}

/// Lookup key: lowercased OS and normalized parser identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrategyKey {
    pub os: String,
    pub parser: String,
}

impl StrategyKey {
    pub fn new(os: &str, parser: &str) -> Self {
        Self {
            os: os.trim().to_ascii_lowercase(),
            parser: normalize_parser(parser),
        }
    }
}

/// `Show-Feature`, `show_feature` and `show  feature` all become `show feature`.
pub fn normalize_parser(parser: &str) -> String {
    parser
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct StrategyRegistry {
    entries: IndexMap<StrategyKey, Box<dyn FlattenStrategy>>,
    fallback: Box<dyn FlattenStrategy>,
}

impl StrategyRegistry {
    pub fn new(fallback: Box<dyn FlattenStrategy>) -> Self {
        Self {
            entries: IndexMap::new(),
            fallback,
        }
    }

    /// Registry with every built-in strategy and the generic fallback.
    pub fn builtin(mode: FlattenMode) -> Self {
        let mut registry = Self::new(Box::new(GenericStrategy::new(mode)));
        registry.register("nxos", "show feature", Box::new(ShowFeatureStrategy));
        registry
    }

    pub fn register(&mut self, os: &str, parser: &str, strategy: Box<dyn FlattenStrategy>) {
        self.entries.insert(StrategyKey::new(os, parser), strategy);
    }

    pub fn resolve(&self, os: &str, parser: &str) -> &dyn FlattenStrategy {
        match self.entries.get(&StrategyKey::new(os, parser)) {
            Some(strategy) => {
                tracing::debug!(os, parser, strategy = strategy.name(), "using registered strategy");
                strategy.as_ref()
            }
            None => {
                tracing::debug!(os, parser, "no registered strategy, using default");
                self.fallback.as_ref()
            }
        }
    }

    pub fn flatten(&self, os: &str, parser: &str, record: &Record) -> Result<Table, StrategyError> {
        self.resolve(os, parser).flatten(record)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&StrategyKey, &dyn FlattenStrategy)> {
        self.entries.iter().map(|(key, s)| (key, s.as_ref()))
    }

    pub fn fallback(&self) -> &dyn FlattenStrategy {
        self.fallback.as_ref()
    }
}
