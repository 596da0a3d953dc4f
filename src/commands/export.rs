use super::args::ExportArgs;
use super::{Target, build_registry, sink_options};
use crate::config::Settings;
use crate::error::Cli2XlsError;
use crate::input;
use crate::record::Record;
use crate::sink::{self, Destination};
use crate::strategy::StrategyRegistry;
use crate::table::Table;

/// Flatten every record with the strategy registered for `os`/`parser` and
/// merge the results into one table.
pub fn tables_from_records(
    records: &[Record],
    registry: &StrategyRegistry,
    os: &str,
    parser: &str,
) -> Result<Table, Cli2XlsError> {
    let mut merged = Table::default();
    for record in records {
        let table = registry.flatten(os, parser, record)?;
        merged.merge(table);
    }
    Ok(merged)
}

pub fn run(args: &ExportArgs, settings: &Settings) -> Result<(), Cli2XlsError> {
    let destination = Destination::from_outfile(args.output.outfile.as_deref())?;
    let options = sink_options(settings)?;

    let document = input::read_document(&args.input.infile)?;
    let records = input::records_from_json(&document)?;

    let target = Target::resolve(
        &document.name,
        &args.engine,
        &settings.defaults.os,
        &settings.defaults.table_parser,
        &settings.defaults.device_name,
    );
    tracing::info!(
        "[+] Exporting {} record(s) from {} with parser '{}'",
        records.len(),
        document.name,
        target.parser
    );

    let registry = build_registry(&args.flatten, settings);
    let table = tables_from_records(&records, &registry, &target.os, &target.parser)?;

    sink::write_table(&table, &destination, &target.parser, options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::flatten::FlattenMode;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn array_elements_merge_into_one_table() {
        let registry = StrategyRegistry::builtin(FlattenMode::FirstBranch);
        let records = vec![
            record(json!({"vlan": {"1": {"name": "default"}}})),
            record(json!({"vlan": {"10": {"name": "users", "state": "active"}}})),
        ];

        let table = tables_from_records(&records, &registry, "nxos", "default").unwrap();

        assert_eq!(table.header(), ["NAME", "STATE"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0], vec![json!("default"), json!("N/A")]);
        assert_eq!(table.rows()[1], vec![json!("users"), json!("active")]);
    }

    #[test]
    fn registered_strategy_is_used_for_its_parser() {
        let registry = StrategyRegistry::builtin(FlattenMode::FirstBranch);
        let records = vec![record(json!({
            "feature": {
                "bgp": {"instance": {"1": {"state": "enabled"}}},
                "ospf": {"instance": {"1": {"state": "disabled"}}}
            }
        }))];

        let table = tables_from_records(&records, &registry, "nxos", "show feature").unwrap();

        assert_eq!(table.header(), ["FEATURE", "STATE"]);
        assert_eq!(table.len(), 2);
    }
}
