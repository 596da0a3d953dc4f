mod formatters;

use crate::commands::stats::BatchStats;
use crate::strategy::StrategyRegistry;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use formatters::{format_count, format_duration, format_rate, shorten};

const MAX_ERROR_WIDTH: usize = 60;

pub fn print_summary(stats: &BatchStats) {
    println!(
        "{}/{} files -> {} rows in {} ({} skipped)",
        stats.files_processed,
        stats.files_seen,
        format_count(stats.total_rows),
        format_duration(stats.total_duration),
        stats.files_skipped
    );
}

fn header_cells(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| Cell::new(title).add_attribute(Attribute::Bold))
        .collect()
}

/// One line per input file with a totals footer.
fn file_table(stats: &BatchStats) -> Table {
    let mut files = Table::new();
    files
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header_cells(&["Device", "Parser", "Rows", "File"]));

    for file in &stats.file_stats {
        let rows = if file.is_processed() {
            Cell::new(format_count(file.rows)).set_alignment(CellAlignment::Right)
        } else {
            Cell::new("skipped").add_attribute(Attribute::Italic)
        };
        files.add_row(vec![
            Cell::new(&file.device_name),
            Cell::new(&file.parser),
            rows,
            Cell::new(&file.file),
        ]);
    }

    files.add_row(vec![
        Cell::new("total").add_attribute(Attribute::Bold),
        Cell::new(format_rate(stats.success_rate())),
        Cell::new(format_count(stats.total_rows))
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
        Cell::new(format_duration(stats.total_duration)),
    ]);
    files
}

fn skipped_table(stats: &BatchStats) -> Option<Table> {
    let skipped: Vec<_> = stats.file_stats.iter().filter(|f| !f.is_processed()).collect();
    if skipped.is_empty() {
        return None;
    }

    let mut reasons = Table::new();
    reasons
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header_cells(&["Skipped file", "Reason"]));
    for file in skipped {
        let reason = file.error.as_deref().unwrap_or_default();
        reasons.add_row(vec![
            Cell::new(&file.file),
            Cell::new(shorten(reason, MAX_ERROR_WIDTH)),
        ]);
    }
    Some(reasons)
}

pub fn print_detailed(stats: &BatchStats) {
    println!("{}", file_table(stats));
    if let Some(reasons) = skipped_table(stats) {
        println!("\n{reasons}");
    }
}

pub fn print_strategies(registry: &StrategyRegistry) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header_cells(&["OS", "Parser", "Strategy", "Description"]));

    for (key, strategy) in registry.entries() {
        table.add_row(vec![
            Cell::new(&key.os),
            Cell::new(&key.parser),
            Cell::new(strategy.name()),
            Cell::new(strategy.description()),
        ]);
    }

    let fallback = registry.fallback();
    table.add_row(vec![
        Cell::new("*"),
        Cell::new("*"),
        Cell::new(fallback.name()),
        Cell::new(fallback.description()),
    ]);

    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::stats::FileStat;

    fn stats() -> BatchStats {
        let mut stats = BatchStats::new();
        for (device, error) in [("SW1", None), ("SW2", Some("parser rejected 'show vlan'"))] {
            stats.add_file(FileStat {
                file: format!("{device}-sh-vlan.txt"),
                device_name: device.to_string(),
                parser: "show vlan".to_string(),
                rows: 4,
                error: error.map(str::to_string),
            });
        }
        stats
    }

    #[test]
    fn file_table_ends_with_totals() {
        let rendered = file_table(&stats()).to_string();
        assert!(rendered.contains("SW1-sh-vlan.txt"));
        assert!(rendered.contains("skipped"));
        assert!(rendered.contains("total"));
        assert!(rendered.contains("50.0%"));
    }

    #[test]
    fn reasons_only_for_skipped_files() {
        let rendered = skipped_table(&stats()).map(|t| t.to_string()).unwrap_or_default();
        assert!(rendered.contains("SW2-sh-vlan.txt"));
        assert!(!rendered.contains("SW1-sh-vlan.txt"));

        let mut clean = BatchStats::new();
        clean.add_file(stats().file_stats[0].clone());
        assert!(skipped_table(&clean).is_none());
    }
}
