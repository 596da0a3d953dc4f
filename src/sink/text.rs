use std::io::Write;

use crate::table::Table;

/// Tab-separated rows, header first, one line per row.
pub fn write_text<W: Write>(table: &Table, mut writer: W) -> std::io::Result<usize> {
    let mut lines = 0;
    for row in table.text_rows() {
        writeln!(writer, "{}", row.join("\t"))?;
        lines += 1;
    }
    writer.flush()?;
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_are_tab_joined() {
        let mut table = Table::new(vec!["NAME".into(), "VLAN".into()]);
        table.push_row(vec![json!("Eth1/1"), json!(10)]).unwrap();

        let mut buf = Vec::new();
        let lines = write_text(&table, &mut buf).unwrap();
        assert_eq!(lines, 2);
        assert_eq!(String::from_utf8(buf).unwrap(), "NAME\tVLAN\nEth1/1\t10\n");
    }
}
