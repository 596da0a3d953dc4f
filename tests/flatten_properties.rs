use cli2xls::record::Record;
use cli2xls::table::Table;
use cli2xls::table::flatten::{FlattenMode, flatten, leaf_keys};
use serde_json::{Value, json};

#[path = "common/mod.rs"]
mod common;

fn interfaces() -> Record {
    common::record(json!({
        "interfaces": {
            "Ethernet1/1": {"name": "Ethernet1/1", "vlan": "1", "status": "connected"},
            "Ethernet1/2": {"name": "Ethernet1/2", "vlan": "10", "status": "notconnect"},
            "Ethernet1/3": {"name": "Ethernet1/3", "vlan": "trunk", "status": "connected"}
        }
    }))
}

fn assert_rectangular(table: &Table) {
    for row in table.rows() {
        assert_eq!(row.len(), table.width());
    }
}

#[test]
fn uniform_branches_flatten_back_to_their_leaves() {
    let data = interfaces();
    let keys: Vec<String> = leaf_keys(&data).into_iter().collect();
    let table = flatten(&data, FlattenMode::AllBranches);

    let branches: Vec<&Value> = data["interfaces"]
        .as_object()
        .unwrap()
        .values()
        .collect();
    assert_eq!(table.len(), branches.len());

    for (row, branch) in table.rows().iter().zip(branches) {
        for (key, cell) in keys.iter().zip(row) {
            assert_eq!(&branch[key.as_str()], cell);
        }
    }
}

#[test]
fn first_branch_mode_keeps_only_the_first_subtree() {
    let table = flatten(&interfaces(), FlattenMode::FirstBranch);
    assert_eq!(table.header(), ["NAME", "VLAN", "STATUS"]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0][0], json!("Ethernet1/1"));
}

#[test]
fn sibling_subtrees_emit_one_row_by_default() {
    let data = common::record(json!({"a": {"x": 1, "y": 2}, "b": {"x": 3, "y": 4}}));

    let first = flatten(&data, FlattenMode::FirstBranch);
    assert_eq!(first.header(), ["X", "Y"]);
    assert_eq!(first.rows(), [vec![json!(1), json!(2)]]);

    let all = flatten(&data, FlattenMode::AllBranches);
    assert_eq!(all.rows(), [vec![json!(1), json!(2)], vec![json!(3), json!(4)]]);
}

#[test]
fn ragged_records_stay_rectangular() {
    let data = common::record(json!({
        "vrf": {
            "default": {
                "route": {
                    "10.0.0.0/8": {"next_hop": "192.0.2.1", "metric": 20},
                    "0.0.0.0/0": {"next_hop": "192.0.2.254", "preference": 1, "tag": null}
                }
            }
        }
    }));

    for mode in [FlattenMode::FirstBranch, FlattenMode::AllBranches] {
        let table = flatten(&data, mode);
        assert_eq!(table.header(), ["NEXT_HOP", "METRIC", "PREFERENCE", "TAG"]);
        assert_rectangular(&table);
    }

    let all = flatten(&data, FlattenMode::AllBranches);
    assert_eq!(all.rows()[0][2], json!("N/A"));
    assert_eq!(all.rows()[1][1], json!("N/A"));
    assert_eq!(all.rows()[1][3], Value::Null);
}

#[test]
fn merged_tables_stay_rectangular() {
    let mut merged = flatten(&interfaces(), FlattenMode::AllBranches);
    merged.prepend_column("DEVICE", json!("SW1"));

    let mut other = flatten(
        &common::record(json!({"vlans": {"10": {"vlan_id": "10", "name": "users"}}})),
        FlattenMode::AllBranches,
    );
    other.prepend_column("DEVICE", json!("SW2"));
    merged.merge(other);

    assert_eq!(merged.header(), ["DEVICE", "NAME", "VLAN", "STATUS", "VLAN_ID"]);
    assert_eq!(merged.len(), 4);
    assert_rectangular(&merged);
}
