mod common;
use common::temp_dir;
use scheduletools::config::ExpandTemplate;
use scheduletools::core::expand_table;
use scheduletools::core::splitter::{parse_list, sanitize_filename};
use scheduletools::{AppError, CsvSplitter, ScheduleTable};
use std::collections::BTreeMap;
use std::fs;

fn sample_table() -> ScheduleTable {
    let csv = "Team,Week,Score\nA,1,10\nB,1,20\nA,2,15\nC,2,25\nB,10,30\nB,9,35\n";
    ScheduleTable::from_reader(csv.as_bytes()).unwrap()
}

fn list(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_split_by_single_column() {
    let splitter = CsvSplitter::new(sample_table(), list(&["Team"]), None, None).unwrap();
    let groups = splitter.split();

    let summary: Vec<_> = groups
        .iter()
        .map(|g| (g.keys[0].as_str(), g.table.len()))
        .collect();
    assert_eq!(summary, vec![("A", 2), ("B", 3), ("C", 1)]);
    assert_eq!(groups[0].table.columns, list(&["Team", "Week", "Score"]));
}

#[test]
fn test_numeric_keys_sort_numerically() {
    let splitter = CsvSplitter::new(sample_table(), list(&["Week"]), None, None).unwrap();
    let keys: Vec<_> = splitter.split().into_iter().map(|g| g.keys[0].clone()).collect();
    assert_eq!(keys, list(&["1", "2", "9", "10"]));
}

#[test]
fn test_include_and_exclude_filters() {
    let splitter = CsvSplitter::new(
        sample_table(),
        list(&["Team"]),
        Some(list(&["A", "B"])),
        None,
    )
    .unwrap();
    assert_eq!(splitter.split().len(), 2);

    let splitter = CsvSplitter::new(
        sample_table(),
        list(&["Week", "Team"]),
        None,
        Some(list(&["B"])),
    )
    .unwrap();
    let keys: Vec<_> = splitter.split().into_iter().map(|g| g.keys).collect();
    assert_eq!(
        keys,
        vec![list(&["1", "A"]), list(&["2", "A"]), list(&["2", "C"])]
    );
}

#[test]
fn test_unknown_group_column_is_rejected() {
    let result = CsvSplitter::new(sample_table(), list(&["Nope"]), None, None);
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_empty_keys_are_dropped() {
    let table = ScheduleTable::from_reader("Team,Week\nA,1\n,2\n".as_bytes()).unwrap();
    let groups = CsvSplitter::new(table, list(&["Team"]), None, None)
        .unwrap()
        .split();
    assert_eq!(groups.len(), 1);
}

#[test]
fn test_export_writes_sanitized_files() {
    let dir = temp_dir("splitter_export");
    let table = ScheduleTable::from_reader(
        "Team,Week\nBlue Jays,1\n16U/18U,1\nBlue Jays,2\n".as_bytes(),
    )
    .unwrap();

    let paths = CsvSplitter::new(table, list(&["Team"]), None, None)
        .unwrap()
        .export(&dir.join("out"), "schedule")
        .unwrap();

    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["schedule_16U_18U.csv", "schedule_Blue_Jays.csv"]);

    let content = fs::read_to_string(&paths[1]).unwrap();
    assert_eq!(
        content.lines().collect::<Vec<_>>(),
        vec!["Team,Week", "Blue Jays,1", "Blue Jays,2"]
    );
}

#[test]
fn test_sanitize_and_list_helpers() {
    assert_eq!(sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j"#), "a_b_c_d_e_f_g_h_i_j");
    assert_eq!(parse_list(" Week , Team,,"), list(&["Week", "Team"]));
}

#[test]
fn test_expand_priority() {
    let input = ScheduleTable::from_reader(
        "Date,Start Time,Team\n2025-01-01,7:00 PM,A\n2025-01-02,8:00 PM,B\n".as_bytes(),
    )
    .unwrap();

    let template: ExpandTemplate = serde_json::from_str(
        r#"{
            "Required": ["Date", "Time", "Team", "Location", "Status", "Notes"],
            "defaults": {"Location": "Main Arena", "Status": "Scheduled", "Team": "ignored", "Rink": 2},
            "Mapping": {"Start Time": "Time"}
        }"#,
    )
    .unwrap();

    let out = expand_table(&input, &template);
    assert_eq!(
        out.columns,
        list(&["Date", "Time", "Team", "Location", "Status", "Notes"])
    );
    assert_eq!(
        out.rows[0],
        list(&["2025-01-01", "7:00 PM", "A", "Main Arena", "Scheduled", ""])
    );
    assert_eq!(out.rows[1][1], "8:00 PM");
}

#[test]
fn test_expand_mapping_to_missing_source_falls_back() {
    let input = ScheduleTable::from_reader("Team\nA\n".as_bytes()).unwrap();
    let template = ExpandTemplate {
        required: list(&["Time", "Rink"]),
        defaults: BTreeMap::from([
            ("Time".to_string(), serde_json::json!("TBD")),
            ("Rink".to_string(), serde_json::json!(2)),
        ]),
        mapping: BTreeMap::from([("Start Time".to_string(), "Time".to_string())]),
    };

    let out = expand_table(&input, &template);
    assert_eq!(out.rows, vec![list(&["TBD", "2"])]);
}

#[test]
fn test_template_load_errors() {
    let dir = temp_dir("template_load_errors");
    let missing = ExpandTemplate::load(&dir.join("none.json"));
    assert!(matches!(missing, Err(AppError::FileAccess { .. })));

    let bad = dir.join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    assert!(matches!(
        ExpandTemplate::load(&bad),
        Err(AppError::ConfigParse { .. })
    ));

    let empty = dir.join("empty.json");
    fs::write(&empty, "{}").unwrap();
    assert!(matches!(
        ExpandTemplate::load(&empty),
        Err(AppError::ConfigParse { .. })
    ));
}
