#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sct() -> Command {
    cargo_bin_cmd!("scheduletools")
}

/// Two blocks (Monday, Tuesday), three dated rows each.
pub const SAMPLE_SCHEDULE: &str = "Monday\t\tTuesday\t\t\t
Date\tTime\tDate\tTime\t\t
\t6 pm - 7:15 pm\t\t6:00 pm - 7:00 pm\t7:00 pm - 8:00 pm\t8:15 pm - 9:15 pm
7/21/2025\t16U / 18U\t7/22/2025\t12U / 14U\t18U\t16U
7/28/2025\t16U / 18U\t7/29/2025\t8U / 10U\t18U\t16U
8/4/2025\t16U / 18U\t8/5/2025\t12U / 14U\t18U\t16U
";

/// Fresh, empty directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("scheduletools_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write `content` to `<temp_dir(name)>/<file>` and return the file path.
pub fn write_temp(name: &str, file: &str, content: &str) -> PathBuf {
    let dir = temp_dir(name);
    let path = dir.join(file);
    fs::write(&path, content).expect("write temp file");
    path
}

/// Tab-joined rows, one line each.
pub fn tsv(rows: &[&[&str]]) -> String {
    rows.iter()
        .map(|r| r.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}
