#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use specbook::store::{Workbook, sheets};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const OPERATOR_EMAIL: &str = "taro@example.com";
pub const OPERATOR_NAME: &str = "山田太郎";
pub const OPERATOR_DEPT: &str = "設計部";

pub fn sbk() -> Command {
    cargo_bin_cmd!("specbook")
}

/// Isolated per-test workbench: workbook, output root and template all live
/// in a fresh temp directory.
pub struct TestEnv {
    pub base: PathBuf,
    pub db: String,
    pub out: String,
    pub template: String,
}

pub fn setup(name: &str) -> TestEnv {
    let base = env::temp_dir().join(format!("{}_specbook", name));
    fs::remove_dir_all(&base).ok();
    fs::create_dir_all(&base).unwrap();

    TestEnv {
        db: base.join("workbook.sqlite").to_string_lossy().to_string(),
        out: base.join("output").to_string_lossy().to_string(),
        template: base.join("template.txt").to_string_lossy().to_string(),
        base,
    }
}

/// Command with the global overrides already applied.
pub fn cli(env: &TestEnv) -> Command {
    let mut cmd = sbk();
    cmd.args([
        "--test",
        "--db",
        &env.db,
        "--out",
        &env.out,
        "--template",
        &env.template,
    ]);
    cmd
}

/// Same, acting as the default registered operator.
pub fn cli_as_operator(env: &TestEnv) -> Command {
    let mut cmd = cli(env);
    cmd.args(["--user", OPERATOR_EMAIL]);
    cmd
}

/// Initialize the workbook and register the default operator.
pub fn init_with_operator(env: &TestEnv) {
    cli(env).arg("init").assert().success();
    cli(env)
        .args([
            "user",
            "add",
            OPERATOR_NAME,
            OPERATOR_EMAIL,
            OPERATOR_DEPT,
            "admin",
        ])
        .assert()
        .success();
}

/// Create a project through the CLI and return its generated id.
pub fn create_project(env: &TestEnv, customer: &str, project: &str, lot: &str, assignee: &str) -> String {
    cli_as_operator(env)
        .args(["new", customer, project, lot, assignee])
        .assert()
        .success();
    last_project_id(env)
}

/// Read the id of the most recently appended project row via the library.
pub fn last_project_id(env: &TestEnv) -> String {
    let wb = Workbook::open(&env.db).unwrap();
    let rows = wb.data_rows(sheets::SHEET_PROJECTS).unwrap();
    rows.last().expect("no project rows").1[0].clone()
}

pub fn open_workbook(env: &TestEnv) -> Workbook {
    Workbook::open(&env.db).unwrap()
}

/// Write a JSON spec payload file inside the test dir and return its path.
pub fn write_payload(env: &TestEnv, name: &str, json: &str) -> String {
    let path = env.base.join(name);
    fs::write(&path, json).unwrap();
    path.to_string_lossy().to_string()
}
