mod common;

use predicates::prelude::*;

use common::TestFixture;

#[test]
fn default_run_writes_four_page_report() {
    let fixture = TestFixture::with_tables();

    hepplot!(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 4 pages to out03plot.html"));

    assert_eq!(fixture.page_count("out03plot.html"), 4);
    let html = fixture.read("out03plot.html");
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn pages_appear_in_layout_order() {
    let fixture = TestFixture::with_tables();

    hepplot!(fixture.path()).arg("--no-config").assert().success();

    let html = fixture.read("out03plot.html");
    let positions: Vec<usize> = [
        "p⊥ scale of hard interaction",
        "Total and charged particle multiplicities",
        "Charged (pseudo)rapidity distribution",
        "Charged p⊥ spectrum",
    ]
    .iter()
    .map(|title| html.find(title).expect("title present"))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn legends_carry_series_labels() {
    let fixture = TestFixture::with_tables();

    hepplot!(fixture.path()).assert().success();

    let html = fixture.read("out03plot.html");
    assert!(html.contains("charged (even only!)"));
    assert!(html.contains("dn_charged/dη"));
    assert!(html.contains("stroke-dasharray"));
}

#[test]
fn missing_table_exits_with_input_error() {
    let fixture = TestFixture::with_tables();
    std::fs::remove_file(fixture.join("out03plot-4.dat")).unwrap();

    hepplot!(fixture.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to read file"))
        .stderr(predicate::str::contains("out03plot-4.dat"));

    // Pages written before the failure are kept and the document is terminated.
    assert_eq!(fixture.page_count("out03plot.html"), 2);
    assert!(fixture.read("out03plot.html").ends_with("</html>\n"));
}

#[test]
fn malformed_number_reports_file_and_line() {
    let fixture = TestFixture::with_tables();
    fixture.create_file("out03plot-0.dat", "1.0 2.0 0.5\n2.0 abc 0.5\n");

    hepplot!(fixture.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out03plot-0.dat:2: column 2: 'abc' is not a number"));
}

#[test]
fn wrong_column_count_is_input_error() {
    let fixture = TestFixture::with_tables();
    fixture.create_file("out03plot-3.dat", "0.0 1.0 2.0\n");

    hepplot!(fixture.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected 2 columns, found 3"));
}

#[test]
fn data_dir_and_output_flags() {
    let fixture = TestFixture::new();
    fixture.write_tables("run7");
    std::fs::create_dir_all(fixture.join("plots")).unwrap();

    hepplot!(fixture.path())
        .args(["-d", "run7", "-o", "plots/run7.html"])
        .assert()
        .success();

    assert_eq!(fixture.page_count("plots/run7.html"), 4);
    assert!(!fixture.join("out03plot.html").exists());
}

#[test]
fn unwritable_output_is_config_error() {
    let fixture = TestFixture::with_tables();

    hepplot!(fixture.path())
        .args(["-o", "no/such/dir/out.html"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to write report"));
}

#[test]
fn json_summary() {
    let fixture = TestFixture::with_tables();

    let output = hepplot!(fixture.path())
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["page_count"], 4);
    assert_eq!(value["pages"][2]["series"][1], "dn_charged/dη");
    assert!(value["config"].is_null());
}

#[test]
fn quiet_prints_nothing() {
    let fixture = TestFixture::with_tables();

    hepplot!(fixture.path())
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn verbose_logs_to_stderr() {
    let fixture = TestFixture::with_tables();

    hepplot!(fixture.path())
        .arg("-vv")
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded table"))
        .stderr(predicate::str::contains("finalized page"));
}
