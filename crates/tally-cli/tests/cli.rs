use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = r#"
    <span class="field field-RegisteredName"><span class="value">MY MARKET A.E.</span></span>
    <span class="field field-TotalGrossValue"><span class="value">3,70</span></span>
    <tr>
      <td><span class="field field-Description1"><span class="value">Milk</span></span></td>
      <td><span class="field field-Quantity"><span class="value">2</span></span></td>
      <td><span class="field field-UnitPrice"><span class="value">1,85</span></span></td>
    </tr>
"#;

fn tally(state: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--state").arg(state);
    cmd
}

#[test]
fn people_lists_default_roster() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    tally(&state)
        .arg("people")
        .assert()
        .success()
        .stdout(predicate::str::contains("Anna"))
        .stdout(predicate::str::contains("Yiannos"));
}

#[test]
fn add_from_file_then_summary() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");
    let invoice = dir.path().join("invoice.html");
    std::fs::write(&invoice, SAMPLE).unwrap();

    tally(&state)
        .args(["add", "--paid-by", "Eva"])
        .arg(&invoice)
        .assert()
        .success()
        .stdout(predicate::str::contains("MY MARKET A.E."))
        .stdout(predicate::str::contains("3.70"));

    tally(&state)
        .args(["summary", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Eva\""))
        .stdout(predicate::str::contains("\"paid\": \"3.70\""));
}

#[test]
fn assign_requires_target() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    tally(&state)
        .args(["assign", "deadbeef"])
        .assert()
        .failure();
}
