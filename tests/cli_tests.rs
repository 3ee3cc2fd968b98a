use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn sort_report() -> Command {
    Command::cargo_bin("sort_report").expect("Failed to find sort_report binary")
}

fn write_config(dir: &TempDir, program: &str) -> std::path::PathBuf {
    let root = dir.path();
    let config = format!(
        r#"{{
            "parameters_file": "{params}",
            "averaged_results": "{avg}",
            "trial_results": "{trials}",
            "sweep_dir": "{sweep}",
            "output_dir": "{out}",
            "runner": {{ "program": "{program}" }}
        }}"#,
        params = root.join("parameters.txt").display(),
        avg = root.join("averaged.json").display(),
        trials = root.join("trials.json").display(),
        sweep = root.join("sweep").display(),
        out = root.join("charts").display(),
        program = program,
    );
    let path = root.join("viewer.json");
    fs::write(&path, config).unwrap();
    path
}

fn write(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

#[test]
fn help_lists_commands() {
    sort_report()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("variability"))
        .stdout(predicate::str::contains("sweep"));
}

#[test]
fn run_rejects_out_of_range_percentage() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "true");

    sort_report()
        .args(["--config", config.to_str().unwrap()])
        .args(["run", "-g", "DesordreIntervalleDec", "-s", "1000", "-p", "101", "-d", "start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 100"));

    assert!(!dir.path().join("parameters.txt").exists());
}

#[test]
fn run_rejects_non_integer_size() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "true");

    sort_report()
        .args(["--config", config.to_str().unwrap()])
        .args(["run", "-g", "DesordreIntervalleDec", "-s", "3.5", "-p", "10", "-d", "end"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be integers"));
}

#[cfg(unix)]
#[test]
fn run_saves_parameters_and_launches() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "true");

    sort_report()
        .args(["--config", config.to_str().unwrap()])
        .args(["run", "-g", "DesordreIntervallesAlt", "-s", "2 000", "-p", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Array size: 2000"));

    assert_eq!(
        fs::read_to_string(dir.path().join("parameters.txt")).unwrap(),
        "DesordreIntervallesAlt\n2000\n50\n\n"
    );
}

#[test]
fn compare_prints_and_writes_chart() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "true");
    write(
        &dir.path().join("averaged.json"),
        r#"{"tailleTableau":1000,"resultats":{"Tri1":{"comparisons":50},"Tri2":{"comparisons":30}}}"#,
    );

    sort_report()
        .args(["--config", config.to_str().unwrap()])
        .args(["compare", "--metric", "comparisons"])
        .assert()
        .success()
        .stdout(predicate::str::contains("array of 1000 elements"))
        .stdout(predicate::str::contains("Tri1"))
        .stdout(predicate::str::contains("Chart written to"));

    assert!(dir.path().join("charts").join("compare_comparisons.svg").exists());
}

#[test]
fn headless_variability_writes_no_file() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "true");
    write(
        &dir.path().join("trials.json"),
        r#"{"results":{"A":[{"comparisons":1},{"comparisons":3},{"comparisons":2}]}}"#,
    );

    sort_report()
        .args(["--config", config.to_str().unwrap(), "--headless"])
        .args(["variability", "--metric", "comparisons"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Median"));

    assert!(!dir.path().join("charts").exists());
}

#[test]
fn sweep_with_duplicate_entries_fails() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "true");
    let sweep = dir.path().join("sweep");
    fs::create_dir(&sweep).unwrap();
    let doc = r#"{"nomGenerateur":"G1","tailleTableau":10,"desordre":20,"repartition":"debut","resultats":{"A":{"comparaisons":1}}}"#;
    write(&sweep.join("resultatsMoyensTris_G1_10_20_1.json"), doc);
    write(&sweep.join("resultatsMoyensTris_G1_10_20_2.json"), doc);

    sort_report()
        .args(["--config", config.to_str().unwrap(), "--headless"])
        .args(["sweep", "--metric", "comparisons"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate sweep entry"));
}

#[test]
fn sweep_combines_generators() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "true");
    let sweep = dir.path().join("sweep");
    fs::create_dir(&sweep).unwrap();
    write(
        &sweep.join("resultatsMoyensTris_G1_10_20_1.json"),
        r#"{"nomGenerateur":"G1","tailleTableau":10,"desordre":20,"repartition":"debut","resultats":{"A":{"comparaisons":1},"B":{"comparaisons":2}}}"#,
    );
    write(
        &sweep.join("resultatsMoyensTris_G2_10_50_1.json"),
        r#"{"nomGenerateur":"G2","tailleTableau":10,"desordre":50,"repartition":"fin","resultats":{"C":{"comparaisons":4}}}"#,
    );

    sort_report()
        .args(["--config", config.to_str().unwrap()])
        .args(["sweep", "--metric", "comparisons"])
        .assert()
        .success()
        .stdout(predicate::str::contains("G1 (disorder: 20, distribution: debut)"))
        .stdout(predicate::str::contains("G2 (disorder: 50, distribution: fin)"));

    assert!(dir.path().join("charts").join("sweep_comparisons.svg").exists());
}

#[test]
fn missing_results_file_is_reported() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir, "true");

    sort_report()
        .args(["--config", config.to_str().unwrap()])
        .args(["compare", "--metric", "assignments"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn unknown_metric_rejected_by_parser() {
    sort_report()
        .args(["compare", "--metric", "swaps"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
