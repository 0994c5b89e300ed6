use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Runs `foldrank` offline against the bundled structure cache.
fn foldrank(input: &Path, output: &Path, pdb_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("foldrank").unwrap();
    cmd.arg("--input")
        .arg(input)
        .arg("--output")
        .arg(output)
        .arg("--pdb_dir")
        .arg(pdb_dir)
        .arg("--copies")
        .arg("2")
        .arg("--offline")
        .arg("--quiet");
    cmd
}

#[test]
fn cached_structures_produce_golden_outputs() {
    let out_dir = tempdir().unwrap();
    let base = out_dir.path().join("ordered");

    foldrank(
        &data_path("example_authors.txt"),
        &base,
        &data_path("pdbs"),
    )
    .assert()
    .success();

    let names = fs::read_to_string(out_dir.path().join("ordered.txt")).unwrap();
    let table = fs::read_to_string(out_dir.path().join("ordered.tsv")).unwrap();
    assert_eq!(
        names,
        fs::read_to_string(data_path("expected_ordered_authors.txt")).unwrap()
    );
    assert_eq!(
        table,
        fs::read_to_string(data_path("expected_ordered_authors.tsv")).unwrap()
    );
}

#[test]
fn equal_sequences_keep_input_order() {
    let out_dir = tempdir().unwrap();
    let base = out_dir.path().join("ordered");

    foldrank(
        &data_path("example_authors.txt"),
        &base,
        &data_path("pdbs"),
    )
    .assert()
    .success();

    let names = fs::read_to_string(out_dir.path().join("ordered.txt")).unwrap();
    let lines: Vec<&str> = names.lines().collect();
    let upper = lines.iter().position(|l| *l == "Im A.N. E'rror").unwrap();
    let lower = lines.iter().position(|l| *l == "im a.n. e'rror").unwrap();
    assert_eq!(lower, upper + 1);
}

#[test]
fn name_without_residues_fails_without_writing_outputs() {
    let work = tempdir().unwrap();
    let input = work.path().join("authors.txt");
    fs::write(&input, "Linus Pauling\n12345 ...\n").unwrap();
    let base = work.path().join("ordered");

    let assert = foldrank(&input, &base, &data_path("pdbs"))
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("12345 ..."), "stderr: {stderr}");

    assert!(!work.path().join("ordered.txt").exists());
    assert!(!work.path().join("ordered.tsv").exists());
}

#[test]
fn offline_cache_miss_fails_without_writing_outputs() {
    let work = tempdir().unwrap();
    let input = work.path().join("authors.txt");
    fs::write(&input, "Linus Pauling\nFrancis Crick\n").unwrap();
    let base = work.path().join("ordered");

    foldrank(&input, &base, &data_path("pdbs"))
        .assert()
        .failure();

    assert!(!work.path().join("ordered.txt").exists());
    assert!(!work.path().join("ordered.tsv").exists());
}

#[test]
fn missing_input_file_is_reported() {
    let work = tempdir().unwrap();
    let base = work.path().join("ordered");

    let assert = foldrank(&work.path().join("nope.txt"), &base, &data_path("pdbs"))
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("nope.txt"), "stderr: {stderr}");
}
