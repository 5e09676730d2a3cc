//! Integration tests for treesnap


use std::fs;

use assert_cmd::Command;
use harness::{TestTree, run_treesnap};
use predicates::prelude::*;
use serde_json::json;
use treesnap::output::{JSON_FILE, TREE_TEXT_FILE, YAML_FILE};

/// Scan root with a file, a plain subfolder, and two excluded subfolders.
fn scenario_tree() -> TestTree {
    let tree = TestTree::new();
    tree.add_file("proj/a.txt", "a");
    tree.add_file("proj/B/b.txt", "b");
    tree.add_file("proj/C/c.txt", "c");
    tree.add_file("proj/D/d.txt", "d");
    tree
}

fn read_output(tree: &TestTree, name: &str) -> String {
    fs::read_to_string(tree.path().join("output").join(name)).expect("output file should exist")
}

/// The tree lines of a report, without the header block.
fn tree_section(report: &str) -> Vec<&str> {
    let start = report.find("\n\n").expect("header separator") + 2;
    report[start..].lines().collect()
}

#[test]
fn test_scenario_report() {
    let tree = scenario_tree();
    let (_stdout, stderr, success) = run_treesnap(tree.path(), &["proj", "-x", "c+,D"]);
    assert!(success, "treesnap should succeed: {}", stderr);

    let report = read_output(&tree, TREE_TEXT_FILE);
    assert!(report.contains("Total folders: 4"), "{}", report);
    assert!(report.contains("Total files: 2"), "{}", report);
    assert_eq!(
        tree_section(&report),
        vec![
            "+-- proj",
            "|   +-- a.txt",
            "|   +-- B",
            "|   |   +-- b.txt",
            "|   +-- C",
            "|   +-- D",
        ]
    );
}

#[test]
fn test_structural_outputs_match() {
    let tree = scenario_tree();
    let (_stdout, _stderr, success) = run_treesnap(tree.path(), &["proj", "-x", "c+,D"]);
    assert!(success);

    let from_json: serde_json::Value =
        serde_json::from_str(&read_output(&tree, JSON_FILE)).unwrap();
    assert_eq!(
        from_json,
        json!({
            "proj": {
                "a.txt": null,
                "B": { "b.txt": null },
                "C": {},
                "D": {},
            }
        })
    );

    let from_yaml: serde_json::Value =
        serde_yaml::from_str(&read_output(&tree, YAML_FILE)).unwrap();
    assert_eq!(from_yaml, from_json);
}

#[test]
fn test_output_files_and_archive_written() {
    let tree = scenario_tree();
    let (stdout, _stderr, success) = run_treesnap(tree.path(), &["proj"]);
    assert!(success);

    let out = tree.path().join("output");
    assert!(out.join(TREE_TEXT_FILE).exists());
    assert!(out.join(JSON_FILE).exists());
    assert!(out.join(YAML_FILE).exists());
    assert!(tree.path().join("directory_tree_output.tar.gz").exists());

    assert!(stdout.contains("Output saved to: output"), "{}", stdout);
    assert!(
        stdout.contains("Bundled as: directory_tree_output.tar.gz"),
        "{}",
        stdout
    );
}

#[test]
fn test_custom_output_dir() {
    let tree = scenario_tree();
    let (stdout, _stderr, success) = run_treesnap(tree.path(), &["proj", "-o", "snap"]);
    assert!(success);
    assert!(tree.path().join("snap").join(TREE_TEXT_FILE).exists());
    assert!(stdout.contains("Output saved to: snap"), "{}", stdout);
}

#[test]
fn test_custom_archive_path() {
    let tree = scenario_tree();
    let (_stdout, _stderr, success) =
        run_treesnap(tree.path(), &["proj", "--archive", "bundle.tar.gz"]);
    assert!(success);
    assert!(tree.path().join("bundle.tar.gz").exists());
}

#[test]
fn test_no_archive() {
    let tree = scenario_tree();
    let (stdout, _stderr, success) = run_treesnap(tree.path(), &["proj", "--no-archive"]);
    assert!(success);
    assert!(!tree.path().join("directory_tree_output.tar.gz").exists());
    assert!(!stdout.contains("Bundled as"), "{}", stdout);
}

#[test]
fn test_archive_contains_outputs() {
    use std::io::Read;

    let tree = scenario_tree();
    let (_stdout, _stderr, success) = run_treesnap(tree.path(), &["proj"]);
    assert!(success);

    let file = fs::File::open(tree.path().join("directory_tree_output.tar.gz")).unwrap();
    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(file));
    let mut entries = Vec::new();
    for entry in archive.entries().unwrap() {
        let mut entry = entry.unwrap();
        let name = entry.path().unwrap().to_string_lossy().to_string();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        entries.push((name, content));
    }

    let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, [TREE_TEXT_FILE, JSON_FILE, YAML_FILE]);

    let report_entry = &entries[0].1;
    assert_eq!(*report_entry, read_output(&tree, TREE_TEXT_FILE));
}

#[test]
fn test_print_flag() {
    let tree = scenario_tree();
    let (stdout, _stderr, success) =
        run_treesnap(tree.path(), &["proj", "-p", "--color", "never"]);
    assert!(success);
    assert!(stdout.contains("treesnap - Visual Directory Tree Generator"));
    assert!(stdout.contains("+-- proj"), "{}", stdout);
    assert!(stdout.contains("|   +-- a.txt"), "{}", stdout);
}

#[test]
fn test_tree_stays_off_stdout_without_print() {
    let tree = scenario_tree();
    let (stdout, _stderr, success) = run_treesnap(tree.path(), &["proj"]);
    assert!(success);
    assert!(!stdout.contains("+-- "), "{}", stdout);
}

#[test]
fn test_exclude_flag_is_repeatable() {
    let tree = scenario_tree();
    let (_stdout, _stderr, success) =
        run_treesnap(tree.path(), &["proj", "-x", "B", "-x", "C"]);
    assert!(success);

    let report = read_output(&tree, TREE_TEXT_FILE);
    assert!(report.contains("+-- B"));
    assert!(report.contains("+-- C"));
    assert!(!report.contains("b.txt"));
    assert!(!report.contains("c.txt"));
    assert!(report.contains("d.txt"), "{}", report);
}

#[test]
fn test_exclusion_is_case_insensitive() {
    let tree = TestTree::new();
    tree.add_file("proj/src/lib.rs", "");
    tree.add_file("proj/node_modules/pkg.js", "");

    let (_stdout, _stderr, success) = run_treesnap(tree.path(), &["proj", "-x", "NODE_MODULES"]);
    assert!(success);

    let report = read_output(&tree, TREE_TEXT_FILE);
    assert!(report.contains("+-- node_modules"));
    assert!(!report.contains("pkg.js"), "{}", report);
    assert!(report.contains("lib.rs"));
}

#[test]
fn test_default_path_scans_working_directory() {
    let tree = TestTree::new();
    tree.add_file("top.txt", "");
    tree.add_file("sub/inner.txt", "");

    let (_stdout, _stderr, success) = run_treesnap(tree.path(), &[]);
    assert!(success);

    let root_name = tree.path().file_name().unwrap().to_string_lossy();
    let report = read_output(&tree, TREE_TEXT_FILE);
    assert_eq!(tree_section(&report)[0], format!("+-- {}", root_name));
    assert!(report.contains("|   +-- top.txt"));
    assert!(report.contains("|   |   +-- inner.txt"));
}

#[test]
fn test_invalid_root_reports_error() {
    let tree = TestTree::new();
    Command::cargo_bin("treesnap")
        .unwrap()
        .current_dir(tree.path())
        .arg("missing_dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'missing_dir' does not exist or is not a directory",
        ));

    // Nothing is written when the root check fails.
    assert!(!tree.path().join("output").exists());
}

#[test]
fn test_root_may_be_a_plain_file_error() {
    let tree = TestTree::new();
    tree.add_file("notes.txt", "x");
    Command::cargo_bin("treesnap")
        .unwrap()
        .current_dir(tree.path())
        .arg("notes.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist or is not a directory"));
}

#[test]
fn test_reports_are_stable_across_runs() {
    let tree = scenario_tree();
    let (_stdout, _stderr, success) = run_treesnap(tree.path(), &["proj"]);
    assert!(success);
    let first_tree = tree_section(&read_output(&tree, TREE_TEXT_FILE)).join("\n");
    let first_json = read_output(&tree, JSON_FILE);
    let first_yaml = read_output(&tree, YAML_FILE);

    let (_stdout, _stderr, success) = run_treesnap(tree.path(), &["proj"]);
    assert!(success);
    let second_tree = tree_section(&read_output(&tree, TREE_TEXT_FILE)).join("\n");

    assert_eq!(first_tree, second_tree);
    assert_eq!(first_json, read_output(&tree, JSON_FILE));
    assert_eq!(first_yaml, read_output(&tree, YAML_FILE));
}
