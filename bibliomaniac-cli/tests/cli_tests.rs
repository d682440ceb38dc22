//! Integration tests for the Bibliomaniac CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a small catalog asset in the provider's JSON shape
fn write_catalog(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("datas.json");
    fs::write(
        &path,
        r#"{
            "books": [
                {
                    "id": 42,
                    "title": "Dune",
                    "author": "Frank Herbert",
                    "description": "A desert planet...",
                    "aboutAuthor": "",
                    "rating": 4.5,
                    "price": "9.99",
                    "category": "Science Fiction",
                    "publicationDate": "1965",
                    "numberOfBooks": 23
                },
                {
                    "id": 7,
                    "title": "Emma",
                    "author": "Jane Austen",
                    "description": "Matchmaking in Highbury.",
                    "aboutAuthor": "Austen wrote six major novels.",
                    "rating": 4.0,
                    "category": "Classic Literature"
                }
            ]
        }"#,
    )
    .expect("Failed to write test catalog");
    path
}

fn bibliomaniac(data: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("bibliomaniac-cli").unwrap();
    cmd.arg("--data").arg(data);
    cmd
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("bibliomaniac-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("author"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("read"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("bibliomaniac-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bibliomaniac"));
}

#[test]
fn test_list_help() {
    let mut cmd = Command::cargo_bin("bibliomaniac-cli").unwrap();
    cmd.args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--category"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_list_shows_the_shelf() {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir);

    bibliomaniac(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Jane Austen"))
        .stdout(predicate::str::contains("★★★★☆"));
}

#[test]
fn test_list_json_output() {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir);

    let output = bibliomaniac(&data)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let entries: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "42");
    assert_eq!(entries[0]["stars"], "★★★★☆");
    assert_eq!(entries[1]["title"], "Emma");
}

#[test]
fn test_list_category_filter() {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir);

    bibliomaniac(&data)
        .args(["list", "--category", "classics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma"))
        .stdout(predicate::str::contains("Dune").not());

    bibliomaniac(&data)
        .args(["list", "--category", "poetry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found in this category."));
}

#[test]
fn test_show_details() {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir);

    bibliomaniac(&data)
        .args(["show", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:      Dune"))
        .stdout(predicate::str::contains("Published:  1965"))
        .stdout(predicate::str::contains("About this e-book"))
        .stdout(predicate::str::contains("A desert planet..."));
}

#[test]
fn test_show_json_round_trips_record() {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir);

    let output = bibliomaniac(&data)
        .args(["show", "7", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let record: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(record["id"], "7");
    assert_eq!(record["title"], "Emma");
    assert_eq!(record["aboutAuthor"], "Austen wrote six major novels.");
}

#[test]
fn test_show_unknown_id_lists_known_ids() {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir);

    bibliomaniac(&data)
        .args(["show", "404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Known book ids: 42, 7"));
}

#[test]
fn test_author_page() {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir);

    bibliomaniac(&data)
        .args(["author", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Austen"))
        .stdout(predicate::str::contains("About this author"))
        .stdout(predicate::str::contains("Austen wrote six major novels."));

    // missing biography falls back to placeholder text
    bibliomaniac(&data)
        .args(["author", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("23 books"))
        .stdout(predicate::str::contains("No author information available."));
}

#[test]
fn test_categories_counts() {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir);

    bibliomaniac(&data)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("science-fiction"))
        .stdout(predicate::str::contains("mystery"))
        .stdout(predicate::str::is_match(r"classics\s+1 book\b").unwrap());
}

#[test]
fn test_categories_with_name_lists_shelf() {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir);

    bibliomaniac(&data)
        .args(["categories", "science-fiction"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Emma").not());
}

#[test]
fn test_preview_pages() {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir);

    // empty aboutAuthor: cover, synopsis, chapter, closing -> two page pairs
    bibliomaniac(&data)
        .args(["preview", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== 1-2 / 4 ==="))
        .stdout(predicate::str::contains("=== 3-4 / 4 ==="))
        .stdout(predicate::str::contains("# Synopsis"))
        .stdout(predicate::str::contains("(blank page)"));
}

#[test]
fn test_preview_json_pads_last_pair() {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir);

    let output = bibliomaniac(&data)
        .args(["preview", "42", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let pairs: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let pairs = pairs.as_array().unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0]["left"]["title"], "Dune");
    assert_eq!(pairs[1]["right"]["title"], "");
    assert_eq!(pairs[1]["right"]["content"], "");
}

#[test]
fn test_missing_catalog_fails() {
    let mut cmd = Command::cargo_bin("bibliomaniac-cli").unwrap();
    cmd.args(["--data", "/nonexistent/datas.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_malformed_catalog_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("datas.json");
    fs::write(&path, "{not json").unwrap();

    let mut cmd = Command::cargo_bin("bibliomaniac-cli").unwrap();
    cmd.arg("--data").arg(&path).arg("list").assert().failure();
}

#[test]
fn test_data_env_fallback() {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir);

    let mut cmd = Command::cargo_bin("bibliomaniac-cli").unwrap();
    cmd.env("BIBLIOMANIAC_DATA", &data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));
}
