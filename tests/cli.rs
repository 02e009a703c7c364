//
//  onesky-cli
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with a clean environment and no configuration file.
fn onesky(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("onesky").unwrap();
    cmd.env_remove("ONESKY_API_KEY")
        .env_remove("ONESKY_API_SECRET")
        .env_remove("ONESKY_API_URL")
        .env_remove("ONESKY_NO_PROMPT")
        .arg("--config")
        .arg(home.path().join("config.toml"));
    cmd
}

#[test]
fn missing_credentials_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    onesky(&home)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_is_not_a_usage_error() {
    let home = TempDir::new().unwrap();
    onesky(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ONESKY_API_KEY"));
}

#[test]
fn credentials_from_environment_open_the_shell() {
    let home = TempDir::new().unwrap();
    onesky(&home)
        .env("ONESKY_API_KEY", "key")
        .env("ONESKY_API_SECRET", "secret")
        .write_stdin("EOF\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Welcome to the OneSky command-line interface!",
        ));
}

#[test]
fn usage_and_unknown_commands_are_reported() {
    let home = TempDir::new().unwrap();
    onesky(&home)
        .args(["key", "secret"])
        .write_stdin("project_show\nsing 1 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: project_show <id>"))
        .stdout(predicate::str::contains("*** Unknown syntax: sing 1 2"));
}

#[test]
fn invalid_config_file_fails() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "[core\n").unwrap();
    onesky(&home)
        .args(["key", "secret"])
        .write_stdin("EOF\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration file"));
}

#[test]
fn request_is_echoed_and_status_printed() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/project-groups")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("per_page".into(), "10".into()),
            Matcher::UrlEncoded("api_key".into(), "key".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"meta":{"status":200},"data":[]}"#)
        .create();

    onesky(&home)
        .args(["key", "secret", "--api-url"])
        .arg(format!("{}/", server.url()))
        .write_stdin("project_group_list 2 10\nEOF\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "GET {}/project-groups",
            server.url()
        )))
        .stdout(predicate::str::contains("page=2&per_page=10"))
        .stdout(predicate::str::contains("Status code: 200"));

    mock.assert();
}

#[test]
fn export_is_saved_to_download_dir() {
    let home = TempDir::new().unwrap();
    let downloads = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/projects/42/translations")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-disposition", "attachment; filename=ja.po")
        .with_body("msgid \"hi\"\nmsgstr \"やあ\"\n")
        .create();

    onesky(&home)
        .args(["key", "secret", "--api-url"])
        .arg(format!("{}/", server.url()))
        .arg("--download-dir")
        .arg(downloads.path())
        .write_stdin("translation_export 42 ja strings.po\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("downloaded_filename"));

    mock.assert();
    let saved = std::fs::read_to_string(downloads.path().join("ja.po")).unwrap();
    assert!(saved.contains("やあ"));
}

#[test]
fn delete_can_be_canceled() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", Matcher::Any)
        .expect(0)
        .create();

    onesky(&home)
        .args(["key", "secret", "--api-url"])
        .arg(format!("{}/", server.url()))
        .write_stdin("file_delete 42 strings.po\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure? (y/N): Canceled."));

    mock.assert();
}
