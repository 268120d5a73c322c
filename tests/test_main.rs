use assert_cmd::Command;
use predicates::prelude::*;
use rstest::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn resource(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources")
        .join(name)
}

/// Binary isolated from the user's config file and ARCMARK_* overrides
#[fixture]
fn arcmark() -> (Command, TempDir) {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("arcmark").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("ARCMARK_OUTPUT")
        .env_remove("ARCMARK_TITLE")
        .env_remove("ARCMARK_TIMEOUT_MS");
    (cmd, home)
}

#[rstest]
fn given_sample_page_when_convert_to_file_then_expected_bookmarks_written(
    arcmark: (Command, TempDir),
) {
    let (mut cmd, home) = arcmark;
    let target = home.path().join("export/bookmarks.html");

    cmd.arg("convert")
        .arg(resource("arc_folder.html"))
        .arg("-o")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Bookmarks extracted successfully"))
        .stderr(predicate::str::contains("4"));

    let expected = fs::read_to_string(resource("arc_folder.expected.html")).unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), expected);
}

#[rstest]
fn given_stdout_flag_when_convert_from_stdin_then_bookmark_file_printed(
    arcmark: (Command, TempDir),
) {
    let (mut cmd, _home) = arcmark;
    let page = fs::read_to_string(resource("arc_folder.html")).unwrap();
    let expected = fs::read_to_string(resource("arc_folder.expected.html")).unwrap();

    cmd.args(["convert", "--stdout"])
        .write_stdin(page)
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[rstest]
fn given_no_output_flag_when_convert_then_configured_file_used(arcmark: (Command, TempDir)) {
    let (mut cmd, home) = arcmark;
    let target = home.path().join("from-env.html");

    cmd.env("ARCMARK_OUTPUT", &target)
        .env("ARCMARK_TITLE", "Shared Space")
        .arg("convert")
        .arg(resource("arc_folder.html"))
        .assert()
        .success();

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("<TITLE>Shared Space</TITLE>"));
    assert!(written.contains("<H1>Shared Space</H1>"));
}

#[rstest]
fn given_sample_page_when_count_then_prints_flat_link_count(arcmark: (Command, TempDir)) {
    let (mut cmd, _home) = arcmark;
    cmd.arg("count")
        .arg(resource("arc_folder.html"))
        .assert()
        .success()
        .stdout("4\n");
}

#[rstest]
fn given_page_without_payload_when_convert_then_data_error(arcmark: (Command, TempDir)) {
    let (mut cmd, home) = arcmark;
    let target = home.path().join("never.html");

    cmd.arg("convert")
        .arg(resource("no_payload.html"))
        .arg("-o")
        .arg(&target)
        .assert()
        .code(65)
        .stderr(predicate::str::contains("No bookmark data found"));

    assert!(!target.exists());
}

#[rstest]
fn given_blank_stdin_when_convert_then_usage_error(arcmark: (Command, TempDir)) {
    let (mut cmd, _home) = arcmark;
    cmd.args(["convert", "--stdout"])
        .write_stdin("   \n")
        .assert()
        .code(64)
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn given_missing_input_file_when_convert_then_io_error(arcmark: (Command, TempDir)) {
    let (mut cmd, home) = arcmark;
    cmd.arg("convert")
        .arg(home.path().join("missing.html"))
        .assert()
        .code(74)
        .stderr(predicate::str::contains("Failed to read"));
}

#[rstest]
fn given_foreign_url_when_fetch_then_rejected_before_network(arcmark: (Command, TempDir)) {
    let (mut cmd, _home) = arcmark;
    cmd.args(["fetch", "https://example.com/folder/abc"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("arc.net"));
}

#[rstest]
fn given_generate_config_flag_when_run_then_default_toml_printed(arcmark: (Command, TempDir)) {
    let (mut cmd, _home) = arcmark;
    cmd.arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("document_title = \"Bookmarks from Arc Browser\""))
        .stdout(predicate::str::contains("allorigins"));
}

#[rstest]
fn given_missing_explicit_config_when_run_then_usage_error(arcmark: (Command, TempDir)) {
    let (mut cmd, home) = arcmark;
    cmd.arg("-c")
        .arg(home.path().join("nope.toml"))
        .arg("count")
        .arg(resource("arc_folder.html"))
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Failed to load config"));
}

#[rstest]
#[case("bash", "arcmark")]
#[case("zsh", "#compdef arcmark")]
#[case("fish", "-c arcmark")]
fn given_shell_when_completion_then_script_printed(
    arcmark: (Command, TempDir),
    #[case] shell: &str,
    #[case] marker: &str,
) {
    let (mut cmd, _home) = arcmark;
    cmd.args(["completion", shell])
        .assert()
        .success()
        .stdout(predicate::str::contains(marker));
}

#[rstest]
fn given_unknown_shell_when_completion_then_fails(arcmark: (Command, TempDir)) {
    let (mut cmd, _home) = arcmark;
    cmd.args(["completion", "tcsh"]).assert().failure();
}
