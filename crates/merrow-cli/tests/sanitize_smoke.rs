use assert_cmd::Command;
use std::fs;

#[test]
fn cli_sanitizes_file_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("diagram.mmd");
    fs::write(
        &path,
        "subgraph API\nA-->B\nend\nclass API,A fill:#f9f\nclass A fill:#bbf",
    )
    .expect("write fixture");

    let assert = Command::cargo_bin("merrow-cli")
        .expect("binary")
        .args(["sanitize", path.to_string_lossy().as_ref()])
        .assert()
        .success();

    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        "subgraph API\nA-->B\nend\nclass A fill:#bbf\n"
    );
}

#[test]
fn cli_strips_fences_from_stdin() {
    let assert = Command::cargo_bin("merrow-cli")
        .expect("binary")
        .arg("strip-fences")
        .write_stdin("```mermaid\ngraph TD\nA-->B\n```")
        .assert()
        .success();

    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        "graph TD\nA-->B\n"
    );
}

#[test]
fn unknown_flags_exit_with_usage() {
    Command::cargo_bin("merrow-cli")
        .expect("binary")
        .arg("--bogus")
        .assert()
        .code(2);
}
