mod common;

use std::fs;

use common::{MINIMAL_RULES, TAGGED_DOCKERFILE, TestFixture};
use predicates::prelude::*;
use serde_json::Value;

fn parse(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("stdout is a JSON document")
}

#[test]
fn clean_dockerfile_exits_zero_with_json_report() {
    let fixture = TestFixture::new();
    let dockerfile = fixture.create_dockerfile(TAGGED_DOCKERFILE);

    let output = dockerfile_guard!()
        .arg("--no-config")
        .arg(&dockerfile)
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();
    let report = parse(&output);

    assert_eq!(report["errors"]["count"], 0);
    assert_eq!(report["warnings"]["count"], 0);
    assert_eq!(report["info"]["count"], 2);
    assert_eq!(report["summary"]["total_line_count"], 5);
    assert_eq!(report["summary"]["ignored_line_count"], 1);
    assert_eq!(report["summary"]["resulting_layer_count"], 4);
}

#[test]
fn invalid_instruction_exits_one() {
    let fixture = TestFixture::new();
    let dockerfile =
        fixture.create_dockerfile(&format!("{TAGGED_DOCKERFILE}BOGUS foo\n"));

    let output = dockerfile_guard!()
        .arg("--no-config")
        .arg(&dockerfile)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let report = parse(&output);

    assert_eq!(report["errors"]["count"], 1);
    assert_eq!(report["errors"]["data"][0]["message"], "invalid instruction");
    assert_eq!(report["errors"]["data"][0]["line_number"], 6);
    assert_eq!(report["summary"]["invalid_line_count"], 1);
}

#[test]
fn missing_base_image_exits_one() {
    let fixture = TestFixture::new();
    let dockerfile = fixture.create_dockerfile("RUN echo hi\n");

    dockerfile_guard!()
        .arg("--no-config")
        .arg(&dockerfile)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing base image"));
}

#[test]
fn missing_rules_file_exits_two_without_report() {
    let fixture = TestFixture::new();
    let dockerfile = fixture.create_dockerfile(TAGGED_DOCKERFILE);

    dockerfile_guard!()
        .arg("--rules")
        .arg(fixture.path().join("nope.toml"))
        .arg(&dockerfile)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read rules file"));
}

#[test]
fn malformed_rules_file_exits_two() {
    let fixture = TestFixture::new();
    let dockerfile = fixture.create_dockerfile(TAGGED_DOCKERFILE);
    let rules = fixture.create_file("rules.toml", "[general]\nignore_regex = '('\n");

    dockerfile_guard!()
        .arg("--rules")
        .arg(&rules)
        .arg(&dockerfile)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_dockerfile_exits_two() {
    let fixture = TestFixture::new();

    dockerfile_guard!()
        .arg("--no-config")
        .arg(fixture.path().join("Dockerfile"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("SourceNotFound"));
}

#[test]
fn custom_rules_file_replaces_defaults() {
    let fixture = TestFixture::new();
    let dockerfile = fixture.create_dockerfile("FROM alpine\nRUN curl -O x\n");
    let rules = fixture.create_file("rules.toml", MINIMAL_RULES);

    let output = dockerfile_guard!()
        .arg("-r")
        .arg(&rules)
        .arg(&dockerfile)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let report = parse(&output);

    assert_eq!(report["errors"]["count"], 1);
    assert_eq!(report["errors"]["data"][0]["message"], "curl is not allowed");
    assert_eq!(report["warnings"]["count"], 0);
    assert_eq!(report["info"]["count"], 0);
}

#[test]
fn local_rules_file_is_discovered() {
    let fixture = TestFixture::new();
    let dockerfile = fixture.create_dockerfile("FROM alpine\nRUN curl -O x\n");
    fixture.create_local_rules(MINIMAL_RULES);

    dockerfile_guard!()
        .current_dir(fixture.path())
        .arg(&dockerfile)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("curl is not allowed"));
}

#[test]
fn no_config_ignores_local_rules_file() {
    let fixture = TestFixture::new();
    let dockerfile = fixture.create_dockerfile(TAGGED_DOCKERFILE);
    fixture.create_local_rules("this is not toml");

    dockerfile_guard!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .arg(&dockerfile)
        .assert()
        .code(0);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let fixture = TestFixture::new();
    let dockerfile = fixture.create_dockerfile("FROM ubuntu\nRUN apt-get install -y openssh-server\n");

    let run = || {
        dockerfile_guard!()
            .arg("--no-config")
            .arg(&dockerfile)
            .assert()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn text_format_prints_sections() {
    let fixture = TestFixture::new();
    let dockerfile = fixture.create_dockerfile(&format!("{TAGGED_DOCKERFILE}BOGUS foo\n"));

    dockerfile_guard!()
        .arg("--no-config")
        .arg("--format")
        .arg("text")
        .arg("--color")
        .arg("never")
        .arg(&dockerfile)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERRORS (1)"))
        .stdout(predicate::str::contains("line 6: invalid instruction"))
        .stdout(predicate::str::contains("Summary: 6 lines"));
}

#[test]
fn output_flag_writes_file() {
    let fixture = TestFixture::new();
    let dockerfile = fixture.create_dockerfile(TAGGED_DOCKERFILE);
    let report_path = fixture.path().join("report.json");

    dockerfile_guard!()
        .arg("--no-config")
        .arg("--output")
        .arg(&report_path)
        .arg(&dockerfile)
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    let report = parse(&fs::read(&report_path).unwrap());
    assert_eq!(report["summary"]["resulting_layer_count"], 4);
}

#[test]
fn text_report_file_has_no_escape_codes() {
    let fixture = TestFixture::new();
    let dockerfile = fixture.create_dockerfile(&format!("{TAGGED_DOCKERFILE}BOGUS foo\n"));
    let report_path = fixture.path().join("report.txt");

    dockerfile_guard!()
        .arg("--no-config")
        .arg("--format")
        .arg("text")
        .arg("--output")
        .arg(&report_path)
        .arg(&dockerfile)
        .assert()
        .code(1);

    let text = fs::read_to_string(&report_path).unwrap();
    assert!(text.contains("ERRORS (1)"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn quiet_suppresses_stdout_but_keeps_exit_code() {
    let fixture = TestFixture::new();
    let dockerfile = fixture.create_dockerfile("BOGUS foo\n");

    dockerfile_guard!()
        .arg("--no-config")
        .arg("--quiet")
        .arg(&dockerfile)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_lists_exit_codes() {
    dockerfile_guard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit codes"));
}
