use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use httpmock::Method::POST;
use httpmock::MockServer;
use predicates::prelude::*;
use serde_json::{json, Value};

const KEY: &str = "service:my-graph:secret";

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    dir.child("apollo.config.json")
        .write_str(r#"{ "documents": [{ "includes": ["ops/*.graphql", "src/**/*.ts"], "excludes": [] }] }"#)
        .unwrap();
    dir.child("ops/a.graphql").write_str("query A { hello }").unwrap();
    dir.child("src/b.ts")
        .write_str("export const B = gql`query B { hello }`;")
        .unwrap();
    dir
}

fn engine(changes: Value) -> MockServer {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/graphql")
            .header("x-api-key", KEY)
            .header("apollographql-client-name", "apollo-cli")
            .json_body_includes(
                json!({
                    "variables": {
                        "id": "my-graph",
                        "tag": "current",
                        "gitContext": { "branch": "main" }
                    }
                })
                .to_string(),
            )
            .body_includes("query A {")
            .body_includes("query B {");
        then.status(200).json_body(json!({
            "data": { "service": { "schema": { "checkOperations": changes } } }
        }));
    });
    server
}

fn check(dir: &TempDir, server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("apollo").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("ENGINE_API_KEY")
        .env("APOLLO_VCS_BRANCH", "main")
        .args(["queries", "check", "--key", KEY])
        .args(["--engine", &server.url("/api/graphql")]);
    cmd
}

#[test]
fn failures_are_tabled_and_exit_non_zero() {
    let dir = project();
    let server = engine(json!([
        { "type": "FAILURE", "code": "FIELD_REMOVED", "description": "Query.hello was removed" }
    ]));

    check(&dir, &server)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FIELD_REMOVED"))
        .stdout(predicate::str::contains("Query.hello was removed"));
}

#[test]
fn no_changes_is_a_success() {
    let dir = project();
    let server = engine(json!([]));

    check(&dir, &server)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No operations have issues with the current schema",
        ));
}

#[test]
fn json_output_still_fails_on_failures() {
    let dir = project();
    let server = engine(json!([
        { "type": "FAILURE", "code": "FIELD_REMOVED", "description": "Query.hello was removed" },
        { "type": "NOTICE", "code": "FIELD_ADDED", "description": "Query.world was added" }
    ]));

    let output = check(&dir, &server).arg("--json").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["changes"].as_array().unwrap().len(), 2);
    assert_eq!(body["changes"][0]["type"], "FAILURE");
}

#[test]
fn warnings_do_not_fail() {
    let dir = project();
    let server = engine(json!([
        { "type": "WARNING", "code": "ARG_CHANGED", "description": "Query.hello changed" }
    ]));

    check(&dir, &server)
        .assert()
        .success()
        .stdout(predicate::str::contains("ARG_CHANGED"));
}

#[test]
fn a_key_is_required() {
    let dir = project();

    let mut cmd = Command::cargo_bin("apollo").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("ENGINE_API_KEY")
        .args(["queries", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No engine API key was found"));
}

#[test]
fn unparseable_operations_stop_the_check() {
    let dir = project();
    dir.child("ops/broken.graphql").write_str("query {").unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(200).json_body(json!({ "data": null }));
    });

    check(&dir, &server)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.graphql"));
    mock.assert_hits(0);
}

#[test]
fn unknown_graphs_are_reported() {
    let dir = project();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(200).json_body(json!({ "data": { "service": null } }));
    });

    check(&dir, &server)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No schema found for my-graph"));
}
