use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use httpmock::Method::POST;
use httpmock::MockServer;
use predicates::prelude::*;
use serde_json::{json, Value};

fn introspection() -> Value {
    json!({
        "queryType": { "name": "Query" },
        "mutationType": null,
        "subscriptionType": null,
        "types": [{
            "kind": "OBJECT",
            "name": "Query",
            "description": null,
            "fields": [{
                "name": "hello",
                "description": null,
                "args": [],
                "type": { "kind": "SCALAR", "name": "String", "ofType": null },
                "isDeprecated": false,
                "deprecationReason": null
            }],
            "inputFields": null,
            "interfaces": [],
            "enumValues": null,
            "possibleTypes": null
        }],
        "directives": []
    })
}

#[test]
fn it_downloads_from_an_endpoint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .header("authorization", "Bearer abc");
        then.status(200)
            .json_body(json!({ "data": { "__schema": introspection() } }));
    });
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("apollo").unwrap();
    cmd.current_dir(dir.path())
        .args(["schema", "download", "out/schema.json", "--json"])
        .args(["--endpoint", &server.url("/graphql")])
        .args(["--header", "authorization: Bearer abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""path": "out/schema.json""#));

    mock.assert();
    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.child("out/schema.json").path()).unwrap())
            .unwrap();
    assert_eq!(written, introspection());
}

#[test]
fn it_copies_a_local_schema_file() {
    let dir = TempDir::new().unwrap();
    dir.child("apollo.config.json")
        .write_str(r#"{ "schemas": { "app": { "schema": "schemas/app.json" } } }"#)
        .unwrap();
    dir.child("schemas/app.json")
        .write_str(&json!({ "data": { "__schema": introspection() } }).to_string())
        .unwrap();

    let mut cmd = Command::cargo_bin("apollo").unwrap();
    cmd.current_dir(dir.path())
        .args(["schema", "download"])
        .assert()
        .success();

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.child("schema.json").path()).unwrap()).unwrap();
    assert_eq!(written, introspection());
}

#[test]
fn it_downloads_the_first_declared_schema() {
    let dir = TempDir::new().unwrap();
    dir.child("apollo.config.json")
        .write_str(
            r#"{ "schemas": {
                "zeta": { "schema": "schemas/zeta.json" },
                "alpha": { "schema": "schemas/alpha.json" }
            } }"#,
        )
        .unwrap();
    let mut zeta = introspection();
    zeta["types"][0]["fields"][0]["name"] = json!("fromZeta");
    dir.child("schemas/zeta.json")
        .write_str(&json!({ "__schema": zeta }).to_string())
        .unwrap();
    dir.child("schemas/alpha.json")
        .write_str(&json!({ "__schema": introspection() }).to_string())
        .unwrap();

    let mut cmd = Command::cargo_bin("apollo").unwrap();
    cmd.current_dir(dir.path())
        .args(["schema", "download"])
        .assert()
        .success();

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.child("schema.json").path()).unwrap()).unwrap();
    assert_eq!(written, zeta);
}

#[test]
fn it_fails_when_the_endpoint_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .json_body(json!({ "errors": [{ "message": "introspection is disabled" }] }));
    });
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("apollo").unwrap();
    cmd.current_dir(dir.path())
        .args(["schema", "download", "--endpoint", &server.url("/graphql")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("introspection is disabled"));

    dir.child("schema.json").assert(predicate::path::missing());
}
