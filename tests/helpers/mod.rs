// Shared test helpers: config documents on disk and a mock NextDNS API.
//
// Included by integration tests with `mod helpers;`.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use nextdns_rewrites::{Config, FailOn, FailurePolicy, LogFormat, LogLevel};
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const PROFILE_ID: &str = "abc123";
pub const PROFILE_NAME: &str = "Home";

/// Writes a YAML configuration document to a temporary file.
pub fn write_config(profile_name: &str, rewrites: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "profile_name: {}", profile_name).expect("Failed to write config");
    if rewrites.is_empty() {
        writeln!(file, "rewrites: []").expect("Failed to write config");
    } else {
        writeln!(file, "rewrites:").expect("Failed to write config");
        for (name, content) in rewrites {
            writeln!(file, "  - name: {}", name).expect("Failed to write config");
            writeln!(file, "    content: {}", content).expect("Failed to write config");
        }
    }
    file.flush().expect("Failed to flush config");
    file
}

/// Builds a library config pointing at the mock server.
pub fn test_config(config_path: PathBuf, api_url: &str, on_error: FailurePolicy) -> Config {
    Config {
        config_path,
        api_key: Some(TEST_API_KEY.to_string()),
        api_url: api_url.to_string(),
        timeout_seconds: 5,
        user_agent: "nextdns_rewrites_test/1.0".to_string(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        on_error,
        fail_on: FailOn::AnyFailure,
    }
}

/// JSON for one rewrite as NextDNS returns it.
pub fn rewrite_json(id: &str, name: &str, content: &str) -> Value {
    json!({ "id": id, "name": name, "type": "A", "content": content })
}

/// Mounts `GET /profiles` returning the given `(id, name)` pairs.
pub async fn mount_profiles(server: &MockServer, profiles: &[(&str, &str)]) {
    let data: Vec<Value> = profiles
        .iter()
        .map(|(id, name)| json!({ "id": id, "fingerprint": "fp", "name": name }))
        .collect();
    Mock::given(method("GET"))
        .and(path("/profiles"))
        .and(header("X-Api-Key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .mount(server)
        .await;
}

/// Mounts `GET /profiles/{PROFILE_ID}/rewrites` returning the given rewrites.
pub async fn mount_rewrite_list(server: &MockServer, rewrites: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(format!("/profiles/{}/rewrites", PROFILE_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": rewrites })))
        .mount(server)
        .await;
}

/// `(METHOD, path)` of every request the mock server received, in order.
pub async fn received(server: &MockServer) -> Vec<(String, String)> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|req| (req.method.to_string(), req.url.path().to_string()))
        .collect()
}

/// Only the POST and DELETE requests, in order.
pub async fn mutations(server: &MockServer) -> Vec<(String, String)> {
    received(server)
        .await
        .into_iter()
        .filter(|(m, _)| m == "POST" || m == "DELETE")
        .collect()
}
