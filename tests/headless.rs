//! Headless subcommands against a mocked ZTP service

use httpmock::prelude::*;
use serde_json::json;

use ztp_app::config::Settings;
use ztp_client::ZtpClient;
use ztp_console::{run_command, Command};
use ztp_core::Error;

fn client_for(server: &MockServer) -> ZtpClient {
    ZtpClient::new(&server.base_url()).unwrap()
}

async fn run(server: &MockServer, command: Command, settings: &Settings) -> (Result<(), Error>, String) {
    let mut out = Vec::new();
    let result = run_command(command, &client_for(server), settings, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_pull_prints_pretty_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/data");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([{"base_url": "http://ztp.lab"}, {"stack": {"1": "FOC1"}}]));
        })
        .await;

    let (result, out) = run(&server, Command::Pull { output: None }, &Settings::default()).await;
    result.unwrap();
    mock.assert_async().await;

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["base_url"], "http://ztp.lab");
    assert_eq!(value[1]["stack"]["1"], "FOC1");
    assert!(out.contains("\n  "));
}

#[tokio::test]
async fn test_pull_writes_output_file() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data");
            then.status(200).json_body(json!([{}]));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles.json");
    let (result, out) = run(
        &server,
        Command::Pull {
            output: Some(path.clone()),
        },
        &Settings::default(),
    )
    .await;
    result.unwrap();

    assert!(out.is_empty());
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, json!([{}]));
}

#[tokio::test]
async fn test_push_rejects_empty_stack_without_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/data");
            then.status(200);
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("profiles.json");
    std::fs::write(&file, r#"[{}, {"stack": {}}]"#).unwrap();

    let (result, _) = run(&server, Command::Push { file }, &Settings::default()).await;
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Stack cannot be empty");
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_push_sends_normalized_list() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/data")
                .json_body(json!([{}, {"stack": {"1": "FOC1"}, "install": "cat9k.bin"}]));
            then.status(200);
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("profiles.json");
    std::fs::write(
        &file,
        r#"[{"stack": {"1": "FOC1"}, "install": "cat9k.bin", "save": false, "cli": ""}]"#,
    )
    .unwrap();

    let (result, _) = run(&server, Command::Push { file }, &Settings::default()).await;
    result.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_files_lists_sizes_and_names() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/list");
            then.status(200)
                .json_body(json!([{"file": "cat9k.bin", "size": 1048576}]));
        })
        .await;

    let (result, out) = run(&server, Command::Files, &Settings::default()).await;
    result.unwrap();
    assert_eq!(out, "1048576  cat9k.bin\n");
}

#[tokio::test]
async fn test_rm_issues_delete() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/file/images/old.bin");
            then.status(200);
        })
        .await;

    let command = Command::Rm {
        name: "images/old.bin".to_string(),
    };
    let (result, _) = run(&server, command, &Settings::default()).await;
    result.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rm_surfaces_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/file/data.json");
            then.status(500)
                .header("content-type", "application/json")
                .json_body(json!("Cannot remove data.json"));
        })
        .await;

    let command = Command::Rm {
        name: "data.json".to_string(),
    };
    let (result, _) = run(&server, command, &Settings::default()).await;
    assert_eq!(result.unwrap_err().to_string(), "Cannot remove data.json");
}

#[tokio::test]
async fn test_log_clear_issues_delete() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/log");
            then.status(200);
        })
        .await;

    let (result, out) = run(&server, Command::Log { clear: true }, &Settings::default()).await;
    result.unwrap();
    mock.assert_async().await;
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_log_prints_entries() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/log");
            then.status(200).json_body(json!([{
                "ip": "10.0.0.5",
                "time": "2024-01-08 10:00",
                "serial": "FOC1",
                "version": "17.9.4",
                "status": "done"
            }]));
        })
        .await;

    let (result, out) = run(&server, Command::Log { clear: false }, &Settings::default()).await;
    result.unwrap();
    assert_eq!(out, "10.0.0.5\t2024-01-08 10:00\tFOC1\t17.9.4\tdone\n");
}

#[tokio::test]
async fn test_export_defaults_to_download_dir() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/csv");
            then.status(200).body("stack,install\nFOC1,cat9k.bin\n");
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::default();
    settings.files.download_dir = dir.path().to_path_buf();

    let (result, _) = run(&server, Command::Export { output: None }, &settings).await;
    result.unwrap();

    let csv = std::fs::read_to_string(dir.path().join("export.csv")).unwrap();
    assert!(csv.contains("FOC1,cat9k.bin"));
}

#[tokio::test]
async fn test_get_downloads_into_dir() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/file/configs/sw1.cfg");
            then.status(200).body("hostname sw1\n");
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let command = Command::Get {
        name: "configs/sw1.cfg".to_string(),
        dir: Some(dir.path().to_path_buf()),
    };
    let (result, _) = run(&server, command, &Settings::default()).await;
    result.unwrap();

    let body = std::fs::read_to_string(dir.path().join("sw1.cfg")).unwrap();
    assert_eq!(body, "hostname sw1\n");
}
