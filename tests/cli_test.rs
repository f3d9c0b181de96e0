use httpmock::prelude::*;
use std::io::Write;
use std::net::TcpListener;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run_probe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_r-addin-probe"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run r-addin-probe")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_healthy_server_exits_zero() {
    let server = MockServer::start();
    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200);
    });

    let base_url = server.base_url();
    let output = run_probe(&["--base-url", &base_url]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), format!("✅ R server is running at {}\n", base_url));
    health_mock.assert();
}

#[test]
fn test_unhealthy_server_exits_one() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(503);
    });

    let output = run_probe(&["--base-url", &server.base_url()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "⚠️  R server responded with status 503\n");
}

#[test]
fn test_unreachable_server_exits_one_with_guide() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let output = run_probe(&["--base-url", &base_url]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains(&format!("❌ Cannot connect to R server at {}", base_url)));
    assert!(stdout.contains("1. Open RStudio"));
    assert!(stdout.contains("4. Run: claudeAddin()"));
}

#[test]
fn test_silent_server_exits_one_with_error_line() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    // 接受連線但永遠不回應
    std::thread::spawn(move || {
        if let Ok((_stream, _)) = listener.accept() {
            std::thread::sleep(std::time::Duration::from_secs(5));
        }
    });

    let output = run_probe(&["--base-url", &base_url, "--timeout", "0.3"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("❌ Error checking connection: "), "{}", stdout);
    assert!(!stdout.contains("To start the R server:"));
}

#[test]
fn test_redirecting_server_exits_one() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(301).header("Location", "/moved");
    });
    server.mock(|when, then| {
        when.method(GET).path("/moved");
        then.status(200);
    });

    let output = run_probe(&["--base-url", &server.base_url()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "⚠️  R server responded with status 301\n");
}

#[test]
fn test_config_file_sets_endpoint() {
    let server = MockServer::start();
    let ping_mock = server.mock(|when, then| {
        when.method(GET).path("/ping");
        then.status(200);
    });

    let mut config_file = NamedTempFile::new().unwrap();
    writeln!(
        config_file,
        "[server]\nbase_url = \"{}\"\nhealth_path = \"/ping\"\ntimeout_seconds = 1.5",
        server.base_url()
    )
    .unwrap();

    let output = run_probe(&["--config", config_file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    ping_mock.assert();
}

#[test]
fn test_invalid_config_exits_one_without_probing() {
    let output = run_probe(&["--base-url", "not a url"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());

    let output = run_probe(&["--timeout", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("timeout"));
}

#[test]
fn test_unknown_flag_exits_one() {
    let output = run_probe(&["--no-such-flag"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_config_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("probe.toml");

    let output = run_probe(&["--config", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load config file"));
}
