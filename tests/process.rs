//! Runs the `test-store` binary while its fixed port is already taken.

use std::net::TcpListener;
use std::process::Command;

#[cfg(unix)]
#[test]
fn exits_non_zero_when_port_8080_is_taken() {
    // Holds the port for the duration of the test. If another process already
    // owns it, the binary fails to bind all the same.
    let _held = TcpListener::bind("0.0.0.0:8080").ok();

    let output = Command::new(env!("CARGO_BIN_EXE_test-store"))
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run test-store binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "status: {:?}", output.status);
    assert_eq!(output.status.code(), Some(1));

    assert_eq!(stderr.matches("Server started on :8080").count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("Failed to bind to 0.0.0.0:8080"), "stderr: {stderr}");
    assert_eq!(stderr.matches("Address already in use").count(), 1, "stderr: {stderr}");

    assert!(stdout.is_empty(), "stdout: {stdout}");
}
