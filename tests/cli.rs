use std::process::{Command, Output};

fn run_polygons() -> Output {
    Command::new(env!("CARGO_BIN_EXE_polygons"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch polygons")
}

#[test]
fn prints_three_lines_in_order() {
    let output = run_polygons();

    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n6\nhehehe\n");
}

#[test]
fn stderr_is_quiet_by_default() {
    let output = run_polygons();
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn runs_are_idempotent() {
    let first = run_polygons();
    let second = run_polygons();

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let output = Command::new(env!("CARGO_BIN_EXE_polygons"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to launch polygons");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n6\nhehehe\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("reporting sides"));
}

#[cfg(target_os = "linux")]
#[test]
fn full_stdout_fails_with_diagnostic() {
    use std::fs::OpenOptions;
    use std::process::Stdio;

    let full = OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("failed to open /dev/full");

    let output = Command::new(env!("CARGO_BIN_EXE_polygons"))
        .env_remove("RUST_LOG")
        .stdout(Stdio::from(full))
        .output()
        .expect("failed to launch polygons");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("Failed to report sides for Triangle"), "stderr: {stderr}");
}
