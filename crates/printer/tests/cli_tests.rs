//! Runs the built `printer` binary and checks what it prints

use std::process::Command;

use pretty_assertions::assert_eq;

fn printer() -> Command {
    Command::new(env!("CARGO_BIN_EXE_printer"))
}

#[test]
fn test_binary_stdout() {
    let output = printer().env_remove("RUST_LOG").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "test\n5\n");
}

#[test]
fn test_verbose_keeps_stdout_clean() {
    let output = printer().arg("-vvv").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "test\n5\n");
}

#[test]
fn test_version_flag() {
    let output = printer().arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(printer::VERSION));
}
