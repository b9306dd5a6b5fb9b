use assert_cmd::Command;

/// Spawn the punchlog binary for integration tests.
pub fn plog() -> Command {
    Command::cargo_bin("punchlog").expect("binary not built")
}
