use assert_cmd::Command;
use assert_cmd::cargo_bin;

/// Joins menu answers into the stdin a user would type, one per line.
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

/// The calculator binary without the pause between actions.
pub fn calculator() -> Command {
    let mut cmd = Command::new(cargo_bin!("smartcalc"));
    cmd.arg("--no-pause");
    cmd
}
