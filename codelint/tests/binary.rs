use std::fs::{create_dir_all, remove_dir_all};

use assert_cmd::Command;

fn get_bin() -> Command {
	Command::cargo_bin("snail-codelint").expect("Failed to find the app binary")
}

#[test]
fn missing_project_type_fails() {
	let dir = "tests/output/bin_missing_project_type";

	if std::path::Path::new(dir).exists() {
		remove_dir_all(dir).unwrap();
	}
	create_dir_all(dir).unwrap();

	get_bin()
		.args(["--dir", dir, "--no-interactive", "--no-install"])
		.assert()
		.failure();
}

#[test]
fn unknown_project_type_is_rejected() {
	get_bin()
		.args(["--project-type", "angular", "--dry-run"])
		.assert()
		.failure();
}

#[test]
fn dry_run_succeeds() {
	let dir = "tests/output/bin_dry_run";

	if std::path::Path::new(dir).exists() {
		remove_dir_all(dir).unwrap();
	}
	create_dir_all(dir).unwrap();

	get_bin()
		.args([
			"--dir",
			dir,
			"-t",
			"react-ts",
			"-p",
			"yarn",
			"--dry-run",
			"--no-interactive",
		])
		.assert()
		.success();

	assert!(!std::path::Path::new(dir).join(".prettierrc.json").exists());
}
