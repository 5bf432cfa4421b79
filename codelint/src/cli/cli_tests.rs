#[macro_use]
mod tests_macros;

use std::{
	fs::{create_dir_all, remove_dir_all},
	path::{Path, PathBuf},
};

use crate::{AppResult, SetupReport, cli::Cli};

fn reset_testing_dir<T: Into<PathBuf>>(dir: T) -> PathBuf {
	let dir: PathBuf = dir.into();

	if dir.exists() {
		remove_dir_all(dir.as_path())
			.unwrap_or_else(|e| panic!("Failed to empty the output dir '{}': {}", dir.display(), e));
	}

	create_dir_all(dir.as_path())
		.unwrap_or_else(|e| panic!("Failed to create the output dir '{}': {}", dir.display(), e));

	dir
}

/// Runs the cli in the given dir, without installing anything and without prompts.
async fn run_in(dir: &Path, args: &[&str]) -> AppResult<SetupReport> {
	let mut cli_args = vec![
		"snail-codelint".to_string(),
		"--dir".to_string(),
		dir.display().to_string(),
		"--no-install".to_string(),
		"--no-interactive".to_string(),
	];

	cli_args.extend(args.iter().map(ToString::to_string));

	Cli::execute_with(cli_args).await
}

#[test]
fn verify_cli() {
	use clap::CommandFactory;
	Cli::command().debug_assert();
}
