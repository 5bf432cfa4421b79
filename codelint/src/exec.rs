use std::process::{Command, Stdio};

use crate::*;

/// Runs a program in the given directory, with its output forwarded to the terminal.
pub(crate) fn launch_command(
	program: &str,
	args: &[&str],
	cwd: &Path,
	custom_error_message: Option<&str>,
) -> AppResult<()> {
	let command_line = if args.is_empty() {
		program.to_string()
	} else {
		format!("{program} {}", args.join(" "))
	};

	debug!(command = %command_line, cwd = %cwd.display(), "Launching command");

	let status = Command::new(program)
		.args(args)
		.current_dir(cwd)
		.stdout(Stdio::inherit())
		.stderr(Stdio::inherit())
		.status()
		.map_err(|e| AppError::Command {
			message: format!("Failed to execute the command '{command_line}': {e}"),
		})?;

	if status.success() {
		Ok(())
	} else {
		let message = custom_error_message.map_or_else(
			|| {
				format!(
					"The command '{command_line}' failed with exit code: {:?}",
					status.code()
				)
			},
			ToString::to_string,
		);

		Err(AppError::Command { message })
	}
}
