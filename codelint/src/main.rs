use clap::{CommandFactory, error::ErrorKind};
use snail_codelint::cli::Cli;

#[tokio::main]
async fn main() {
	match snail_codelint::cli::main_entrypoint().await {
		Ok(()) => {}
		Err(e) => {
			let mut cmd = Cli::command();
			cmd.error(ErrorKind::InvalidValue, e).exit();
		}
	}
}
