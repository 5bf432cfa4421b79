#[cfg(test)]
mod cli_tests;

mod output;
mod prompts;

use std::{
	ffi::OsString,
	io::{self, IsTerminal},
};

use output::*;
use prompts::*;

use crate::{
	config::{ConfigOverrides, ConfigSource},
	*,
};

pub async fn main_entrypoint() -> Result<(), AppError> {
	let cli = Cli::parse();

	logging::init_logging(cli.verbose);

	cli.execute().await.map(|_| ())
}

/// Sets up oxlint, prettier, the VS Code workspace settings and the lefthook git hooks in a JavaScript or TypeScript project.
#[derive(Parser, Debug, Clone)]
#[command(name = "snail-codelint")]
#[command(version, about, long_about = None)]
pub struct Cli {
	/// The root directory of the project [default: the current directory]
	#[arg(short, long, value_name = "DIR")]
	pub dir: Option<PathBuf>,

	/// The kind of project to configure. It gets asked interactively if missing.
	#[arg(short = 't', long, value_enum)]
	pub project_type: Option<ProjectType>,

	/// The package manager used to install the dependencies. It gets asked interactively if missing.
	#[arg(short = 'p', long, value_enum)]
	pub package_manager: Option<PackageManager>,

	/// Do not generate the lefthook git hooks.
	#[arg(long)]
	pub no_lefthook: bool,

	/// Do not install the dev dependencies.
	#[arg(long)]
	pub no_install: bool,

	/// Show what would change without writing any file or running any command.
	#[arg(long)]
	pub dry_run: bool,

	/// Never prompt. Fails if the project type is not set, and uses pnpm if the package manager is not set.
	#[arg(long)]
	pub no_interactive: bool,

	#[command(flatten)]
	pub config: ConfigArgs,

	/// Print debug logs to stderr.
	#[arg(short, long)]
	pub verbose: bool,
}

#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct ConfigArgs {
	/// The path to the config file [default: codelint.toml, codelint.yaml or codelint.json in the project root]
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Do not read any config file.
	#[arg(long)]
	pub ignore_config: bool,
}

impl ConfigArgs {
	fn source(&self) -> ConfigSource {
		if self.ignore_config {
			ConfigSource::None
		} else if let Some(path) = &self.config {
			ConfigSource::File(path.clone())
		} else {
			ConfigSource::Discover
		}
	}
}

impl Cli {
	pub async fn execute_with<I, T>(args: I) -> AppResult<SetupReport>
	where
		I: IntoIterator<Item = T>,
		T: Into<OsString> + Clone,
	{
		let cli = Self::try_parse_from(args).map_err(|e| generic_error!("{e}"))?;

		cli.execute().await
	}

	fn overrides(&self) -> ConfigOverrides {
		ConfigOverrides {
			project_type: self.project_type,
			package_manager: self.package_manager,
			lefthook: self.no_lefthook.then_some(false),
			install: self.no_install.then_some(false),
		}
	}

	pub async fn execute(self) -> AppResult<SetupReport> {
		let project_root = match &self.dir {
			Some(dir) => dir.clone(),
			None => get_cwd()?,
		};

		let config = Config::load(&project_root, &self.config.source(), &self.overrides())?;

		let interactive = !self.no_interactive && io::stdin().is_terminal();

		print_welcome(&project_root);

		let project_type = match config.project_type {
			Some(project_type) => project_type,
			None if interactive => select_project_type()?,
			None => return Err(AppError::MissingProjectType),
		};

		let package_manager = match config.package_manager {
			Some(package_manager) => package_manager,
			None if interactive => select_package_manager()?,
			None => PackageManager::default(),
		};

		let options = SetupOptions {
			project_root,
			project_type,
			package_manager,
			lefthook: config.lefthook,
			install: config.install,
			dry_run: self.dry_run,
		};

		let report = setup(&options).await?;

		print_report(&report, &options);

		Ok(report)
	}
}
