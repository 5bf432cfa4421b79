use crate::{artifacts::*, exec::launch_command, templates::*, *};

/// What happened to the oxlint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OxlintStep {
	/// The config was generated from a template.
	Generated(ArtifactReport),
	/// The config was created by `oxlint --init`.
	Initialized,
	/// `oxlint --init` could not be run. The user has to run it manually.
	InitFailed { command: String },
	/// `oxlint --init` was not run because of a dry run.
	Skipped { command: String },
}

pub fn oxlint_artifact(project_type: ProjectType) -> AppResult<Option<PlannedArtifact>> {
	let Some(config) = oxlint_template(project_type)? else {
		return Ok(None);
	};

	let content = to_pretty_json(&config, Path::new(OXLINT_CONFIG_FILE))?;

	Ok(Some(PlannedArtifact::new(
		OXLINT_CONFIG_FILE,
		DesiredContent::Overwrite(content),
	)))
}

/// The program and arguments used to create a default oxlint config.
pub fn init_command(package_manager: PackageManager) -> (&'static str, Vec<&'static str>) {
	let (program, prefix) = package_manager.dlx();

	let mut args = prefix.to_vec();
	args.extend(["oxlint", "--init"]);

	(program, args)
}

fn display_command(package_manager: PackageManager) -> String {
	let (program, args) = init_command(package_manager);

	format!("{program} {}", args.join(" "))
}

pub(crate) fn run_oxlint_step(
	materializer: &Materializer,
	project_type: ProjectType,
	package_manager: PackageManager,
	dry_run: bool,
) -> AppResult<OxlintStep> {
	if let Some(artifact) = oxlint_artifact(project_type)? {
		return materializer
			.materialize_artifact(artifact)
			.map(OxlintStep::Generated);
	}

	let command = display_command(package_manager);

	if dry_run {
		return Ok(OxlintStep::Skipped { command });
	}

	let (program, args) = init_command(package_manager);

	match launch_command(program, &args, materializer.project_root(), None) {
		Ok(()) => Ok(OxlintStep::Initialized),
		Err(e) => {
			warn!(error = %e, "Failed to initialize the oxlint config");
			Ok(OxlintStep::InitFailed { command })
		}
	}
}
