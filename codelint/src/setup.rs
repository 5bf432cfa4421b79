use tokio::task::JoinSet;

use crate::artifacts::{
	dependencies::{dev_dependencies, install_dependencies},
	oxlint::{OxlintStep, run_oxlint_step},
	package_json::{ScriptsOutcome, update_package_scripts},
	plan_artifacts,
};
use crate::*;

/// The fully resolved settings for a single setup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOptions {
	pub project_root: PathBuf,
	pub project_type: ProjectType,
	pub package_manager: PackageManager,
	pub lefthook: bool,
	pub install: bool,
	pub dry_run: bool,
}

impl SetupOptions {
	pub fn new(project_root: impl Into<PathBuf>, project_type: ProjectType) -> Self {
		Self {
			project_root: project_root.into(),
			project_type,
			package_manager: PackageManager::default(),
			lefthook: true,
			install: true,
			dry_run: false,
		}
	}
}

/// What happened during the dependency installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStep {
	Installed(Vec<String>),
	/// Installation was disabled, or this is a dry run.
	Skipped(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
	/// The outcome of every merged file, in a fixed order.
	pub artifacts: Vec<ArtifactReport>,
	pub oxlint: OxlintStep,
	pub install: InstallStep,
	pub scripts: ScriptsOutcome,
}

impl SetupReport {
	/// Looks up the outcome for a file, relative to the project root.
	pub fn outcome_of(&self, path: impl AsRef<Path>) -> Option<MergeOutcome> {
		let path = path.as_ref();

		self.artifacts
			.iter()
			.find(|report| report.path == path)
			.map(|report| report.outcome)
			.or_else(|| match &self.oxlint {
				OxlintStep::Generated(report) if report.path == path => Some(report.outcome),
				_ => None,
			})
	}
}

/// Generates or merges every configuration file in the project, then updates the scripts and installs the dependencies.
///
/// The formatter, editor and git hook files are processed concurrently. The reports keep the planned order.
pub async fn setup(options: &SetupOptions) -> AppResult<SetupReport> {
	info!(
		project_type = %options.project_type,
		package_manager = %options.package_manager,
		root = %options.project_root.display(),
		"Starting setup"
	);

	if !options.dry_run {
		create_all_dirs(&options.project_root)?;
	}

	let materializer = Materializer::new(&options.project_root).dry_run(options.dry_run);

	let planned = plan_artifacts(options.project_type, options.lefthook)?;
	let total = planned.len();

	let mut tasks = JoinSet::new();

	for (idx, artifact) in planned.into_iter().enumerate() {
		let materializer = materializer.clone();

		tasks.spawn_blocking(move || (idx, materializer.materialize_artifact(artifact)));
	}

	let mut slots: Vec<Option<ArtifactReport>> = vec![None; total];
	let mut first_error: Option<AppError> = None;

	// Every writer finishes before an error is returned
	while let Some(joined) = tasks.join_next().await {
		let result = joined
			.map_err(|e| generic_error!("A file generation task failed: {e}"))
			.and_then(|(idx, report)| report.map(|report| (idx, report)));

		match result {
			Ok((idx, report)) => slots[idx] = Some(report),
			Err(e) => {
				warn!("{e}");

				if first_error.is_none() {
					first_error = Some(e);
				}
			}
		}
	}

	if let Some(e) = first_error {
		return Err(e);
	}

	let artifacts: Vec<ArtifactReport> = slots.into_iter().flatten().collect();

	let oxlint = run_oxlint_step(
		&materializer,
		options.project_type,
		options.package_manager,
		options.dry_run,
	)?;

	let packages: Vec<String> = dev_dependencies(options.project_type, options.lefthook)
		.into_iter()
		.map(String::from)
		.collect();

	let install = if options.install && !options.dry_run {
		let package_refs: Vec<&str> = packages.iter().map(String::as_str).collect();

		install_dependencies(
			&options.project_root,
			options.package_manager,
			&package_refs,
		)?;

		InstallStep::Installed(packages)
	} else {
		debug!("Skipping the dependency installation");
		InstallStep::Skipped(packages)
	};

	let scripts = update_package_scripts(
		&options.project_root,
		options.project_type,
		options.dry_run,
	)?;

	Ok(SetupReport {
		artifacts,
		oxlint,
		install,
		scripts,
	})
}
