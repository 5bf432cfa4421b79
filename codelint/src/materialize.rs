use vscode_config::Extensions;

use crate::*;

/// The content that should end up in a target file. The variant determines the merging strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum DesiredContent {
	DeepMerge(ConfigMap),
	ListUnion(Extensions),
	ReplaceIfDifferent(String),
	Overwrite(String),
}

impl DesiredContent {
	pub const fn strategy(&self) -> Strategy {
		match self {
			Self::DeepMerge(_) => Strategy::DeepMerge,
			Self::ListUnion(_) => Strategy::ListUnion,
			Self::ReplaceIfDifferent(_) => Strategy::ReplaceIfDifferent,
			Self::Overwrite(_) => Strategy::Overwrite,
		}
	}
}

/// A target file, relative to the project root, along with its desired content.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedArtifact {
	pub path: PathBuf,
	pub content: DesiredContent,
}

impl PlannedArtifact {
	pub fn new(path: impl Into<PathBuf>, content: DesiredContent) -> Self {
		Self {
			path: path.into(),
			content,
		}
	}
}

/// The outcome for a single target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
	pub path: PathBuf,
	pub strategy: Strategy,
	pub outcome: MergeOutcome,
}

/// Reads target files, runs the merging strategies on them and writes the results.
#[derive(Debug, Clone)]
pub struct Materializer {
	project_root: PathBuf,
	dry_run: bool,
}

impl Materializer {
	pub fn new(project_root: impl Into<PathBuf>) -> Self {
		Self {
			project_root: project_root.into(),
			dry_run: false,
		}
	}

	/// In a dry run, the outcomes are computed as usual but nothing is written to disk.
	#[must_use]
	pub const fn dry_run(mut self, dry_run: bool) -> Self {
		self.dry_run = dry_run;
		self
	}

	pub fn project_root(&self) -> &Path {
		&self.project_root
	}

	pub fn materialize_artifact(&self, artifact: PlannedArtifact) -> AppResult<ArtifactReport> {
		let strategy = artifact.content.strategy();
		let outcome = self.materialize(&artifact.path, artifact.content)?;

		Ok(ArtifactReport {
			path: artifact.path,
			strategy,
			outcome,
		})
	}

	/// Brings the file at `relative_path` in line with the desired content.
	///
	/// Read or parse failures on the existing file are recoverable and lead to [`MergeOutcome::WrittenFallback`]. Failures to create the parent directories or to write the file are fatal.
	pub fn materialize(
		&self,
		relative_path: &Path,
		desired: DesiredContent,
	) -> AppResult<MergeOutcome> {
		let path = self.project_root.join(relative_path);

		debug!(
			path = %path.display(),
			strategy = %desired.strategy(),
			"Reconciling file"
		);

		let (outcome, content) = match desired {
			DesiredContent::DeepMerge(settings) => {
				let existing = self.read(&path, parse_json::<ConfigMap>);
				render(merge_settings(settings, existing), |v| {
					to_pretty_json(v, &path)
				})?
			}
			DesiredContent::ListUnion(extensions) => {
				let existing = self.read(&path, parse_json::<Extensions>);
				render(union_recommendations(extensions, existing), |v| {
					to_pretty_json(v, &path)
				})?
			}
			DesiredContent::ReplaceIfDifferent(text) => {
				let existing = self.read(&path, |c| Ok(c.to_string()));
				render(replace_if_different(text, existing), |v| Ok(v.clone()))?
			}
			DesiredContent::Overwrite(text) => render(overwrite(text), |v| Ok(v.clone()))?,
		};

		if let Some(content) = content {
			if self.dry_run {
				info!(path = %path.display(), %outcome, "Dry run, skipping write");
			} else {
				create_parent_dirs(&path)?;
				write_file(&path, &content)?;

				info!(path = %path.display(), %outcome, "File written");
			}
		} else {
			debug!(path = %path.display(), "File already up to date");
		}

		Ok(outcome)
	}

	fn read<T>(&self, path: &Path, parse: impl FnOnce(&str) -> Result<T, String>) -> Existing<T> {
		let existing = read_existing(path, parse);

		if let Existing::Unreadable(failure) = &existing {
			warn!(
				error = %failure,
				"The existing file cannot be used and will be regenerated from the template"
			);
		}

		existing
	}
}

fn render<T>(
	merged: Merged<T>,
	to_text: impl FnOnce(&T) -> AppResult<String>,
) -> AppResult<(MergeOutcome, Option<String>)> {
	let content = if merged.changed() {
		Some(to_text(&merged.value)?)
	} else {
		None
	};

	Ok((merged.outcome, content))
}
