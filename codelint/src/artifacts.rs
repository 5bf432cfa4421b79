//! The files and project changes produced by the setup.

pub mod dependencies;
pub mod lefthook;
pub mod oxlint;
pub mod package_json;
pub mod prettier;
pub mod vscode;

use crate::*;

pub const PRETTIER_CONFIG_FILE: &str = ".prettierrc.json";
pub const PRETTIER_IGNORE_FILE: &str = ".prettierignore";
pub const OXLINT_CONFIG_FILE: &str = ".oxlintrc.json";
pub const VSCODE_SETTINGS_FILE: &str = ".vscode/settings.json";
pub const VSCODE_EXTENSIONS_FILE: &str = ".vscode/extensions.json";
pub const LEFTHOOK_CONFIG_FILE: &str = "lefthook.yml";
pub const PACKAGE_JSON_FILE: &str = "package.json";

/// The formatter, editor and git hook files for a project, in the order in which they are reported.
pub fn plan_artifacts(project_type: ProjectType, lefthook: bool) -> AppResult<Vec<PlannedArtifact>> {
	let mut artifacts = prettier::prettier_artifacts(project_type)?;

	artifacts.extend(vscode::vscode_artifacts(project_type)?);

	if lefthook {
		artifacts.push(lefthook::lefthook_artifact()?);
	}

	Ok(artifacts)
}

#[cfg(test)]
mod test {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn artifacts_order_and_strategies() {
		let artifacts = plan_artifacts(ProjectType::Vue3Js, true).unwrap();

		let planned: Vec<(&str, Strategy)> = artifacts
			.iter()
			.map(|a| (a.path.to_str().unwrap(), a.content.strategy()))
			.collect();

		assert_eq!(
			planned,
			[
				(PRETTIER_CONFIG_FILE, Strategy::Overwrite),
				(PRETTIER_IGNORE_FILE, Strategy::Overwrite),
				(VSCODE_SETTINGS_FILE, Strategy::DeepMerge),
				(VSCODE_EXTENSIONS_FILE, Strategy::ListUnion),
				(LEFTHOOK_CONFIG_FILE, Strategy::ReplaceIfDifferent),
			]
		);

		assert_eq!(plan_artifacts(ProjectType::Vue3Js, false).unwrap().len(), 4);
	}
}
