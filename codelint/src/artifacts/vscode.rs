use crate::{artifacts::*, templates::*, *};

pub(crate) fn vscode_artifacts(project_type: ProjectType) -> AppResult<Vec<PlannedArtifact>> {
	Ok(vec![
		PlannedArtifact::new(
			VSCODE_SETTINGS_FILE,
			DesiredContent::DeepMerge(vscode_settings_template(project_type)?),
		),
		PlannedArtifact::new(
			VSCODE_EXTENSIONS_FILE,
			DesiredContent::ListUnion(vscode_extensions_template(project_type)?),
		),
	])
}
