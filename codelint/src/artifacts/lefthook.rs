use lefthook_config::{LefthookConfig, MinimalYaml};

use crate::{artifacts::*, *};

/// Renders the git hooks file. Hooks are the same for every project type.
pub fn render_hooks() -> AppResult<String> {
	LefthookConfig::lint_and_format()
		.to_yaml_with(&MinimalYaml)
		.map_err(|e| AppError::SerializationError {
			target: LEFTHOOK_CONFIG_FILE.to_string(),
			error: e.to_string(),
		})
}

pub(crate) fn lefthook_artifact() -> AppResult<PlannedArtifact> {
	Ok(PlannedArtifact::new(
		LEFTHOOK_CONFIG_FILE,
		DesiredContent::ReplaceIfDifferent(render_hooks()?),
	))
}
