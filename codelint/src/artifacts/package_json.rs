use serde_json::Map;

use crate::{artifacts::*, *};

const FORMAT_GLOB: &str = "\"**/*.{js,jsx,ts,tsx,vue,json,css,scss,md}\"";

/// What happened to the scripts of the project manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptsOutcome {
	Updated,
	/// There is no `package.json` in the project root.
	MissingManifest,
}

/// The scripts added to `package.json`, in order.
pub fn package_scripts(project_type: ProjectType) -> Vec<(&'static str, String)> {
	let mut scripts = Vec::with_capacity(4);

	if project_type.is_typescript() {
		scripts.push(("lint", "oxlint --type-aware .".to_string()));
		scripts.push(("lint:basic", "oxlint .".to_string()));
	} else {
		scripts.push(("lint", "oxlint .".to_string()));
	}

	scripts.push(("format", format!("prettier --write {FORMAT_GLOB}")));
	scripts.push(("format:check", format!("prettier --check {FORMAT_GLOB}")));

	scripts
}

/// Sets the lint and format scripts in the project's `package.json`. Every other field is preserved as is.
///
/// A missing manifest is skipped with a warning. A manifest that cannot be parsed is an error, since rewriting it would destroy its contents.
pub fn update_package_scripts(
	project_root: &Path,
	project_type: ProjectType,
	dry_run: bool,
) -> AppResult<ScriptsOutcome> {
	let path = project_root.join(PACKAGE_JSON_FILE);

	if !path.is_file() {
		warn!(path = %path.display(), "No package.json found, skipping the scripts");
		return Ok(ScriptsOutcome::MissingManifest);
	}

	let mut manifest: IndexMap<String, Value> = deserialize_json(&path)?;

	let scripts = manifest
		.entry("scripts".to_string())
		.or_insert_with(|| Value::Object(Map::new()));

	let Value::Object(scripts) = scripts else {
		return Err(generic_error!(
			"The `scripts` field in `{}` is not an object",
			path.display()
		));
	};

	for (name, command) in package_scripts(project_type) {
		scripts.insert(name.to_string(), Value::String(command));
	}

	if dry_run {
		info!(path = %path.display(), "Dry run, skipping write");
	} else {
		write_file(&path, &to_pretty_json(&manifest, &path)?)?;

		info!(path = %path.display(), "Scripts updated");
	}

	Ok(ScriptsOutcome::Updated)
}
