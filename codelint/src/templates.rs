//! The static configuration payloads embedded in the binary.

use oxlint_config::OxlintConfig;
use serde::de::DeserializeOwned;
use vscode_config::Extensions;

use crate::{artifacts::prettier::PrettierConfig, *};

const PRETTIER_BASE: &str = include_str!("../templates/prettier/base.json");
const PRETTIER_VUE3: &str = include_str!("../templates/prettier/vue3.json");
const PRETTIER_REACT: &str = include_str!("../templates/prettier/react.json");

const OXLINT_VUE3_TS: &str = include_str!("../templates/oxlint/vue3-ts.json");
const OXLINT_VUE3_JS: &str = include_str!("../templates/oxlint/vue3-js.json");
const OXLINT_REACT_TS: &str = include_str!("../templates/oxlint/react-ts.json");
const OXLINT_REACT_JS: &str = include_str!("../templates/oxlint/react-js.json");
const OXLINT_JAVASCRIPT: &str = include_str!("../templates/oxlint/javascript.json");

const SETTINGS_BASE: &str = include_str!("../templates/vscode/settings/base.json");
const SETTINGS_VUE3: &str = include_str!("../templates/vscode/settings/vue3.json");
const SETTINGS_REACT: &str = include_str!("../templates/vscode/settings/react.json");
const SETTINGS_TS_ADDITIONS: &str = include_str!("../templates/vscode/settings/ts-additions.json");

const EXTENSIONS_BASE: &str = include_str!("../templates/vscode/extensions/base.json");
const EXTENSIONS_VUE3: &str = include_str!("../templates/vscode/extensions/vue3.json");
const EXTENSIONS_REACT: &str = include_str!("../templates/vscode/extensions/react.json");
const EXTENSIONS_TS_ADDITIONS: &str =
	include_str!("../templates/vscode/extensions/ts-additions.json");

/// The contents of the generated `.prettierignore` file.
pub const PRETTIER_IGNORE: &str = include_str!("../templates/prettierignore");

fn parse_template<T: DeserializeOwned>(name: &str, raw: &str) -> AppResult<T> {
	serde_json::from_str(raw).map_err(|e| AppError::Template {
		name: name.to_string(),
		error: e.to_string(),
	})
}

pub fn prettier_template(project_type: ProjectType) -> AppResult<PrettierConfig> {
	let (name, raw) = match project_type.framework() {
		Framework::Vue3 => ("prettier/vue3", PRETTIER_VUE3),
		Framework::React => ("prettier/react", PRETTIER_REACT),
		Framework::None => ("prettier/base", PRETTIER_BASE),
	};

	parse_template(name, raw)
}

/// Returns `None` for plain TypeScript projects, which get their oxlint config from `oxlint --init`.
pub fn oxlint_template(project_type: ProjectType) -> AppResult<Option<OxlintConfig>> {
	let (name, raw) = match project_type {
		ProjectType::Vue3Ts => ("oxlint/vue3-ts", OXLINT_VUE3_TS),
		ProjectType::Vue3Js => ("oxlint/vue3-js", OXLINT_VUE3_JS),
		ProjectType::ReactTs => ("oxlint/react-ts", OXLINT_REACT_TS),
		ProjectType::ReactJs => ("oxlint/react-js", OXLINT_REACT_JS),
		ProjectType::Javascript => ("oxlint/javascript", OXLINT_JAVASCRIPT),
		ProjectType::Typescript => return Ok(None),
	};

	parse_template(name, raw).map(Some)
}

/// The editor settings for a project type. TypeScript projects get the TypeScript additions spread over the framework settings.
pub fn vscode_settings_template(project_type: ProjectType) -> AppResult<ConfigMap> {
	let (name, raw) = match project_type.framework() {
		Framework::Vue3 => ("vscode/settings/vue3", SETTINGS_VUE3),
		Framework::React => ("vscode/settings/react", SETTINGS_REACT),
		Framework::None => ("vscode/settings/base", SETTINGS_BASE),
	};

	let mut settings: ConfigMap = parse_template(name, raw)?;

	if project_type.is_typescript() {
		let additions: ConfigMap =
			parse_template("vscode/settings/ts-additions", SETTINGS_TS_ADDITIONS)?;

		// Shallow: nested mappings are replaced, not merged
		settings.extend(additions);
	}

	Ok(settings)
}

pub fn vscode_extensions_template(project_type: ProjectType) -> AppResult<Extensions> {
	let (name, raw) = match project_type.framework() {
		Framework::Vue3 => ("vscode/extensions/vue3", EXTENSIONS_VUE3),
		Framework::React => ("vscode/extensions/react", EXTENSIONS_REACT),
		Framework::None => ("vscode/extensions/base", EXTENSIONS_BASE),
	};

	let mut extensions: Extensions = parse_template(name, raw)?;

	if project_type.is_typescript() {
		let additions: Extensions =
			parse_template("vscode/extensions/ts-additions", EXTENSIONS_TS_ADDITIONS)?;

		extensions.extend_recommendations(additions.recommendations);
	}

	Ok(extensions)
}
