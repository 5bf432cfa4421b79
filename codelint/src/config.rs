use figment::{
	Figment, Metadata, Profile, Provider,
	providers::{Env, Format, Json, Serialized, Toml, Yaml},
	value::{Dict, Map},
};

use crate::*;

/// The names of the config files that are picked up automatically from the project root, in order of priority.
pub const DEFAULT_CONFIG_FILES: [&str; 4] = [
	"codelint.toml",
	"codelint.yaml",
	"codelint.yml",
	"codelint.json",
];

/// The prefix for the environment variables that can override the config.
pub const ENV_PREFIX: &str = "CODELINT_";

/// The settings that can be stored in a config file or passed via environment variables.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
	/// The kind of project to configure. If unset, it gets asked interactively.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub project_type: Option<ProjectType>,

	/// The package manager used to install the dependencies. If unset, it gets asked interactively.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub package_manager: Option<PackageManager>,

	/// Whether to generate the git hooks with lefthook.
	pub lefthook: bool,

	/// Whether to install the dev dependencies.
	pub install: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			project_type: None,
			package_manager: None,
			lefthook: true,
			install: true,
		}
	}
}

impl Provider for Config {
	fn metadata(&self) -> Metadata {
		Metadata::named("snail-codelint defaults")
	}

	fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
		Serialized::defaults(self).data()
	}
}

/// The values coming from the command line. Unset values do not override the other layers.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ConfigOverrides {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub project_type: Option<ProjectType>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub package_manager: Option<PackageManager>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub lefthook: Option<bool>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub install: Option<bool>,
}

/// Where to look for a config file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConfigSource {
	/// The first of [`DEFAULT_CONFIG_FILES`] that exists in the project root.
	#[default]
	Discover,
	File(PathBuf),
	None,
}

fn discover_config_file(project_root: &Path) -> Option<PathBuf> {
	DEFAULT_CONFIG_FILES
		.iter()
		.map(|name| project_root.join(name))
		.find(|path| path.is_file())
}

fn file_provider(figment: Figment, path: &Path) -> AppResult<Figment> {
	let extension = path
		.extension()
		.and_then(|ext| ext.to_str())
		.unwrap_or_default();

	let figment = match extension {
		"toml" => figment.merge(Toml::file(path)),
		"yaml" | "yml" => figment.merge(Yaml::file(path)),
		"json" => figment.merge(Json::file(path)),
		_ => {
			return Err(generic_error!(
				"Unsupported config format for `{}`. Use a toml, yaml or json file",
				path.display()
			));
		}
	};

	Ok(figment)
}

impl Config {
	/// Builds the layered configuration: defaults, then the config file, then the `CODELINT_` environment variables, then the command line.
	pub fn figment(
		project_root: &Path,
		source: &ConfigSource,
		overrides: &ConfigOverrides,
	) -> AppResult<Figment> {
		let mut figment = Figment::from(Self::default());

		let config_file = match source {
			ConfigSource::Discover => discover_config_file(project_root),
			ConfigSource::File(path) => {
				if !path.is_file() {
					return Err(generic_error!(
						"The config file `{}` does not exist",
						path.display()
					));
				}

				Some(path.clone())
			}
			ConfigSource::None => None,
		};

		if let Some(path) = config_file {
			debug!(path = %path.display(), "Using config file");
			figment = file_provider(figment, &path)?;
		}

		Ok(figment
			.merge(Env::prefixed(ENV_PREFIX))
			.merge(Serialized::globals(overrides)))
	}

	pub fn load(
		project_root: &Path,
		source: &ConfigSource,
		overrides: &ConfigOverrides,
	) -> AppResult<Self> {
		let config: Self = Self::figment(project_root, source, overrides)?.extract()?;

		debug!(?config, "Resolved config");

		Ok(config)
	}
}
