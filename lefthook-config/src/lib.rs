mod emit;
pub use emit::*;

use indexmap::IndexMap;
#[cfg(feature = "schemars")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Runs the `lint` script with whichever package manager is available.
pub const LINT_COMMAND: &str = "npm run lint || pnpm run lint || yarn run lint";

/// Runs the `format:check` script with whichever package manager is available.
pub const FORMAT_CHECK_COMMAND: &str =
	"npm run format:check || pnpm run format:check || yarn run format:check";

/// Configuration settings for [`lefthook`](https://lefthook.dev/configuration/)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct LefthookConfig {
	/// The git hooks to manage, keyed by the git hook name (i.e. `pre-commit`).
	#[serde(flatten)]
	pub hooks: IndexMap<String, Hook>,
}

/// The definition for a single git hook. https://lefthook.dev/configuration/Hook.html
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(default)]
pub struct Hook {
	/// Whether the commands of this hook should run in parallel. https://lefthook.dev/configuration/parallel.html
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parallel: Option<bool>,

	/// Stop running commands if one of them fails. https://lefthook.dev/configuration/piped.html
	#[serde(skip_serializing_if = "Option::is_none")]
	pub piped: Option<bool>,

	/// The commands to execute, keyed by their name. https://lefthook.dev/configuration/Commands.html
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub commands: IndexMap<String, Command>,
}

/// A command executed by a hook. https://lefthook.dev/configuration/Commands.html
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(default)]
pub struct Command {
	/// The shell command to run. https://lefthook.dev/configuration/run.html
	pub run: String,

	/// A glob to filter the files passed to the command. https://lefthook.dev/configuration/glob.html
	#[serde(skip_serializing_if = "Option::is_none")]
	pub glob: Option<String>,

	/// The directory where the command should be executed. https://lefthook.dev/configuration/root.html
	#[serde(skip_serializing_if = "Option::is_none")]
	pub root: Option<String>,

	/// Tags used to group or skip commands. https://lefthook.dev/configuration/tags.html
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,

	/// Stage the files that were changed by the command. https://lefthook.dev/configuration/stage_fixed.html
	#[serde(skip_serializing_if = "Option::is_none")]
	pub stage_fixed: Option<bool>,
}

impl Command {
	pub fn new(run: impl Into<String>) -> Self {
		Self {
			run: run.into(),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_stage_fixed(mut self) -> Self {
		self.stage_fixed = Some(true);
		self
	}
}

impl LefthookConfig {
	/// The hooks used by `snail-codelint`: lint and format check before each commit, lint before each push.
	pub fn lint_and_format() -> Self {
		let mut pre_commit_commands = IndexMap::new();
		pre_commit_commands.insert(
			"lint".to_string(),
			Command::new(LINT_COMMAND).with_stage_fixed(),
		);
		pre_commit_commands.insert(
			"format".to_string(),
			Command::new(FORMAT_CHECK_COMMAND).with_stage_fixed(),
		);

		let mut pre_push_commands = IndexMap::new();
		pre_push_commands.insert("lint".to_string(), Command::new(LINT_COMMAND));

		let mut hooks = IndexMap::new();
		hooks.insert(
			"pre-commit".to_string(),
			Hook {
				parallel: Some(true),
				piped: None,
				commands: pre_commit_commands,
			},
		);
		hooks.insert(
			"pre-push".to_string(),
			Hook {
				parallel: Some(true),
				piped: None,
				commands: pre_push_commands,
			},
		);

		Self { hooks }
	}

	/// Serializes this configuration with the given emitter.
	pub fn to_yaml_with<E: HookEmitter + ?Sized>(&self, emitter: &E) -> Result<String, EmitError> {
		emitter.emit(self)
	}
}
