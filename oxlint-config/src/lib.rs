mod plugins;
pub use plugins::*;

use indexmap::{IndexMap, IndexSet};
#[cfg(feature = "schemars")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The schema shipped with the `oxlint` npm package.
pub const LOCAL_SCHEMA: &str = "./node_modules/oxlint/configuration_schema.json";

/// A `.oxlintrc.json` file. See more: https://oxc.rs/docs/guide/usage/linter/config-file-reference.html
///
/// Every collection keeps the order in which it was read, so a config rendered from a template lists its plugins and rules in the same order as the template.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct OxlintConfig {
	#[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
	pub schema: Option<String>,

	/// Other config files to inherit from, resolved relative to this one.
	#[serde(skip_serializing_if = "IndexSet::is_empty")]
	pub extends: IndexSet<String>,

	#[serde(skip_serializing_if = "IndexSet::is_empty")]
	pub plugins: IndexSet<Plugin>,

	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub env: IndexMap<String, bool>,

	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub globals: IndexMap<String, GlobalValue>,

	/// Severity for whole rule categories. Entries in `rules` take precedence.
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub categories: IndexMap<Category, RuleEnforcement>,

	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub ignore_patterns: Vec<String>,

	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub rules: IndexMap<String, RuleSetting>,

	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub overrides: Vec<Override>,

	/// Keys not modeled here, such as `settings`. They are written back untouched.
	#[serde(flatten, skip_serializing_if = "IndexMap::is_empty")]
	pub extras: IndexMap<String, Value>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum GlobalValue {
	Readonly,
	Writeable,
	Off,
}

/// The rule categories of oxlint.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Correctness,
	Nursery,
	Pedantic,
	Perf,
	Restriction,
	Style,
	Suspicious,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum RuleEnforcement {
	#[serde(alias = "allow")]
	Off,
	Warn,
	#[serde(alias = "deny")]
	Error,
}

/// A rule entry: either a bare severity (`"warn"`) or a severity followed by the rule options (`["error", "always"]`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(untagged)]
pub enum RuleSetting {
	Simple(RuleEnforcement),
	WithOptions(RuleEnforcement, Value),
}

impl RuleSetting {
	pub const fn enforcement(&self) -> RuleEnforcement {
		match self {
			Self::Simple(enforcement) | Self::WithOptions(enforcement, _) => *enforcement,
		}
	}
}

/// Settings that only apply to the files matched by `files`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(default)]
pub struct Override {
	pub files: Vec<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub plugins: Option<IndexSet<Plugin>>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub env: Option<IndexMap<String, bool>>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub rules: Option<IndexMap<String, RuleSetting>>,
}

impl OxlintConfig {
	/// Checks whether a plugin is enabled, either by its known name or as a custom plugin.
	pub fn has_plugin(&self, name: &str) -> bool {
		self.plugins.iter().any(|p| p.as_str() == name)
	}

	/// The severity configured for a rule, ignoring categories and overrides.
	pub fn rule_enforcement(&self, rule: &str) -> Option<RuleEnforcement> {
		self.rules.get(rule).map(RuleSetting::enforcement)
	}
}
