#[cfg(feature = "schemars")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The plugins for oxlint. See more: https://oxc.rs/docs/guide/usage/linter/plugins.html
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Plugins {
	Eslint,
	Import,
	Jsdoc,
	#[serde(rename = "jsx-a11y")]
	JsxA11y,
	Node,
	Oxc,
	Promise,
	React,
	#[serde(rename = "react-perf")]
	ReactPerf,
	Typescript,
	Unicorn,
	Vitest,
	Vue,
}

impl Plugins {
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Eslint => "eslint",
			Self::Import => "import",
			Self::Jsdoc => "jsdoc",
			Self::JsxA11y => "jsx-a11y",
			Self::Node => "node",
			Self::Oxc => "oxc",
			Self::Promise => "promise",
			Self::React => "react",
			Self::ReactPerf => "react-perf",
			Self::Typescript => "typescript",
			Self::Unicorn => "unicorn",
			Self::Vitest => "vitest",
			Self::Vue => "vue",
		}
	}
}

/// Ways of referring to a plugin.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(untagged)]
pub enum Plugin {
	Known(Plugins),
	Custom(String),
}

impl Plugin {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Known(variant) => variant.as_str(),
			Self::Custom(name) => name.as_str(),
		}
	}
}
