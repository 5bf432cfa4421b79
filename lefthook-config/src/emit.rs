use std::{
	borrow::Cow,
	fmt::{self, Write},
};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::LefthookConfig;

/// Keys that lefthook expects in snake_case. Every other underscore is rewritten to a hyphen.
pub const KEYS_WITH_UNDERSCORE: [&str; 1] = ["stage_fixed"];

/// The kinds of errors that can occur while serializing a hook configuration.
#[derive(Debug, Error)]
pub enum EmitError {
	#[error("Could not convert the hook configuration: {0}")]
	Conversion(#[from] serde_json::Error),

	#[error("Could not serialize the hook configuration to yaml: {0}")]
	Yaml(#[from] serde_yaml_ng::Error),

	#[error("The top level of a hook configuration must be a mapping")]
	NotAMapping,

	#[error("Failed to write the hook configuration")]
	Format(#[from] fmt::Error),
}

/// Turns a [`LefthookConfig`] into the text of a `lefthook.yml` file.
pub trait HookEmitter {
	fn emit(&self, config: &LefthookConfig) -> Result<String, EmitError>;
}

/// A narrow YAML printer whose output is stable byte for byte.
///
/// - Mappings become nested `key: value` lines indented by two spaces, and empty mappings become `{}`.
/// - Sequences become `- item` lines. Mapping items are printed as a lone `-` followed by the nested block.
/// - Multi-line strings use the `|` block literal indicator.
/// - Single-line strings are quoted only when they contain `:` and do not contain `||`.
/// - Keys have their underscores rewritten to hyphens, except for [`KEYS_WITH_UNDERSCORE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalYaml;

impl HookEmitter for MinimalYaml {
	fn emit(&self, config: &LefthookConfig) -> Result<String, EmitError> {
		let tree = normalized_tree(config)?;

		render_mapping(&tree)
	}
}

/// Prints the same normalized tree as [`MinimalYaml`], but through `serde_yaml_ng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeYaml;

impl HookEmitter for SerdeYaml {
	fn emit(&self, config: &LefthookConfig) -> Result<String, EmitError> {
		let tree = normalized_tree(config)?;

		Ok(serde_yaml_ng::to_string(&Value::Object(tree))?)
	}
}

pub fn normalize_key(key: &str) -> Cow<'_, str> {
	if KEYS_WITH_UNDERSCORE.contains(&key) || !key.contains('_') {
		Cow::Borrowed(key)
	} else {
		Cow::Owned(key.replace('_', "-"))
	}
}

fn normalize_value(value: Value) -> Value {
	match value {
		Value::Object(map) => Value::Object(normalize_map(map)),
		Value::Array(items) => Value::Array(items.into_iter().map(normalize_value).collect()),
		other => other,
	}
}

fn normalize_map(map: Map<String, Value>) -> Map<String, Value> {
	map.into_iter()
		.map(|(key, value)| (normalize_key(&key).into_owned(), normalize_value(value)))
		.collect()
}

fn normalized_tree(config: &LefthookConfig) -> Result<Map<String, Value>, EmitError> {
	match serde_json::to_value(config)? {
		Value::Object(map) => Ok(normalize_map(map)),
		_ => Err(EmitError::NotAMapping),
	}
}

/// Renders an arbitrary mapping with the rules described in [`MinimalYaml`].
pub fn render_mapping(map: &Map<String, Value>) -> Result<String, EmitError> {
	let mut output = String::new();

	write_mapping(&mut output, map, 0)?;

	Ok(output)
}

fn write_mapping(out: &mut String, map: &Map<String, Value>, indent: usize) -> fmt::Result {
	let spaces = "  ".repeat(indent);

	for (key, value) in map {
		let key = normalize_key(key);

		match value {
			Value::Object(inner) if inner.is_empty() => writeln!(out, "{spaces}{key}: {{}}")?,
			Value::Object(inner) => {
				writeln!(out, "{spaces}{key}:")?;
				write_mapping(out, inner, indent + 1)?;
			}
			Value::Array(items) => {
				writeln!(out, "{spaces}{key}:")?;

				for item in items {
					if let Value::Object(inner) = item {
						writeln!(out, "{spaces}  -")?;
						write_mapping(out, inner, indent + 2)?;
					} else {
						writeln!(out, "{spaces}  - {}", plain_scalar(item))?;
					}
				}
			}
			Value::String(text) if text.contains('\n') => {
				writeln!(out, "{spaces}{key}: |")?;

				for line in text.split('\n') {
					writeln!(out, "{spaces}  {line}")?;
				}
			}
			Value::String(text) if needs_quotes(text) => {
				writeln!(out, "{spaces}{key}: \"{}\"", escape_quoted(text))?;
			}
			other => writeln!(out, "{spaces}{key}: {}", plain_scalar(other))?,
		}
	}

	Ok(())
}

fn needs_quotes(text: &str) -> bool {
	text.contains(':') && !text.contains("||")
}

fn escape_quoted(text: &str) -> Cow<'_, str> {
	if text.contains(['"', '\\']) {
		Cow::Owned(text.replace('\\', "\\\\").replace('"', "\\\""))
	} else {
		Cow::Borrowed(text)
	}
}

fn plain_scalar(value: &Value) -> Cow<'_, str> {
	match value {
		Value::String(text) => Cow::Borrowed(text),
		Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
		Value::Null => Cow::Borrowed("null"),
		Value::Bool(b) => Cow::Owned(b.to_string()),
		Value::Number(n) => Cow::Owned(n.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	fn render(value: Value) -> String {
		match value {
			Value::Object(map) => render_mapping(&map).unwrap(),
			_ => unreachable!(),
		}
	}

	#[test]
	fn rewrites_underscores_except_stage_fixed() {
		assert_eq!(normalize_key("pre_commit"), "pre-commit");
		assert_eq!(normalize_key("stage_fixed"), "stage_fixed");
		assert_eq!(normalize_key("run"), "run");
	}

	#[test]
	fn quotes_colons_unless_chained() {
		let output = render(json!({
			"a": "pnpm run format:check",
			"b": "npm run format:check || pnpm run format:check",
			"c": "plain"
		}));

		assert_eq!(
			output,
			"a: \"pnpm run format:check\"\nb: npm run format:check || pnpm run format:check\nc: plain\n"
		);
	}

	#[test]
	fn block_literal_for_multiline_strings() {
		let output = render(json!({ "run": "echo one\necho two" }));

		assert_eq!(output, "run: |\n  echo one\n  echo two\n");
	}

	#[test]
	fn sequences_and_empty_mappings() {
		let output = render(json!({
			"skip": {},
			"tags": ["frontend", "lint"],
			"items": [{ "run_now": true }]
		}));

		assert_eq!(
			output,
			"skip: {}\ntags:\n  - frontend\n  - lint\nitems:\n  -\n    run-now: true\n"
		);
	}
}
