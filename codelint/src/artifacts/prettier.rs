use crate::{artifacts::*, templates::*, *};

/// How trailing commas are printed in multi-line structures.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
	All,
	Es5,
	None,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArrowParens {
	Always,
	Avoid,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
	Lf,
	Crlf,
	Cr,
	Auto,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HtmlWhitespaceSensitivity {
	Css,
	Strict,
	Ignore,
}

/// The contents of a `.prettierrc.json` file. See more: https://prettier.io/docs/options
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct PrettierConfig {
	/// Print semicolons at the ends of statements.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub semi: Option<bool>,

	/// Use single quotes instead of double quotes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub single_quote: Option<bool>,

	/// The number of spaces per indentation level.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tab_width: Option<u8>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub trailing_comma: Option<TrailingComma>,

	/// The line length that the printer will wrap on.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub print_width: Option<u16>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub arrow_parens: Option<ArrowParens>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub end_of_line: Option<EndOfLine>,

	/// Use single quotes instead of double quotes in JSX.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jsx_single_quote: Option<bool>,

	/// Put the `>` of a multi-line element at the end of the last line.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bracket_same_line: Option<bool>,

	/// Indent the code inside `<script>` and `<style>` tags in Vue files.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub vue_indent_script_and_style: Option<bool>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub html_whitespace_sensitivity: Option<HtmlWhitespaceSensitivity>,

	#[serde(flatten)]
	pub extras: IndexMap<String, Value>,
}

pub(crate) fn prettier_artifacts(project_type: ProjectType) -> AppResult<Vec<PlannedArtifact>> {
	let config = prettier_template(project_type)?;

	Ok(vec![
		PlannedArtifact::new(
			PRETTIER_CONFIG_FILE,
			DesiredContent::Overwrite(to_pretty_json(
				&config,
				Path::new(PRETTIER_CONFIG_FILE),
			)?),
		),
		PlannedArtifact::new(
			PRETTIER_IGNORE_FILE,
			DesiredContent::Overwrite(PRETTIER_IGNORE.to_string()),
		),
	])
}
