use indexmap::{IndexMap, IndexSet};
#[cfg(feature = "schemars")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The contents of a `.vscode/extensions.json` file. See more: https://code.visualstudio.com/docs/configure/extensions/extension-marketplace#_workspace-recommended-extensions
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct Extensions {
	/// The identifiers of the extensions recommended for this workspace, in the `publisher.name` format.
	pub recommendations: IndexSet<String>,

	/// Extensions that should not be recommended for this workspace.
	#[serde(skip_serializing_if = "IndexSet::is_empty")]
	pub unwanted_recommendations: IndexSet<String>,

	#[serde(flatten)]
	pub extras: IndexMap<String, Value>,
}

impl Extensions {
	pub fn new<I, S>(recommendations: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			recommendations: recommendations.into_iter().map(Into::into).collect(),
			..Default::default()
		}
	}

	/// Adds the recommendations that are not already present, keeping the order in which they were first seen.
	///
	/// Matching is case-sensitive. Returns `true` if at least one new recommendation was added.
	pub fn extend_recommendations<I, S>(&mut self, recommendations: I) -> bool
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let initial_len = self.recommendations.len();

		self.recommendations
			.extend(recommendations.into_iter().map(Into::into));

		self.recommendations.len() != initial_len
	}

	pub fn contains(&self, id: &str) -> bool {
		self.recommendations.contains(id)
	}
}
