//! The merging strategies used to reconcile the files that already exist in a project with the content that the tool wants to produce.
//!
//! Each strategy receives the desired content and the current state of the file on disk, and returns the content to keep along with a [`MergeOutcome`]. The strategies never perform I/O on their own.

mod config_value;
#[cfg(test)]
mod merge_tests;

pub use config_value::*;
use indexmap::map::Entry;
use vscode_config::Extensions;

use crate::*;

/// The state of a target file before it gets merged.
#[derive(Debug)]
pub enum Existing<T> {
	Absent,
	Parsed(T),
	/// The file exists but it could not be read or parsed.
	Unreadable(ReadFailure),
}

/// What happened (or would happen, in a dry run) to a target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeOutcome {
	/// The file already had the desired content, so it was not touched.
	Unchanged,
	/// The file was created, or overwritten without comparison.
	WrittenFresh,
	/// The existing file was combined with the desired content.
	WrittenMerged,
	/// The existing file differed from the desired content and was replaced as a whole. Local edits are lost.
	WrittenReplaced,
	/// The existing file could not be read or parsed, so it was regenerated from scratch.
	WrittenFallback,
}

impl MergeOutcome {
	pub const fn is_write(self) -> bool {
		!matches!(self, Self::Unchanged)
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Unchanged => "unchanged",
			Self::WrittenFresh => "generated",
			Self::WrittenMerged => "updated",
			Self::WrittenReplaced => "replaced (local changes discarded)",
			Self::WrittenFallback => "regenerated (existing file unreadable)",
		}
	}
}

impl Display for MergeOutcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The result of a merging strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged<T> {
	pub value: T,
	pub outcome: MergeOutcome,
}

impl<T> Merged<T> {
	pub const fn new(value: T, outcome: MergeOutcome) -> Self {
		Self { value, outcome }
	}

	pub const fn changed(&self) -> bool {
		self.outcome.is_write()
	}
}

/// The way in which a target file is reconciled with its desired content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
	/// Recursive merge of mappings, where the desired values win.
	DeepMerge,
	/// Union of the recommended extensions.
	ListUnion,
	/// Whole-file replacement, only if the text differs.
	ReplaceIfDifferent,
	/// Unconditional overwrite.
	Overwrite,
}

impl Strategy {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::DeepMerge => "deep merge",
			Self::ListUnion => "list union",
			Self::ReplaceIfDifferent => "replace if different",
			Self::Overwrite => "overwrite",
		}
	}
}

impl Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

fn merge_existing<T>(
	desired: T,
	existing: Existing<T>,
	merge: impl FnOnce(T, T) -> Merged<T>,
) -> Merged<T> {
	match existing {
		Existing::Absent => Merged::new(desired, MergeOutcome::WrittenFresh),
		Existing::Unreadable(_) => Merged::new(desired, MergeOutcome::WrittenFallback),
		Existing::Parsed(current) => merge(current, desired),
	}
}

/// Merges `incoming` into `target` recursively.
///
/// Mappings present on both sides are merged key by key. Everything else (scalars, lists, or a mapping meeting a non-mapping) is replaced by the incoming value. Keys that only exist in `target` are kept in place, new keys are appended at the end.
pub fn deep_merge(target: &mut ConfigMap, incoming: ConfigMap) {
	for (key, incoming_value) in incoming {
		match target.entry(key) {
			Entry::Occupied(mut slot) => match (slot.get_mut(), incoming_value) {
				(ConfigValue::Map(current), ConfigValue::Map(incoming)) => {
					deep_merge(current, incoming);
				}
				(current, incoming) => *current = incoming,
			},
			Entry::Vacant(slot) => {
				slot.insert(incoming_value);
			}
		}
	}
}

/// Deep-merges the desired settings into the existing ones.
///
/// The result is only reported as a change if it is not semantically equal to the existing document.
pub fn merge_settings(desired: ConfigMap, existing: Existing<ConfigMap>) -> Merged<ConfigMap> {
	merge_existing(desired, existing, |current, desired| {
		let mut merged = current.clone();
		deep_merge(&mut merged, desired);

		let outcome = if maps_semantically_eq(&merged, &current) {
			MergeOutcome::Unchanged
		} else {
			MergeOutcome::WrittenMerged
		};

		Merged::new(merged, outcome)
	})
}

/// Adds the desired recommendations to the existing ones. Existing recommendations are never removed or reordered.
pub fn union_recommendations(
	desired: Extensions,
	existing: Existing<Extensions>,
) -> Merged<Extensions> {
	merge_existing(desired, existing, |mut current, desired| {
		let outcome = if current.extend_recommendations(desired.recommendations) {
			MergeOutcome::WrittenMerged
		} else {
			MergeOutcome::Unchanged
		};

		Merged::new(current, outcome)
	})
}

/// Replaces the whole text if it differs from the desired one, ignoring leading and trailing whitespace.
pub fn replace_if_different(desired: String, existing: Existing<String>) -> Merged<String> {
	merge_existing(desired, existing, |current, desired| {
		if current.trim() == desired.trim() {
			Merged::new(current, MergeOutcome::Unchanged)
		} else {
			Merged::new(desired, MergeOutcome::WrittenReplaced)
		}
	})
}

/// Always writes the desired content. The existing file is never inspected.
pub const fn overwrite(desired: String) -> Merged<String> {
	Merged::new(desired, MergeOutcome::WrittenFresh)
}
