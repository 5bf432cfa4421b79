use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

fn config_map(value: Value) -> ConfigMap {
	serde_json::from_value(value).expect("Failed to build the config map")
}

fn to_json(map: &ConfigMap) -> String {
	serde_json::to_string(map).unwrap()
}

fn parse_failure() -> ReadFailure {
	ReadFailure::Parse {
		path: PathBuf::from(".vscode/settings.json"),
		error: "expected value at line 1 column 1".to_string(),
	}
}

#[test]
fn desired_scalar_replaces_existing_scalar_or_mapping() {
	let existing = config_map(json!({ "editor.tabSize": 4, "a.b": 1 }));
	let desired = config_map(json!({ "editor.tabSize": 2, "a.b": { "c": 1 } }));

	let merged = merge_settings(desired, Existing::Parsed(existing));

	assert_eq!(merged.outcome, MergeOutcome::WrittenMerged);
	assert_eq!(
		to_json(&merged.value),
		r#"{"editor.tabSize":2,"a.b":{"c":1}}"#
	);
}

#[test]
fn nested_mappings_are_merged() {
	let existing = config_map(json!({
		"files.exclude": { "**/.git": true, "dist": true },
		"custom.setting": "kept"
	}));
	let desired = config_map(json!({
		"files.exclude": { "dist": false, "node_modules": true },
		"editor.formatOnSave": true
	}));

	let merged = merge_settings(desired, Existing::Parsed(existing));

	assert_eq!(merged.outcome, MergeOutcome::WrittenMerged);
	assert_eq!(
		Value::from(ConfigValue::Map(merged.value)),
		json!({
			"files.exclude": { "**/.git": true, "dist": false, "node_modules": true },
			"custom.setting": "kept",
			"editor.formatOnSave": true
		})
	);
}

#[test]
fn existing_key_order_is_preserved() {
	let existing = config_map(json!({ "z": 1, "a": 1, "m": 1 }));
	let desired = config_map(json!({ "a": 2, "new": 1 }));

	let merged = merge_settings(desired, Existing::Parsed(existing));

	let keys: Vec<&str> = merged.value.keys().map(String::as_str).collect();

	assert_eq!(keys, ["z", "a", "m", "new"]);
}

#[test]
fn settings_merge_is_idempotent() {
	let desired = config_map(json!({
		"editor.formatOnSave": true,
		"[vue]": { "editor.defaultFormatter": "esbenp.prettier-vscode" }
	}));

	let first = merge_settings(
		desired.clone(),
		Existing::Parsed(config_map(json!({ "user.key": [1, 2] }))),
	);
	assert_eq!(first.outcome, MergeOutcome::WrittenMerged);

	let second = merge_settings(desired, Existing::Parsed(first.value.clone()));

	assert_eq!(second.outcome, MergeOutcome::Unchanged);
	assert_eq!(second.value, first.value);
}

#[test]
fn reordered_lists_are_not_a_change() {
	let existing = config_map(json!({ "eslint.validate": ["vue", "javascript"] }));
	let desired = config_map(json!({ "eslint.validate": ["javascript", "vue"] }));

	let merged = merge_settings(desired, Existing::Parsed(existing));

	assert_eq!(merged.outcome, MergeOutcome::Unchanged);
}

#[test]
fn numbers_are_compared_by_value() {
	let existing = config_map(json!({ "editor.tabSize": 2.0, "editor.rulers": [80.0, 120] }));
	let desired = config_map(json!({ "editor.tabSize": 2, "editor.rulers": [120, 80] }));

	let merged = merge_settings(desired, Existing::Parsed(existing));

	assert_eq!(merged.outcome, MergeOutcome::Unchanged);

	let changed = merge_settings(
		config_map(json!({ "editor.tabSize": 2 })),
		Existing::Parsed(config_map(json!({ "editor.tabSize": 2.5 }))),
	);

	assert_eq!(changed.outcome, MergeOutcome::WrittenMerged);
}

#[test]
fn key_order_does_not_affect_equality() {
	let left = ConfigValue::from(json!({ "a": 1, "b": { "c": [true, null] } }));
	let right = ConfigValue::from(json!({ "b": { "c": [null, true] }, "a": 1 }));

	assert!(left.semantic_eq(&right));
	assert!(!left.semantic_eq(&ConfigValue::from(json!({ "a": "1" }))));
}

#[test]
fn absent_and_unreadable_settings() {
	let desired = config_map(json!({ "editor.tabSize": 2 }));

	let fresh = merge_settings(desired.clone(), Existing::Absent);
	assert_eq!(fresh.outcome, MergeOutcome::WrittenFresh);
	assert_eq!(fresh.value, desired);

	let fallback = merge_settings(desired.clone(), Existing::Unreadable(parse_failure()));
	assert_eq!(fallback.outcome, MergeOutcome::WrittenFallback);
	assert_eq!(fallback.value, desired);
}

#[test]
fn missing_recommendations_are_appended() {
	let existing = Extensions::new(["dbaeumer.vscode-eslint"]);
	let desired = Extensions::new(["dbaeumer.vscode-eslint", "Vue.volar"]);

	let merged = union_recommendations(desired.clone(), Existing::Parsed(existing));

	assert_eq!(merged.outcome, MergeOutcome::WrittenMerged);
	assert_eq!(merged.value.recommendations, desired.recommendations);

	let again = union_recommendations(desired, Existing::Parsed(merged.value.clone()));

	assert_eq!(again.outcome, MergeOutcome::Unchanged);
	assert_eq!(again.value, merged.value);
}

#[test]
fn recommendations_are_never_removed() {
	let existing = Extensions::new(["someone.custom", "esbenp.prettier-vscode"]);
	let desired = Extensions::new(["oxc.oxc-vscode", "esbenp.prettier-vscode"]);

	let merged = union_recommendations(desired, Existing::Parsed(existing.clone()));

	let ids: Vec<&str> = merged
		.value
		.recommendations
		.iter()
		.map(String::as_str)
		.collect();

	assert_eq!(
		ids,
		[
			"someone.custom",
			"esbenp.prettier-vscode",
			"oxc.oxc-vscode"
		]
	);
	assert!(existing
		.recommendations
		.iter()
		.all(|id| merged.value.contains(id)));
}

#[test]
fn unreadable_extensions_fall_back_to_desired() {
	let desired = Extensions::new(["oxc.oxc-vscode"]);

	let merged = union_recommendations(desired.clone(), Existing::Unreadable(parse_failure()));

	assert_eq!(merged.outcome, MergeOutcome::WrittenFallback);
	assert_eq!(merged.value, desired);
}

#[test]
fn text_is_replaced_only_when_different() {
	let desired = "pre-commit:\n  parallel: true\n".to_string();

	let same = replace_if_different(
		desired.clone(),
		Existing::Parsed(format!("\n{desired}\n\n")),
	);
	assert_eq!(same.outcome, MergeOutcome::Unchanged);

	let different = replace_if_different(
		desired.clone(),
		Existing::Parsed("pre-push:\n  commands: {}\n".to_string()),
	);
	assert_eq!(different.outcome, MergeOutcome::WrittenReplaced);
	assert_eq!(different.value, desired);

	let fresh = replace_if_different(desired.clone(), Existing::Absent);
	assert_eq!(fresh.outcome, MergeOutcome::WrittenFresh);
}

#[test]
fn overwrite_always_writes() {
	let merged = overwrite("{}\n".to_string());

	assert_eq!(merged.outcome, MergeOutcome::WrittenFresh);
	assert!(merged.changed());
}

#[test]
fn outcome_labels() {
	assert_eq!(MergeOutcome::Unchanged.to_string(), "unchanged");
	assert_eq!(MergeOutcome::WrittenFresh.to_string(), "generated");
	assert_eq!(MergeOutcome::WrittenMerged.to_string(), "updated");
	assert_eq!(
		MergeOutcome::WrittenReplaced.to_string(),
		"replaced (local changes discarded)"
	);
	assert!(MergeOutcome::WrittenReplaced.is_write());
	assert!(!MergeOutcome::Unchanged.is_write());
}
