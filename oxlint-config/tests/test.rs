use indexmap::IndexSet;
use maplit::hashset;
use pretty_assertions::assert_eq;
use serde_json::json;

use oxlint_config::*;

#[test]
fn oxlint_config_from_json() -> Result<(), Box<dyn std::error::Error>> {
	let raw = json!({
		"$schema": LOCAL_SCHEMA,
		"plugins": ["vue", "unicorn", "my-plugin"],
		"env": { "browser": true, "es2022": true },
		"categories": { "correctness": "error", "suspicious": "warn" },
		"rules": {
			"no-console": "warn",
			"eqeqeq": ["error", "always"]
		},
		"ignorePatterns": ["dist"],
		"someFutureKey": 1
	});

	let config: OxlintConfig = serde_json::from_value(raw)?;

	assert_eq!(config.schema.as_deref(), Some(LOCAL_SCHEMA));

	assert_eq!(
		config.plugins.iter().cloned().collect::<std::collections::HashSet<_>>(),
		hashset! {
			Plugin::Known(Plugins::Vue),
			Plugin::Known(Plugins::Unicorn),
			Plugin::Custom("my-plugin".to_string()),
		}
	);

	assert!(config.has_plugin("vue"));
	assert!(config.has_plugin("my-plugin"));
	assert!(!config.has_plugin("react"));

	assert_eq!(config.rule_enforcement("no-console"), Some(RuleEnforcement::Warn));
	assert_eq!(
		config.rules.get("eqeqeq"),
		Some(&RuleSetting::WithOptions(RuleEnforcement::Error, json!("always")))
	);
	assert_eq!(config.rule_enforcement("no-debugger"), None);

	assert_eq!(
		config.categories.get(&Category::Correctness),
		Some(&RuleEnforcement::Error)
	);

	assert_eq!(config.extras.get("someFutureKey"), Some(&json!(1)));

	Ok(())
}

#[test]
fn collections_keep_their_order() -> Result<(), Box<dyn std::error::Error>> {
	let raw = json!({
		"plugins": ["unicorn", "eslint", "react"],
		"rules": {
			"prefer-const": "error",
			"eqeqeq": "error",
			"no-console": "warn"
		}
	});

	let config: OxlintConfig = serde_json::from_value(raw.clone())?;

	let rules: Vec<&str> = config.rules.keys().map(String::as_str).collect();

	assert_eq!(rules, ["prefer-const", "eqeqeq", "no-console"]);
	assert_eq!(serde_json::to_value(&config)?, raw);

	Ok(())
}

#[test]
fn empty_fields_are_omitted() -> Result<(), Box<dyn std::error::Error>> {
	let config = OxlintConfig {
		plugins: IndexSet::from([Plugin::Known(Plugins::Oxc)]),
		..Default::default()
	};

	let output = serde_json::to_value(&config)?;

	assert_eq!(output, json!({ "plugins": ["oxc"] }));

	Ok(())
}
