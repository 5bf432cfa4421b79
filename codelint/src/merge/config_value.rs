use std::fmt::Write;

use serde_json::Number;

use crate::*;

/// An ordered mapping of keys to configuration values. Insertion order is preserved on output.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// A parsed configuration document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ConfigValue {
	Scalar(Scalar),
	List(Vec<ConfigValue>),
	Map(ConfigMap),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
	Null,
	Bool(bool),
	Number(Number),
	String(String),
}

impl ConfigValue {
	pub fn string(value: impl Into<String>) -> Self {
		Self::Scalar(Scalar::String(value.into()))
	}

	/// Compares two values after normalizing them: mapping keys are sorted, the elements of every list are sorted as well, and numbers are compared by value.
	///
	/// This means that two lists with the same elements in a different order are considered equal.
	pub fn semantic_eq(&self, other: &Self) -> bool {
		self.canonical() == other.canonical()
	}

	fn canonical(&self) -> String {
		let mut out = String::new();
		self.write_canonical(&mut out);
		out
	}

	fn write_canonical(&self, out: &mut String) {
		match self {
			// Numbers are compared by value, so `2` and `2.0` are the same setting
			Self::Scalar(Scalar::Number(number)) => match number.as_f64() {
				Some(float) => {
					let _ = write!(out, "{float:?}");
				}
				None => {
					let _ = write!(out, "{number}");
				}
			},
			Self::Scalar(scalar) => {
				let _ = write!(out, "{}", Value::from(scalar.clone()));
			}
			Self::List(items) => {
				let mut items: Vec<String> = items.iter().map(Self::canonical).collect();
				items.sort();

				out.push('[');
				out.push_str(&items.join(","));
				out.push(']');
			}
			Self::Map(map) => write_canonical_map(map, out),
		}
	}
}

fn write_canonical_map(map: &ConfigMap, out: &mut String) {
	let mut keys: Vec<&String> = map.keys().collect();
	keys.sort();

	out.push('{');

	for (idx, key) in keys.into_iter().enumerate() {
		if idx > 0 {
			out.push(',');
		}

		let _ = write!(out, "{}:", Value::String(key.clone()));

		if let Some(value) = map.get(key) {
			value.write_canonical(out);
		}
	}

	out.push('}');
}

/// Semantic equality for whole documents. See [`ConfigValue::semantic_eq`].
pub fn maps_semantically_eq(left: &ConfigMap, right: &ConfigMap) -> bool {
	let mut left_canonical = String::new();
	let mut right_canonical = String::new();

	write_canonical_map(left, &mut left_canonical);
	write_canonical_map(right, &mut right_canonical);

	left_canonical == right_canonical
}

impl From<Value> for ConfigValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Scalar(Scalar::Null),
			Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
			Value::Number(n) => Self::Scalar(Scalar::Number(n)),
			Value::String(s) => Self::Scalar(Scalar::String(s)),
			Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
			Value::Object(map) => Self::Map(
				map.into_iter()
					.map(|(k, v)| (k, Self::from(v)))
					.collect(),
			),
		}
	}
}

impl From<Scalar> for Value {
	fn from(value: Scalar) -> Self {
		match value {
			Scalar::Null => Self::Null,
			Scalar::Bool(b) => Self::Bool(b),
			Scalar::Number(n) => Self::Number(n),
			Scalar::String(s) => Self::String(s),
		}
	}
}

impl From<ConfigValue> for Value {
	fn from(value: ConfigValue) -> Self {
		match value {
			ConfigValue::Scalar(scalar) => scalar.into(),
			ConfigValue::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			ConfigValue::Map(map) => Self::Object(
				map.into_iter()
					.map(|(k, v)| (k, Self::from(v)))
					.collect(),
			),
		}
	}
}

impl From<&str> for ConfigValue {
	fn from(value: &str) -> Self {
		Self::string(value)
	}
}
