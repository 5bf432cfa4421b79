use std::{
	env::current_dir,
	fs::{create_dir_all, read_to_string},
	io::{self, Write},
};

use serde::de::DeserializeOwned;

use crate::*;

/// Reads and parses a file that may or may not exist.
///
/// A missing file is [`Existing::Absent`]. Any other read error, or a parsing error, becomes [`Existing::Unreadable`] so that the caller can regenerate the file.
pub fn read_existing<T, F>(path: &Path, parse: F) -> Existing<T>
where
	F: FnOnce(&str) -> Result<T, String>,
{
	let contents = match read_to_string(path) {
		Ok(contents) => contents,
		Err(e) if e.kind() == io::ErrorKind::NotFound => return Existing::Absent,
		Err(e) => {
			return Existing::Unreadable(ReadFailure::Io {
				path: path.to_path_buf(),
				source: e,
			});
		}
	};

	match parse(&contents) {
		Ok(parsed) => Existing::Parsed(parsed),
		Err(error) => Existing::Unreadable(ReadFailure::Parse {
			path: path.to_path_buf(),
			error,
		}),
	}
}

pub(crate) fn parse_json<T: DeserializeOwned>(contents: &str) -> Result<T, String> {
	serde_json::from_str(contents).map_err(|e| e.to_string())
}

pub fn deserialize_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
	let contents = read_to_string(path).map_err(|e| AppError::ReadError {
		path: path.to_path_buf(),
		source: e,
	})?;

	serde_json::from_str(&contents).map_err(|e| AppError::DeserializationError {
		file: path.to_path_buf(),
		error: e.to_string(),
	})
}

/// Serializes an item as JSON with two spaces of indentation and a trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(item: &T, target: &Path) -> AppResult<String> {
	let mut content =
		serde_json::to_string_pretty(item).map_err(|e| AppError::SerializationError {
			target: target.display().to_string(),
			error: e.to_string(),
		})?;

	content.push('\n');

	Ok(content)
}

pub fn write_file(path: &Path, content: &str) -> AppResult<()> {
	let mut file = std::fs::File::create(path).map_err(|e| AppError::WriteError {
		path: path.to_path_buf(),
		source: e,
	})?;

	file.write_all(content.as_bytes())
		.map_err(|e| AppError::WriteError {
			path: path.to_path_buf(),
			source: e,
		})
}

pub(crate) fn create_parent_dirs(path: &Path) -> AppResult<()> {
	match path.parent() {
		Some(parent) => create_all_dirs(parent),
		None => Ok(()),
	}
}

pub(crate) fn create_all_dirs(path: &Path) -> AppResult<()> {
	if path.as_os_str().is_empty() {
		return Ok(());
	}

	create_dir_all(path).map_err(|e| AppError::DirCreation {
		path: path.to_path_buf(),
		source: e,
	})
}

pub(crate) fn get_cwd() -> AppResult<PathBuf> {
	current_dir().map_err(|e| generic_error!("Could not get the current working directory: {e}"))
}

#[cfg(test)]
mod test {
	use std::fs::remove_dir_all;

	use pretty_assertions::assert_eq;

	use super::*;

	fn reset(dir: &Path) {
		if dir.exists() {
			remove_dir_all(dir).unwrap();
		}
		create_dir_all(dir).unwrap();
	}

	#[test]
	fn missing_files_are_absent() {
		let existing: Existing<String> = read_existing(
			Path::new("tests/output/fs_tests/does_not_exist.json"),
			|c| Ok(c.to_string()),
		);

		assert!(matches!(existing, Existing::Absent));
	}

	#[test]
	fn parse_errors_are_recoverable() {
		let dir = PathBuf::from("tests/output/fs_tests/parse_errors");
		reset(&dir);

		let path = dir.join("settings.json");
		write_file(&path, "{ \"editor.tabSize\": ").unwrap();

		let existing: Existing<IndexMap<String, Value>> = read_existing(&path, parse_json);

		assert!(matches!(
			existing,
			Existing::Unreadable(ReadFailure::Parse { .. })
		));
	}

	#[test]
	fn pretty_json_ends_with_newline() {
		let content = to_pretty_json(&serde_json::json!({ "a": [1] }), Path::new("a.json")).unwrap();

		assert_eq!(content, "{\n  \"a\": [\n    1\n  ]\n}\n");
	}
}
