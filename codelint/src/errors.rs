use std::{io, path::PathBuf};

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// The kinds of errors that abort the setup.
#[derive(Debug, Error)]
pub enum AppError {
	// I/O errors
	#[error("Could not create the dir `{}`: {source}", path.display())]
	DirCreation { path: PathBuf, source: io::Error },

	#[error("Failed to create or write to the file `{}`: {source}", path.display())]
	WriteError { path: PathBuf, source: io::Error },

	#[error("Could not read the contents of `{}`: {source}", path.display())]
	ReadError { path: PathBuf, source: io::Error },

	// Serde errors
	#[error("Error while serializing the content for `{target}`: {error}")]
	SerializationError { target: String, error: String },

	#[error("Error while deserializing the contents of `{}`: {error}", file.display())]
	DeserializationError { file: PathBuf, error: String },

	#[error("The built-in template `{name}` is invalid: {error}")]
	Template { name: String, error: String },

	// External collaborators
	#[error("{message}")]
	Command { message: String },

	#[error("Failed to read the answer to a prompt: {0}")]
	Prompt(#[from] dialoguer::Error),

	#[error("Invalid configuration: {0}")]
	Config(Box<figment::Error>),

	#[error(
		"No project type was selected. Pass it with `--project-type`, set it in a config file, or run the command in an interactive terminal"
	)]
	MissingProjectType,

	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl From<figment::Error> for AppError {
	fn from(value: figment::Error) -> Self {
		Self::Config(Box::new(value))
	}
}

/// A failure to read an existing file. It never aborts the setup: the file is regenerated from its template instead.
#[derive(Debug, Error)]
pub enum ReadFailure {
	#[error("Could not read `{}`: {source}", path.display())]
	Io { path: PathBuf, source: io::Error },

	#[error("Could not parse `{}`: {error}", path.display())]
	Parse { path: PathBuf, error: String },
}
