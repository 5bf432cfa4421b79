#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

pub(crate) use std::{
	fmt::{self, Display},
	path::{Path, PathBuf},
};

pub(crate) use clap::{Args, Parser, ValueEnum};
pub(crate) use indexmap::IndexMap;
pub(crate) use serde::{Deserialize, Serialize};
pub(crate) use serde_json::Value;
pub(crate) use tracing::{debug, info, warn};

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod materialize;
pub mod merge;
pub mod project;
pub mod setup;
pub mod templates;

pub use config::Config;
pub use errors::*;
pub use materialize::*;
pub use merge::*;
pub use project::*;
pub use setup::*;

pub(crate) use fs::*;
