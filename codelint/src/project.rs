use crate::*;

/// The kinds of projects that can be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ProjectType {
	/// Vue 3 with TypeScript
	#[serde(rename = "vue3-ts")]
	#[value(name = "vue3-ts")]
	Vue3Ts,
	/// Vue 3 with JavaScript
	#[serde(rename = "vue3-js")]
	#[value(name = "vue3-js")]
	Vue3Js,
	/// React with TypeScript
	#[serde(rename = "react-ts")]
	#[value(name = "react-ts")]
	ReactTs,
	/// React with JavaScript
	#[serde(rename = "react-js")]
	#[value(name = "react-js")]
	ReactJs,
	/// Plain TypeScript
	#[serde(rename = "typescript")]
	#[value(name = "typescript")]
	Typescript,
	/// Plain JavaScript
	#[serde(rename = "javascript")]
	#[value(name = "javascript")]
	Javascript,
}

/// The UI framework used by a project, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
	Vue3,
	React,
	None,
}

impl ProjectType {
	pub const ALL: [Self; 6] = [
		Self::Vue3Ts,
		Self::Vue3Js,
		Self::ReactTs,
		Self::ReactJs,
		Self::Typescript,
		Self::Javascript,
	];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Vue3Ts => "vue3-ts",
			Self::Vue3Js => "vue3-js",
			Self::ReactTs => "react-ts",
			Self::ReactJs => "react-js",
			Self::Typescript => "typescript",
			Self::Javascript => "javascript",
		}
	}

	/// The name shown in the interactive prompt.
	pub const fn label(self) -> &'static str {
		match self {
			Self::Vue3Ts => "Vue 3 + TypeScript",
			Self::Vue3Js => "Vue 3 + JavaScript",
			Self::ReactTs => "React + TypeScript",
			Self::ReactJs => "React + JavaScript",
			Self::Typescript => "TypeScript",
			Self::Javascript => "JavaScript",
		}
	}

	pub const fn framework(self) -> Framework {
		match self {
			Self::Vue3Ts | Self::Vue3Js => Framework::Vue3,
			Self::ReactTs | Self::ReactJs => Framework::React,
			Self::Typescript | Self::Javascript => Framework::None,
		}
	}

	pub const fn is_typescript(self) -> bool {
		matches!(self, Self::Vue3Ts | Self::ReactTs | Self::Typescript)
	}

	pub const fn is_vue(self) -> bool {
		matches!(self.framework(), Framework::Vue3)
	}
}

impl Display for ProjectType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The package manager used to install dependencies and run one-off tools.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
	#[default]
	Pnpm,
	Npm,
	Yarn,
}

impl PackageManager {
	pub const ALL: [Self; 3] = [Self::Pnpm, Self::Npm, Self::Yarn];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Pnpm => "pnpm",
			Self::Npm => "npm",
			Self::Yarn => "yarn",
		}
	}

	/// The arguments that install the given packages as development dependencies.
	pub fn install_args<'a>(self, packages: &[&'a str]) -> Vec<&'a str> {
		let mut args = match self {
			Self::Pnpm | Self::Npm => vec!["install", "-D"],
			Self::Yarn => vec!["add", "-D"],
		};

		args.extend_from_slice(packages);

		args
	}

	/// The program and the leading arguments used to download and run a package binary once.
	pub const fn dlx(self) -> (&'static str, &'static [&'static str]) {
		match self {
			Self::Pnpm => ("pnpm", &["dlx"]),
			Self::Npm => ("npx", &[]),
			Self::Yarn => ("yarn", &["dlx"]),
		}
	}
}

impl Display for PackageManager {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
