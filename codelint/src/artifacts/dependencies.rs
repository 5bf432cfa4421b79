use crate::{exec::launch_command, *};

/// The development dependencies required by the generated configuration.
pub fn dev_dependencies(project_type: ProjectType, lefthook: bool) -> Vec<&'static str> {
	let mut packages = vec!["oxlint", "prettier"];

	if lefthook {
		packages.push("lefthook");
	}

	if project_type.is_typescript() {
		packages.push("oxlint-tsgolint@latest");
	}

	if project_type.is_vue() {
		packages.push("prettier-plugin-vue");
	}

	packages
}

pub fn install_dependencies(
	project_root: &Path,
	package_manager: PackageManager,
	packages: &[&str],
) -> AppResult<()> {
	let args = package_manager.install_args(packages);

	info!(%package_manager, ?packages, "Installing dependencies");

	launch_command(
		package_manager.as_str(),
		&args,
		project_root,
		Some(&format!(
			"Failed to install the dependencies with {package_manager}"
		)),
	)
}
