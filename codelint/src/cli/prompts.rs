use dialoguer::Select;

use crate::*;

pub(crate) fn select_project_type() -> AppResult<ProjectType> {
	let labels: Vec<&str> = ProjectType::ALL.iter().map(|t| t.label()).collect();

	let idx = Select::new()
		.with_prompt("Project type")
		.items(&labels)
		.default(0)
		.interact()?;

	Ok(ProjectType::ALL[idx])
}

pub(crate) fn select_package_manager() -> AppResult<PackageManager> {
	let labels: Vec<&str> = PackageManager::ALL.iter().map(|pm| pm.as_str()).collect();

	let idx = Select::new()
		.with_prompt("Package manager")
		.items(&labels)
		.default(0)
		.interact()?;

	Ok(PackageManager::ALL[idx])
}
