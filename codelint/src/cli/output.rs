use colored::{ColoredString, Colorize};

use crate::{
	artifacts::{oxlint::OxlintStep, package_json::*},
	*,
};

pub(crate) fn print_welcome(project_root: &Path) {
	println!("{}", "Snail CodeLint".bold());
	println!(
		"{} Setting up oxlint, prettier and lefthook in {}",
		"->".blue(),
		project_root.display().to_string().green()
	);
	println!();
}

fn outcome_marker(outcome: MergeOutcome) -> ColoredString {
	match outcome {
		MergeOutcome::Unchanged => "=".dimmed(),
		MergeOutcome::WrittenFresh | MergeOutcome::WrittenMerged => "✓".green(),
		MergeOutcome::WrittenReplaced | MergeOutcome::WrittenFallback => "!".yellow(),
	}
}

fn outcome_label(outcome: MergeOutcome) -> ColoredString {
	match outcome {
		MergeOutcome::Unchanged => outcome.as_str().dimmed(),
		MergeOutcome::WrittenFresh | MergeOutcome::WrittenMerged => outcome.as_str().green(),
		MergeOutcome::WrittenReplaced | MergeOutcome::WrittenFallback => outcome.as_str().yellow(),
	}
}

fn print_artifact(report: &ArtifactReport) {
	println!(
		"  {} {} {}",
		outcome_marker(report.outcome),
		report.path.display(),
		outcome_label(report.outcome)
	);
}

pub(crate) fn print_report(report: &SetupReport, options: &SetupOptions) {
	if options.dry_run {
		println!("{}", "Dry run: no file was written".yellow());
	}

	println!("{}", "Files".bold());

	for artifact in &report.artifacts {
		print_artifact(artifact);
	}

	match &report.oxlint {
		OxlintStep::Generated(artifact) => print_artifact(artifact),
		OxlintStep::Initialized => {
			println!("  {} oxlint config initialized", "✓".green());
		}
		OxlintStep::InitFailed { command } => {
			println!(
				"  {} Could not initialize the oxlint config. Run `{}` manually",
				"!".yellow(),
				command.yellow()
			);
		}
		OxlintStep::Skipped { command } => {
			println!("  {} {} skipped", "=".dimmed(), command.dimmed());
		}
	}

	println!();

	match &report.install {
		InstallStep::Installed(packages) => {
			println!(
				"{} Installed {} with {}",
				"✓".green(),
				packages.join(", "),
				options.package_manager
			);
		}
		InstallStep::Skipped(packages) => {
			let packages: Vec<&str> = packages.iter().map(String::as_str).collect();

			println!(
				"{} Install the dev dependencies with `{} {}`",
				"->".blue(),
				options.package_manager,
				options.package_manager.install_args(&packages).join(" ")
			);
		}
	}

	match report.scripts {
		ScriptsOutcome::Updated => {
			println!("{}", "Scripts".bold());

			for (name, command) in package_scripts(options.project_type) {
				println!("  {} {}", name.green(), command.dimmed());
			}
		}
		ScriptsOutcome::MissingManifest => {
			println!(
				"{} No package.json found, the lint and format scripts were not added",
				"!".yellow()
			);
		}
	}

	println!();
	println!("{}", "All done!".green().bold());
}
