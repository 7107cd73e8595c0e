use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::collect::{self, CollectOptions};
use crate::config::{self, CollectConfig};
use crate::manifest;
use crate::scan;
use crate::select;
use crate::types::{CollectError, CollectReport};
use crate::util::{prompt_line, prompt_yn};

pub fn list_students(root: &Path) {
    match scan::student_folders(root) {
        Ok(students) => {
            for student in students {
                println!("{}", student.name);
            }
        }
        Err(e) => eprintln!("{}", e),
    }
}

pub fn list_assignments(root: &Path) {
    match scan::assignment_names(root) {
        Ok(assignments) => {
            if assignments.is_empty() {
                eprintln!("{}", CollectError::NoAssignmentsDetected);
                return;
            }
            for (i, name) in assignments.iter().enumerate() {
                println!("{}. {}", i + 1, name);
            }
        }
        Err(e) => eprintln!("{}", e),
    }
}

/// Non-interactive collect. `assignment` is either an exact name or its
/// number as printed by `list-assignments`.
pub fn collect(
    root: &Path,
    assignment: &str,
    output: Option<PathBuf>,
    prefix: Option<String>,
    suffix: Option<String>,
    manifest_path: Option<PathBuf>,
    ignore_set: &HashSet<&str>,
) {
    let assignments = match scan::assignment_names(root) {
        Ok(assignments) => assignments,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    if assignments.is_empty() {
        eprintln!("{}", CollectError::NoAssignmentsDetected);
        return;
    }

    let assignment = if let Ok(index) = assignment.trim().parse::<usize>() {
        match select::select_by_index(&assignments, index) {
            Ok(name) => name.to_string(),
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        }
    } else if assignments.iter().any(|name| name == assignment) {
        assignment.to_string()
    } else {
        eprintln!(
            "Assignment '{}' not detected; run list-assignments to see what was found",
            assignment
        );
        return;
    };

    run_collect(root, &assignment, output, prefix, suffix, manifest_path, ignore_set);
}

/// Interactive flow: numbered selection, output prompt with a
/// `downloads/<assignment>` default, optional prefix/suffix.
pub fn auto(root: &Path, ignore_set: &HashSet<&str>) {
    let assignments = match scan::assignment_names(root) {
        Ok(assignments) => assignments,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    if assignments.is_empty() {
        eprintln!("{}", CollectError::NoAssignmentsDetected);
        return;
    }

    println!("Detected assignment folders:");
    for (i, name) in assignments.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }

    let assignment = loop {
        let raw = match prompt_line("Select assignment number (or type exact name):") {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("Failed to read stdin: {}", e);
                return;
            }
        };
        match select::resolve_choice(&assignments, &raw) {
            Some(name) => break name.to_string(),
            None => println!("Not a listed number or exact assignment name. Try again."),
        }
    };

    let default_output = config::default_output_dir(&assignment);
    let output = match prompt_line(&format!(
        "Enter output folder path [{}]:",
        default_output.display()
    )) {
        Ok(raw) if raw.trim().is_empty() => default_output,
        Ok(raw) => PathBuf::from(raw.trim()),
        Err(e) => {
            eprintln!("Failed to read stdin: {}", e);
            return;
        }
    };

    if dir_is_nonempty(&output)
        && !prompt_yn(&format!(
            "{} is not empty; collision suffixes will extend existing files. Continue? (y/n)",
            output.display()
        ))
        .unwrap_or(false)
    {
        println!("Aborting...");
        return;
    }

    let prefix = prompt_optional("Prefix to add before student names (optional):");
    let suffix = prompt_optional("Suffix to add after student names (optional):");

    run_collect(root, &assignment, Some(output), prefix, suffix, None, ignore_set);
}

fn run_collect(
    root: &Path,
    assignment: &str,
    output: Option<PathBuf>,
    prefix: Option<String>,
    suffix: Option<String>,
    manifest_path: Option<PathBuf>,
    ignore_set: &HashSet<&str>,
) {
    let config = match config::read_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    let options = build_options(prefix, suffix, &config, ignore_set);
    let output = output.unwrap_or_else(|| config::default_output_dir(assignment));

    match collect::collect(root, assignment, &output, &options) {
        Ok(report) => {
            print_report(&report);
            if let Some(path) = manifest_path {
                write_manifest(&path, &report);
            }
        }
        Err(e) => eprintln!("{}", e),
    }
}

fn build_options(
    prefix: Option<String>,
    suffix: Option<String>,
    config: &CollectConfig,
    ignore_set: &HashSet<&str>,
) -> CollectOptions {
    let mut ignore: HashSet<String> = ignore_set.iter().map(|s| s.to_string()).collect();
    ignore.extend(config.ignore.iter().cloned());
    CollectOptions {
        prefix: prefix.or_else(|| config.prefix.clone()),
        suffix: suffix.or_else(|| config.suffix.clone()),
        ignore,
    }
}

fn print_report(report: &CollectReport) {
    for failure in &report.failures {
        eprintln!("Failed to copy {}: {}", failure.source.display(), failure.message);
    }
    println!("Done. {}", report.summarize());
}

fn write_manifest(path: &Path, report: &CollectReport) {
    let file = match OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to create manifest {}: {}", path.display(), e);
            return;
        }
    };
    match manifest::write_manifest(file, report) {
        Ok(()) => println!("Manifest written to {}", path.display()),
        Err(e) => eprintln!("Failed to write manifest {}: {}", path.display(), e),
    }
}

fn prompt_optional(prompt: &str) -> Option<String> {
    match prompt_line(prompt) {
        Ok(raw) => {
            let raw = raw.trim();
            if raw.is_empty() {
                None
            } else {
                Some(raw.to_string())
            }
        }
        Err(_) => None,
    }
}

fn dir_is_nonempty(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
