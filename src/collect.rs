use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::sanitize::build_base_name;
use crate::scan::{self, StudentFolder};
use crate::types::{CollectError, CollectReport, CopiedFile, CopyFailure};

#[derive(Debug, Default, Clone)]
pub struct CollectOptions {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Filenames never worth collecting (sync junk like .DS_Store).
    pub ignore: HashSet<String>,
}

/// Copy every file submitted for `assignment` into `output`, renamed after
/// the owning student. Students without a matching assignment folder are
/// counted as skipped; a failed copy is recorded and the run continues.
///
/// Student folders are scanned before the output directory is created, so a
/// bad root never leaves an empty output directory behind.
pub fn collect(
    root: &Path,
    assignment: &str,
    output: &Path,
    options: &CollectOptions,
) -> Result<CollectReport, CollectError> {
    let students = scan::student_folders(root)?;
    ensure_output_dir(output)?;

    let mut report = CollectReport::default();
    for student in &students {
        let assignment_dir = student.path.join(assignment);
        if !assignment_dir.is_dir() {
            report.students_skipped += 1;
            continue;
        }
        report.students_processed += 1;
        copy_student_files(student, &assignment_dir, output, options, &mut report);
    }
    Ok(report)
}

fn ensure_output_dir(output: &Path) -> Result<(), CollectError> {
    fs::create_dir_all(output).map_err(|e| CollectError::OutputCreate {
        path: output.to_path_buf(),
        source: e,
    })
}

fn copy_student_files(
    student: &StudentFolder,
    assignment_dir: &Path,
    output: &Path,
    options: &CollectOptions,
    report: &mut CollectReport,
) {
    let entries = match fs::read_dir(assignment_dir) {
        Ok(entries) => entries,
        Err(e) => {
            report.failures.push(CopyFailure {
                source: assignment_dir.to_path_buf(),
                message: format!("Failed to read assignment folder: {}", e),
            });
            return;
        }
    };

    // Files directly inside the assignment folder; subdirectories are not
    // recursed. Sorted so collision suffixes are assigned deterministically.
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    let base_name = build_base_name(
        options.prefix.as_deref(),
        &student.name,
        options.suffix.as_deref(),
    );

    for source in files {
        let file_name = match source.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        if options.ignore.contains(file_name.as_str()) {
            continue;
        }
        let extension = source
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .filter(|ext| !ext.is_empty());
        let dest = unique_destination(output, &base_name, extension.as_deref());
        match fs::copy(&source, &dest) {
            Ok(_) => report.copied.push(CopiedFile {
                student: student.name.clone(),
                source,
                dest,
            }),
            Err(e) => report.failures.push(CopyFailure {
                source,
                message: e.to_string(),
            }),
        }
    }
}

/// First free destination path: `base.ext`, then `base (2).ext`,
/// `base (3).ext`, ... Probes the directory itself, so files written earlier
/// in the run count as taken.
fn unique_destination(dir: &Path, base_name: &str, extension: Option<&str>) -> PathBuf {
    let candidate = match extension {
        Some(ext) => format!("{}.{}", base_name, ext),
        None => base_name.to_string(),
    };
    let path = dir.join(candidate);
    if !path.exists() {
        return path;
    }
    let mut i = 2;
    loop {
        let candidate = match extension {
            Some(ext) => format!("{} ({}).{}", base_name, i, ext),
            None => format!("{} ({})", base_name, i),
        };
        let path = dir.join(candidate);
        if !path.exists() {
            return path;
        }
        i += 1;
    }
}
