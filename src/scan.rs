use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::CollectError;

#[derive(Debug)]
pub struct StudentFolder {
    pub name: String,
    pub path: PathBuf,
}

/// Immediate subdirectories of the submissions root, one per student, sorted
/// by name. Non-directory entries are ignored. Recomputed on every call.
pub fn student_folders(root: &Path) -> Result<Vec<StudentFolder>, CollectError> {
    if !root.is_dir() {
        return Err(CollectError::PathNotFound(root.to_path_buf()));
    }
    let mut students = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        students.push(StudentFolder {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        });
    }
    students.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(students)
}

/// Union of assignment-folder names one level under every student folder,
/// deduplicated and sorted. Sorted order keeps selection numbering stable
/// across runs. A student folder that cannot be read is skipped.
pub fn assignment_names(root: &Path) -> Result<Vec<String>, CollectError> {
    let mut names: BTreeSet<String> = BTreeSet::new();
    for student in student_folders(root)? {
        let entries = match fs::read_dir(&student.path) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            if entry.path().is_dir() {
                names.insert(entry.file_name().to_string_lossy().into_owned());
            }
        }
    }
    Ok(names.into_iter().collect())
}
