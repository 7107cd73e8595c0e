use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum CollectError {
    PathNotFound(PathBuf),
    NoAssignmentsDetected,
    InvalidSelection { given: usize, available: usize },
    OutputCreate { path: PathBuf, source: io::Error },
    Io(io::Error),
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::PathNotFound(path) => write!(
                f,
                "Path does not exist or is not a directory: {}",
                path.display()
            ),
            CollectError::NoAssignmentsDetected => {
                write!(f, "No assignment subfolders detected under any student folder")
            }
            CollectError::InvalidSelection { given, available } => {
                write!(f, "Selection {} is out of range [1, {}]", given, available)
            }
            CollectError::OutputCreate { path, source } => write!(
                f,
                "Failed to create output directory {}: {}",
                path.display(),
                source
            ),
            CollectError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl From<io::Error> for CollectError {
    fn from(e: io::Error) -> Self {
        CollectError::Io(e)
    }
}

#[derive(Debug)]
pub struct CopiedFile {
    pub student: String,
    pub source: PathBuf,
    pub dest: PathBuf,
}

#[derive(Debug)]
pub struct CopyFailure {
    pub source: PathBuf,
    pub message: String,
}

/// Outcome of one collect run. Per-file failures are accumulated here instead
/// of aborting the batch; only setup errors cut a run short.
#[derive(Debug, Default)]
pub struct CollectReport {
    pub copied: Vec<CopiedFile>,
    pub students_processed: usize,
    pub students_skipped: usize,
    pub failures: Vec<CopyFailure>,
}

impl CollectReport {
    pub fn files_copied(&self) -> usize {
        self.copied.len()
    }

    pub fn error_count(&self) -> usize {
        self.failures.len()
    }

    pub fn summarize(&self) -> String {
        format!(
            "Files copied: {}, Students processed: {}, Students skipped: {}, Errors: {}",
            self.files_copied(),
            self.students_processed,
            self.students_skipped,
            self.error_count()
        )
    }
}
