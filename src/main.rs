use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::collections::HashSet;

mod collect;
mod commands;
mod config;
mod manifest;
mod sanitize;
mod scan;
mod select;
mod types;
mod util;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: SubCommand,
}

#[derive(Debug, Subcommand)]
enum SubCommand {
    /// Pick an assignment interactively and collect it
    Auto {
        submissions_root: Utf8PathBuf,
    },
    /// Collect one assignment without prompting
    Collect {
        submissions_root: Utf8PathBuf,
        /// Assignment name, or its number as shown by list-assignments
        assignment: String,
        /// Output folder (default: downloads/<assignment>)
        #[clap(long)]
        output: Option<Utf8PathBuf>,
        #[clap(long)]
        prefix: Option<String>,
        #[clap(long)]
        suffix: Option<String>,
        /// Write a CSV manifest of copied files
        #[clap(long)]
        manifest: Option<Utf8PathBuf>,
    },
    ListStudents {
        submissions_root: Utf8PathBuf,
    },
    ListAssignments {
        submissions_root: Utf8PathBuf,
    },
}

fn main() {
    let mut copy_ignore_set = HashSet::new();
    copy_ignore_set.insert(".DS_Store");
    copy_ignore_set.insert(".gitignore");
    copy_ignore_set.insert("Thumbs.db");
    copy_ignore_set.insert("desktop.ini");

    let cli = Args::parse();

    match cli.command {
        SubCommand::Auto { submissions_root } => {
            commands::auto(submissions_root.as_std_path(), &copy_ignore_set);
        }
        SubCommand::Collect {
            submissions_root,
            assignment,
            output,
            prefix,
            suffix,
            manifest,
        } => {
            commands::collect(
                submissions_root.as_std_path(),
                assignment.as_str(),
                output.map(Utf8PathBuf::into_std_path_buf),
                prefix,
                suffix,
                manifest.map(Utf8PathBuf::into_std_path_buf),
                &copy_ignore_set,
            );
        }
        SubCommand::ListStudents { submissions_root } => {
            commands::list_students(submissions_root.as_std_path());
        }
        SubCommand::ListAssignments { submissions_root } => {
            commands::list_assignments(submissions_root.as_std_path());
        }
    }
}
