use std::path::PathBuf;

use clap::Parser;

/// Default backing file, resolved relative to the working directory.
pub const DEFAULT_TASK_FILE: &str = "tasks.txt";

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(author, version, about = "Persistent console to-do list manager", long_about = None)]
pub struct Cli {
    /// Path to the task file (default: tasks.txt in the working directory)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn task_file(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TASK_FILE))
    }
}
