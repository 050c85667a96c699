use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use taskpad::cli::{Cli, Display, MenuSession};
use taskpad::error::Result;
use taskpad::store::{FileStorage, LoadSource, TaskStore};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Display::new().print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("taskpad=debug")
    } else {
        EnvFilter::new("taskpad=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let display = Display::new();
    let path = cli.task_file();

    println!(
        "{}",
        style("Welcome to Taskpad, your console to-do list manager!").bold()
    );
    println!("Tasks are automatically saved to '{}'", path.display());

    let (store, source) = TaskStore::load(Box::new(FileStorage::new(&path)));
    match source {
        LoadSource::NewFile => {
            display.print_info(&format!("Creating new task file: {}", path.display()));
        }
        LoadSource::LegacyLines => {
            display.print_info("Loaded tasks from a legacy plain-text file; it will be rewritten as JSON on the next save.");
        }
        LoadSource::Unreadable(err) => {
            display.print_error(&format!("Error loading tasks: {}", err));
        }
        LoadSource::Structured => {}
    }

    if !store.is_empty() {
        let stats = store.stats();
        display.print_info(&format!(
            "Loaded {} task(s): {} pending, {} completed",
            stats.total, stats.pending, stats.completed
        ));
    }

    MenuSession::new(store).run()
}
