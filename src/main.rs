use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use task_tracker::commands::dispatch;
use task_tracker::parser::parse;
use task_tracker::storage::{default_db_path, TaskStore};

#[derive(Parser)]
#[command(name = "task-tracker")]
#[command(about = "Track tasks in a local JSON file", long_about = None)]
#[command(after_help = "Run `task-tracker help` for the list of commands.")]
struct Cli {
    /// Path to the tasks JSON file
    #[arg(short, long, env = "TASK_TRACKER_DB")]
    file: Option<PathBuf>,
    /// Log store activity to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Command followed by its arguments, e.g. `add Buy milk`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = match parse(&cli.args) {
        Ok(command) => command,
        Err(e) => {
            println!("{}", e);
            return ExitCode::SUCCESS;
        }
    };

    let store = TaskStore::new(cli.file.unwrap_or_else(default_db_path));
    tracing::debug!(path = %store.path().display(), ?command, "dispatching");

    if let Err(e) = dispatch(&store, command, &mut io::stdout().lock()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
