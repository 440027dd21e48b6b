//! `handledb` binary: load the CSV, report the count, run the shell.

use clap::Parser;
use handledb::shell::Repl;
use handledb::Store;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// In-memory handle record store with CSV persistence.
#[derive(Debug, Parser)]
#[command(name = "handledb", version, about)]
struct Cli {
    /// CSV file backing the store.
    #[arg(default_value = "database.csv")]
    path: PathBuf,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr so they never interleave with shell output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut store = Store::new();
    if let Err(err) = store.load_from_path(&cli.path) {
        eprintln!("{err}");
    }
    println!("Loaded {} records.", store.len());

    let mut repl = match Repl::new(store, cli.path) {
        Ok(repl) => repl,
        Err(err) => {
            eprintln!("Failed to start shell: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = repl.run() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
