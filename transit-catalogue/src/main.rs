use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use transit_catalogue::requests::{self, RequestDocument, RequestError};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the answers
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), RequestError> {
    let document: RequestDocument = match std::env::args().nth(1) {
        Some(path) => requests::read_document_from_path(path)?,
        None => requests::read_document(io::stdin().lock())?,
    };

    let responses = requests::process_document(&document);

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &responses)?;
    writeln!(stdout)?;
    Ok(())
}
