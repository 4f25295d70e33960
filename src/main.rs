use std::{fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use anyhow::Context;
use caliburn::{render_error, tokenize};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tokenizes a source file and prints the resulting token stream.
#[derive(Parser)]
#[command(name = "caliburn")]
#[command(about = "Caliburn lexer driver")]
#[command(version)]
struct Cli {
    /// Path to the source file.
    file: PathBuf,

    /// Print only the number of tokens.
    #[arg(long)]
    count: bool,

    /// Log filter, overrides `RUST_LOG` (e.g. `debug`, `caliburn=trace`).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let file_contents = read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let file_name = cli.file.to_string_lossy().into_owned();

    let start = Instant::now();
    let tokens = match tokenize(file_contents.clone(), Some(file_name)) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint!("{}", render_error(&err, &file_contents));
            exit(1);
        }
    };
    info!(elapsed = ?start.elapsed(), count = tokens.len(), "tokenized");

    if cli.count {
        println!("{}", tokens.len());
    } else {
        for token in &tokens {
            println!("{}", token);
        }
    }

    Ok(())
}
