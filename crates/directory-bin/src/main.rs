//! Line-oriented front end for the account directory.
//!
//! Reads one command per line from stdin and writes one JSON response per
//! line to stdout. Logs go to stderr.
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use account_directory_common::{Request, Response};
use account_directory_lib::{
    config::DEFAULT_CONFIG_FILE, handlers, AccountDirectory, LogFormat, RandomTokenGenerator,
    Settings,
};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "account-directory", version, about = "In-memory account directory")]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<String>,

    /// Seed the reset-token generator for reproducible tokens
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load_from(&args.config)?;
    if let Some(level) = args.log_level {
        settings.log_level = level;
    }
    if let Some(seed) = args.seed {
        settings.token_seed = Some(seed);
    }
    settings.validate()?;

    init_tracing(&settings);

    let tokens = match settings.token_seed {
        Some(seed) => RandomTokenGenerator::seeded(seed),
        None => RandomTokenGenerator::new(),
    };
    let mut directory = AccountDirectory::with_token_generator(tokens);
    info!(config = %args.config.display(), "account directory ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut directory, stdin.lock(), stdout.lock())?;

    info!(accounts = directory.len(), "shutting down");
    Ok(())
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match settings.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Process commands until end of input or `quit`
fn run<R: BufRead, W: Write>(
    directory: &mut AccountDirectory,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }

        let response = match line.parse::<Request>() {
            Ok(request) => handlers::dispatch(directory, request),
            Err(err) => {
                debug!(error = %err, "unparseable command");
                Response::Error {
                    code: "CMD_001".to_string(),
                    message: err.to_string(),
                }
            }
        };

        writeln!(output, "{}", response.to_json_line()?)?;
        output.flush()?;
    }
    Ok(())
}
