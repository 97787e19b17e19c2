use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use starbot::repl::{Command, Session};
use starbot::stars::LoadMode;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "starbot")]
#[command(about = "Read commands from stdin: arithmetic and naive star neighbor queries")]
struct Cli {
    /// Star CSV to load before reading commands
    #[arg(long)]
    data: Option<Utf8PathBuf>,

    /// Reject rows with non-numeric coordinates while loading
    #[arg(long)]
    strict: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let fmt_layer = fmt::layer().with_target(false).with_writer(io::stderr);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let load_mode = if cli.strict {
        LoadMode::Strict
    } else {
        LoadMode::Lazy
    };
    let mut session = Session::new(load_mode);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(path) = cli.data {
        let lines = session
            .execute(Command::Stars(path.clone()))
            .with_context(|| format!("unable to load star data from {path}"))?;
        for line in lines {
            writeln!(out, "{line}")?;
        }
    }

    info!(?load_mode, "reading commands from stdin");
    session
        .run(io::stdin().lock(), &mut out)
        .context("invalid input for REPL")?;
    Ok(())
}
