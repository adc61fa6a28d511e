use anyhow::Result;
use clap::Parser;
use poppi_calc::{config, session, shell};
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "poppi_calc")]
#[command(about = "Keyboard-driven calculator with percent, sign, 1/x and x² keys", long_about = None)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Apply these keys once, print the expression and exit
    #[arg(short, long)]
    keys: Option<String>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the expression output
    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => config::Config::load_from(path)?,
        None => config::Config::load().unwrap_or_else(|e| {
            warn!("Falling back to default config: {:#}", e);
            config::Config::default()
        }),
    };
    info!("Loaded key bindings: {:?}", config.keys);

    let mut session = session::Session::new();

    if let Some(keys) = cli.keys {
        let keymap = shell::Keymap::new(&config.keys);
        shell::run_line(&mut session, &keymap, &keys);
        println!("{}", session.buffer());
        return Ok(());
    }

    let stdin = io::stdin();
    shell::run(&mut session, &config, stdin.lock(), io::stdout())
}
