use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use utilkit_config::ConfigLoader;

mod commands;
mod execute;

use commands::Commands;

#[derive(Parser)]
#[command(name = "utilkit")]
#[command(about = "Everyday text, number, date and identifier helpers", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file (overrides UTILKIT_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config {
        loader = loader.file(path);
    }
    let config = loader.load()?;
    utilkit_utils::logging::init(config.log_filter.as_str(), cli.verbose)?;
    tracing::debug!(?config, "configuration resolved");

    let mut stdout = std::io::stdout().lock();
    cli.command.execute(&config, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
