use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Bundle a theme folder into `{theme_uri}.json` in the current directory.
#[derive(Parser)]
#[command(name = "theme-builder", version)]
struct Cli {
    /// Theme folder containing config.json, image.txt, theme_uri.txt and templates/
    folder: Option<PathBuf>,

    /// Anything after the folder is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("theme_builder=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let Some(folder) = cli.folder else {
        eprintln!("Please provide a folder path as an argument.");
        return Ok(ExitCode::FAILURE);
    };

    let output_dir = std::env::current_dir()?;
    match theme_builder::process_theme(&folder, &output_dir) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
