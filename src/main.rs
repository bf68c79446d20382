//! ZTP Console - terminal console for a zero-touch-provisioning service
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use ztp_app::config::{default_config_path, load_settings, Settings};
use ztp_client::ZtpClient;
use ztp_console::Command;

/// ZTP Console - edit provisioning profiles and manage served files
#[derive(Parser, Debug)]
#[command(name = "ztpc", version)]
#[command(about = "Terminal console for a ZTP configuration service", long_about = None)]
struct Args {
    /// Server base URL (overrides the config file)
    #[arg(short, long, value_name = "URL", global = true)]
    server: Option<String>,

    /// Path to the config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Run one request and exit instead of starting the TUI
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // The TUI still works without a log file
    if let Err(e) = ztp_core::logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config_path = args.config.or_else(default_config_path);
    let mut settings = match &config_path {
        Some(path) => load_settings(path),
        None => Settings::default(),
    };
    if let Some(url) = args.server {
        settings.server.url = url;
    }

    match args.command {
        None => ztp_console::run(settings, config_path).await?,
        Some(command) => {
            let client = ZtpClient::new(&settings.server.url)?;
            let mut stdout = std::io::stdout();
            ztp_console::run_command(command, &client, &settings, &mut stdout).await?;
        }
    }

    Ok(())
}
