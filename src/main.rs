mod app;
mod cli;
mod event;
mod logging;
mod tui;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use logging::LogTarget;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    if let Some(command) = cli_opts.command {
        logging::init(LogTarget::Stderr)?;
        return cli::run(command);
    }

    let log_path = cli_opts.log_file.unwrap_or_else(logging::default_log_path);
    logging::init(LogTarget::File(log_path))?;

    let initial = cli::parse_hex_arg(&cli_opts.color).context("invalid --color")?;
    info!(color = %initial, "starting hexsync v{}", env!("CARGO_PKG_VERSION"));

    let mut app = app::App::new(initial);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
