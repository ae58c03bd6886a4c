//! tally — a two-operand desktop calculator
//!
//! Opens the calculator window, or with `--keys` runs a key sequence
//! headlessly and prints the final display.

mod app;

use anyhow::{Context, Result};
use app::TallyApp;
use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;
use tally::token::parse_sequence;
use tally::TallyConfig;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "A two-operand desktop calculator")]
struct Cli {
    /// Press these keys instead of opening a window, e.g. "5 + 3 =".
    /// Keys: 0-9 . + - * / = Del Clr Neg
    #[arg(long, value_name = "KEYS", allow_hyphen_values = true)]
    keys: Option<String>,

    /// Settings file (defaults to config.json in the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter, overrides the settings file; RUST_LOG overrides both
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Write the effective settings to the settings file and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = TallyConfig::load(cli.config.as_deref());
    let config = loaded.as_ref().ok().cloned().unwrap_or_default();
    tallycore::logging::init(cli.log_level.as_deref().unwrap_or(&config.log_level));
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "unreadable settings, using defaults");
    }

    if cli.write_config {
        let path = cli.config.unwrap_or_else(TallyConfig::default_path);
        config
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{}", path.display());
        return Ok(());
    }

    if let Some(keys) = cli.keys {
        let tokens = parse_sequence(&keys).context("invalid --keys")?;
        let calc = tally::run(tokens);
        println!("{}", calc.display());
        return Ok(());
    }

    run_window(config)
}

fn run_window(config: TallyConfig) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Calculator"),
        ..Default::default()
    };

    tracing::info!("opening calculator window");
    eframe::run_native(
        "tally",
        options,
        Box::new(move |cc| {
            tallycore::TallyTheme::default().apply(&cc.egui_ctx);
            Box::new(TallyApp::new(cc, config))
        }),
    )
    .map_err(|e| anyhow::anyhow!("calculator window failed: {e}"))
}
