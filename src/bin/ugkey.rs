// Ugkey CLI
// Terminal playground and settings checking for the Uyghur keyboard engine

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ugkey_core::{AttachPolicy, Settings};

/// Uyghur keyboard transliteration engine
#[derive(Parser, Debug)]
#[command(name = "ugkey")]
#[command(version = "0.2.0")]
#[command(about = "Uyghur keyboard transliteration engine", long_about = None)]
struct Args {
    /// TOML settings file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Validate settings and exit
    #[arg(long)]
    check_config: bool,

    /// Print a settings file template and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if args.print_config {
        print!("{}", ugkey_core::default_settings_content());
        return Ok(());
    }

    let settings = match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::load_default().context("loading settings from the default location")?,
    };

    if args.check_config {
        report_settings(&settings);
        return Ok(());
    }

    ugkey::tui::run(settings).context("running the playground")?;
    Ok(())
}

fn report_settings(settings: &Settings) {
    match settings.policy() {
        Some(AttachPolicy::AllExcept(deny)) => {
            println!("Settings are valid: attach to all fields, deny list {:?}", deny);
        }
        Some(AttachPolicy::Only(allow)) => {
            println!("Settings are valid: attach only to {:?}", allow);
        }
        None => {
            println!(
                "Settings are valid but inert: no attach-all deny list and no \
                 non-empty allow list, so no field will be attached"
            );
        }
    }
    println!(
        "Smart hamza: {}",
        if settings.smart_hamza() { "enabled" } else { "disabled" }
    );
}
