#![allow(non_snake_case)]

mod app;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use ta_site_core::SiteConfig;

/// Tawfik & Amro - Nonprofit Accounting site
#[derive(Parser, Debug)]
#[command(name = "ta-site")]
#[command(about = "Tawfik & Amro - nonprofit accounting site in a desktop window")]
struct Args {
    /// JSON file overriding firm name, email, phone or footer year
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    ta_site_core::logging::init(args.verbose)?;

    let config = SiteConfig::load_or_default(args.config.as_deref())?;

    // Wide enough for the two-column desktop layout
    let window_width = 1280.0;
    let window_height = 900.0;

    let title = config.full_name();
    tracing::info!("Starting '{}' (config: {:?})", title, args.config);

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .with_context(config)
        .launch(app::App);

    Ok(())
}
