//! Tawfik & Amro site CLI
//!
//! Thin wrapper around the site crates for static hosting and quick checks.
//!
//! ## Usage
//!
//! ```bash
//! # Render the page to ./index.html
//! ta-site-cli export
//!
//! # Render with overridden contact details
//! ta-site-cli --config site.json export --out public/index.html
//!
//! # List the pricing packages
//! ta-site-cli packages
//!
//! # Show firm details
//! ta-site-cli info
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ta_site_core::content::TIERS;
use ta_site_core::SiteConfig;

/// Tawfik & Amro - Nonprofit Accounting site tools
#[derive(Parser)]
#[command(name = "ta-site-cli")]
#[command(version = "0.1.0")]
#[command(about = "Tawfik & Amro site tools - static export and package listing")]
struct Cli {
    /// JSON file overriding firm name, email, phone or footer year
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page to a standalone HTML file
    Export {
        /// Output file
        #[arg(short, long, default_value = "index.html")]
        out: PathBuf,
    },

    /// List the pricing packages
    Packages,

    /// Show firm details
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    ta_site_core::logging::init(cli.verbose)?;

    let config = SiteConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load site config")?;

    match cli.command {
        Commands::Export { out } => {
            export(&config, &out)?;
            println!("Wrote {}", out.display());
        }

        Commands::Packages => {
            for tier in TIERS {
                if tier.highlighted {
                    println!("{} {} (most popular)", tier.name, tier.price_label());
                } else {
                    println!("{} {}", tier.name, tier.price_label());
                }
                println!("  {}", tier.tagline);
                for benefit in tier.benefits {
                    println!("  - {}", benefit);
                }
                println!();
            }
        }

        Commands::Info => {
            println!("{}", config.full_name());
            println!();
            println!("  Email: {}", config.email);
            println!("  Phone: {}", config.phone);
        }
    }

    Ok(())
}

fn export(config: &SiteConfig, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let html = ta_site_ui::render_document(config);
    fs::write(out, &html).with_context(|| format!("Failed to write {}", out.display()))?;

    tracing::info!(path = %out.display(), bytes = html.len(), "Exported site");
    Ok(())
}
