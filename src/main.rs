use anyhow::{Context, bail};
use clap::Parser;
use log::{info, warn};

use waymeasure::{Config, backend, util};

#[derive(Parser, Debug)]
#[command(name = "waymeasure")]
#[command(version, about = "Grid measurement and line tracing overlay for Wayland compositors")]
struct Cli {
    /// Canvas size override as WIDTHxHEIGHT (e.g. 1140x700)
    #[arg(long, value_name = "WxH")]
    size: Option<String>,

    /// Grid spacing override in pixels
    #[arg(long, value_name = "PX")]
    spacing: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}. Using defaults.", e);
        Config::default()
    });

    if let Some(size) = cli.size.as_deref() {
        let (width, height) = util::parse_canvas_size(size)
            .with_context(|| format!("invalid canvas size '{size}', expected WIDTHxHEIGHT"))?;
        config.canvas.width = width;
        config.canvas.height = height;
    }

    if let Some(spacing) = cli.spacing {
        if spacing <= 0.0 {
            bail!("grid spacing must be positive, got {spacing}");
        }
        config.grid.spacing = spacing;
    }

    // CLI overrides go through the same range clamping as file values
    config.validate_and_clamp();

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    info!(
        "waymeasure {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("WAYMEASURE_GIT_HASH")
    );
    info!(
        "Canvas {}x{}, grid spacing {}px",
        config.canvas.width, config.canvas.height, config.grid.spacing
    );
    info!("Controls:");
    info!("  - Trace a segment: drag on the canvas");
    info!("  - Commit + measure: release (or Escape while drawing)");
    info!("  - Discard in-progress segment: right click");
    info!(
        "  - Colors: R (red), G (green), B (blue), Y (yellow), O (orange), P (pink), W (white), K (black)"
    );
    info!("  - Thickness: + / - or scroll");
    info!("  - Label size: Shift+scroll or Ctrl+Shift+/-");
    info!("  - Help: F10");
    info!("  - Exit: Escape (while idle)");

    backend::run_wayland(config)?;

    info!("Measurement overlay closed.");
    Ok(())
}
