use anyhow::Result;

use crate::config::Config;

pub mod wayland;

/// Run the Wayland backend with a full event loop.
///
/// Takes the already-loaded (and CLI-adjusted) configuration; returns when
/// the user exits or the compositor closes the overlay.
pub fn run_wayland(config: Config) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(config);
    backend.run()
}
