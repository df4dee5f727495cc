/// raster3d Terminal - software-rasterized cube
///
/// Controls:
///   - W/S/A/D: Move forward/back/left/right
///   - Space/C: Move up/down
///   - Arrow Keys: Look around
///   - R: Reset camera
///   - Q/ESC: Quit
///
/// Terminals that only report key presses get held keys inferred from
/// auto-repeat, so a single tap keeps moving or turning for about half a
/// second (roughly 1.65 units or radians).
///
/// Logging goes to stderr (set RUST_LOG); redirect it while the renderer
/// owns the screen, e.g. `RUST_LOG=debug raster3d-terminal 2>render.log`.
use anyhow::Result;
use clap::Parser;
use raster3d_terminal::{Cli, TerminalApp};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut app = TerminalApp::new(&cli)?;
    app.run()?;

    Ok(())
}
