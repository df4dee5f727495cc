/// Command-line configuration
use anyhow::{bail, Context, Result};
use clap::Parser;
use raster3d_core::{Color, Projection, RenderPipeline, Viewport, PAINT, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Largest accepted surface side in pixels; keeps the surface addressable
/// in terminal columns and lines.
pub const MAX_SURFACE_SIDE: u32 = 4096;

#[derive(Parser, Debug, Clone)]
#[command(name = "raster3d-terminal")]
#[command(about = "Software-rasterized cube in the terminal", long_about = None)]
pub struct Cli {
    /// Pixel surface width (one terminal column per pixel)
    #[arg(long, default_value_t = SCREEN_WIDTH)]
    pub width: u32,

    /// Pixel surface height (two pixels per terminal line)
    #[arg(long, default_value_t = SCREEN_HEIGHT)]
    pub height: u32,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 45.0)]
    pub fov: f32,

    /// Fill colour as RRGGBB hex
    #[arg(long, default_value = "ffffff", value_parser = parse_color)]
    pub color: Color,
}

impl Cli {
    pub fn viewport(&self) -> Result<Viewport> {
        if self.width > MAX_SURFACE_SIDE || self.height > MAX_SURFACE_SIDE {
            bail!(
                "surface {}x{} is larger than {}x{}",
                self.width,
                self.height,
                MAX_SURFACE_SIDE,
                MAX_SURFACE_SIDE
            );
        }
        Viewport::new(self.width, self.height)
            .map_err(anyhow::Error::msg)
            .context("invalid surface size")
    }

    /// Validated pipeline for this configuration
    pub fn pipeline(&self) -> Result<RenderPipeline> {
        let viewport = self.viewport()?;
        let defaults = Projection::for_viewport(&viewport);
        let projection = Projection::new(defaults.near, defaults.far, self.fov.to_radians(), defaults.aspect)
            .map_err(anyhow::Error::msg)
            .context("invalid projection")?;

        Ok(RenderPipeline::new(viewport, projection).with_color(self.color))
    }
}

fn parse_color(value: &str) -> Result<Color, String> {
    let hex = value.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(format!("expected six hex digits, got {:?}", value));
    }
    u32::from_str_radix(hex, 16).map_err(|e| format!("invalid colour {:?}: {}", value, e))
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fps: 60,
            fov: 45.0,
            color: PAINT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_core_constants() {
        let cli = Cli::try_parse_from(["raster3d-terminal"]).unwrap();
        assert_eq!(cli.width, SCREEN_WIDTH);
        assert_eq!(cli.height, SCREEN_HEIGHT);
        assert_eq!(cli.fps, 60);
        assert_eq!(cli.color, PAINT);

        let pipeline = cli.pipeline().unwrap();
        let defaults = Projection::default();
        assert_eq!(pipeline.projection().near, defaults.near);
        assert_eq!(pipeline.projection().aspect, defaults.aspect);
        assert!((pipeline.projection().fov - defaults.fov).abs() < 1e-6);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "raster3d-terminal",
            "--width",
            "80",
            "--height",
            "40",
            "--fps",
            "30",
            "--color",
            "#ff8000",
        ])
        .unwrap();
        assert_eq!(cli.viewport().unwrap(), Viewport::new(80, 40).unwrap());
        assert_eq!(cli.fps, 30);
        assert_eq!(cli.color, 0x00ff_8000);
    }

    #[test]
    fn test_bad_color_rejected() {
        assert!(Cli::try_parse_from(["raster3d-terminal", "--color", "fff"]).is_err());
        assert!(Cli::try_parse_from(["raster3d-terminal", "--color", "zzzzzz"]).is_err());
    }

    #[test]
    fn test_invalid_geometry_is_an_error() {
        let cli = Cli {
            width: 0,
            ..Cli::default()
        };
        assert!(cli.pipeline().is_err());

        let cli = Cli {
            fov: 190.0,
            ..Cli::default()
        };
        assert!(cli.pipeline().is_err());
    }

    #[test]
    fn test_oversized_surface_is_an_error() {
        let cli = Cli {
            width: u32::MAX,
            height: u32::MAX,
            ..Cli::default()
        };
        assert!(cli.viewport().is_err());

        let cli = Cli {
            height: MAX_SURFACE_SIDE + 1,
            ..Cli::default()
        };
        assert!(cli.pipeline().is_err());

        let cli = Cli {
            width: MAX_SURFACE_SIDE,
            height: MAX_SURFACE_SIDE,
            ..Cli::default()
        };
        assert!(cli.viewport().is_ok());
    }
}
