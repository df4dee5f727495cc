/// Pixel surface and triangle fill for terminal output
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use raster3d_core::{Rasterizer, ScreenTriangle, Viewport};
use std::io::Write;

/// Upper half block: foreground paints the top pixel, background the bottom
const HALF_BLOCK: char = '▀';

const CLEAR_COLOR: u32 = 0x0000_0000;

/// Fixed-size RGB framebuffer, two pixel rows per terminal line
pub struct PixelSurface {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelSurface {
    pub fn new(viewport: &Viewport) -> Self {
        let width = viewport.width() as usize;
        let height = viewport.height() as usize;
        Self {
            width,
            height,
            pixels: vec![CLEAR_COLOR; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Terminal lines needed to show the whole surface
    pub fn rows(&self) -> usize {
        (self.height + 1) / 2
    }

    pub fn clear(&mut self) {
        self.pixels.fill(CLEAR_COLOR);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Queue the surface starting at terminal line `top`.
    pub fn draw<W: Write>(&self, writer: &mut W, top: u16) -> std::io::Result<()> {
        for row in 0..self.rows() {
            writer.queue(cursor::MoveTo(0, top + row as u16))?;
            for x in 0..self.width {
                let upper = self.pixels[2 * row * self.width + x];
                let lower = self.pixel(x, 2 * row + 1).unwrap_or(CLEAR_COLOR);
                writer.queue(SetForegroundColor(to_color(upper)))?;
                writer.queue(SetBackgroundColor(to_color(lower)))?;
                writer.queue(Print(HALF_BLOCK))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Rasterizer for PixelSurface {
    fn fill_triangle(&mut self, triangle: &ScreenTriangle, color: u32) {
        for (x, y) in covered_pixels(triangle, self.width, self.height) {
            self.pixels[y * self.width + x] = color;
        }
    }
}

fn to_color(rgb: u32) -> Color {
    Color::Rgb {
        r: (rgb >> 16) as u8,
        g: (rgb >> 8) as u8,
        b: rgb as u8,
    }
}

/// Pixels whose centres fall inside the triangle, clipped to the surface.
///
/// Centres exactly on an edge belong to the triangle only when that edge is
/// a top or left edge, so neighbours sharing an edge never both claim it.
pub fn covered_pixels(triangle: &ScreenTriangle, width: usize, height: usize) -> Vec<(usize, usize)> {
    let mut v = triangle.points.map(|p| (p.x, p.y));

    let area = edge(v[0], v[1], v[2]);
    if area == 0.0 || !area.is_finite() {
        return Vec::new();
    }
    if area < 0.0 {
        v.swap(1, 2);
    }

    // Bounding box
    let min_x = v[0].0.min(v[1].0).min(v[2].0).floor().max(0.0);
    let max_x = v[0].0.max(v[1].0).max(v[2].0).ceil().min(width as f32);
    let min_y = v[0].1.min(v[1].1).min(v[2].1).floor().max(0.0);
    let max_y = v[0].1.max(v[1].1).max(v[2].1).ceil().min(height as f32);

    let edges = [(v[1], v[2]), (v[2], v[0]), (v[0], v[1])];
    let mut covered = Vec::new();

    for y in min_y as usize..max_y as usize {
        for x in min_x as usize..max_x as usize {
            let p = (x as f32 + 0.5, y as f32 + 0.5);
            let inside = edges.iter().all(|&(a, b)| {
                let w = edge(a, b, p);
                w > 0.0 || (w == 0.0 && is_top_left(a, b))
            });
            if inside {
                covered.push((x, y));
            }
        }
    }

    covered
}

/// Positive when `p` is on the interior side of `a -> b` for a triangle with
/// positive area.
fn edge(a: (f32, f32), b: (f32, f32), p: (f32, f32)) -> f32 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

fn is_top_left(a: (f32, f32), b: (f32, f32)) -> bool {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dy == 0.0 && dx > 0.0) || dy < 0.0
}
