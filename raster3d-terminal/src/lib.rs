/// Terminal front end for the raster3d pipeline
use anyhow::{bail, Context, Result};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::{debug, info, warn};
use raster3d_core::{CameraController, FrameStats, RenderPipeline, CUBE};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

pub mod config;
pub mod input;
pub mod renderer;
pub mod timing;

pub use config::Cli;
pub use input::{Command, KeyboardState};
pub use renderer::PixelSurface;
pub use timing::{FpsCounter, FrameTimer};

/// Terminal line the surface starts on; line 0 is the status bar
const SURFACE_TOP: u16 = 1;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    pipeline: RenderPipeline,
    controller: CameraController,
    keyboard: KeyboardState,
    surface: PixelSurface,
    timer: FrameTimer,
    fps: FpsCounter,
    stats: FrameStats,
    running: bool,
    /// Last known terminal size in columns and lines
    terminal_size: (u16, u16),
    /// False while the terminal is too small to show the surface
    presenting: bool,
}

/// Raw mode, alternate screen and hidden cursor for as long as it lives.
/// Dropping it restores the terminal, also when unwinding from a panic.
struct ScreenGuard {
    enhanced: bool,
}

impl ScreenGuard {
    fn acquire() -> Result<Self> {
        terminal::enable_raw_mode().context("couldn't enable raw mode")?;
        let mut guard = Self { enhanced: false };

        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)
            .context("couldn't set up the alternate screen")?;

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            match execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            ) {
                Ok(()) => guard.enhanced = true,
                Err(e) => warn!("couldn't enable key release reporting: {}", e),
            }
        }

        Ok(guard)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        restore_screen(&mut stdout(), self.enhanced);
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("couldn't restore terminal mode: {}", e);
        }
    }
}

/// Undo the screen setup. Each step runs even if an earlier one failed.
fn restore_screen<W: Write>(out: &mut W, enhanced: bool) {
    if enhanced {
        if let Err(e) = execute!(out, PopKeyboardEnhancementFlags) {
            warn!("couldn't pop keyboard flags: {}", e);
        }
    }
    if let Err(e) = execute!(out, terminal::LeaveAlternateScreen, cursor::Show) {
        warn!("couldn't leave the alternate screen: {}", e);
    }
}

impl TerminalApp {
    pub fn new(cli: &Cli) -> Result<Self> {
        let pipeline = cli.pipeline()?;
        let surface = PixelSurface::new(pipeline.viewport());

        Ok(Self {
            pipeline,
            controller: CameraController::default(),
            keyboard: KeyboardState::new(false),
            surface,
            timer: FrameTimer::new(cli.fps),
            fps: FpsCounter::new(Instant::now()),
            stats: FrameStats::default(),
            running: true,
            terminal_size: (0, 0),
            presenting: true,
        })
    }

    /// Terminal columns and lines needed for the surface plus the status bar
    fn required_size(&self) -> (usize, usize) {
        (self.surface.width(), self.surface.rows() + SURFACE_TOP as usize)
    }

    /// Check the terminal can show the whole surface plus the status bar.
    pub fn check_fits(&self, columns: u16, lines: u16) -> Result<()> {
        let (needed_columns, needed_lines) = self.required_size();
        if (columns as usize) < needed_columns || (lines as usize) < needed_lines {
            bail!(
                "terminal is {}x{} but a {}x{} surface needs {}x{}; \
                 enlarge the terminal or pass smaller --width/--height",
                columns,
                lines,
                self.surface.width(),
                self.surface.height(),
                needed_columns,
                needed_lines
            );
        }
        Ok(())
    }

    /// Record a new terminal size. Presentation pauses while the terminal
    /// is too small and resumes once it fits again.
    pub fn resize(&mut self, columns: u16, lines: u16) {
        self.terminal_size = (columns, lines);
        match self.check_fits(columns, lines) {
            Ok(()) => {
                if !self.presenting {
                    info!("terminal is {}x{} again, resuming", columns, lines);
                }
                self.presenting = true;
            }
            Err(e) => {
                if self.presenting {
                    warn!("{:#}", e);
                }
                self.presenting = false;
            }
        }
    }

    pub fn is_presenting(&self) -> bool {
        self.presenting
    }

    /// Shown instead of the surface while the terminal is too small
    pub fn notice(&self) -> String {
        let (needed_columns, needed_lines) = self.required_size();
        let line = format!(
            "enlarge terminal to {}x{} (now {}x{}) or press Q to quit",
            needed_columns, needed_lines, self.terminal_size.0, self.terminal_size.1
        );
        line.chars().take(self.terminal_size.0 as usize).collect()
    }

    pub fn run(&mut self) -> Result<()> {
        let (columns, lines) = terminal::size().context("couldn't query terminal size")?;
        self.check_fits(columns, lines)?;
        self.resize(columns, lines);

        let guard = ScreenGuard::acquire()?;
        if !guard.enhanced {
            warn!("terminal does not report key releases; inferring held keys from auto-repeat");
        }
        self.keyboard = KeyboardState::new(guard.enhanced);
        info!(
            "rendering {}x{} at {:?} per frame",
            self.surface.width(),
            self.surface.height(),
            self.timer.target()
        );

        let result = self.main_loop();
        drop(guard);

        result
    }

    fn main_loop(&mut self) -> Result<()> {
        let mut delta = self.timer.initial_delta();

        while self.running {
            self.timer.begin();

            // Handle input
            self.poll_input()?;
            if !self.running {
                break;
            }

            // Update
            self.keyboard.tick(Instant::now());
            self.controller.update(delta, &self.keyboard);

            // Render
            self.render()?;

            if let Some(fps) = self.fps.tick(Instant::now()) {
                debug!("{:.1} fps, last frame {:?}", fps, self.stats);
            }

            // Frame timing
            delta = self.timer.finish();
        }

        info!("leaving at pose {:?}", self.controller.pose());
        Ok(())
    }

    fn poll_input(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match self.keyboard.handle(&key, Instant::now()) {
                    Some(Command::Quit) => self.running = false,
                    Some(Command::Reset) => {
                        debug!("camera reset");
                        self.controller.reset();
                    }
                    None => {}
                },
                Event::FocusLost => self.keyboard.release_all(),
                Event::Resize(columns, lines) => {
                    self.resize(columns, lines);
                    queue!(stdout(), terminal::Clear(ClearType::All))?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Draw one frame into the surface; returns the pipeline's counts.
    pub fn draw_frame(&mut self) -> FrameStats {
        self.surface.clear();
        self.stats = self
            .pipeline
            .render_frame(self.controller.pose(), &mut self.surface);
        self.stats
    }

    fn render(&mut self) -> Result<()> {
        let mut out = stdout();
        if !self.presenting {
            queue!(
                out,
                cursor::MoveTo(0, 0),
                terminal::Clear(ClearType::CurrentLine),
                Print(self.notice())
            )?;
            out.flush()?;
            return Ok(());
        }

        self.draw_frame();
        self.surface.draw(&mut out, SURFACE_TOP)?;

        // Draw UI overlay
        queue!(
            out,
            cursor::MoveTo(0, 0),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(self.status_line()),
            ResetColor
        )?;

        out.flush()?;
        Ok(())
    }

    /// Status bar text, cut to the surface width
    pub fn status_line(&self) -> String {
        let line = format!(
            "raster3d | FPS: {:.1} | tris {}/{} | WASD move, Space/C up/down, arrows look, R reset, Q quit",
            self.fps.fps(),
            self.stats.submitted,
            CUBE.len()
        );
        line.chars().take(self.surface.width()).collect()
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }
}
