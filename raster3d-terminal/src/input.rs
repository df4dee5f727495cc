/// Keyboard state tracking on top of crossterm key events
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use raster3d_core::{Action, InputState};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a key counts as held after its last press or repeat when the
/// terminal does not report releases. Longer than the usual initial
/// auto-repeat delay, so a single tap moves the camera for the whole latch:
/// about 1.65 units or 1.65 radians at the controller's speeds.
pub const HOLD_LATCH: Duration = Duration::from_millis(550);

/// Non-camera keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Camera(Action),
    Command(Command),
}

fn binding(event: &KeyEvent) -> Option<Binding> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Binding::Command(Command::Quit)),
            _ => None,
        };
    }

    let action = match event.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Action::MoveForward,
            's' => Action::MoveBack,
            'a' => Action::MoveLeft,
            'd' => Action::MoveRight,
            ' ' => Action::MoveUp,
            'c' => Action::MoveDown,
            'r' => return Some(Binding::Command(Command::Reset)),
            'q' => return Some(Binding::Command(Command::Quit)),
            _ => return None,
        },
        KeyCode::Up => Action::LookUp,
        KeyCode::Down => Action::LookDown,
        KeyCode::Left => Action::LookLeft,
        KeyCode::Right => Action::LookRight,
        KeyCode::Esc => return Some(Binding::Command(Command::Quit)),
        _ => return None,
    };
    Some(Binding::Camera(action))
}

/// Which camera keys are currently held
#[derive(Debug, Clone)]
pub struct KeyboardState {
    last_seen: HashMap<Action, Instant>,
    reports_release: bool,
    now: Instant,
}

impl KeyboardState {
    /// `reports_release` is true when the terminal delivers key release
    /// events; otherwise holds are inferred from auto-repeat.
    pub fn new(reports_release: bool) -> Self {
        Self {
            last_seen: HashMap::new(),
            reports_release,
            now: Instant::now(),
        }
    }

    /// Record a key event; returns a command if the key maps to one.
    pub fn handle(&mut self, event: &KeyEvent, at: Instant) -> Option<Command> {
        match binding(event)? {
            Binding::Command(command) => {
                if event.kind == KeyEventKind::Release {
                    None
                } else {
                    Some(command)
                }
            }
            Binding::Camera(action) => {
                match event.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        self.last_seen.insert(action, at);
                    }
                    KeyEventKind::Release => {
                        self.last_seen.remove(&action);
                    }
                }
                None
            }
        }
    }

    /// Set the instant held state is evaluated at for this frame.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        if !self.reports_release {
            self.last_seen
                .retain(|_, seen| now.saturating_duration_since(*seen) < HOLD_LATCH);
        }
    }

    pub fn release_all(&mut self) {
        self.last_seen.clear();
    }
}

impl InputState for KeyboardState {
    fn is_held(&self, action: Action) -> bool {
        match self.last_seen.get(&action) {
            Some(_) if self.reports_release => true,
            Some(seen) => self.now.saturating_duration_since(*seen) < HOLD_LATCH,
            None => false,
        }
    }
}
