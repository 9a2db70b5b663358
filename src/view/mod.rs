//! TUI rendering and terminal management (impure shell)

mod card;
pub mod constants;
mod help;
mod layout;
mod styles;

pub use help::render_help_overlay;
pub use layout::{calculate_layout, footer_buttons, hit_test, ReviewLayout};
pub use styles::{CardStyles, ColorConfig};

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::persistence::{submit_rating, ProgressSink};
use crate::state::{Dispatch, InputDispatcher, ReviewSession, Signal};
use constants::{NOTIFICATION_TTL, TICK_INTERVAL};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use layout::{render_layout, status_hints, ScreenContext};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Raw mode, alternate screen and mouse capture, held for the guard's lifetime.
///
/// Dropping the guard restores the terminal, so every exit path out of the
/// event loop (including `?` errors and panics) releases input capture.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Put the terminal into review mode.
    pub fn acquire() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        // From here on, Drop undoes whatever succeeded.
        let guard = Self { _private: () };
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        debug!("Terminal acquired");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Status bar text for a session signal.
pub fn signal_message(signal: Signal) -> &'static str {
    match signal {
        Signal::DeckExhausted => "You've reached the end of the deck",
        Signal::DeckShuffled => "The flashcards have been shuffled",
    }
}

/// A transient status bar message.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Notification {
    text: &'static str,
    shown_at: Instant,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    session: ReviewSession,
    dispatcher: InputDispatcher,
    key_bindings: KeyBindings,
    /// Status bar legend derived from `key_bindings`
    key_hints: String,
    sink: Box<dyn ProgressSink>,
    styles: CardStyles,
    help_visible: bool,
    notification: Option<Notification>,
    /// Areas of the last rendered frame (for mouse hit testing)
    last_layout: Option<ReviewLayout>,
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// App on `terminal` reviewing `session`, with an entropy-seeded dispatcher.
    pub fn new(
        terminal: Terminal<B>,
        session: ReviewSession,
        key_bindings: KeyBindings,
        sink: Box<dyn ProgressSink>,
    ) -> Self {
        Self {
            terminal,
            session,
            dispatcher: InputDispatcher::new(),
            key_hints: status_hints(&key_bindings),
            key_bindings,
            sink,
            styles: CardStyles::default(),
            help_visible: false,
            notification: None,
            last_layout: None,
        }
    }

    /// Replace the dispatcher, e.g. with one using a seeded generator.
    pub fn with_dispatcher(mut self, dispatcher: InputDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Replace the palette.
    pub fn with_styles(mut self, styles: CardStyles) -> Self {
        self.styles = styles;
        self
    }

    /// The session under review.
    pub fn session(&self) -> &ReviewSession {
        &self.session
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Whether the help overlay is open.
    pub fn is_help_visible(&self) -> bool {
        self.help_visible
    }

    /// Text currently shown in the status bar, if any.
    pub fn notification(&self) -> Option<&'static str> {
        self.notification.as_ref().map(|n| n.text)
    }

    /// Run the main event loop
    ///
    /// Returns when the learner quits (q or Ctrl+C). Redraws after every
    /// input event and when a notification expires.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                    }
                    _ => continue,
                }
                self.draw()?;
            } else if self.expire_notification(Instant::now()) {
                self.draw()?;
            }
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if rebound
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let action = self.key_bindings.get(key);

        if self.help_visible {
            match (key.code, action) {
                (_, Some(KeyAction::Quit)) => return true,
                (KeyCode::Esc, _) | (_, Some(KeyAction::Help)) => self.help_visible = false,
                _ => {}
            }
            return false;
        }

        match action {
            Some(KeyAction::Quit) => true,
            Some(KeyAction::Help) => {
                self.help_visible = true;
                false
            }
            Some(action) => {
                self.apply_action(action);
                false
            }
            None => false,
        }
    }

    /// Handle a single mouse event
    ///
    /// Left clicks press whatever is under the cursor; the wheel moves
    /// between cards. Any click closes the help overlay.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.help_visible {
            if let MouseEventKind::Down(_) = mouse.kind {
                self.help_visible = false;
            }
            return;
        }

        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(KeyAction::NavigateNext),
            MouseEventKind::ScrollUp => Some(KeyAction::NavigatePrev),
            MouseEventKind::Down(MouseButton::Left) => self.last_layout.as_ref().and_then(|layout| {
                hit_test(layout, self.session.phase(), mouse.column, mouse.row)
            }),
            _ => None,
        };

        if let Some(action) = action {
            self.apply_action(action);
        }
    }

    /// Run a session action to completion and surface its side effects.
    fn apply_action(&mut self, action: KeyAction) {
        match self.dispatcher.dispatch(&mut self.session, action) {
            Dispatch::Applied { signal, rating } => {
                if let Some(rating) = rating {
                    submit_rating(self.sink.as_mut(), rating);
                }
                if let Some(signal) = signal {
                    info!(?signal, "Showing notification");
                    self.notification = Some(Notification {
                        text: signal_message(signal),
                        shown_at: Instant::now(),
                    });
                }
            }
            Dispatch::Ignored | Dispatch::Unhandled => {}
        }
    }

    /// Clear a notification older than [`NOTIFICATION_TTL`]. Returns true if cleared.
    fn expire_notification(&mut self, now: Instant) -> bool {
        match &self.notification {
            Some(n) if now.saturating_duration_since(n.shown_at) >= NOTIFICATION_TTL => {
                self.notification = None;
                true
            }
            _ => false,
        }
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let session = &self.session;
        let ctx = ScreenContext {
            styles: &self.styles,
            notification: self.notification.as_ref().map(|n| n.text),
            key_hints: &self.key_hints,
        };
        let key_bindings = &self.key_bindings;
        let help_visible = self.help_visible;
        let mut rendered_layout = None;

        self.terminal.draw(|frame| {
            let layout = calculate_layout(frame.area());
            render_layout(frame, &layout, session, ctx);
            if help_visible {
                render_help_overlay(frame, key_bindings);
            }
            rendered_layout = Some(layout);
        })?;

        self.last_layout = rendered_layout;
        Ok(())
    }
}

/// Front-end settings resolved by the caller.
pub struct ScreenOptions {
    /// Resolved key map.
    pub key_bindings: KeyBindings,
    /// Color mode.
    pub color: ColorConfig,
}

/// Initialize and run the TUI on `session` until the learner quits.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_session(
    session: ReviewSession,
    sink: Box<dyn ProgressSink>,
    options: ScreenOptions,
) -> Result<(), TuiError> {
    let _guard = TerminalGuard::acquire()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = TuiApp::new(terminal, session, options.key_bindings, sink)
        .with_styles(CardStyles::with_color_config(options.color));

    info!(cards = app.session().total(), "Review started");
    let result = app.run();
    info!("Review finished");
    result
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
