use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::infrastructure::tui::input::{InputHandler, InputMode};
use crate::infrastructure::tui::widgets::countdown_view::{self, Scene};
use crate::infrastructure::tui::widgets::help_overlay;
use crate::interface_adapter::controller::timer_controller::{AppAction, TimerController};
use crate::interface_adapter::port::ClockPort;
use crate::shared::config::{CanvasMarker, Config};
use crate::shared::error::AppError;

/// Title shown in the terminal window while the timer runs.
pub fn window_title() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// How long to wait for input before the next tick is due.
fn poll_timeout(tick_interval: Duration, since_last_tick: Duration) -> Duration {
    tick_interval.saturating_sub(since_last_tick)
}

/// What the loop owes the screen before it may sleep again.
#[derive(Debug, Default)]
struct Pending {
    /// Run a tick now instead of waiting for the interval.
    tick: bool,
    /// Repaint even when the frame is unchanged.
    force: bool,
}

/// Main TUI event loop.
///
/// Initializes crossterm raw mode + alternate screen, creates the ratatui Terminal,
/// runs the tick -> draw -> poll -> input loop, and cleans up on exit.
pub fn run<C: ClockPort>(mut controller: TimerController<C>, config: &Config) -> anyhow::Result<()> {
    // === Initialization ===
    enable_raw_mode().map_err(AppError::Tui)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(window_title())).map_err(AppError::Tui)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(AppError::Tui)?;
    tracing::info!(marker = ?config.marker, tick = ?config.tick_interval(), "display opened");

    // === Main loop ===
    let result = main_loop(
        &mut terminal,
        &mut controller,
        config.marker,
        config.tick_interval(),
    );

    // === Cleanup (always runs) ===
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();
    tracing::info!(remaining = %controller.timer().remaining(), "display closed");

    result
}

fn main_loop<C: ClockPort>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut TimerController<C>,
    marker: CanvasMarker,
    tick_interval: Duration,
) -> anyhow::Result<()> {
    let mut input_handler = InputHandler::new();
    let mut scene = Scene::new();
    let mut pending = Pending {
        tick: true,
        force: true,
    };
    let mut last_tick = Instant::now();

    loop {
        // 1. Tick: repaint the scene if the visible frame changed
        if pending.tick || last_tick.elapsed() >= tick_interval {
            let area: Rect = terminal.size()?.into();
            let canvas = countdown_view::canvas_size(area, marker);
            let painted = controller.tick(&mut scene, canvas, pending.force);

            // 2. Draw
            if painted || pending.force {
                terminal.draw(|frame| {
                    countdown_view::render(frame, frame.area(), &scene, marker);
                    if input_handler.mode() == InputMode::HelpView {
                        help_overlay::render_help_overlay(frame, frame.area());
                    }
                })?;
            }
            pending = Pending::default();
            last_tick = Instant::now();
        }

        // 3. Wait for input until the next tick is due
        if !event::poll(poll_timeout(tick_interval, last_tick.elapsed()))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = input_handler.handle_key(key) else {
                    continue;
                };
                match action {
                    AppAction::Quit => return Ok(()),
                    AppAction::ShowHelp | AppAction::CloseHelp => {
                        pending.tick = true;
                        pending.force = true;
                    }
                    _ => {
                        controller.dispatch(action);
                        pending.tick = true;
                    }
                }
            }
            Event::Resize(cols, rows) => {
                tracing::debug!(cols, rows, "terminal resized");
                pending.tick = true;
                pending.force = true;
            }
            _ => {}
        }
    }
}
