//! Application state and the terminal event loop.

use crate::config::{Palette, StarsConfig};
use crate::controller::{Controller, seeded_rng};
use crate::input::{self, Command};
use crate::ticker::{Epoch, Ticker};
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::ops::ControlFlow;
use strictly_stars::{Event, Number, Snapshot};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};

/// Real-time length of one game second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Main application state: the controller plus what only the UI cares about.
#[derive(Debug)]
pub struct App<R> {
    controller: Controller<R>,
    cursor: Number,
    palette: Palette,
}

impl<R: Rng> App<R> {
    /// Creates a new application around a running controller.
    pub fn new(controller: Controller<R>, palette: Palette) -> Self {
        Self {
            controller,
            cursor: Number::MIN,
            palette,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<ControlFlow<()>> {
        match input::command_for(key) {
            Command::Select(number) => {
                self.cursor = number;
                self.controller.handle(Event::Select(number))?;
            }
            Command::SelectCursor => self.controller.handle(Event::Select(self.cursor))?,
            Command::Move(direction) => self.cursor = input::move_cursor(self.cursor, direction),
            Command::Restart => self.controller.handle(Event::Restart)?,
            Command::Quit => {
                info!("User quit");
                return Ok(ControlFlow::Break(()));
            }
            Command::Ignore => debug!(?key, "Unbound key"),
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Forwards a scheduler tick.
    pub fn on_tick(&mut self, epoch: Epoch) -> Result<()> {
        Ok(self.controller.on_tick(epoch)?)
    }

    /// Returns the renderer snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Number {
        self.cursor
    }

    /// Returns the colours in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns the controller.
    pub fn controller(&self) -> &Controller<R> {
        &self.controller
    }
}

/// Runs the terminal game until the player quits.
pub async fn run_tui(config: StarsConfig) -> Result<()> {
    info!("Starting Strictly Stars TUI");

    let palette = config.theme().palette()?;
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let ticker = Ticker::new(TICK_PERIOD, tick_tx);
    let controller = Controller::new(seeded_rng(*config.seed()), ticker)?;
    let mut app = App::new(controller, palette);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_loop(&mut terminal, &mut app, &mut tick_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, then drains key presses and ticks strictly one at a time.
#[instrument(skip_all)]
async fn run_loop<R: Rng>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<R>,
    ticks: &mut UnboundedReceiver<Epoch>,
) -> Result<()> {
    loop {
        let snapshot = app.snapshot();
        terminal.draw(|f| ui::draw(f, &snapshot, app.cursor(), app.palette()))?;

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(50))?
            && let TermEvent::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
            && app.handle_key(key.code)?.is_break()
        {
            return Ok(());
        }

        while let Ok(epoch) = ticks.try_recv() {
            app.on_tick(epoch)?;
        }

        sleep(Duration::from_millis(10)).await;
    }
}
