use std::io::{self, Stderr};
use std::time::Duration;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind, MouseEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crave_core::Recipe;
use ratatui::{backend::CrosstermBackend, Terminal};
use futures_util::StreamExt;
use tokio::sync::mpsc;

pub type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Animation / chat-delay tick
const TICK_INTERVAL: Duration = Duration::from_millis(300);
/// Cook-mode countdown resolution
const CLOCK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Tick,
    /// Once per second, drives the cook timer
    Clock,
    /// A list fetch finished; `generation` identifies which one
    Fetched { generation: u64, recipes: Vec<Recipe> },
    /// Full record for a partial recipe opened in the detail view
    Hydrated { id: String, recipe: Option<Recipe> },
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn event reader task
        let tx_events = tx.clone();
        tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            loop {
                match reader.next().await {
                    Some(Ok(evt)) => {
                        let app_event = match evt {
                            // Only handle key press events, not release
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                Some(AppEvent::Key(key))
                            }
                            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
                            Event::Resize(_, _) => Some(AppEvent::Resize),
                            _ => None,
                        };

                        if let Some(event) = app_event {
                            if tx_events.send(event).is_err() {
                                break;
                            }
                        }
                    }
                    Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                    None => break,
                }
            }
        });

        Self::spawn_interval(tx.clone(), TICK_INTERVAL, || AppEvent::Tick);
        Self::spawn_interval(tx.clone(), CLOCK_INTERVAL, || AppEvent::Clock);

        Self { rx, tx }
    }

    fn spawn_interval(
        tx: mpsc::UnboundedSender<AppEvent>,
        period: Duration,
        make: fn() -> AppEvent,
    ) {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                if tx.send(make()).is_err() {
                    break;
                }
            }
        });
    }

    /// Handle for background tasks that report back into the loop
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stderr(), EnterAlternateScreen)?;

    // Enable mouse capture
    execute!(io::stderr(), crossterm::event::EnableMouseCapture)?;

    let backend = CrosstermBackend::new(io::stderr());
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(io::stderr(), crossterm::event::DisableMouseCapture)?;
    execute!(io::stderr(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Install panic hook to restore terminal on panic
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
