mod app;
mod config;
mod logging;
mod ripple;
mod ui;

use crate::app::action::{Action, Change};
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let (cfg, seed_error) = config::load_config()?;

    match logging::init(&cfg.logging) {
        Ok(Some(path)) => info!("logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }
    if let Some(e) = seed_error {
        warn!("could not seed default config: {:#}", e);
        if !cfg.logging.enabled {
            eprintln!("Could not write default config: {:#}", e);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn draw(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, state: &mut AppState) -> Result<()> {
    let mut hits = None;
    terminal.draw(|f| hits = Some(ui::render(f, state)))?;
    if let Some(hits) = hits {
        state.set_hits(hits);
    }
    state.dirty = false;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let tick_rate = cfg.ui.tick_rate();

    let mut state = AppState::new(cfg);
    info!(tasks = state.screen.store.len(), "started");

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    warn!("terminal input failed: {}", e);
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn animation tick task
    let tick_tx = event_tx;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    draw(terminal, &mut state)?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::Changed(change) => {
                    match &change {
                        Change::Added { index, text } => info!(index, text = %text, "task added"),
                        Change::Updated { index, text } => {
                            info!(index, text = %text, "task updated")
                        }
                        Change::Removed { index, text } => {
                            info!(index, text = %text, "task removed")
                        }
                    }
                    state.screen.status_message = Some(change.summary());
                    state.dirty = true;
                }
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            info!("quit");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            draw(terminal, &mut state)?;
        }
    }

    Ok(())
}
