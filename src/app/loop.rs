use crate::app::{
    action::Action, command::Command, debounce::Timers, input::map_event_to_action, reducer,
    state::AppState, ui,
};
use crate::domain::market::MarketApi;

use anyhow::Result;
use crossterm::event::{self, Event, MouseButton, MouseEventKind};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Debounce windows for the two input groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceWindows {
    pub ticker: Duration,
    pub news: Duration,
}

impl Default for DebounceWindows {
    fn default() -> Self {
        Self {
            ticker: Duration::from_millis(300),
            news: Duration::from_millis(500),
        }
    }
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    api: Arc<dyn MarketApi>,
    windows: DebounceWindows,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, api, windows, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    api: Arc<dyn MarketApi>,
    windows: DebounceWindows,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);
    let timers = Timers::spawn(windows.ticker, windows.news, action_tx.clone());

    tracing::info!(base_url = %api.base_url(), "starting event loop");

    // Initial news search with the restored or default filters
    if let Some(cmd) = reducer::update(&mut app_state, Action::SearchNews) {
        handle_command(cmd, api.clone(), action_tx.clone(), &timers)?;
    }

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                let action = map_event_to_action(event.clone(), &app_state, terminal.size()?);
                if let Event::Mouse(mouse) = event {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        app_state.last_click_time = Some(Instant::now());
                        app_state.last_click_pos = Some((mouse.column, mouse.row));
                    }
                }
                action
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, api.clone(), action_tx.clone(), &timers)?;
            }
        }
    }

    tracing::info!("event loop finished");
    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    api: Arc<dyn MarketApi>,
    tx: mpsc::Sender<Action>,
    timers: &Timers,
) -> Result<()> {
    crate::app::features::effects::handle_command(command, api, tx, timers)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
