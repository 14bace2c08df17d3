use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use stockscope::app::persistence::PreferenceStore;
use stockscope::app::r#loop::{run_loop, DebounceWindows};
use stockscope::app::state::AppState;
use stockscope::config::AppConfig;
use stockscope::infrastructure::http_api::HttpMarketApi;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Everything that can fail on bad configuration happens before the
    // terminal enters raw mode.
    let config = AppConfig::load();
    stockscope::logging::init(&config)?;
    tracing::debug!(?config, "configuration loaded");

    let api = Arc::new(HttpMarketApi::new(&config)?);
    let app_state = AppState::new(&config, PreferenceStore::default_location());
    let windows = DebounceWindows {
        ticker: config.search_debounce(),
        news: config.news_debounce(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, api, windows).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("{err:?}");
    }

    Ok(())
}
