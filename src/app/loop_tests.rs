use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::state::AppState;
use crate::domain::market::MockMarketApi;
use crate::domain::models::{
    FetchReport, NewsArticle, NewsPage, NewsQuery, SelectedTicker, Suggestion, VerifyOutcome,
};
use crate::error::ApiError;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn timers(tx: &mpsc::Sender<Action>) -> Timers {
    Timers::spawn(
        Duration::from_millis(300),
        Duration::from_millis(500),
        tx.clone(),
    )
}

#[tokio::test]
async fn test_lookup_success_reports_suggestions() {
    let mut mock = MockMarketApi::new();
    mock.expect_search_tickers()
        .withf(|q| q == "AAPL")
        .returning(|_| Ok(vec![Suggestion::new("AAPL", "Apple Inc.")]));

    let (tx, mut rx) = mpsc::channel(1);
    let timers = timers(&tx);
    handle_command(
        Command::LookupTickers {
            seq: 7,
            query: "AAPL".into(),
        },
        Arc::new(mock),
        tx,
        &timers,
    )
    .unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        Action::SuggestionsLoaded(7, vec![Suggestion::new("AAPL", "Apple Inc.")])
    );
}

#[tokio::test]
async fn test_lookup_failure_reports_error() {
    let mut mock = MockMarketApi::new();
    mock.expect_search_tickers()
        .returning(|_| Err(ApiError::Transport("connection refused".into())));

    let (tx, mut rx) = mpsc::channel(1);
    let timers = timers(&tx);
    handle_command(
        Command::LookupTickers {
            seq: 2,
            query: "MS".into(),
        },
        Arc::new(mock),
        tx,
        &timers,
    )
    .unwrap();

    let action = rx.recv().await.unwrap();
    if let Action::LookupFailed(seq, message) = action {
        assert_eq!(seq, 2);
        assert!(message.contains("connection refused"));
    } else {
        panic!("Expected Action::LookupFailed, got {action:?}");
    }
}

#[tokio::test]
async fn test_verify_passes_outcome_through() {
    let mut mock = MockMarketApi::new();
    mock.expect_verify_ticker()
        .withf(|s| s == "NEWCO")
        .returning(|_| {
            Ok(VerifyOutcome::Accepted {
                ticker: SelectedTicker {
                    symbol: "NEWCO".into(),
                    name: "New Co".into(),
                },
                newly_added: true,
            })
        });

    let (tx, mut rx) = mpsc::channel(1);
    let timers = timers(&tx);
    handle_command(
        Command::VerifyTicker {
            seq: 3,
            query: "NEWCO".into(),
        },
        Arc::new(mock),
        tx,
        &timers,
    )
    .unwrap();

    let action = rx.recv().await.unwrap();
    assert!(matches!(
        action,
        Action::TickerVerified(3, Ok(VerifyOutcome::Accepted { newly_added: true, .. }))
    ));
}

#[tokio::test]
async fn test_verify_transport_error_becomes_message() {
    let mut mock = MockMarketApi::new();
    mock.expect_verify_ticker()
        .returning(|_| Err(ApiError::Transport("timed out".into())));

    let (tx, mut rx) = mpsc::channel(1);
    let timers = timers(&tx);
    handle_command(
        Command::VerifyTicker {
            seq: 1,
            query: "ZZZZQ".into(),
        },
        Arc::new(mock),
        tx,
        &timers,
    )
    .unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        Action::TickerVerified(1, Err("network error: timed out".into()))
    );
}

#[tokio::test]
async fn test_fetch_reports_article_count() {
    let mut mock = MockMarketApi::new();
    mock.expect_fetch_news()
        .withf(|symbols, limit| symbols == &["TSLA".to_string()] && *limit == 10)
        .returning(|_, _| {
            Ok(FetchReport {
                articles: vec![NewsArticle::default(); 3],
                message: Some("Fetched".into()),
                error: None,
            })
        });

    let (tx, mut rx) = mpsc::channel(1);
    let timers = timers(&tx);
    handle_command(
        Command::FetchNews {
            symbol: "TSLA".into(),
            limit: 10,
        },
        Arc::new(mock),
        tx,
        &timers,
    )
    .unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        Action::NewsFetched("TSLA".into(), Ok(3))
    );
}

#[tokio::test]
async fn test_full_news_error_to_state() {
    let mut mock = MockMarketApi::new();
    mock.expect_search_news().returning(|_| {
        Err(ApiError::Status {
            status: 500,
            message: "HTTP error! status: 500".into(),
        })
    });

    let (tx, mut rx) = mpsc::channel(1);
    let timers = timers(&tx);
    let mut state = AppState::default();

    let cmd = reducer::update(&mut state, Action::SearchNews).unwrap();
    assert!(state.news.loading);
    handle_command(cmd, Arc::new(mock), tx, &timers).unwrap();

    let action = rx.recv().await.unwrap();
    reducer::update(&mut state, action);
    assert!(!state.news.loading);
    assert_eq!(state.news.error.as_deref(), Some("HTTP error! status: 500"));
    assert!(!state.feedback.notices.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_typing_burst_issues_single_lookup() {
    let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();

    let mut mock = MockMarketApi::new();
    mock.expect_base_url()
        .returning(|| "http://test".to_string());
    mock.expect_search_news()
        .returning(|_| Ok(NewsPage::default()));
    mock.expect_search_tickers()
        .times(1)
        .returning(move |q| {
            let _ = seen_tx.send(q.to_string());
            Ok(vec![Suggestion::new("AAPL", "Apple Inc.")])
        });

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let driver = tokio::spawn(async move {
        for c in "AAPL".chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            event_tx.send(Ok(Event::Key(key))).await.unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        let query = seen_rx.recv().await.unwrap();
        // Let a would-be second lookup surface before quitting.
        tokio::time::sleep(Duration::from_secs(2)).await;
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))))
            .await;
        (query, seen_rx.try_recv().is_err())
    });

    run_loop_with_events(
        &mut terminal,
        AppState::default(),
        Arc::new(mock),
        DebounceWindows::default(),
        event_rx,
    )
    .await
    .unwrap();

    let (query, no_second_lookup) = driver.await.unwrap();
    assert_eq!(query, "AAPL");
    assert!(no_second_lookup);
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockMarketApi::new();
    // Every call succeeds so the UI keeps moving through its states
    mock.expect_base_url()
        .returning(|| "http://test".to_string());
    mock.expect_search_tickers().returning(|q| {
        Ok(vec![
            Suggestion::new(q.to_uppercase(), format!("{q} Holdings")),
            Suggestion::new("AAPL", "Apple Inc."),
        ])
    });
    mock.expect_verify_ticker().returning(|s| {
        Ok(VerifyOutcome::Rejected {
            message: format!("ticker {s} not found"),
        })
    });
    mock.expect_search_news().returning(|q: &NewsQuery| {
        Ok(NewsPage {
            total: 42,
            articles: vec![
                NewsArticle {
                    title: format!("News for {}", q.symbol),
                    ..Default::default()
                };
                5
            ],
            page: Some(q.page),
            per_page: Some(10),
        })
    });
    mock.expect_fetch_news()
        .returning(|_, _| Ok(FetchReport::default()));

    let api = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=20 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(
            &mut terminal,
            app_state,
            api,
            DebounceWindows::default(),
            event_rx,
        ),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    // Ctrl is rare so the run is not cut short by Ctrl+C
    if rng.gen_bool(0.03) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 | 1 => MouseEventKind::Down(MouseButton::Left),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
