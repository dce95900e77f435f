//! Console refund flow against a mock API: keys in, one POST out.

mod common;

use std::sync::mpsc as std_mpsc;
use std::time::{Duration, Instant};

use bullion_admin::config::{Config, ConfigStore};
use bullion_admin::query::QueryClient;
use bullion_admin::ui::app::App;
use bullion_admin::ui::events::AppEvent;
use bullion_admin::ui::input::handle_key;
use bullion_admin::ui::notifications::Level;
use bullion_admin::ui::pages::Page;
use bullion_admin::worker::{Worker, COMMAND_BUFFER};
use common::mock_backend::{MockBackend, MockResponse};
use common::signed_in_client;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use tokio::sync::mpsc;

const REFUND_PATH: &str = "/api/admin/payments/refund/ORD123";

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Feeds worker events into the app until `done` holds.
fn pump_until<F>(app: &mut App, events: &std_mpsc::Receiver<AppEvent>, done: F)
where
    F: Fn(&App) -> bool,
{
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(app) {
        let remaining = deadline.saturating_duration_since(Instant::now());
        assert!(!remaining.is_zero(), "timed out waiting for worker");
        if let Ok(AppEvent::Worker(event)) = events.recv_timeout(remaining) {
            app.on_worker_event(event);
        }
    }
}

struct Harness {
    runtime: tokio::runtime::Runtime,
    backend: MockBackend,
    app: App,
    events: std_mpsc::Receiver<AppEvent>,
}

fn start() -> Harness {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap();
    let backend = runtime.block_on(MockBackend::start());

    let (event_tx, events) = std_mpsc::channel();
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let worker = Worker::new(
        signed_in_client(&backend.base_url()),
        QueryClient::new(Duration::from_secs(30)),
        event_tx,
    );
    runtime.spawn(worker.run(command_rx));

    let config = ConfigStore::new(Config::default(), "/tmp/test.toml".into());
    let mut app = App::new(config, Some("ops@example.com".to_string()));
    app.set_command_sender(command_tx);

    Harness {
        runtime,
        backend,
        app,
        events,
    }
}

#[test]
fn refund_from_keys_posts_once_and_resets_form() {
    let mut h = start();
    h.runtime.block_on(h.backend.respond_to(
        "POST",
        REFUND_PATH,
        MockResponse::envelope(json!({ "orderId": "ORD123", "status": "initiated" })),
    ));

    press(&mut h.app, KeyCode::Char('5'));
    assert_eq!(h.app.page(), Page::Payments);
    press(&mut h.app, KeyCode::Char('i'));
    type_text(&mut h.app, "ORD123");
    press(&mut h.app, KeyCode::Tab);
    type_text(&mut h.app, "500");
    press(&mut h.app, KeyCode::Tab);
    type_text(&mut h.app, "damaged");
    press(&mut h.app, KeyCode::Enter);
    assert!(h.app.refund_form().is_submitting());

    let events = h.events;
    pump_until(&mut h.app, &events, |app| !app.refund_form().is_submitting());

    assert!(h.app.refund_form().error().is_none());
    assert!(h
        .app
        .refund_form()
        .fields()
        .iter()
        .all(|field| field.value.is_empty()));
    assert!(h
        .app
        .notifications()
        .iter()
        .any(|n| n.level == Level::Success && n.text.contains("ORD123")));

    let posts = h.runtime.block_on(h.backend.requests_to("POST", REFUND_PATH));
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].json(), json!({ "amount": 500.0, "reason": "damaged" }));
}

#[test]
fn rejected_refund_keeps_input_and_shows_server_message() {
    let mut h = start();
    h.runtime.block_on(h.backend.respond_to(
        "POST",
        REFUND_PATH,
        MockResponse::error(400, "Order already refunded"),
    ));

    press(&mut h.app, KeyCode::Char('5'));
    press(&mut h.app, KeyCode::Char('i'));
    type_text(&mut h.app, "ORD123");
    press(&mut h.app, KeyCode::Tab);
    type_text(&mut h.app, "500");
    press(&mut h.app, KeyCode::Tab);
    type_text(&mut h.app, "damaged");
    press(&mut h.app, KeyCode::Enter);

    let events = h.events;
    pump_until(&mut h.app, &events, |app| !app.refund_form().is_submitting());

    assert!(h.app.refund_form().error().is_some());
    let values: Vec<&str> = h
        .app
        .refund_form()
        .fields()
        .iter()
        .map(|field| field.value.as_str())
        .collect();
    assert_eq!(values, vec!["ORD123", "500", "damaged"]);
}

#[test]
fn blank_refund_never_reaches_the_server() {
    let mut h = start();

    press(&mut h.app, KeyCode::Char('5'));
    press(&mut h.app, KeyCode::Char('i'));
    press(&mut h.app, KeyCode::Enter);

    assert_eq!(
        h.app.refund_form().error(),
        Some("Please fill in all fields")
    );
    std::thread::sleep(Duration::from_millis(100));
    let posts = h.runtime.block_on(h.backend.requests_to("POST", REFUND_PATH));
    assert!(posts.is_empty());
}
