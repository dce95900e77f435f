use crate::api::ApiClient;
use crate::config::{ConfigStore, Session};
use crate::query::QueryClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::{Worker, COMMAND_BUFFER};
use anyhow::Context;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the console until the operator quits.
pub fn run(config: ConfigStore, session: Session) -> anyhow::Result<()> {
    let snapshot = config.get();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("bullion-api")
        .build()
        .context("failed to start async runtime")?;

    let api = ApiClient::new(&snapshot.api, Some(session.access_token.clone()))?;
    let query = QueryClient::new(Duration::from_secs(snapshot.query.stale_seconds));
    let tick_rate = Duration::from_millis(snapshot.ui.tick_rate_ms.max(16));
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let worker = Worker::new(api, query, events.sender());
    runtime.spawn(worker.run(command_rx));

    let mut app = App::new(config, Some(session.email));
    app.set_command_sender(command_tx);
    app.load_page(false);
    tracing::info!(api = %snapshot.api.base_url, "console started");

    let (mut terminal, guard) = setup_terminal()?;
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Worker(event)) => app.on_worker_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    drop(app);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("console stopped");
    Ok(())
}
