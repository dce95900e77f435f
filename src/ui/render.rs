use crate::ui::app::App;
use crate::ui::confirm::ConfirmDialogState;
use crate::ui::footer::Footer;
use crate::ui::form;
use crate::ui::header::{Header, HeaderInfo};
use crate::ui::layout::layout_regions;
use crate::ui::notifications::Level;
use crate::ui::pages;
use crate::ui::popup::PopupDialog;
use crate::ui::sidebar;
use crate::ui::theme::{MUTED, POPUP_BORDER, STATUS_ERROR, STATUS_INFO, STATUS_OK};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const NOTICE_WIDTH: u16 = 48;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);

    let header = Header::new();
    frame.render_widget(
        header.widget(HeaderInfo {
            page_title: app.page().title(),
            api_url: app.api_url(),
            email: app.session_email(),
            syncing: app.any_fetching(),
            session_expired: app.session_expired(),
        }),
        regions.header,
    );
    frame.render_widget(sidebar::widget(app.page()), regions.sidebar);
    frame.render_widget(Clear, regions.body);
    pages::render(frame, regions.body, app);

    let footer = Footer::new();
    frame.render_widget(
        footer.widget(
            regions.footer,
            app.page(),
            app.is_searching(),
            app.form_active(),
        ),
        regions.footer,
    );

    if app.dialog().is_visible() {
        form::render_dialog(frame, regions.body, app.dialog());
    }

    if let ConfirmDialogState::Visible { title, message, .. } = app.confirm() {
        let lines = vec![
            Line::from(message.clone()),
            Line::from(""),
            Line::from(Span::styled(
                "y/Enter: Confirm  n/Esc: Cancel",
                Style::default().fg(MUTED),
            )),
        ];
        PopupDialog::new(title.clone(), lines).render(frame, regions.body);
    }

    draw_notifications(frame, regions.body, app);
}

/// Stacks notices in the top-right corner of `area`, newest last.
fn draw_notifications(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let width = NOTICE_WIDTH.min(area.width);
    let mut y = area.y;
    for notice in app.notifications().iter() {
        let color = match notice.level {
            Level::Success => STATUS_OK,
            Level::Error => STATUS_ERROR,
            Level::Info => STATUS_INFO,
        };
        let inner = width.saturating_sub(2).max(1) as usize;
        let rows = notice.text.chars().count().div_ceil(inner).max(1) as u16;
        let height = rows + 2;
        if y + height > area.y + area.height {
            break;
        }
        let rect = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                notice.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
            rect,
        );
        y += height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::config::{Config, ConfigStore};
    use crate::ui::pages::Page;
    use crate::worker::{OrderStream, Resource, ResourceData, UiCommand, WorkerEvent};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::PathBuf;
    use tokio::sync::mpsc;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_chrome_and_loading_dashboard() {
        let app = App::new(
            ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml")),
            Some("ops@bullion.in".to_string()),
        );
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Bullion Admin"));
        assert!(text.contains("ops@bullion.in"));
        assert!(text.contains("Schemes"));
        assert!(text.contains("Total Users"));
    }

    fn connected_app() -> (App, mpsc::Receiver<UiCommand>) {
        let mut app = App::new(
            ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml")),
            Some("ops@bullion.in".to_string()),
        );
        let (tx, rx) = mpsc::channel(64);
        app.set_command_sender(tx);
        (app, rx)
    }

    fn draw_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        screen_text(&terminal)
    }

    fn rejected(message: &str) -> ApiError {
        ApiError::Rejected {
            message: message.to_string(),
        }
    }

    #[test]
    fn failed_refund_refresh_hides_previous_rows() {
        let (mut app, _rx) = connected_app();
        app.navigate(Page::Payments);
        let first = app.payments_view().first_page();
        app.on_worker_event(WorkerEvent::Fetched {
            resource: first.clone(),
            result: Ok(ResourceData::Refunds(
                serde_json::from_value(serde_json::json!({
                    "refunds": [{ "id": "r1", "order_id": "STALEORD9", "amount": 500 }],
                    "total": 1
                }))
                .unwrap(),
            )),
        });
        assert!(draw_text(&app).contains("STALEORD9"));

        app.refresh();
        app.on_worker_event(WorkerEvent::Fetched {
            resource: first,
            result: Err(rejected("Refund service down")),
        });
        let text = draw_text(&app);
        assert!(!text.contains("STALEORD9"));
        assert!(text.contains("Refund service down"));
    }

    #[test]
    fn failed_orders_refresh_hides_previous_rows_and_totals() {
        let (mut app, _rx) = connected_app();
        app.navigate(Page::Orders);
        let first = app.orders_view().first_page(OrderStream::Gold);
        app.on_worker_event(WorkerEvent::Fetched {
            resource: first.clone(),
            result: Ok(ResourceData::Orders(
                serde_json::from_value(serde_json::json!({
                    "orders": [{ "id": "o1", "order_number": "STALEORD9" }],
                    "total": 1
                }))
                .unwrap(),
            )),
        });
        assert!(draw_text(&app).contains("STALEORD9"));

        app.refresh();
        app.on_worker_event(WorkerEvent::Fetched {
            resource: first,
            result: Err(rejected("Orders service down")),
        });
        let text = draw_text(&app);
        assert!(!text.contains("STALEORD9"));
        assert!(text.contains("Orders service down"));
        assert_eq!(app.orders_view().total(OrderStream::Gold), 0);
    }

    #[test]
    fn scheme_detail_shows_info_and_switches_to_terms() {
        let (mut app, _rx) = connected_app();
        app.navigate(Page::Schemes);
        app.on_worker_event(WorkerEvent::Fetched {
            resource: app.schemes_view().resource(),
            result: Ok(ResourceData::Schemes(
                serde_json::from_value(serde_json::json!({
                    "schemes": [{"id": "s3", "name": "Akshaya Plan"}],
                    "total": 1
                }))
                .unwrap(),
            )),
        });
        app.open_selected();
        app.on_worker_event(WorkerEvent::Fetched {
            resource: Resource::Scheme {
                id: "s3".to_string(),
            },
            result: Ok(ResourceData::Scheme(
                serde_json::from_value(serde_json::json!({
                    "id": "s3",
                    "name": "Akshaya Plan",
                    "description": "Save monthly in gold",
                    "is_active": false
                }))
                .unwrap(),
            )),
        });

        let text = draw_text(&app);
        assert!(text.contains("Scheme Information"));
        assert!(text.contains("Akshaya Plan"));
        assert!(text.contains("Inactive"));
        assert!(text.contains("Save monthly in gold"));

        app.next_tab(true);
        let text = draw_text(&app);
        assert!(text.contains("No terms and conditions provided"));
    }

    #[test]
    fn missing_scheme_renders_not_found() {
        let (mut app, _rx) = connected_app();
        app.navigate(Page::Schemes);
        app.on_worker_event(WorkerEvent::Fetched {
            resource: app.schemes_view().resource(),
            result: Ok(ResourceData::Schemes(
                serde_json::from_value(serde_json::json!({
                    "schemes": [{"id": "gone", "name": "Old Plan"}],
                    "total": 1
                }))
                .unwrap(),
            )),
        });
        app.open_selected();
        app.on_worker_event(WorkerEvent::Fetched {
            resource: Resource::Scheme {
                id: "gone".to_string(),
            },
            result: Err(rejected("Scheme not found")),
        });
        assert!(draw_text(&app).contains("Scheme not found"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = App::new(
            ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml")),
            None,
        );
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
