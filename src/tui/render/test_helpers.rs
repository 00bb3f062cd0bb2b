use chrono::{DateTime, Local, TimeZone};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{AppConfig, Identity};
use crate::ops::Store;
use crate::ops::store::Clock;
use crate::tui::app::App;

pub const TERM_W: u16 = 100;
pub const TERM_H: u16 = 30;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Always Wednesday 14 May 2025, 3:45 PM
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 5, 14, 15, 45, 0).unwrap()
    }
}

/// Build an App on a fixed clock from `config`.
pub fn app_with_config(config: AppConfig) -> App {
    let store = Store::with_clock(&config, Box::new(FixedClock));
    App::with_store(config, store, None)
}

/// An App with the login screen switched off.
pub fn app_no_auth() -> App {
    let mut config = AppConfig::default();
    config.features.auth = false;
    app_with_config(config)
}

/// An App that has gone through the login screen.
pub fn app_signed_in() -> App {
    let mut app = app_with_config(AppConfig::default());
    app.store.login(Identity {
        name: "Justin Wilson".into(),
        email: "justinwilson@gmail.com".into(),
    });
    app.mode = crate::tui::app::Mode::Navigate;
    app
}
