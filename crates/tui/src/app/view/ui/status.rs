use crate::app::AppState;
use ratatui::text::{Line, Span};

use super::style::{dim_style, status_style, title_style};
use super::text::truncate_to_width;

const KEY_HINTS: &str = "↑/↓ move · Enter select · c copy · PgUp/PgDn scroll · q quit";

pub(super) fn build_header_line(app: &AppState) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Session Config Tester", title_style()),
        Span::styled(
            format!("  ·  {} example configurations", app.catalog.len()),
            dim_style(),
        ),
    ])
}

pub(super) fn build_status_line(app: &AppState, width: usize) -> Line<'static> {
    match &app.status {
        Some(status) => Line::from(Span::styled(
            truncate_to_width(&format!(" {}", status.text), width),
            status_style(status.kind),
        )),
        None => Line::from(Span::styled(
            truncate_to_width(&format!(" {KEY_HINTS}"), width),
            dim_style(),
        )),
    }
}
